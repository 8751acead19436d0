//! A runtime table of tag presets.
//!
//! The built-in factories in [`tags`](crate::tags) cover the common elements.
//! A registry lets callers add their own presets, for example a `"submit"`
//! name that produces `<input type='submit'>`, and create elements by name.
//! The table sits behind a read-write lock so one registry can be shared
//! across threads.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::{
    element::Element,
    error::{BuildError, RegistryError, Result},
    tags::{preset, BUILTIN_PRESETS},
    utils::{is_blank, is_valid_tag_name},
};

/// A tag name plus the attributes every new element starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreset {
    tag: String,
    defaults: Vec<(String, String)>,
}

impl TagPreset {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            defaults: Vec::new(),
        }
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn defaults(&self) -> &[(String, String)] {
        &self.defaults
    }

    pub fn build(&self) -> Element {
        self.defaults
            .iter()
            .fold(Element::new(self.tag.as_str()), |el, (k, v)| {
                el.attr(k.as_str(), v.as_str())
            })
    }
}

pub struct TagRegistry {
    presets: RwLock<HashMap<String, TagPreset>>,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRegistry {
    pub fn new() -> Self {
        Self {
            presets: RwLock::new(HashMap::new()),
        }
    }

    /// A registry seeded with every built-in factory preset.
    pub fn with_builtin() -> Self {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|row| (row.0.to_string(), preset(row)))
            .collect();
        Self {
            presets: RwLock::new(presets),
        }
    }

    /// Adds or replaces the preset stored under `name`.
    pub fn register(&self, name: &str, preset: TagPreset) -> Result<()> {
        if is_blank(name) {
            return Err(BuildError::EmptyPresetName.into());
        }
        if is_blank(preset.tag()) {
            return Err(BuildError::EmptyTag.into());
        }
        if !is_valid_tag_name(preset.tag()) {
            return Err(BuildError::InvalidTagName(preset.tag().to_string()).into());
        }

        debug!("Registering preset '{}' -> <{}>", name, preset.tag());
        if let Some(previous) = self.presets.write().insert(name.to_string(), preset) {
            debug!("Replaced preset '{}' (was <{}>)", name, previous.tag());
        }
        Ok(())
    }

    /// Creates a fresh element from the preset registered under `name`.
    pub fn create(&self, name: &str) -> Result<Element> {
        match self.presets.read().get(name) {
            Some(preset) => {
                debug!("Creating <{}> from preset '{}'", preset.tag(), name);
                Ok(preset.build())
            }
            None => {
                warn!("Unknown tag preset '{}'", name);
                Err(RegistryError::UnknownTag(name.to_string()).into())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<TagPreset> {
        self.presets.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.presets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.read().keys().cloned().collect();
        names.sort();
        names
    }
}
