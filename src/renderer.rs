//! Recursive serialization of an [`Element`] tree to markup text.
//!
//! Each element renders as an opening tag carrying its id, name, classes,
//! inline styles and attributes, followed by its text and children on their
//! own indented lines, and finally the closing tag. Nested markup is not
//! re-indented, so only the first line of each child is shifted.
//!
//! Text and attribute values are written verbatim. Nothing is escaped, so
//! output built from untrusted input must not be treated as safe markup.

pub mod config;

use std::io::Write;

use indexmap::IndexMap;
use tracing::{debug, error, instrument, warn};

pub use self::config::{Indent, RenderConfig};
use crate::{
    element::Element,
    error::{IOError, MarkupError, MarkupErrorKind, Result},
    utils::is_blank,
};

/// Serializes elements according to a validated [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    /// Emitted before text and each child
    body_break: String,
    /// Emitted before the closing tag
    close_break: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_valid(RenderConfig::default())
    }
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!("Rejected render configuration {}: {}", config, e);
            return Err(e);
        }
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: RenderConfig) -> Self {
        let (body_break, close_break) = config.separator();
        Self {
            config,
            body_break,
            close_break,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `element` and all of its descendants.
    #[instrument(level = "debug", skip_all, fields(tag = %element.tag()))]
    pub fn render(&self, element: &Element) -> String {
        let mut out = String::new();
        self.write_element(element, &mut out);
        debug!(len = out.len(), "Rendered element");
        out
    }

    /// Renders `element` into an I/O sink.
    pub fn render_to<W: Write>(&self, element: &Element, sink: &mut W) -> Result<()> {
        let markup = self.render(element);
        sink.write_all(markup.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| {
                error!("Failed to write rendered markup: {}", e);
                MarkupError::new(MarkupErrorKind::IO(IOError::WriteError(e.to_string())))
                    .with_context(format!("rendering <{}>", element.tag()))
                    .with_source(e)
            })
    }

    pub(crate) fn write_element(&self, element: &Element, out: &mut String) {
        out.push('<');
        out.push_str(element.tag());

        Self::write_quoted_if_set(out, "id", element.get_id());
        Self::write_quoted_if_set(out, "name", element.get_name());

        if !element.classes().is_empty() {
            out.push_str(" class='");
            for class in element.classes() {
                out.push_str(class);
                out.push(' ');
            }
            out.push('\'');
        }

        if !element.styles().is_empty() {
            out.push_str(" style='");
            for (key, value) in self.ordered(element.styles()) {
                out.push_str(key);
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            out.push('\'');
        }

        for (key, value) in self.ordered(element.attributes()) {
            Self::write_quoted(out, key, value);
        }

        out.push('>');

        if !element.text_content().is_empty() {
            out.push_str(&self.body_break);
            out.push_str(element.text_content());
        }

        for child in element.child_nodes() {
            if !child.is_renderable() {
                continue;
            }
            out.push_str(&self.body_break);
            child.write_to(self, out);
        }

        out.push_str(&self.close_break);
        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
    }

    fn write_quoted(out: &mut String, key: &str, value: &str) {
        out.push(' ');
        out.push_str(key);
        out.push_str("='");
        out.push_str(value);
        out.push('\'');
    }

    fn write_quoted_if_set(out: &mut String, key: &str, value: &str) {
        if !is_blank(value) {
            Self::write_quoted(out, key, value);
        }
    }

    /// Entries in insertion order, or sorted by key if configured.
    fn ordered<'a>(&self, map: &'a IndexMap<String, String>) -> Vec<(&'a String, &'a String)> {
        let mut entries: Vec<_> = map.iter().collect();
        if self.config.sort_keys {
            entries.sort_by_key(|(k, _)| *k);
        }
        entries
    }
}
