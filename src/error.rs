//! Error handling types for the builder surfaces
//!
//! Building and rendering an element never fails. These types cover the
//! surfaces around that core: checked constructors, the tag registry, render
//! configuration, and writing rendered markup into an I/O sink.

use std::{error::Error, fmt};

/// Main error type for fallible operations
#[derive(Debug)]
pub struct MarkupError {
    /// The specific kind of error
    kind: MarkupErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupErrorKind {
    Build(BuildError),
    Config(ConfigError),
    IO(IOError),
    Registry(RegistryError),
}

/// Errors raised by checked element constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Tag name is empty or blank
    EmptyTag,
    /// Tag name contains characters that cannot appear in a tag
    InvalidTagName(String),
    /// Preset was registered under a blank name
    EmptyPresetName,
}

/// Render configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Indentation setting is outside the supported range
    InvalidIndentation(String),
}

/// Tag registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No preset registered under this name
    UnknownTag(String),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// Error writing rendered markup to a sink
    WriteError(String),
}

impl MarkupError {
    pub fn new(kind: MarkupErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &MarkupErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<BuildError> for MarkupError {
    fn from(err: BuildError) -> Self {
        Self::new(MarkupErrorKind::Build(err))
    }
}

impl From<ConfigError> for MarkupError {
    fn from(err: ConfigError) -> Self {
        Self::new(MarkupErrorKind::Config(err))
    }
}

impl From<RegistryError> for MarkupError {
    fn from(err: RegistryError) -> Self {
        Self::new(MarkupErrorKind::Registry(err))
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            MarkupErrorKind::Build(err) => err.to_string(),
            MarkupErrorKind::Config(err) => err.to_string(),
            MarkupErrorKind::IO(err) => err.to_string(),
            MarkupErrorKind::Registry(err) => err.to_string(),
        };

        write!(f, "Error: {}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "Element tag must not be empty"),
            Self::InvalidTagName(tag) => write!(f, "Invalid tag name: '{}'", tag),
            Self::EmptyPresetName => write!(f, "Preset name must not be empty"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndentation(msg) => write!(f, "Invalid indentation: {}", msg),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag(name) => write!(f, "No preset registered for tag '{}'", name),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| {
            let e: &(dyn Error + 'static) = e;
            e
        })
    }
}

pub type Result<T> = std::result::Result<T, MarkupError>;
