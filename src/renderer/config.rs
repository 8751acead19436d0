use std::fmt;

use crate::error::{ConfigError, Result};

/// Largest supported space indentation
pub const MAX_INDENT_SPACES: usize = 8;

/// Indentation unit placed before text and child markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    pub fn unit(self) -> String {
        match self {
            Self::Tab => "\t".to_string(),
            Self::Spaces(n) => " ".repeat(n),
        }
    }
}

/// Configuration options for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Indentation unit for the element body
    pub indent: Indent,
    /// Whether to sort attributes and styles by key instead of insertion order
    pub sort_keys: bool,
    /// Whether to break lines before text, children and the closing tag
    pub newline: bool,
}

/// Default configuration matches the classic tab-indented layout
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            sort_keys: false,
            newline: true,
        }
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RenderConfig {{ indent: {:?}, sort_keys: {}, newline: {} }}",
            self.indent, self.sort_keys, self.newline
        )
    }
}

impl RenderConfig {
    /// Compact output: no line breaks or indentation.
    pub fn compact() -> Self {
        Self {
            newline: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Indent::Spaces(n) = self.indent {
            if n > MAX_INDENT_SPACES {
                return Err(ConfigError::InvalidIndentation(format!(
                    "Indentation of {} spaces exceeds maximum allowed ({})",
                    n, MAX_INDENT_SPACES
                ))
                .into());
            }
        }
        Ok(())
    }

    /// The separator emitted before text, each child and the closing tag.
    pub(crate) fn separator(&self) -> (String, String) {
        if self.newline {
            (format!("\n{}", self.indent.unit()), "\n".to_string())
        } else {
            (String::new(), String::new())
        }
    }
}
