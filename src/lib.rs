//! tagtree: build markup trees in code and serialize them to HTML
//!
//! This crate provides:
//! - A fluent [`Element`] builder for tags, ids, names, attributes, inline
//!   styles, classes, text and children
//! - A deterministic recursive [`Renderer`]
//! - Factories for common HTML tags and a [`TagRegistry`] for custom presets
//!
//! Malformed builder input such as a broken style declaration is dropped
//! rather than reported. Text and attribute values are emitted without
//! escaping.
//!
//! # Examples
//! ```
//! use tagtree::{tags::*, Markup};
//!
//! let page = html().child(
//!     body().child(
//!         div()
//!             .class("box")
//!             .style_block("width:100px;color:red")
//!             .text("hello")
//!             .child(span().text("child")),
//!     ),
//! );
//!
//! let markup = page.to_markup();
//! assert!(markup.starts_with("<html>"));
//! assert!(markup.ends_with("</html>"));
//! ```

pub mod child;
pub mod element;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod tags;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use child::{Child, Markup, Raw};
pub use element::Element;
pub use error::{MarkupError, MarkupErrorKind, Result};
pub use registry::{TagPreset, TagRegistry};
pub use renderer::{Indent, RenderConfig, Renderer};

/// Renders `element` with the default configuration.
pub fn render(element: &Element) -> String {
    Renderer::default().render(element)
}
