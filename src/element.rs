//! The markup node and its fluent builder API.
//!
//! Every builder method consumes the element and hands it back, so a tree can
//! be assembled in a single expression:
//!
//! ```
//! use tagtree::{Element, Markup};
//!
//! let page = Element::new("div")
//!     .class("box")
//!     .style("color", "red")
//!     .text("hello")
//!     .child(Element::new("span").text("child"));
//!
//! assert!(page.to_markup().starts_with("<div class='box ' style='color:red;'>"));
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{
    child::{Child, Markup},
    error::{BuildError, Result},
    renderer::Renderer,
    utils::{is_blank, is_valid_tag_name, parse_style_block, split_classes},
};

/// A single markup element together with its descendants.
#[derive(Debug, Default)]
pub struct Element {
    tag: String,
    id: String,
    name: String,
    text: String,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    classes: Vec<String>,
    children: Vec<Child>,
}

impl Element {
    /// Creates an element with the given tag. The tag is not checked; use
    /// [`Element::try_new`] for input that does not come from a literal.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Creates an element, rejecting tags that would produce broken markup.
    pub fn try_new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if is_blank(&tag) {
            return Err(BuildError::EmptyTag.into());
        }
        if !is_valid_tag_name(&tag) {
            return Err(BuildError::InvalidTagName(tag).into());
        }
        Ok(Self::new(tag))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces the text content with formatted output.
    ///
    /// ```
    /// use tagtree::Element;
    ///
    /// let cell = Element::new("td").text_fmt(format_args!("{} items", 3));
    /// assert_eq!(cell.text_content(), "3 items");
    /// ```
    pub fn text_fmt(mut self, args: fmt::Arguments<'_>) -> Self {
        self.text = fmt::format(args);
        self
    }

    /// Merges a `property:value;...` block into the inline styles.
    /// Malformed declarations are dropped.
    pub fn style_block(mut self, block: &str) -> Self {
        self.styles.extend(parse_style_block(block));
        self
    }

    /// Sets one inline style. A blank key or value is dropped.
    pub fn style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        if !is_blank(&key) && !is_blank(&value) {
            self.styles.insert(key, value);
        }
        self
    }

    /// Appends every space-separated token of `classes`.
    pub fn class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    pub fn add_class(&mut self, classes: &str) {
        self.classes.extend(split_classes(classes).map(str::to_string));
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.push_child(child);
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn push_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an attribute. A blank name is dropped; an empty value is kept so
    /// boolean attributes such as `disabled` can be written.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !is_blank(&name) {
            self.attributes.insert(name, value.into());
        }
    }

    /// Sets the `value` attribute.
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Sets the `type` attribute.
    pub fn input_type(self, kind: impl Into<String>) -> Self {
        self.attr("type", kind)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.styles
    }

    pub fn style_value(&self, key: &str) -> Option<&str> {
        self.styles.get(key).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn child_nodes(&self) -> &[Child] {
        &self.children
    }

    /// Renders with the default renderer.
    pub fn render(&self) -> String {
        Renderer::default().render(self)
    }
}

impl Markup for Element {
    fn write_markup(&self, renderer: &Renderer, out: &mut String) {
        renderer.write_element(self, out);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
