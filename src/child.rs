use std::{any::Any, fmt};

use crate::{element::Element, renderer::Renderer};

/// The capability of rendering as markup.
///
/// Anything implementing this trait can be attached as a child of an
/// [`Element`] and is serialized in place when the parent renders.
pub trait Markup {
    /// Appends this value's markup to `out`.
    fn write_markup(&self, renderer: &Renderer, out: &mut String);

    /// Renders with the default renderer.
    fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&Renderer::default(), &mut out);
        out
    }
}

/// A pre-rendered markup fragment emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raw(pub String);

impl Raw {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }
}

impl Markup for Raw {
    fn write_markup(&self, _renderer: &Renderer, out: &mut String) {
        out.push_str(&self.0);
    }
}

/// One entry in an element's child list.
pub enum Child {
    /// A nested element
    Element(Element),
    /// Any other value that can render itself
    Markup(Box<dyn Markup + Send + Sync>),
    /// A value with no markup form; skipped by the renderer
    Opaque(Box<dyn Any + Send + Sync>),
}

impl Child {
    pub fn markup<M>(value: M) -> Self
    where
        M: Markup + Send + Sync + 'static,
    {
        Self::Markup(Box::new(value))
    }

    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Opaque(Box::new(value))
    }

    pub fn is_renderable(&self) -> bool {
        !matches!(self, Self::Opaque(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Writes the child's markup. Opaque children write nothing.
    pub(crate) fn write_to(&self, renderer: &Renderer, out: &mut String) {
        match self {
            Self::Element(el) => el.write_markup(renderer, out),
            Self::Markup(m) => m.write_markup(renderer, out),
            Self::Opaque(_) => {}
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Self::Markup(m) => f.debug_tuple("Markup").field(&m.to_markup()).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<Raw> for Child {
    fn from(raw: Raw) -> Self {
        Self::markup(raw)
    }
}
