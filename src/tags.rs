//! Factories for common HTML elements.
//!
//! Each factory is backed by a row in [`BUILTIN_PRESETS`], which fixes the tag
//! and any default attributes. The same table seeds
//! [`TagRegistry::with_builtin`](crate::registry::TagRegistry::with_builtin).

use crate::{element::Element, registry::TagPreset};

/// `(name, tag, default attributes)` for one built-in factory.
pub type PresetRow = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const HTML: PresetRow = ("html", "html", &[]);
const HEAD: PresetRow = ("head", "head", &[]);
const BODY: PresetRow = ("body", "body", &[]);
const SCRIPT: PresetRow = ("script", "script", &[]);
const LINK: PresetRow = ("link", "link", &[]);
const DIV: PresetRow = ("div", "div", &[]);
const SPAN: PresetRow = ("span", "span", &[]);
const HR: PresetRow = ("hr", "hr", &[]);
const STRONG: PresetRow = ("strong", "strong", &[]);
const INPUT: PresetRow = ("input", "input", &[("type", "text")]);
const TEXTAREA: PresetRow = ("textarea", "textarea", &[]);
const OPTION: PresetRow = ("option", "option", &[]);
const SELECT: PresetRow = ("select", "select", &[]);
const LI: PresetRow = ("li", "li", &[]);
const UL: PresetRow = ("ul", "ul", &[]);
const IMG: PresetRow = ("img", "img", &[]);
const A: PresetRow = ("a", "a", &[]);
const P: PresetRow = ("p", "p", &[]);
const BUTTON: PresetRow = ("button", "button", &[("type", "button")]);
const TABLE: PresetRow = ("table", "table", &[]);
const THEAD: PresetRow = ("thead", "thead", &[]);
const TBODY: PresetRow = ("tbody", "tbody", &[]);
const TFOOT: PresetRow = ("tfoot", "tfoot", &[]);
const TR: PresetRow = ("tr", "tr", &[]);
const TH: PresetRow = ("th", "th", &[]);
const TD: PresetRow = ("td", "td", &[]);

/// Every built-in factory preset.
pub const BUILTIN_PRESETS: &[PresetRow] = &[
    HTML,
    HEAD,
    BODY,
    SCRIPT,
    LINK,
    DIV,
    SPAN,
    HR,
    STRONG,
    INPUT,
    TEXTAREA,
    OPTION,
    SELECT,
    LI,
    UL,
    IMG,
    A,
    P,
    BUTTON,
    TABLE,
    THEAD,
    TBODY,
    TFOOT,
    TR,
    TH,
    TD,
];

/// Converts a table row into a registrable preset.
pub(crate) fn preset(row: &PresetRow) -> TagPreset {
    let (_, tag, defaults) = row;
    defaults
        .iter()
        .fold(TagPreset::new(*tag), |p, (k, v)| p.with_default(*k, *v))
}

pub fn html() -> Element {
    preset(&HTML).build()
}

pub fn head() -> Element {
    preset(&HEAD).build()
}

pub fn body() -> Element {
    preset(&BODY).build()
}

pub fn script() -> Element {
    preset(&SCRIPT).build()
}

pub fn link() -> Element {
    preset(&LINK).build()
}

pub fn div() -> Element {
    preset(&DIV).build()
}

pub fn span() -> Element {
    preset(&SPAN).build()
}

pub fn hr() -> Element {
    preset(&HR).build()
}

pub fn strong() -> Element {
    preset(&STRONG).build()
}

/// A text input; the type can be changed with [`Element::input_type`].
pub fn input() -> Element {
    preset(&INPUT).build()
}

pub fn textarea() -> Element {
    preset(&TEXTAREA).build()
}

/// An `<option>` with both its value and its visible text set.
pub fn option(value: impl Into<String>, text: impl Into<String>) -> Element {
    preset(&OPTION).build().value(value).text(text)
}

pub fn select() -> Element {
    preset(&SELECT).build()
}

pub fn li() -> Element {
    preset(&LI).build()
}

pub fn ul() -> Element {
    preset(&UL).build()
}

pub fn img() -> Element {
    preset(&IMG).build()
}

pub fn a() -> Element {
    preset(&A).build()
}

pub fn p() -> Element {
    preset(&P).build()
}

pub fn button() -> Element {
    preset(&BUTTON).build()
}

pub fn table() -> Element {
    preset(&TABLE).build()
}

pub fn thead() -> Element {
    preset(&THEAD).build()
}

pub fn tbody() -> Element {
    preset(&TBODY).build()
}

pub fn tfoot() -> Element {
    preset(&TFOOT).build()
}

pub fn tr() -> Element {
    preset(&TR).build()
}

pub fn th() -> Element {
    preset(&TH).build()
}

pub fn td() -> Element {
    preset(&TD).build()
}

/// Attribute shorthands used by specific tags.
impl Element {
    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    pub fn src(self, src: impl Into<String>) -> Self {
        self.attr("src", src)
    }

    pub fn rel(self, rel: impl Into<String>) -> Self {
        self.attr("rel", rel)
    }

    /// Marks a `<script>` as JavaScript.
    pub fn javascript(self) -> Self {
        self.input_type("text/javascript")
    }

    /// Marks a `<link>` as a stylesheet reference.
    pub fn stylesheet(self) -> Self {
        self.rel("stylesheet")
    }

    pub fn rows(self, rows: usize) -> Self {
        self.attr("rows", rows.to_string())
    }

    pub fn cols(self, cols: usize) -> Self {
        self.attr("cols", cols.to_string())
    }

    /// Appends `<option>` children to a `<select>`.
    pub fn options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children(options)
    }
}
