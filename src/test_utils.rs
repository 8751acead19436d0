mod assertions;
mod fixtures;
mod logging;

pub use assertions::{assert_in_order, count_occurrences};
pub use fixtures::{sample_form, sample_page, wide_tree};
pub use logging::init_tracing;

// Re-export common test types/traits
pub use crate::{
    child::{Child, Markup, Raw},
    element::Element,
    error::{
        BuildError, ConfigError, IOError, MarkupError, MarkupErrorKind, RegistryError, Result,
    },
    registry::{TagPreset, TagRegistry},
    renderer::{Indent, RenderConfig, Renderer},
    tags::*,
};
