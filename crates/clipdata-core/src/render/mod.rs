//! Text renderers: translation templates and JSON shape summaries.

pub mod analyze;
pub mod pot;

pub use analyze::{analyze, render_shape, Shape, ShapeNode};
pub use pot::{collect_strings, escape_pot, render_pot, POT_SOURCE_FILES};
