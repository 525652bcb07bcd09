//! Render module: the canonical text form of a canvas and its persistence.

mod text;

pub use text::{save, to_text, write_text, EMPTY_SENTINEL};
