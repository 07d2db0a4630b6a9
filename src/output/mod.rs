//! Output formatting module
//!
//! Renders spec results as a console report or JSON.

mod formatter;

pub use formatter::{clean_stack, Color, FormatError, Formatter, OutputFormat};
