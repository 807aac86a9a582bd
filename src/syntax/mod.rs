//! Syntax highlighting module
//!
//! This module provides the style engine used to colorize Markdown:
//! - Style flags and per-character style sets
//! - Projection of syntax tree nodes onto a style bitmap
//! - Run-length style spans handed to the text control

mod bitmap;
mod flag;
mod highlighter;
mod projector;
mod spans;

pub use bitmap::StyleBitmap;
pub use flag::{StyleFlag, StyleSet};
pub use highlighter::{compute_highlighting, highlight_into, Highlighter};
pub use projector::Projector;
pub use spans::{StyleSink, StyleSpan, StyleSpans, StyleSpansBuilder};
