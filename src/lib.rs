//! mdhighlight - Markdown syntax highlighting for rich-text editors
//!
//! Takes a Markdown syntax tree produced by an external parser, together
//! with the length of the source text, and computes run-length style
//! spans that a text control can apply directly.
//!
//! ```
//! use mdhighlight::ast::Node;
//! use mdhighlight::compute_highlighting;
//!
//! // "# Hi **there**"
//! let root = Node::root(0, 14).with_child(
//!     Node::header(1, 0, 14).with_child(Node::strong(5, 14)),
//! );
//! let spans = compute_highlighting(&root, 14);
//!
//! let classes: Vec<_> = spans.iter().map(|s| (s.classes(), s.length)).collect();
//! assert_eq!(classes, vec![(vec!["h1"], 5), (vec!["strong", "h1"], 9)]);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod syntax;

pub use ast::{MarkdownNode, Node, NodeKind};
pub use config::HighlightConfig;
pub use error::{HighlightError, Result};
pub use syntax::{
    compute_highlighting, highlight_into, Highlighter, StyleFlag, StyleSet, StyleSink, StyleSpan,
    StyleSpans,
};
