//! Markdown highlighting entry points
//!
//! This module provides the Highlighter that turns a syntax tree and a
//! buffer length into style spans, and hands them to a text control.

use tracing::{debug, warn};

use super::bitmap::StyleBitmap;
use super::projector::Projector;
use super::spans::{StyleSink, StyleSpans};
use crate::ast::MarkdownNode;
use crate::config::HighlightConfig;

/// Markdown syntax highlighter
///
/// Holds only configuration; every call starts from a fresh bitmap.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a highlighter with the given configuration
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Compute style spans covering `text_length` characters
    pub fn compute_highlighting<N: MarkdownNode>(
        &self,
        root: &N,
        text_length: usize,
    ) -> StyleSpans {
        let threshold = self.config.large_buffer_warning;
        if threshold > 0 && text_length > threshold {
            warn!(text_length, threshold, "highlighting unusually large buffer");
        }

        let mut bitmap = StyleBitmap::new(text_length);
        let mut projector = Projector::with_disabled(&mut bitmap, self.config.disabled_styles);
        projector.visit(root);
        let spans = bitmap.compress();

        debug!(text_length, spans = spans.span_count(), "computed highlighting");
        spans
    }

    /// Highlight the whole text of `sink`
    pub fn highlight_into<S: StyleSink, N: MarkdownNode>(&self, sink: &mut S, root: &N) {
        let spans = self.compute_highlighting(root, sink.len());
        sink.set_style_spans(0, spans);
    }
}

/// Compute style spans with the default configuration
pub fn compute_highlighting<N: MarkdownNode>(root: &N, text_length: usize) -> StyleSpans {
    Highlighter::default().compute_highlighting(root, text_length)
}

/// Highlight a text control with the default configuration
pub fn highlight_into<S: StyleSink, N: MarkdownNode>(sink: &mut S, root: &N) {
    Highlighter::default().highlight_into(sink, root);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::ast::{Node, NodeKind};
    use crate::syntax::flag::{StyleFlag, StyleSet};
    use proptest::prelude::*;

    fn kind() -> impl Strategy<Value = NodeKind> {
        prop_oneof![
            Just(NodeKind::Root),
            Just(NodeKind::Super),
            Just(NodeKind::Para),
            (0u8..9).prop_map(|level| NodeKind::Header { level }),
            any::<bool>().prop_map(|strong| NodeKind::StrongEmphSuper { strong }),
            Just(NodeKind::Text),
            Just(NodeKind::BulletList),
            Just(NodeKind::Code),
            Just(NodeKind::Other),
        ]
    }

    fn node() -> impl Strategy<Value = Node> {
        let leaf = (kind(), 0usize..40, 0usize..12)
            .prop_map(|(kind, start, len)| Node::new(kind, start, start + len));
        leaf.prop_recursive(4, 32, 4, |inner| {
            let children = prop::collection::vec(inner, 0..4);
            (kind(), 0usize..40, 0usize..40, children).prop_map(|(kind, start, len, children)| {
                Node::new(kind, start, start + len).with_children(children)
            })
        })
    }

    fn tree() -> impl Strategy<Value = Node> {
        prop::collection::vec(node(), 0..5)
            .prop_map(|children| Node::root(0, 0).with_children(children))
    }

    /// Clamp every end offset in the tree to `length`
    fn clip(node: &Node, length: usize) -> Node {
        let children = node.children.iter().map(|child| clip(child, length));
        Node::new(node.kind, node.start, node.end.min(length)).with_children(children.collect())
    }

    fn covers(ranges: &[(usize, usize)], position: usize) -> bool {
        ranges
            .iter()
            .any(|&(start, end)| start <= position && position < end)
    }

    /// Ranges painted with `flag` under the default dispatch rules
    fn painted(node: &Node, flag: StyleFlag, out: &mut Vec<(usize, usize)>) {
        match node.kind {
            NodeKind::Root | NodeKind::Super | NodeKind::Para => {}
            NodeKind::Header { level } => match StyleFlag::header(level) {
                Some(header) => {
                    if header == flag {
                        out.push((node.start, node.end));
                    }
                }
                None => return,
            },
            NodeKind::StrongEmphSuper { strong } => {
                let own = if strong { StyleFlag::Strong } else { StyleFlag::Em };
                if own == flag {
                    out.push((node.start, node.end));
                }
                return;
            }
            _ => return,
        }
        for child in &node.children {
            painted(child, flag, out);
        }
    }

    proptest! {
        #[test]
        fn lengths_sum_to_buffer(root in tree(), length in 0usize..64) {
            let spans = compute_highlighting(&root, length);
            let total: usize = spans.iter().map(|span| span.length).sum();
            prop_assert_eq!(total, length);
            prop_assert_eq!(spans.length(), length);
        }

        #[test]
        fn runs_are_maximal(root in tree(), length in 0usize..64) {
            let spans = compute_highlighting(&root, length);
            for pair in spans.as_slice().windows(2) {
                prop_assert_ne!(pair[0].styles, pair[1].styles);
            }
        }

        #[test]
        fn highlighting_is_deterministic(root in tree(), length in 0usize..64) {
            let first = compute_highlighting(&root, length);
            let second = compute_highlighting(&root.clone(), length);
            let first_names: Vec<_> = first.iter().map(|span| span.classes()).collect();
            let second_names: Vec<_> = second.iter().map(|span| span.classes()).collect();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_names, second_names);
        }

        #[test]
        fn empty_buffer_is_single_span(root in tree()) {
            let spans = compute_highlighting(&root, 0);
            prop_assert_eq!(spans.span_count(), 1);
            prop_assert_eq!(spans.get(0).map(|span| span.length), Some(0));
            prop_assert!(spans.get(0).is_some_and(|span| span.is_unstyled()));
        }

        #[test]
        fn overlapping_styles_compose(root in tree(), length in 1usize..64) {
            let spans = compute_highlighting(&root, length);
            for flag in StyleFlag::ALL {
                let mut ranges = Vec::new();
                painted(&root, flag, &mut ranges);
                for position in 0..length {
                    let styles = spans.styles_at(position);
                    let covered = covers(&ranges, position);
                    prop_assert_eq!(styles.map(|s| s.contains(flag)), Some(covered));
                }
            }
        }

        #[test]
        fn overshoot_is_clipped(root in tree(), length in 0usize..64) {
            let spans = compute_highlighting(&root, length);
            let clipped = compute_highlighting(&clip(&root, length), length);
            prop_assert_eq!(spans, clipped);
        }

        #[test]
        fn uncovered_characters_are_unstyled(root in tree(), length in 1usize..64) {
            let spans = compute_highlighting(&root, length);
            let mut ranges = Vec::new();
            for flag in StyleFlag::ALL {
                painted(&root, flag, &mut ranges);
            }
            for position in 0..length {
                if !covers(&ranges, position) {
                    prop_assert_eq!(spans.styles_at(position), Some(StyleSet::EMPTY));
                }
            }
        }
    }
}
