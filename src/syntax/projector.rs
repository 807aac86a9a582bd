//! Projection of Markdown nodes onto the style bitmap
//!
//! Walks the tree depth-first and paints each styled node over its
//! character range. The match in [`Projector::visit`] is the dispatch
//! table: every node variant has an arm, so adding a style for a new
//! variant means filling in its arm.

use tracing::debug;

use super::bitmap::StyleBitmap;
use super::flag::{StyleFlag, StyleSet};
use crate::ast::{MarkdownNode, NodeKind};

/// Paints styled nodes onto a [`StyleBitmap`]
pub struct Projector<'a> {
    bitmap: &'a mut StyleBitmap,
    /// Flags that are never painted
    disabled: StyleSet,
}

impl<'a> Projector<'a> {
    /// Create a projector painting every flag
    pub fn new(bitmap: &'a mut StyleBitmap) -> Self {
        Self::with_disabled(bitmap, StyleSet::EMPTY)
    }

    /// Create a projector that skips the flags in `disabled`
    pub fn with_disabled(bitmap: &'a mut StyleBitmap, disabled: StyleSet) -> Self {
        Self { bitmap, disabled }
    }

    /// Project a node and, where its variant calls for it, its children
    pub fn visit<N: MarkdownNode>(&mut self, node: &N) {
        match node.kind() {
            NodeKind::Root | NodeKind::Super | NodeKind::Para => {
                self.visit_children(node);
            }

            NodeKind::Header { level } => match StyleFlag::header(level) {
                Some(flag) => {
                    self.paint(node, flag);
                    self.visit_children(node);
                }
                None => debug!(
                    header_level = level,
                    start = node.start(),
                    "ignoring header with invalid level"
                ),
            },

            // The whole range is painted, so children add nothing.
            NodeKind::StrongEmphSuper { strong } => {
                let flag = if strong { StyleFlag::Strong } else { StyleFlag::Em };
                self.paint(node, flag);
            }

            // Not highlighted yet.
            NodeKind::Abbreviation
            | NodeKind::AnchorLink
            | NodeKind::AutoLink
            | NodeKind::BlockQuote
            | NodeKind::BulletList
            | NodeKind::Code
            | NodeKind::DefinitionList
            | NodeKind::Definition
            | NodeKind::DefinitionTerm
            | NodeKind::ExpImage
            | NodeKind::ExpLink
            | NodeKind::HtmlBlock
            | NodeKind::InlineHtml
            | NodeKind::ListItem
            | NodeKind::MailLink
            | NodeKind::OrderedList
            | NodeKind::Quoted
            | NodeKind::Reference
            | NodeKind::RefImage
            | NodeKind::RefLink
            | NodeKind::Simple
            | NodeKind::SpecialText
            | NodeKind::Strike
            | NodeKind::TableBody
            | NodeKind::TableCaption
            | NodeKind::TableCell
            | NodeKind::TableColumn
            | NodeKind::TableHeader
            | NodeKind::Table
            | NodeKind::TableRow
            | NodeKind::Verbatim
            | NodeKind::WikiLink
            | NodeKind::Text => {}

            // unknown
            NodeKind::Other => {}
        }
    }

    fn visit_children<N: MarkdownNode>(&mut self, node: &N) {
        for child in node.children() {
            self.visit(child);
        }
    }

    fn paint<N: MarkdownNode>(&mut self, node: &N, flag: StyleFlag) {
        if self.disabled.contains(flag) {
            return;
        }
        self.bitmap.paint(node.start(), node.end(), flag);
    }
}
