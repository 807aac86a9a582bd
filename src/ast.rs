//! Markdown syntax tree as seen by the highlighter
//!
//! Parsing is someone else's job. A parser hands over any tree whose
//! nodes implement [`MarkdownNode`]; [`Node`] is a plain owned tree for
//! parsers that build one directly.

/// Variant of a Markdown node
///
/// Covers the pegdown node catalogue. Variants that carry data the
/// highlighter looks at hold it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Abbreviation,
    AnchorLink,
    AutoLink,
    BlockQuote,
    BulletList,
    Code,
    DefinitionList,
    Definition,
    DefinitionTerm,
    ExpImage,
    ExpLink,
    /// ATX or setext header; valid levels are 1 to 6
    Header { level: u8 },
    HtmlBlock,
    InlineHtml,
    ListItem,
    MailLink,
    OrderedList,
    Para,
    Quoted,
    Reference,
    RefImage,
    RefLink,
    /// Document root
    Root,
    Simple,
    SpecialText,
    Strike,
    /// Strong (`strong == true`) or plain emphasis
    StrongEmphSuper { strong: bool },
    TableBody,
    TableCaption,
    TableCell,
    TableColumn,
    TableHeader,
    Table,
    TableRow,
    Verbatim,
    WikiLink,
    Text,
    /// Generic container
    Super,
    /// Node of no known variant
    Other,
}

/// A node of a parsed Markdown document
///
/// Offsets are character indices into the source; `start..end` is
/// half-open and `end` may run a little past the end of the buffer.
pub trait MarkdownNode {
    /// Variant of this node
    fn kind(&self) -> NodeKind;

    /// First character covered by this node
    fn start(&self) -> usize;

    /// One past the last character covered by this node
    fn end(&self) -> usize;

    /// Child nodes, in document order. Empty for leaves.
    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// Owned Markdown syntax tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub start: usize,
    pub end: usize,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node
    pub fn new(kind: NodeKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            children: Vec::new(),
        }
    }

    /// Builder: set children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Document root
    pub fn root(start: usize, end: usize) -> Self {
        Self::new(NodeKind::Root, start, end)
    }

    /// Paragraph
    pub fn para(start: usize, end: usize) -> Self {
        Self::new(NodeKind::Para, start, end)
    }

    /// Header of the given level
    pub fn header(level: u8, start: usize, end: usize) -> Self {
        Self::new(NodeKind::Header { level }, start, end)
    }

    /// Strong emphasis
    pub fn strong(start: usize, end: usize) -> Self {
        Self::new(NodeKind::StrongEmphSuper { strong: true }, start, end)
    }

    /// Plain emphasis
    pub fn emph(start: usize, end: usize) -> Self {
        Self::new(NodeKind::StrongEmphSuper { strong: false }, start, end)
    }

    /// Plain text
    pub fn text(start: usize, end: usize) -> Self {
        Self::new(NodeKind::Text, start, end)
    }
}

impl MarkdownNode for Node {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}
