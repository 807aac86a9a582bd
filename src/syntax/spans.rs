//! Run-length style spans
//!
//! This module provides the output of highlighting: a sequence of
//! styled runs that together cover the whole text buffer.

use super::flag::StyleSet;

/// A run of characters sharing the same styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// Styles applied to every character in the run
    pub styles: StyleSet,
    /// Number of characters in the run
    pub length: usize,
}

impl StyleSpan {
    /// Create a new span
    pub fn new(styles: StyleSet, length: usize) -> Self {
        Self { styles, length }
    }

    /// Style class names for this span, in flag order
    pub fn classes(&self) -> Vec<&'static str> {
        self.styles.names()
    }

    /// Check if the span carries no styles
    pub fn is_unstyled(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Ordered sequence of maximal style runs
///
/// The lengths add up to the length of the highlighted buffer, and no two
/// neighbouring spans carry the same styles. An empty buffer is
/// represented by a single unstyled span of length zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpans {
    spans: Vec<StyleSpan>,
    length: usize,
}

impl StyleSpans {
    /// Total number of characters covered
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of spans
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Get the span at an index
    pub fn get(&self, index: usize) -> Option<&StyleSpan> {
        self.spans.get(index)
    }

    /// Iterate the spans in order
    pub fn iter(&self) -> std::slice::Iter<'_, StyleSpan> {
        self.spans.iter()
    }

    /// Spans as a slice
    pub fn as_slice(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Styles at a character position, if the position is inside the buffer
    pub fn styles_at(&self, position: usize) -> Option<StyleSet> {
        let mut start = 0;
        for span in &self.spans {
            let end = start + span.length;
            if position < end {
                return Some(span.styles);
            }
            start = end;
        }
        None
    }
}

impl<'a> IntoIterator for &'a StyleSpans {
    type Item = &'a StyleSpan;
    type IntoIter = std::slice::Iter<'a, StyleSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl IntoIterator for StyleSpans {
    type Item = StyleSpan;
    type IntoIter = std::vec::IntoIter<StyleSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

/// Incremental builder for [`StyleSpans`]
///
/// Adjacent runs with equal styles are merged and zero-length runs are
/// dropped, so whatever is added the result stays maximal.
#[derive(Debug, Default)]
pub struct StyleSpansBuilder {
    spans: Vec<StyleSpan>,
    length: usize,
}

impl StyleSpansBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` spans
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spans: Vec::with_capacity(capacity),
            length: 0,
        }
    }

    /// Append a run of `length` characters styled with `styles`
    pub fn add(&mut self, styles: StyleSet, length: usize) -> &mut Self {
        if length == 0 {
            return self;
        }
        self.length += length;
        match self.spans.last_mut() {
            Some(last) if last.styles == styles => last.length += length,
            _ => self.spans.push(StyleSpan::new(styles, length)),
        }
        self
    }

    /// Finish building
    pub fn create(self) -> StyleSpans {
        let spans = if self.spans.is_empty() {
            vec![StyleSpan::new(StyleSet::EMPTY, 0)]
        } else {
            self.spans
        };
        StyleSpans {
            spans,
            length: self.length,
        }
    }
}

/// A text control that accepts style spans
///
/// Taking the sink by `&mut` means only its owner can highlight into it.
pub trait StyleSink {
    /// Length of the control's text, in characters
    fn len(&self) -> usize;

    /// Check if the control's text is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the styles starting at character `from` with `spans`
    fn set_style_spans(&mut self, from: usize, spans: StyleSpans);
}
