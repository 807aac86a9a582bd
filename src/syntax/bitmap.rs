//! Per-character style bitmap
//!
//! One [`StyleSet`] per character of the buffer. Overlapping styles
//! compose by bit union, so painting order never matters.

use tracing::trace;

use super::flag::{StyleFlag, StyleSet};
use super::spans::{StyleSpans, StyleSpansBuilder};

/// Style sets for every character of a text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBitmap {
    slots: Vec<StyleSet>,
}

impl StyleBitmap {
    /// Create an unstyled bitmap covering `length` characters
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![StyleSet::EMPTY; length],
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the bitmap covers no characters
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Styles of the character at `index`
    pub fn get(&self, index: usize) -> Option<StyleSet> {
        self.slots.get(index).copied()
    }

    /// Add `flag` to every character in `start..end`
    ///
    /// The range is clipped to the bitmap; parsers may report an end past
    /// the buffer because they pad the source before parsing.
    pub fn paint(&mut self, start: usize, end: usize, flag: StyleFlag) {
        let end = end.min(self.slots.len());
        if start >= end {
            return;
        }
        trace!(style = flag.name(), start, end, "paint");
        for slot in &mut self.slots[start..end] {
            *slot |= flag;
        }
    }

    /// Collapse equal neighbouring characters into style runs
    pub fn compress(&self) -> StyleSpans {
        let mut builder = StyleSpansBuilder::new();
        for run in self.slots.chunk_by(|a, b| a == b) {
            builder.add(run[0], run.len());
        }
        builder.create()
    }
}
