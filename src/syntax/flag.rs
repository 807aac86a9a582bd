//! Style flags for Markdown highlighting
//!
//! This module defines the closed set of style classes the highlighter
//! can assign to characters, and the bitmask used to hold several of
//! them at once.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Style classes assigned to highlighted Markdown text
///
/// The ordinal of each flag is its bit position in a [`StyleSet`] and
/// also decides the order of class names within a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StyleFlag {
    /// Strong emphasis (`**text**`)
    Strong,
    /// Emphasis (`*text*`)
    Em,
    /// Level 1 header
    H1,
    /// Level 2 header
    H2,
    /// Level 3 header
    H3,
    /// Level 4 header
    H4,
    /// Level 5 header
    H5,
    /// Level 6 header
    H6,
}

// H6 must stay the last variant. Every flag needs its own bit in a StyleSet.
const _: () = assert!(
    (StyleFlag::H6 as u32) < u32::BITS,
    "StyleFlag has more members than a StyleSet can hold"
);
const _: () = assert!(
    StyleFlag::ALL.len() == StyleFlag::H6 as usize + 1,
    "StyleFlag::ALL must list every variant"
);

impl StyleFlag {
    /// All flags, in ordinal order
    pub const ALL: [StyleFlag; 8] = [
        StyleFlag::Strong,
        StyleFlag::Em,
        StyleFlag::H1,
        StyleFlag::H2,
        StyleFlag::H3,
        StyleFlag::H4,
        StyleFlag::H5,
        StyleFlag::H6,
    ];

    /// Stable ordinal of this flag
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Bit for this flag within a [`StyleSet`]
    pub const fn bit(self) -> u32 {
        1 << self.ordinal()
    }

    /// Style class name, as handed to the text control
    pub fn name(&self) -> &'static str {
        match self {
            StyleFlag::Strong => "strong",
            StyleFlag::Em => "em",
            StyleFlag::H1 => "h1",
            StyleFlag::H2 => "h2",
            StyleFlag::H3 => "h3",
            StyleFlag::H4 => "h4",
            StyleFlag::H5 => "h5",
            StyleFlag::H6 => "h6",
        }
    }

    /// Parse a flag from its style class name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strong" => Some(StyleFlag::Strong),
            "em" => Some(StyleFlag::Em),
            "h1" => Some(StyleFlag::H1),
            "h2" => Some(StyleFlag::H2),
            "h3" => Some(StyleFlag::H3),
            "h4" => Some(StyleFlag::H4),
            "h5" => Some(StyleFlag::H5),
            "h6" => Some(StyleFlag::H6),
            _ => None,
        }
    }

    /// Header flag for a header level, if the level is between 1 and 6
    pub fn header(level: u8) -> Option<Self> {
        match level {
            1 => Some(StyleFlag::H1),
            2 => Some(StyleFlag::H2),
            3 => Some(StyleFlag::H3),
            4 => Some(StyleFlag::H4),
            5 => Some(StyleFlag::H5),
            6 => Some(StyleFlag::H6),
            _ => None,
        }
    }
}

impl fmt::Display for StyleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of style flags covering one character (or one span)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u32);

impl StyleSet {
    /// The empty set (unstyled text)
    pub const EMPTY: StyleSet = StyleSet(0);

    /// Add a flag to the set
    pub fn insert(&mut self, flag: StyleFlag) {
        self.0 |= flag.bit();
    }

    /// Check whether a flag is in the set
    pub fn contains(self, flag: StyleFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Check whether no flag is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of flags in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Flags in the set, in ordinal order
    pub fn iter(self) -> impl Iterator<Item = StyleFlag> {
        StyleFlag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }

    /// Style class names of the set, in ordinal order
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(|flag| flag.name()).collect()
    }
}

impl From<StyleFlag> for StyleSet {
    fn from(flag: StyleFlag) -> Self {
        Self(flag.bit())
    }
}

impl FromIterator<StyleFlag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleFlag>>(iter: I) -> Self {
        let mut set = StyleSet::EMPTY;
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl BitOr for StyleSet {
    type Output = StyleSet;

    fn bitor(self, rhs: StyleSet) -> StyleSet {
        StyleSet(self.0 | rhs.0)
    }
}

impl BitOr<StyleFlag> for StyleSet {
    type Output = StyleSet;

    fn bitor(self, rhs: StyleFlag) -> StyleSet {
        StyleSet(self.0 | rhs.bit())
    }
}

impl BitOrAssign<StyleFlag> for StyleSet {
    fn bitor_assign(&mut self, rhs: StyleFlag) {
        self.insert(rhs);
    }
}
