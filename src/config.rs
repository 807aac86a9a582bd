//! Highlighter configuration
//!
//! Settings are read from a TOML document supplied by the caller; the
//! library never touches the filesystem itself.
//!
//! Example:
//! ```toml
//! # mdhighlight configuration
//! disabled-styles = ["h5", "h6"]
//! large-buffer-warning = 1000000
//! ```

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{StyleFlag, StyleSet};

/// Buffers longer than this many characters are logged as unusually large
pub const DEFAULT_LARGE_BUFFER_WARNING: usize = 1_000_000;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Style classes that are never painted
    pub disabled_styles: StyleSet,
    /// Warn when a buffer is longer than this (0 = never)
    pub large_buffer_warning: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            disabled_styles: StyleSet::EMPTY,
            large_buffer_warning: DEFAULT_LARGE_BUFFER_WARNING,
        }
    }
}

/// Settings as written in the file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct Settings {
    disabled_styles: Option<Vec<String>>,
    large_buffer_warning: Option<usize>,
}

impl HighlightConfig {
    /// Load configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings = Self::parse(contents)?;
        let mut config = HighlightConfig::default();
        config.apply(&settings)?;
        Ok(config)
    }

    /// Parse config file contents
    fn parse(contents: &str) -> Result<Settings> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &Settings) -> Result<()> {
        if let Some(names) = &settings.disabled_styles {
            self.disabled_styles = parse_styles(names)?;
        }

        if let Some(n) = settings.large_buffer_warning {
            self.large_buffer_warning = n;
        }

        Ok(())
    }

    /// Check whether a style is painted under this configuration
    pub fn is_enabled(&self, flag: StyleFlag) -> bool {
        !self.disabled_styles.contains(flag)
    }
}

/// Resolve style class names to a set of flags
fn parse_styles(names: &[String]) -> Result<StyleSet> {
    names
        .iter()
        .map(|name| {
            StyleFlag::from_name(name.trim())
                .ok_or_else(|| HighlightError::UnknownStyle(name.clone()))
        })
        .collect()
}
