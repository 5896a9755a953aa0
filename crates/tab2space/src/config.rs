use std::num::NonZeroUsize;

use crate::error::{Result, Tab2SpaceError};

/// Number of spaces written in place of each tab byte. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabWidth(NonZeroUsize);

impl TabWidth {
    pub const DEFAULT: TabWidth = TabWidth(NonZeroUsize::new(4).unwrap());

    /// Validate a user-supplied width. Zero and negative values are rejected.
    pub fn new(spaces: i64) -> Result<Self> {
        usize::try_from(spaces)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(TabWidth)
            .ok_or(Tab2SpaceError::InvalidTabSize(spaces))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Spaces substituted per tab (default: 4).
    pub tab_width: TabWidth,

    /// Remove the original file after the converted copy is written (default: false).
    pub delete_old: bool,
}

fn default_tab_width() -> TabWidth {
    TabWidth::DEFAULT
}

fn default_delete_old() -> bool {
    false
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            delete_old: default_delete_old(),
        }
    }
}
