//! Error types for tab bar configuration.

use minitab_core::ColorParseError;
use thiserror::Error;

/// Configuration errors reported by the tab bar.
///
/// All of these are raised before any state changes, so a rejected call
/// leaves the bar exactly as it was.
#[derive(Debug, Error)]
pub enum TabBarError {
    /// Item sets both a title/icon and a custom view.
    #[error("tab bar item {index} sets both a title/icon and a custom view")]
    ConflictingContent {
        /// Position of the offending item
        index: usize,
    },

    /// Item has neither a complete title/icon pair nor a custom view.
    #[error("tab bar item {index} has no custom view and no {missing}")]
    IncompleteContent {
        /// Position of the offending item
        index: usize,
        /// What is missing ("title", "icon" or "title and icon")
        missing: &'static str,
    },

    /// Colored mode needs a bar background color on every selectable item.
    #[error("colored mode requires a bar background color for item {index}")]
    MissingBarColor {
        /// Position of the offending item
        index: usize,
    },

    /// A configured color string could not be parsed.
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        /// The rejected string
        value: String,
        /// Parse failure
        source: ColorParseError,
    },

    /// Malformed YAML configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}
