//! Badge descriptor shown at the top-right of a tab icon.

use minitab_core::Color;
use serde::{Deserialize, Serialize};

/// A small counter or label drawn over a tab icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarBadge {
    background_color: Color,
    text_color: Color,
    value: String,
}

impl TabBarBadge {
    /// Create a badge.
    #[must_use]
    pub fn new(background_color: Color, text_color: Color, value: impl Into<String>) -> Self {
        Self {
            background_color,
            text_color,
            value: value.into(),
        }
    }

    /// Badge fill color.
    #[must_use]
    pub const fn background_color(&self) -> Color {
        self.background_color
    }

    /// Badge text color.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        self.text_color
    }

    /// Text currently stored on the badge.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_new() {
        let badge = TabBarBadge::new(Color::RED, Color::WHITE, "3");
        assert_eq!(badge.background_color(), Color::RED);
        assert_eq!(badge.text_color(), Color::WHITE);
        assert_eq!(badge.value(), "3");
    }

    #[test]
    fn test_badge_set_value() {
        let mut badge = TabBarBadge::new(Color::RED, Color::WHITE, "3");
        badge.set_value("");
        assert_eq!(badge.value(), "");
    }
}
