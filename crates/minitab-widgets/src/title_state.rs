//! Title visibility modes and the vertical layout each one implies.

use serde::{Deserialize, Serialize};

/// When a tab's title text is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleState {
    /// Title slides in under the icon of the selected tab only
    #[default]
    ShowWhenActive,
    /// Every tab shows its title
    AlwaysShow,
    /// No tab shows its title
    AlwaysHide,
}

/// Vertical position of the title label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleY {
    /// Fixed offset from the top of the item
    At(f32),
    /// Parked just below the item's bottom edge
    BelowBounds,
}

impl TitleY {
    /// Resolve against the height of the item view.
    #[must_use]
    pub const fn resolve(self, view_height: f32) -> f32 {
        match self {
            Self::At(y) => y,
            Self::BelowBounds => view_height,
        }
    }
}

/// Vertical positions of icon, badge and title in one selection state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRow {
    /// Icon top
    pub icon_y: f32,
    /// Badge top
    pub badge_y: f32,
    /// Title top
    pub title_y: TitleY,
}

/// Rest (deselected) and active (selected) rows for a title state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleLayout {
    /// Positions of a deselected item
    pub rest: ItemRow,
    /// Positions of the selected item
    pub active: ItemRow,
}

impl TitleLayout {
    /// Whether selecting an item moves anything.
    #[must_use]
    pub fn animates(&self) -> bool {
        self.rest != self.active
    }

    /// Row for the given selection state.
    #[must_use]
    pub const fn row(&self, selected: bool) -> ItemRow {
        if selected {
            self.active
        } else {
            self.rest
        }
    }
}

const LOWERED: ItemRow = ItemRow {
    icon_y: 12.0,
    badge_y: 6.0,
    title_y: TitleY::BelowBounds,
};

const RAISED: ItemRow = ItemRow {
    icon_y: 5.0,
    badge_y: 2.5,
    title_y: TitleY::At(28.0),
};

impl TitleState {
    /// Layout table for this mode.
    #[must_use]
    pub const fn layout(self) -> TitleLayout {
        match self {
            Self::ShowWhenActive => TitleLayout {
                rest: LOWERED,
                active: RAISED,
            },
            Self::AlwaysShow => TitleLayout {
                rest: RAISED,
                active: RAISED,
            },
            Self::AlwaysHide => TitleLayout {
                rest: LOWERED,
                active: LOWERED,
            },
        }
    }
}
