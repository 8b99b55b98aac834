//! Declarative tab bar configuration.
//!
//! A bar can be described in YAML and built in one step:
//!
//! ```
//! use minitab_widgets::{TabBarConfig, TitleState};
//!
//! let config = TabBarConfig::from_yaml(
//!     r##"
//! style:
//!   title_state: always_show
//!   tint_color: "#ff2d55"
//! items:
//!   - title: Home
//!     icon: house
//!   - title: Inbox
//!     icon: tray
//!     badge:
//!       value: "2"
//! "##,
//! )
//! .unwrap();
//!
//! let bar = config.build().unwrap();
//! assert_eq!(bar.item_count(), 2);
//! assert_eq!(bar.title_state(), TitleState::AlwaysShow);
//! ```
//!
//! Colors are hex strings, `#rrggbb` or `#rrggbbaa`.

use crate::badge::TabBarBadge;
use crate::error::TabBarError;
use crate::item::{Icon, TabBarItem};
use crate::tab_bar::TabBar;
use crate::title_state::TitleState;
use minitab_core::{Color, Font};
use serde::{Deserialize, Serialize};

/// Root of a tab bar configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabBarConfig {
    /// Bar-wide appearance
    #[serde(default)]
    pub style: TabBarStyle,

    /// Tabs, left to right
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Bar-wide appearance settings. Unset colors keep the bar defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarStyle {
    /// Title visibility mode
    #[serde(default)]
    pub title_state: TitleState,

    /// Selected item color
    #[serde(default)]
    pub tint_color: Option<String>,

    /// Unselected item color
    #[serde(default)]
    pub inactive_color: Option<String>,

    /// Background outside colored mode
    #[serde(default)]
    pub uncolored_background_color: Option<String>,

    /// Top edge line color
    #[serde(default)]
    pub keyline_color: Option<String>,

    /// Follow the selected item's color
    #[serde(default)]
    pub colored: bool,

    /// Draw the translucent backdrop
    #[serde(default = "default_true")]
    pub background_blur: bool,

    /// Title font size in points
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            title_state: TitleState::default(),
            tint_color: None,
            inactive_color: None,
            uncolored_background_color: None,
            keyline_color: None,
            colored: false,
            background_blur: true,
            font_size: None,
        }
    }
}

/// One tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Title text
    pub title: String,

    /// Icon asset reference
    pub icon: String,

    /// Badge, if any
    #[serde(default)]
    pub badge: Option<BadgeConfig>,

    /// Bar color while selected in colored mode
    #[serde(default)]
    pub color: Option<String>,

    /// Whether the tab can be selected
    #[serde(default = "default_true")]
    pub selectable: bool,
}

/// Badge on a tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Initial text; empty starts hidden
    #[serde(default)]
    pub value: String,

    /// Fill color
    #[serde(default = "default_badge_background")]
    pub background: String,

    /// Text color
    #[serde(default = "default_badge_text")]
    pub text: String,
}

const fn default_true() -> bool {
    true
}

fn default_badge_background() -> String {
    "#ff3b30".to_string()
}

fn default_badge_text() -> String {
    "#ffffff".to_string()
}

fn parse_color(value: &str) -> Result<Color, TabBarError> {
    Color::from_hex(value).map_err(|source| TabBarError::InvalidColor {
        value: value.to_string(),
        source,
    })
}

fn parse_optional(value: Option<&str>) -> Result<Option<Color>, TabBarError> {
    value.map(parse_color).transpose()
}

impl ItemConfig {
    fn to_item(&self) -> Result<TabBarItem, TabBarError> {
        let mut item =
            TabBarItem::new(&self.title, Icon::new(&self.icon)).selectable(self.selectable);
        if let Some(color) = parse_optional(self.color.as_deref())? {
            item = item.bar_background_color(color);
        }
        if let Some(badge) = &self.badge {
            item = item.badge(TabBarBadge::new(
                parse_color(&badge.background)?,
                parse_color(&badge.text)?,
                badge.value.clone(),
            ));
        }
        Ok(item)
    }
}

impl TabBarConfig {
    /// Parse a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TabBarError::Config`] for malformed YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TabBarError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, TabBarError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Build a configured bar. Nothing is selected.
    ///
    /// # Errors
    ///
    /// Fails on unparsable colors, and when colored mode is on but a
    /// selectable item has no color.
    pub fn build(&self) -> Result<TabBar, TabBarError> {
        let items = self
            .items
            .iter()
            .map(ItemConfig::to_item)
            .collect::<Result<Vec<_>, _>>()?;
        let style = &self.style;
        let mut bar = TabBar::new(items, style.title_state)?;

        if let Some(color) = parse_optional(style.tint_color.as_deref())? {
            bar.set_tint_color(color);
        }
        if let Some(color) = parse_optional(style.inactive_color.as_deref())? {
            bar.set_inactive_color(color);
        }
        if let Some(color) = parse_optional(style.uncolored_background_color.as_deref())? {
            bar.set_uncolored_background_color(color);
        }
        if let Some(color) = parse_optional(style.keyline_color.as_deref())? {
            bar.set_keyline_color(color);
        }
        bar.set_background_blur_enabled(style.background_blur);
        bar.set_font(style.font_size.map(Font::system));
        bar.set_colored(style.colored)?;
        Ok(bar)
    }
}
