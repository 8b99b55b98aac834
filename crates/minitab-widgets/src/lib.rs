//! Animated bottom tab bar built on minitab-core.
//!
//! A [`TabBar`] owns one [`TabBarItemView`] per [`TabBarItem`], tracks the
//! selection, and notifies a [`TabBarDelegate`] when it changes. Bars can be
//! built in code or from YAML through [`TabBarConfig`].

pub mod badge;
pub mod config;
pub mod error;
pub mod item;
pub mod item_view;
pub mod tab_bar;
pub mod title_state;

pub use badge::TabBarBadge;
pub use config::{BadgeConfig, ItemConfig, TabBarConfig, TabBarStyle};
pub use error::TabBarError;
pub use item::{Icon, TabBarItem};
pub use item_view::{BackgroundChange, BarContext, ItemViewId, TabBarItemView};
pub use tab_bar::{TabBar, TabBarDelegate, TabSelected, BAR_HEIGHT, NO_SELECTION};
pub use title_state::{ItemRow, TitleLayout, TitleState, TitleY};
