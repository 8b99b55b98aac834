//! Tab descriptors supplied by the host application.

use crate::badge::TabBarBadge;
use crate::error::TabBarError;
use minitab_core::{Color, Offset, Widget};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon asset reference, rendered as a single-color template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    source: String,
}

impl Icon {
    /// Reference an icon asset by name or URI.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Asset reference.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// One tab's display content.
///
/// A valid item has either a title and an icon, or a custom view, never
/// both. The bar checks this when the item is handed over.
///
/// ```
/// use minitab_core::Color;
/// use minitab_widgets::{Icon, TabBarBadge, TabBarItem};
///
/// let inbox = TabBarItem::new("Inbox", Icon::new("tray"))
///     .badge(TabBarBadge::new(Color::RED, Color::WHITE, "4"))
///     .bar_background_color(Color::BLUE);
/// assert_eq!(inbox.title(), Some("Inbox"));
/// assert!(inbox.is_selectable());
/// ```
pub struct TabBarItem {
    title: Option<String>,
    icon: Option<Icon>,
    badge: Option<TabBarBadge>,
    custom_view: Option<Box<dyn Widget>>,
    offset: Offset,
    selectable: bool,
    bar_background_color: Option<Color>,
}

impl TabBarItem {
    /// Standard tab with a title and an icon.
    #[must_use]
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: Some(title.into()),
            icon: Some(icon),
            ..Self::default()
        }
    }

    /// Tab that hosts an arbitrary widget instead of a title and icon.
    #[must_use]
    pub fn custom(view: Box<dyn Widget>) -> Self {
        Self {
            custom_view: Some(view),
            ..Self::default()
        }
    }

    /// Set or replace the title.
    #[must_use]
    pub fn title_text(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or replace the icon.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach a custom view.
    #[must_use]
    pub fn custom_view(mut self, view: Box<dyn Widget>) -> Self {
        self.custom_view = Some(view);
        self
    }

    /// Attach a badge.
    #[must_use]
    pub fn badge(mut self, badge: TabBarBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Displacement of the custom view from the center of its slot.
    #[must_use]
    pub const fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = Offset::new(dx, dy);
        self
    }

    /// Whether tapping this tab may select it.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Bar color used while this tab is selected in colored mode.
    #[must_use]
    pub const fn bar_background_color(mut self, color: Color) -> Self {
        self.bar_background_color = Some(color);
        self
    }

    /// Title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Icon, if any.
    #[must_use]
    pub const fn icon_ref(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Badge, if any.
    #[must_use]
    pub const fn badge_ref(&self) -> Option<&TabBarBadge> {
        self.badge.as_ref()
    }

    pub(crate) fn badge_mut(&mut self) -> Option<&mut TabBarBadge> {
        self.badge.as_mut()
    }

    /// Whether a custom view is attached.
    #[must_use]
    pub const fn has_custom_view(&self) -> bool {
        self.custom_view.is_some()
    }

    pub(crate) fn custom_view_ref(&self) -> Option<&(dyn Widget + 'static)> {
        self.custom_view.as_deref()
    }

    pub(crate) fn custom_view_mut(&mut self) -> Option<&mut (dyn Widget + 'static)> {
        self.custom_view.as_deref_mut()
    }

    /// Custom view offset.
    #[must_use]
    pub const fn offset_value(&self) -> Offset {
        self.offset
    }

    /// Whether the tab can be selected.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Bar color for colored mode, if set.
    #[must_use]
    pub const fn bar_color(&self) -> Option<Color> {
        self.bar_background_color
    }

    /// Check the title/icon versus custom view invariant.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> Result<(), TabBarError> {
        let has_text_content = self.title.is_some() || self.icon.is_some();
        match (&self.custom_view, has_text_content) {
            (Some(_), true) => Err(TabBarError::ConflictingContent { index }),
            (Some(_), false) => Ok(()),
            (None, _) => match (&self.title, &self.icon) {
                (Some(_), Some(_)) => Ok(()),
                (Some(_), None) => Err(TabBarError::IncompleteContent {
                    index,
                    missing: "icon",
                }),
                (None, Some(_)) => Err(TabBarError::IncompleteContent {
                    index,
                    missing: "title",
                }),
                (None, None) => Err(TabBarError::IncompleteContent {
                    index,
                    missing: "title and icon",
                }),
            },
        }
    }
}

impl Default for TabBarItem {
    /// An empty, selectable item. It fails validation until content is set.
    fn default() -> Self {
        Self {
            title: None,
            icon: None,
            badge: None,
            custom_view: None,
            offset: Offset::ZERO,
            selectable: true,
            bar_background_color: None,
        }
    }
}

impl fmt::Debug for TabBarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarItem")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("badge", &self.badge)
            .field("custom_view", &self.custom_view.as_ref().map(|_| ".."))
            .field("offset", &self.offset)
            .field("selectable", &self.selectable)
            .field("bar_background_color", &self.bar_background_color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitab_core::{Canvas, Constraints, Event, LayoutResult, Rect, Size, TypeId};
    use std::any::Any;

    struct Dot;

    impl Widget for Dot {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(8.0, 8.0))
        }
        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            LayoutResult {
                size: bounds.size(),
            }
        }
        fn paint(&self, _canvas: &mut dyn Canvas) {}
        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_item_new_is_valid() {
        let item = TabBarItem::new("Home", Icon::new("house"));
        assert!(item.validate(0).is_ok());
        assert!(item.is_selectable());
        assert_eq!(item.icon_ref().map(Icon::source), Some("house"));
        assert!(item.bar_color().is_none());
    }

    #[test]
    fn test_item_custom_is_valid() {
        let item = TabBarItem::custom(Box::new(Dot)).offset(0.0, -4.0);
        assert!(item.validate(0).is_ok());
        assert!(item.has_custom_view());
        assert_eq!(item.offset_value(), Offset::new(0.0, -4.0));
    }

    #[test]
    fn test_item_with_both_is_rejected() {
        let item = TabBarItem::new("Home", Icon::new("house")).custom_view(Box::new(Dot));
        assert!(matches!(
            item.validate(3),
            Err(TabBarError::ConflictingContent { index: 3 })
        ));

        let partial = TabBarItem::custom(Box::new(Dot)).title_text("Oops");
        assert!(matches!(
            partial.validate(0),
            Err(TabBarError::ConflictingContent { .. })
        ));
    }

    #[test]
    fn test_item_with_neither_is_rejected() {
        assert!(matches!(
            TabBarItem::default().validate(1),
            Err(TabBarError::IncompleteContent {
                index: 1,
                missing: "title and icon"
            })
        ));
        assert!(matches!(
            TabBarItem::default().title_text("Only").validate(0),
            Err(TabBarError::IncompleteContent {
                missing: "icon",
                ..
            })
        ));
        assert!(matches!(
            TabBarItem::default().icon(Icon::new("x")).validate(0),
            Err(TabBarError::IncompleteContent {
                missing: "title",
                ..
            })
        ));
    }

    #[test]
    fn test_item_debug_hides_custom_view() {
        let item = TabBarItem::custom(Box::new(Dot));
        let debug = format!("{item:?}");
        assert!(debug.contains("custom_view: Some(\"..\")"));
    }

    #[test]
    fn test_item_builder_flags() {
        let item = TabBarItem::new("A", Icon::new("a"))
            .selectable(false)
            .bar_background_color(Color::RED);
        assert!(!item.is_selectable());
        assert_eq!(item.bar_color(), Some(Color::RED));
    }
}
