//! Visual component for a single tab.
//!
//! A [`TabBarItemView`] owns the item it renders and the animated positions
//! of its icon, badge and title. It never talks to the bar directly: the bar
//! hands in a [`BarContext`] and applies the [`BackgroundChange`] a selection
//! returns.

use crate::badge::TabBarBadge;
use crate::error::TabBarError;
use crate::item::TabBarItem;
use crate::title_state::{ItemRow, TitleState};
use minitab_core::widget::{AccessibleRole, LayoutResult, TextAlign, TextStyle};
use minitab_core::{
    AnimatedProperty, Canvas, Color, Constraints, Easing, Event, Font, Rect, Size, TickOutcome,
    Timing, Transform2D, TypeId, Widget,
};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

const ICON_SIZE: Size = Size::new(25.0, 25.0);
const BADGE_SIZE: Size = Size::new(12.0, 12.0);
const TITLE_HEIGHT: f32 = 14.0;
const BADGE_CORNER_RADIUS: f32 = 6.0;
const CUSTOM_VIEW_FALLBACK: Size = Size::new(50.0, 50.0);

const ICON_TIMING: Timing = Timing::new(0.15, Easing::EaseInOut);
const BADGE_MOVE_TIMING: Timing = Timing::new(0.15, Easing::EaseInOut);
const TITLE_TIMING: Timing = Timing::new(0.2, Easing::EaseInOut);
const BADGE_PHASE_TIMING: Timing = Timing::new(0.15, Easing::EaseInOut);

/// Duration of the bar background color change on selection.
pub const BACKGROUND_TIMING: Timing = Timing::new(0.15, Easing::EaseInOut);

/// Default title font.
pub const DEFAULT_TITLE_FONT: Font = Font::system(12.0);

/// Badge text font.
pub const BADGE_FONT: Font = Font::system(8.0);

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an item view, stable for the view's lifetime.
///
/// Tap routing resolves this back to a position, so a view keeps working
/// after items around it are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemViewId(u64);

impl ItemViewId {
    fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Bar state an item view reads while changing selection or layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarContext {
    /// Current title visibility mode
    pub title_state: TitleState,
    /// Whether the bar tracks the selected item's color
    pub colored: bool,
}

/// What the bar should do with its background after a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundChange {
    /// Leave the background alone
    Unchanged,
    /// Animate the background to this color
    Animate(Color),
    /// Jump to this color
    Set(Color),
    /// Restore the uncolored background if it differs
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
enum BadgePhase {
    Idle,
    /// Fading out; `pending` replaces the text once fully hidden.
    Swapping { pending: String },
}

#[derive(Debug)]
struct BadgeView {
    text: String,
    background_color: Color,
    text_color: Color,
    alpha: AnimatedProperty<f32>,
    scale: AnimatedProperty<f32>,
    phase: BadgePhase,
}

impl BadgeView {
    fn new(badge: &TabBarBadge) -> Self {
        let alpha = if badge.value().is_empty() { 0.0 } else { 1.0 };
        Self {
            text: badge.value().to_string(),
            background_color: badge.background_color(),
            text_color: badge.text_color(),
            alpha: AnimatedProperty::new(alpha),
            scale: AnimatedProperty::new(1.0),
            phase: BadgePhase::Idle,
        }
    }

    fn set_value(&mut self, value: &str) {
        if value.is_empty() {
            self.phase = BadgePhase::Idle;
            self.alpha.animate_to(0.0, BADGE_PHASE_TIMING);
            return;
        }
        self.phase = BadgePhase::Swapping {
            pending: value.to_string(),
        };
        self.alpha.animate_to(0.0, BADGE_PHASE_TIMING);
        self.scale.animate_to(-1.0, BADGE_PHASE_TIMING);
    }

    fn tick(&mut self, dt: f64) {
        let faded = self.alpha.tick(dt);
        self.scale.tick(dt);
        if faded != TickOutcome::Completed {
            return;
        }
        let phase = std::mem::replace(&mut self.phase, BadgePhase::Idle);
        if let BadgePhase::Swapping { pending } = phase {
            trace!(from = %self.text, to = %pending, "badge text swapped");
            self.text = pending;
            self.alpha.animate_to(1.0, BADGE_PHASE_TIMING);
            self.scale.animate_to(1.0, BADGE_PHASE_TIMING);
        }
    }

    fn is_animating(&self) -> bool {
        self.alpha.is_animating() || self.scale.is_animating()
    }
}

/// Renders one [`TabBarItem`] and animates its selection state.
pub struct TabBarItemView {
    id: ItemViewId,
    item: TabBarItem,
    bounds: Rect,
    title_state: TitleState,
    selected: bool,
    tint_color: Color,
    inactive_color: Color,
    font: Font,
    icon_y: AnimatedProperty<f32>,
    badge_y: AnimatedProperty<f32>,
    title_y: AnimatedProperty<f32>,
    badge: Option<BadgeView>,
}

impl TabBarItemView {
    /// Build the view for `item`, which sits at `index` in the bar.
    ///
    /// # Errors
    ///
    /// Returns an error when the item has both or neither of a title/icon
    /// pair and a custom view.
    pub fn new(item: TabBarItem, index: usize) -> Result<Self, TabBarError> {
        item.validate(index)?;
        let title_state = TitleState::default();
        let rest = title_state.layout().rest;
        let badge = if item.has_custom_view() {
            None
        } else {
            item.badge_ref().map(BadgeView::new)
        };
        Ok(Self {
            id: ItemViewId::next(),
            item,
            bounds: Rect::default(),
            title_state,
            selected: false,
            tint_color: Color::SYSTEM_BLUE,
            inactive_color: Color::gray(0.5, 1.0),
            font: DEFAULT_TITLE_FONT,
            icon_y: AnimatedProperty::new(rest.icon_y),
            badge_y: AnimatedProperty::new(rest.badge_y),
            title_y: AnimatedProperty::new(0.0),
            badge,
        })
    }

    /// Identity used for tap routing.
    #[must_use]
    pub const fn id(&self) -> ItemViewId {
        self.id
    }

    /// The rendered item.
    #[must_use]
    pub const fn item(&self) -> &TabBarItem {
        &self.item
    }

    pub(crate) fn item_mut(&mut self) -> &mut TabBarItem {
        &mut self.item
    }

    /// Whether this view is currently selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Color used for the icon and title right now.
    #[must_use]
    pub const fn content_color(&self) -> Color {
        if self.selected {
            self.tint_color
        } else {
            self.inactive_color
        }
    }

    /// Current icon frame.
    #[must_use]
    pub fn icon_frame(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.bounds.width / 2.0 - 13.0,
            self.bounds.y + self.icon_y.value(),
            ICON_SIZE.width,
            ICON_SIZE.height,
        )
    }

    /// Current badge frame.
    #[must_use]
    pub fn badge_frame(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.bounds.width / 2.0 + 6.0,
            self.bounds.y + self.badge_y.value(),
            BADGE_SIZE.width,
            BADGE_SIZE.height,
        )
    }

    /// Current title frame.
    #[must_use]
    pub fn title_frame(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y + self.title_y.value(),
            self.bounds.width,
            TITLE_HEIGHT,
        )
    }

    /// Text the badge shows, if the item has one.
    #[must_use]
    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_ref().map(|b| b.text.as_str())
    }

    /// Badge opacity, if the item has one.
    #[must_use]
    pub fn badge_alpha(&self) -> Option<f32> {
        self.badge.as_ref().map(|b| b.alpha.value())
    }

    /// Lay out the sub-elements within `bounds` for the given title mode.
    ///
    /// Elements snap to the row matching the current selection. Calling this
    /// again with the same bounds and mode leaves running animations alone.
    pub fn set_frames(&mut self, bounds: Rect, ctx: &BarContext) {
        let row = ctx.title_state.layout().row(self.selected);
        let settled = bounds == self.bounds
            && ctx.title_state == self.title_state
            && self.icon_y.target() == row.icon_y
            && self.badge_y.target() == row.badge_y
            && self.title_y.target() == row.title_y.resolve(bounds.height);
        self.bounds = bounds;
        self.title_state = ctx.title_state;
        self.layout_custom_view();
        if settled {
            return;
        }
        self.move_to(row, false);
    }

    /// Snap every element to the rest row within `bounds`.
    pub(crate) fn snap_to_rest(&mut self, bounds: Rect, ctx: &BarContext) {
        self.bounds = bounds;
        self.title_state = ctx.title_state;
        self.layout_custom_view();
        self.move_to(ctx.title_state.layout().rest, false);
    }

    fn layout_custom_view(&mut self) {
        let offset = self.item.offset_value();
        let center = self.bounds.center().offset_by(offset);
        if let Some(view) = self.item.custom_view_mut() {
            let measured = view.measure(Constraints::unbounded());
            let size = if measured.is_empty() {
                CUSTOM_VIEW_FALLBACK
            } else {
                measured
            };
            view.layout(Rect::centered_at(center, size));
        }
    }

    fn move_to(&mut self, row: ItemRow, animated: bool) {
        let title_y = row.title_y.resolve(self.bounds.height);
        let timed = |timing: Timing| animated.then_some(timing);
        self.icon_y.transition(row.icon_y, timed(ICON_TIMING));
        self.badge_y.transition(row.badge_y, timed(BADGE_MOVE_TIMING));
        self.title_y.transition(title_y, timed(TITLE_TIMING));
    }

    /// Mark the view selected or not and recolor it.
    ///
    /// A newly selected view moves to the active row of the title layout.
    /// The returned change tells the bar what to do with its background.
    pub fn set_selected(
        &mut self,
        selected: bool,
        animated: bool,
        ctx: &BarContext,
    ) -> BackgroundChange {
        self.selected = selected;
        if !selected {
            return BackgroundChange::Unchanged;
        }
        let layout = ctx.title_state.layout();
        if layout.animates() {
            self.move_to(layout.active, animated);
        }
        if !ctx.colored {
            return BackgroundChange::Reset;
        }
        match self.item.bar_color() {
            Some(color) if animated => BackgroundChange::Animate(color),
            Some(color) => BackgroundChange::Set(color),
            None => BackgroundChange::Unchanged,
        }
    }

    /// Move a previously selected view back to its rest row.
    pub fn de_selected(&mut self, was_selected: bool, animated: bool, ctx: &BarContext) {
        if !was_selected {
            return;
        }
        let layout = ctx.title_state.layout();
        if layout.animates() {
            self.move_to(layout.rest, animated);
        }
    }

    /// Change the badge text with a flip animation.
    ///
    /// An empty value fades the badge out. Items without a badge ignore
    /// this.
    pub fn set_badge(&mut self, value: &str) {
        match self.badge.as_mut() {
            Some(badge) => badge.set_value(value),
            None => trace!(view = ?self.id, "item has no badge, ignoring value"),
        }
    }

    /// Color for the icon and title while selected.
    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
    }

    /// Color for the icon and title while not selected.
    pub fn set_inactive_color(&mut self, color: Color) {
        self.inactive_color = color;
    }

    /// Title font; `None` restores the 12pt system font.
    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font.unwrap_or(DEFAULT_TITLE_FONT);
    }

    /// Whether any element of this view is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.icon_y.is_animating()
            || self.badge_y.is_animating()
            || self.title_y.is_animating()
            || self.badge.as_ref().is_some_and(BadgeView::is_animating)
    }

    fn paint_badge(&self, badge: &BadgeView, canvas: &mut dyn Canvas) {
        let alpha = badge.alpha.value();
        if alpha <= 0.0 {
            return;
        }
        let frame = self.badge_frame();
        let scale = badge.scale.value();
        canvas.push_layer(Transform2D::scale_about(frame.center(), scale, scale), alpha);
        canvas.fill_rounded_rect(frame, BADGE_CORNER_RADIUS, badge.background_color);
        let style = TextStyle::from_font(&BADGE_FONT, badge.text_color).aligned(TextAlign::Center);
        canvas.draw_text(&badge.text, frame, &style);
        canvas.pop_layer();
    }
}

impl std::fmt::Debug for TabBarItemView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBarItemView")
            .field("id", &self.id)
            .field("item", &self.item)
            .field("bounds", &self.bounds)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Widget for TabBarItemView {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(80.0, 49.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let ctx = BarContext {
            title_state: self.title_state,
            colored: false,
        };
        self.set_frames(bounds, &ctx);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(view) = self.item.custom_view_ref() {
            view.paint(canvas);
            return;
        }
        let color = self.content_color();
        if let Some(icon) = self.item.icon_ref() {
            canvas.draw_image(icon.source(), self.icon_frame(), Some(color));
        }
        if let Some(title) = self.item.title() {
            // Parked below the view: nothing visible to draw.
            if self.title_y.value() < self.bounds.height {
                let style = TextStyle::from_font(&self.font, color).aligned(TextAlign::Center);
                canvas.draw_text(title, self.title_frame(), &style);
            }
        }
        if let Some(badge) = &self.badge {
            self.paint_badge(badge, canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let position = event.tap_position()?;
        if !self.bounds.contains_point(&position) {
            return None;
        }
        if let Some(view) = self.item.custom_view_mut() {
            view.event(event);
        }
        Some(Box::new(self.id))
    }

    fn tick(&mut self, dt: f64) {
        self.icon_y.tick(dt);
        self.badge_y.tick(dt);
        self.title_y.tick(dt);
        if let Some(badge) = self.badge.as_mut() {
            badge.tick(dt);
        }
        if let Some(view) = self.item.custom_view_mut() {
            view.tick(dt);
        }
    }

    fn is_interactive(&self) -> bool {
        self.item.is_selectable()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.item.title()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Tab
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Icon;
    use minitab_core::{DrawCommand, MouseButton, Point, RecordingCanvas};

    const SHOW_WHEN_ACTIVE: BarContext = BarContext {
        title_state: TitleState::ShowWhenActive,
        colored: false,
    };

    struct Swatch {
        size: Size,
        bounds: Rect,
    }

    impl Widget for Swatch {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(self.size)
        }
        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(self.bounds, Color::RED);
        }
        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    fn standard_view() -> TabBarItemView {
        let item = TabBarItem::new("Home", Icon::new("house"))
            .badge(TabBarBadge::new(Color::RED, Color::WHITE, "1"))
            .bar_background_color(Color::BLUE);
        let mut view = TabBarItemView::new(item, 0).unwrap();
        view.set_frames(Rect::new(0.0, 0.0, 100.0, 49.0), &SHOW_WHEN_ACTIVE);
        view
    }

    fn settle(view: &mut TabBarItemView) {
        for _ in 0..10 {
            view.tick(0.1);
        }
    }

    #[test]
    fn test_new_rejects_invalid_item() {
        let item = TabBarItem::new("Home", Icon::new("house"))
            .custom_view(Box::new(Swatch {
                size: Size::ZERO,
                bounds: Rect::default(),
            }));
        assert!(matches!(
            TabBarItemView::new(item, 4),
            Err(TabBarError::ConflictingContent { index: 4 })
        ));
    }

    #[test]
    fn test_view_ids_are_unique() {
        let a = standard_view();
        let b = standard_view();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_frames_show_when_active_rest_row() {
        let view = standard_view();
        assert_eq!(view.icon_frame(), Rect::new(37.0, 12.0, 25.0, 25.0));
        assert_eq!(view.badge_frame(), Rect::new(56.0, 6.0, 12.0, 12.0));
        assert_eq!(view.title_frame(), Rect::new(0.0, 49.0, 100.0, 14.0));
    }

    #[test]
    fn test_set_frames_always_show() {
        let mut view = standard_view();
        let ctx = BarContext {
            title_state: TitleState::AlwaysShow,
            colored: false,
        };
        view.set_frames(Rect::new(100.0, 0.0, 100.0, 49.0), &ctx);
        assert_eq!(view.icon_frame().y, 5.0);
        assert_eq!(view.badge_frame().y, 2.5);
        assert_eq!(view.title_frame().y, 28.0);
        assert_eq!(view.icon_frame().x, 137.0);
    }

    #[test]
    fn test_selection_animates_to_active_row() {
        let mut view = standard_view();
        let change = view.set_selected(true, true, &SHOW_WHEN_ACTIVE);
        assert_eq!(change, BackgroundChange::Reset);
        assert!(view.is_animating());
        assert_eq!(view.content_color(), Color::SYSTEM_BLUE);

        view.tick(0.075);
        let icon_y = view.icon_frame().y;
        assert!(icon_y < 12.0 && icon_y > 5.0);

        settle(&mut view);
        assert!(!view.is_animating());
        assert_eq!(view.icon_frame().y, 5.0);
        assert_eq!(view.badge_frame().y, 2.5);
        assert_eq!(view.title_frame().y, 28.0);
    }

    #[test]
    fn test_non_animated_selection_snaps() {
        let mut view = standard_view();
        view.set_selected(true, false, &SHOW_WHEN_ACTIVE);
        assert!(!view.is_animating());
        assert_eq!(view.icon_frame().y, 5.0);

        view.de_selected(true, false, &SHOW_WHEN_ACTIVE);
        view.set_selected(false, false, &SHOW_WHEN_ACTIVE);
        assert_eq!(view.icon_frame().y, 12.0);
        assert_eq!(view.title_frame().y, 49.0);
        assert_eq!(view.content_color(), Color::gray(0.5, 1.0));
    }

    #[test]
    fn test_de_selected_only_moves_previous_selection() {
        let mut view = standard_view();
        view.set_selected(true, false, &SHOW_WHEN_ACTIVE);
        view.de_selected(false, true, &SHOW_WHEN_ACTIVE);
        assert!(!view.is_animating());
        assert_eq!(view.icon_frame().y, 5.0);

        view.de_selected(true, true, &SHOW_WHEN_ACTIVE);
        settle(&mut view);
        assert_eq!(view.icon_frame().y, 12.0);
    }

    #[test]
    fn test_colored_selection_requests_item_color() {
        let mut view = standard_view();
        let ctx = BarContext {
            title_state: TitleState::AlwaysShow,
            colored: true,
        };
        assert_eq!(
            view.set_selected(true, true, &ctx),
            BackgroundChange::Animate(Color::BLUE)
        );
        assert_eq!(
            view.set_selected(true, false, &ctx),
            BackgroundChange::Set(Color::BLUE)
        );
        assert_eq!(
            view.set_selected(false, true, &ctx),
            BackgroundChange::Unchanged
        );
    }

    #[test]
    fn test_always_show_selection_does_not_move() {
        let mut view = standard_view();
        let ctx = BarContext {
            title_state: TitleState::AlwaysShow,
            colored: false,
        };
        view.set_frames(Rect::new(0.0, 0.0, 100.0, 49.0), &ctx);
        view.set_selected(true, true, &ctx);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_badge_swap_runs_two_phases() {
        let mut view = standard_view();
        view.set_badge("7");
        assert_eq!(view.badge_text(), Some("1"));

        view.tick(0.15);
        assert_eq!(view.badge_text(), Some("7"));
        assert_eq!(view.badge_alpha(), Some(0.0));
        assert!(view.is_animating());

        view.tick(0.15);
        assert_eq!(view.badge_alpha(), Some(1.0));
        assert!(!view.is_animating());
    }

    #[test]
    fn test_newer_badge_value_supersedes_pending() {
        let mut view = standard_view();
        view.set_badge("2");
        view.tick(0.05);
        view.set_badge("3");
        settle(&mut view);
        assert_eq!(view.badge_text(), Some("3"));
        assert_eq!(view.badge_alpha(), Some(1.0));
    }

    #[test]
    fn test_empty_badge_fades_out_and_cancels_swap() {
        let mut view = standard_view();
        view.set_badge("9");
        view.tick(0.05);
        view.set_badge("");
        settle(&mut view);
        assert_eq!(view.badge_text(), Some("1"));
        assert_eq!(view.badge_alpha(), Some(0.0));
    }

    #[test]
    fn test_empty_initial_badge_starts_hidden() {
        let item = TabBarItem::new("Mail", Icon::new("envelope"))
            .badge(TabBarBadge::new(Color::RED, Color::WHITE, ""));
        let view = TabBarItemView::new(item, 0).unwrap();
        assert_eq!(view.badge_alpha(), Some(0.0));
    }

    #[test]
    fn test_set_badge_without_badge_is_ignored() {
        let mut view = TabBarItemView::new(TabBarItem::new("A", Icon::new("a")), 0).unwrap();
        view.set_badge("5");
        assert_eq!(view.badge_text(), None);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_custom_view_is_centered_with_offset() {
        let item = TabBarItem::custom(Box::new(Swatch {
            size: Size::new(30.0, 20.0),
            bounds: Rect::default(),
        }))
        .offset(5.0, -3.0);
        let mut view = TabBarItemView::new(item, 0).unwrap();
        view.set_frames(Rect::new(0.0, 0.0, 100.0, 50.0), &SHOW_WHEN_ACTIVE);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::filled_rect(
                Rect::new(40.0, 12.0, 30.0, 20.0),
                Color::RED
            )]
        );
    }

    #[test]
    fn test_empty_custom_view_gets_fallback_size() {
        let item = TabBarItem::custom(Box::new(Swatch {
            size: Size::ZERO,
            bounds: Rect::default(),
        }));
        let mut view = TabBarItemView::new(item, 0).unwrap();
        view.set_frames(Rect::new(0.0, 0.0, 100.0, 50.0), &SHOW_WHEN_ACTIVE);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Rect { bounds, .. } if bounds == Rect::new(25.0, 0.0, 50.0, 50.0)
        ));
    }

    #[test]
    fn test_paint_uses_tint_and_hides_parked_title() {
        let mut view = standard_view();
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert!(canvas.texts().iter().all(|t| *t != "Home"));

        view.set_tint_color(Color::RED);
        view.set_selected(true, false, &SHOW_WHEN_ACTIVE);
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert!(canvas.texts().contains(&"Home"));
        assert!(canvas.flattened().iter().any(|c| matches!(
            c,
            DrawCommand::Image { source, tint: Some(tint), .. }
                if source == "house" && *tint == Color::RED
        )));
    }

    #[test]
    fn test_set_font_none_restores_default() {
        let mut view = standard_view();
        view.set_font(Some(Font::system(15.0)));
        view.set_font(None);
        view.set_selected(true, false, &SHOW_WHEN_ACTIVE);
        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert!(canvas.flattened().iter().any(|c| matches!(
            c,
            DrawCommand::Text { content, style, .. } if content == "Home" && style.size == 12.0
        )));
    }

    #[test]
    fn test_event_reports_own_id_on_tap() {
        let mut view = standard_view();
        let id = view.id();
        let tap = Event::MouseDown {
            position: Point::new(50.0, 20.0),
            button: MouseButton::Left,
        };
        let message = view.event(&tap).unwrap();
        assert_eq!(message.downcast_ref::<ItemViewId>(), Some(&id));

        let miss = Event::GestureTap {
            position: Point::new(150.0, 20.0),
            count: 1,
        };
        assert!(view.event(&miss).is_none());
    }

    #[test]
    fn test_accessibility() {
        let view = standard_view();
        assert_eq!(view.accessible_name(), Some("Home"));
        assert_eq!(view.accessible_role(), AccessibleRole::Tab);
        assert!(view.is_interactive());
    }
}
