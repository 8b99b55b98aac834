//! The tab bar container and its selection state machine.

use crate::error::TabBarError;
use crate::item::TabBarItem;
use crate::item_view::{
    BackgroundChange, BarContext, ItemViewId, TabBarItemView, BACKGROUND_TIMING,
};
use crate::title_state::TitleState;
use minitab_core::widget::{AccessibleRole, LayoutResult};
use minitab_core::{
    AnimatedProperty, Canvas, Color, Constraints, Easing, Event, Font, Rect, Size, Timing,
    Transform2D, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use tracing::{debug, trace, warn};

/// Index passed to [`TabBar::select_item`] to clear the selection.
pub const NO_SELECTION: isize = -1;

/// Preferred bar height.
pub const BAR_HEIGHT: f32 = 49.0;

const PREFERRED_ITEM_WIDTH: f32 = 80.0;
const KEYLINE_HEIGHT: f32 = 1.0;
const HIDE_TIMING: Timing = Timing::new(0.3, Easing::EaseOut);
const SHOW_TIMING: Timing = Timing::new(0.3, Easing::EaseIn);

/// Receives selection notifications from a [`TabBar`].
///
/// Closures taking the selected index implement this directly:
///
/// ```
/// use minitab_widgets::{Icon, TabBar, TabBarItem, TitleState};
///
/// let items = vec![
///     TabBarItem::new("Home", Icon::new("house")),
///     TabBarItem::new("Search", Icon::new("magnifier")),
/// ];
/// let mut bar = TabBar::new(items, TitleState::ShowWhenActive).unwrap();
/// bar.set_delegate(|index: usize| println!("tab {index}"));
/// assert!(bar.select_item(1, true).is_some());
/// ```
pub trait TabBarDelegate: Send + Sync {
    /// Called once per genuine selection change.
    fn tab_selected(&mut self, index: usize);
}

impl<F> TabBarDelegate for F
where
    F: FnMut(usize) + Send + Sync,
{
    fn tab_selected(&mut self, index: usize) {
        self(index);
    }
}

/// Message emitted when the selected tab changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelected {
    /// Index of the newly selected tab
    pub index: usize,
}

/// A bottom tab bar with animated selection.
pub struct TabBar {
    items: Vec<TabBarItemView>,
    current_selected_index: Option<isize>,
    title_state: TitleState,
    colored: bool,
    uncolored_background_color: Color,
    inactive_color: Color,
    tint_color: Color,
    font: Option<Font>,
    background_blur_enabled: bool,
    keyline_color: Color,
    background_color: AnimatedProperty<Color>,
    hidden: bool,
    hide_offset: AnimatedProperty<f32>,
    delegate: Option<Box<dyn TabBarDelegate>>,
    bounds: Rect,
}

impl TabBar {
    /// Create a bar showing `items`. Nothing is selected initially.
    ///
    /// # Errors
    ///
    /// Returns the first item that breaks the title/icon versus custom view
    /// rule.
    pub fn new(items: Vec<TabBarItem>, title_state: TitleState) -> Result<Self, TabBarError> {
        let views = build_views(items).map_err(|err| {
            warn!(%err, "rejected tab bar items");
            err
        })?;
        let uncolored = Color::WHITE.with_alpha(0.8);
        let mut bar = Self {
            items: views,
            current_selected_index: None,
            title_state,
            colored: false,
            uncolored_background_color: uncolored,
            inactive_color: Color::gray(0.5, 1.0),
            tint_color: Color::SYSTEM_BLUE,
            font: None,
            background_blur_enabled: true,
            keyline_color: Color::gray(0.9, 1.0),
            background_color: AnimatedProperty::new(uncolored),
            hidden: false,
            hide_offset: AnimatedProperty::new(0.0),
            delegate: None,
            bounds: Rect::default(),
        };
        bar.style_views();
        Ok(bar)
    }

    /// Replace every item. The selection is cleared.
    ///
    /// # Errors
    ///
    /// Rejects invalid items, and items lacking a bar color while colored
    /// mode is on. The current items stay in place on error.
    pub fn set_items(&mut self, items: Vec<TabBarItem>) -> Result<(), TabBarError> {
        let views = build_views(items)
            .and_then(|views| {
                if self.colored {
                    ensure_bar_colors(&views)?;
                }
                Ok(views)
            })
            .map_err(|err| {
                warn!(%err, "rejected tab bar items");
                err
            })?;
        debug!(count = views.len(), "tab bar items replaced");
        self.items = views;
        self.style_views();
        self.layout_views();
        self.select_item(NO_SELECTION, true);
        Ok(())
    }

    /// Select the item at `index`.
    ///
    /// An index outside the item range clears the selection and is stored
    /// as given. Returns the notification sent to the delegate, if any.
    pub fn select_item(&mut self, index: isize, animated: bool) -> Option<TabSelected> {
        let target = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.items.len());
        let Some(target) = target else {
            trace!(index, "selection cleared");
            self.fan_out_selection(None, animated);
            self.current_selected_index = Some(index);
            return None;
        };
        if !self.items[target].item().is_selectable() {
            trace!(index, "item not selectable");
            return None;
        }
        if self.current_selected_index == Some(index) {
            trace!(index, "item already selected");
            return None;
        }
        self.fan_out_selection(Some(target), animated);
        self.current_selected_index = Some(index);
        debug!(index = target, animated, "tab selected");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.tab_selected(target);
        }
        Some(TabSelected { index: target })
    }

    /// Route a tap on the view with `id` into the selection machine.
    pub fn item_tapped(&mut self, id: ItemViewId) -> Option<TabSelected> {
        let position = self.items.iter().position(|view| view.id() == id)?;
        let index = isize::try_from(position).ok()?;
        self.select_item(index, true)
    }

    /// Change the badge text of the item at `index`.
    pub fn change_badge_item(&mut self, index: usize, value: &str) {
        let Some(view) = self.items.get_mut(index) else {
            trace!(index, "no item for badge change");
            return;
        };
        if let Some(badge) = view.item_mut().badge_mut() {
            badge.set_value(value);
        }
        view.set_badge(value);
    }

    /// Slide the bar down by its own height.
    pub fn hide(&mut self) {
        if self.hidden {
            return;
        }
        self.hidden = true;
        self.hide_offset.animate_to(self.bounds.height, HIDE_TIMING);
        debug!("tab bar hidden");
    }

    /// Slide the bar back into place.
    pub fn show(&mut self) {
        if !self.hidden {
            return;
        }
        self.hidden = false;
        self.hide_offset.animate_to(0.0, SHOW_TIMING);
        debug!("tab bar shown");
    }

    /// Switch the title visibility mode and re-lay out every item.
    ///
    /// Items restart from the rest row, so the selected one animates in.
    pub fn set_title_state(&mut self, title_state: TitleState) {
        self.title_state = title_state;
        let ctx = self.context();
        let selected = self.selected_index();
        let mut change = BackgroundChange::Unchanged;
        for (i, view) in self.items.iter_mut().enumerate() {
            view.snap_to_rest(view.bounds(), &ctx);
            let requested = view.set_selected(selected == Some(i), true, &ctx);
            if requested != BackgroundChange::Unchanged {
                change = requested;
            }
        }
        self.apply_background(change);
    }

    /// Color of the selected item's icon and title.
    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
        for view in &mut self.items {
            view.set_tint_color(color);
        }
    }

    /// Color of unselected icons and titles.
    pub fn set_inactive_color(&mut self, color: Color) {
        self.inactive_color = color;
        for view in &mut self.items {
            view.set_inactive_color(color);
        }
    }

    /// Title font; `None` uses the 12pt system font.
    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
        for view in &mut self.items {
            view.set_font(font);
        }
    }

    /// Toggle colored mode, where the background follows the selected item.
    ///
    /// # Errors
    ///
    /// Turning colored mode on fails with [`TabBarError::MissingBarColor`]
    /// when a selectable item has no bar color. Nothing changes in that case.
    pub fn set_colored(&mut self, colored: bool) -> Result<(), TabBarError> {
        if colored {
            ensure_bar_colors(&self.items).map_err(|err| {
                warn!(%err, "rejected colored mode");
                err
            })?;
        }
        self.colored = colored;
        if !colored {
            self.background_color.set(self.uncolored_background_color);
            return Ok(());
        }
        let selected_color = self
            .selected_index()
            .and_then(|i| self.items[i].item().bar_color());
        if let Some(color) = selected_color {
            self.background_color.set(color);
        }
        Ok(())
    }

    /// Background used while colored mode is off.
    pub fn set_uncolored_background_color(&mut self, color: Color) {
        self.uncolored_background_color = color;
        if !self.colored {
            self.background_color.set(color);
        }
    }

    /// Show or hide the translucent backdrop.
    pub fn set_background_blur_enabled(&mut self, enabled: bool) {
        self.background_blur_enabled = enabled;
    }

    /// Color of the 1px line along the top edge.
    pub fn set_keyline_color(&mut self, color: Color) {
        self.keyline_color = color;
    }

    /// Install the selection delegate, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: impl TabBarDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    /// Remove the selection delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Selected position, if a valid item is selected.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.current_selected_index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.items.len())
    }

    /// Raw selection: `None` before the first selection, otherwise the last
    /// accepted index, which may be out of range.
    #[must_use]
    pub const fn current_selected_index(&self) -> Option<isize> {
        self.current_selected_index
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item views, left to right.
    #[must_use]
    pub fn item_views(&self) -> &[TabBarItemView] {
        &self.items
    }

    /// Current title visibility mode.
    #[must_use]
    pub const fn title_state(&self) -> TitleState {
        self.title_state
    }

    /// Whether colored mode is on.
    #[must_use]
    pub const fn is_colored(&self) -> bool {
        self.colored
    }

    /// Selected item color.
    #[must_use]
    pub const fn tint_color(&self) -> Color {
        self.tint_color
    }

    /// Unselected item color.
    #[must_use]
    pub const fn inactive_color(&self) -> Color {
        self.inactive_color
    }

    /// Title font override.
    #[must_use]
    pub const fn font(&self) -> Option<Font> {
        self.font
    }

    /// Background used outside colored mode.
    #[must_use]
    pub const fn uncolored_background_color(&self) -> Color {
        self.uncolored_background_color
    }

    /// Background color right now, possibly mid-animation.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color.value()
    }

    /// Whether the backdrop is drawn.
    #[must_use]
    pub const fn is_background_blur_enabled(&self) -> bool {
        self.background_blur_enabled
    }

    /// Keyline color.
    #[must_use]
    pub const fn keyline_color(&self) -> Color {
        self.keyline_color
    }

    /// Whether the bar is hidden or hiding.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Current downward displacement from hiding.
    #[must_use]
    pub fn hide_offset(&self) -> f32 {
        self.hide_offset.value()
    }

    /// Whether anything in the bar is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.background_color.is_animating()
            || self.hide_offset.is_animating()
            || self.items.iter().any(TabBarItemView::is_animating)
    }

    const fn context(&self) -> BarContext {
        BarContext {
            title_state: self.title_state,
            colored: self.colored,
        }
    }

    fn style_views(&mut self) {
        for view in &mut self.items {
            view.set_tint_color(self.tint_color);
            view.set_inactive_color(self.inactive_color);
            view.set_font(self.font);
        }
    }

    fn layout_views(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let ctx = self.context();
        let width = self.bounds.width / self.items.len() as f32;
        for (i, view) in self.items.iter_mut().enumerate() {
            let frame = Rect::new(
                (i as f32).mul_add(width, self.bounds.x),
                self.bounds.y,
                width,
                self.bounds.height,
            );
            view.set_frames(frame, &ctx);
        }
    }

    fn fan_out_selection(&mut self, selected: Option<usize>, animated: bool) {
        let ctx = self.context();
        let previous = self.selected_index();
        let mut change = BackgroundChange::Unchanged;
        for (i, view) in self.items.iter_mut().enumerate() {
            view.de_selected(previous == Some(i), animated, &ctx);
            let requested = view.set_selected(selected == Some(i), animated, &ctx);
            if requested != BackgroundChange::Unchanged {
                change = requested;
            }
        }
        self.apply_background(change);
    }

    fn apply_background(&mut self, change: BackgroundChange) {
        match change {
            BackgroundChange::Unchanged => {}
            BackgroundChange::Animate(color) => {
                self.background_color.animate_to(color, BACKGROUND_TIMING);
            }
            BackgroundChange::Set(color) => self.background_color.set(color),
            BackgroundChange::Reset => {
                if self.background_color.target() != self.uncolored_background_color {
                    self.background_color.set(self.uncolored_background_color);
                }
            }
        }
    }
}

fn build_views(items: Vec<TabBarItem>) -> Result<Vec<TabBarItemView>, TabBarError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| TabBarItemView::new(item, index))
        .collect()
}

fn ensure_bar_colors(views: &[TabBarItemView]) -> Result<(), TabBarError> {
    let missing = views
        .iter()
        .position(|view| view.item().is_selectable() && view.item().bar_color().is_none());
    match missing {
        Some(index) => Err(TabBarError::MissingBarColor { index }),
        None => Ok(()),
    }
}

/// Move pointer positions up by `dy`, undoing the hide offset.
fn untranslate(event: &Event, dy: f32) -> Event {
    let mut event = event.clone();
    match &mut event {
        Event::MouseDown { position, .. }
        | Event::TouchEnd { position, .. }
        | Event::GestureTap { position, .. } => position.y -= dy,
    }
    event
}

impl fmt::Debug for TabBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBar")
            .field("items", &self.items)
            .field("current_selected_index", &self.current_selected_index)
            .field("title_state", &self.title_state)
            .field("colored", &self.colored)
            .field("hidden", &self.hidden)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Widget for TabBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.items.len() as f32 * PREFERRED_ITEM_WIDTH
        };
        constraints.constrain(Size::new(width, BAR_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.layout_views();
        if self.hidden && self.hide_offset.target() != bounds.height {
            if self.hide_offset.is_animating() {
                self.hide_offset.animate_to(bounds.height, HIDE_TIMING);
            } else {
                self.hide_offset.set(bounds.height);
            }
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_layer(Transform2D::translate(0.0, self.hide_offset.value()), 1.0);
        canvas.fill_rect(self.bounds, self.background_color.value());
        if self.background_blur_enabled {
            canvas.fill_rect(self.bounds, Color::gray(0.97, 0.6));
        }
        let keyline = Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, KEYLINE_HEIGHT);
        canvas.fill_rect(keyline, self.keyline_color);
        for view in &self.items {
            view.paint(canvas);
        }
        canvas.pop_layer();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let local = untranslate(event, self.hide_offset.value());
        let tapped = self
            .items
            .iter_mut()
            .find_map(|view| view.event(&local)?.downcast::<ItemViewId>().ok())?;
        self.item_tapped(*tapped)
            .map(|selected| Box::new(selected) as Box<dyn Any + Send>)
    }

    fn tick(&mut self, dt: f64) {
        self.background_color.tick(dt);
        self.hide_offset.tick(dt);
        for view in &mut self.items {
            view.tick(dt);
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TabList
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
