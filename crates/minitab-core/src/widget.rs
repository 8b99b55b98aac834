//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self and children within allocated bounds
//! 3. **Paint**: Emit draw calls through a [`Canvas`]
//!
//! Input arrives through [`Widget::event`], which may return a message for the
//! host to downcast.
//!
//! # Examples
//!
//! ```
//! use minitab_core::{Font, FontWeight, TextStyle, Color, TypeId};
//!
//! let font = Font::system(12.0);
//! let style = TextStyle::from_font(&font, Color::BLACK);
//! assert_eq!(style.size, 12.0);
//! assert_eq!(style.weight, FontWeight::Normal);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::Transform2D;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self and children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance running animations by `dt` seconds.
    fn tick(&mut self, _dt: f64) {}

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw text inside `bounds`, aligned per `style`.
    fn draw_text(&mut self, text: &str, bounds: Rect, style: &TextStyle);

    /// Draw an image asset; with `tint` set the image is used as a mask.
    fn draw_image(&mut self, source: &str, bounds: Rect, tint: Option<Color>);

    /// Begin a layer: subsequent draws get `transform` and `alpha` applied.
    fn push_layer(&mut self, transform: Transform2D, alpha: f32);

    /// End the most recent layer.
    fn pop_layer(&mut self);
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Align to the left edge
    #[default]
    Start,
    /// Center in the bounds
    Center,
    /// Align to the right edge
    End,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
    /// Horizontal alignment
    pub align: TextAlign,
}

impl TextStyle {
    /// Build a style from a font and a color.
    #[must_use]
    pub const fn from_font(font: &Font, color: Color) -> Self {
        Self {
            size: font.size,
            color,
            weight: font.weight,
            style: font.style,
            align: TextAlign::Start,
        }
    }

    /// Same style with a different alignment.
    #[must_use]
    pub const fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from_font(&Font::default(), Color::BLACK)
    }
}

/// A font selection: size, weight and slant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Point size
    pub size: f32,
    /// Font weight
    #[serde(default = "default_weight")]
    pub weight: FontWeight,
    /// Font style
    #[serde(default = "default_style")]
    pub style: FontStyle,
}

const fn default_weight() -> FontWeight {
    FontWeight::Normal
}

const fn default_style() -> FontStyle {
    FontStyle::Normal
}

impl Font {
    /// The platform's regular system font at `size` points.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Normal style
    Normal,
    /// Italic style
    Italic,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Image
    Image,
    /// Tab
    Tab,
    /// Tab list
    TabList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_text_style_from_font() {
        let font = Font {
            weight: FontWeight::Bold,
            ..Font::system(12.0)
        };
        let style = TextStyle::from_font(&font, Color::RED).aligned(TextAlign::Center);
        assert_eq!(style.size, 12.0);
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.color, Color::RED);
        assert_eq!(style.align, TextAlign::Center);
    }

    #[test]
    fn test_font_deserialize_defaults() {
        let font: Font = serde_json::from_str(r#"{"size": 14.0}"#).unwrap();
        assert_eq!(font, Font::system(14.0));

        let bold: Font = serde_json::from_str(r#"{"size": 10.0, "weight": "bold"}"#).unwrap();
        assert_eq!(bold.weight, FontWeight::Bold);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }
}
