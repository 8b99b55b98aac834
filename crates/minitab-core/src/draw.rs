//! Draw commands: the primitives all painting reduces to.

use crate::geometry::{CornerRadius, Point, Rect};
use crate::widget::TextStyle;
use crate::Color;
use serde::{Deserialize, Serialize};

/// 2D affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transformation.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Scale about a pivot point rather than the origin.
    #[must_use]
    pub fn scale_about(pivot: Point, sx: f32, sy: f32) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::scale(sx, sy))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    /// Chain transforms: first apply self, then apply other.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0].mul_add(b[0], a[2] * b[1]),
                a[1].mul_add(b[0], a[3] * b[1]),
                a[0].mul_add(b[2], a[2] * b[3]),
                a[1].mul_add(b[2], a[3] * b[3]),
                a[0].mul_add(b[4], a[2].mul_add(b[5], a[4])),
                a[1].mul_add(b[4], a[3].mul_add(b[5], a[5])),
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0].mul_add(point.x, m[2].mul_add(point.y, m[4])),
            m[1].mul_add(point.x, m[3].mul_add(point.y, m[5])),
        )
    }
}

/// Drawing primitive recorded by [`crate::RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        color: Color,
    },

    /// Text run
    Text {
        /// Text content
        content: String,
        /// Bounds the text is laid out in
        bounds: Rect,
        /// Text style
        style: TextStyle,
    },

    /// Image asset, optionally drawn as a single-color template
    Image {
        /// Asset reference
        source: String,
        /// Destination bounds
        bounds: Rect,
        /// Template tint, `None` to draw original pixels
        tint: Option<Color>,
    },

    /// Group of commands with transform and opacity
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
        /// Opacity multiplier (0.0 - 1.0)
        alpha: f32,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            color,
        }
    }
}
