//! Layout constraints handed down from parent to child during measurement.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Box constraints: the range of sizes a widget may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints with zero minimum and the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Constraints with no upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Clamp a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check if width is bounded.
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_loose() {
        let c = Constraints::loose(Size::new(100.0, 200.0));
        assert_eq!(c.min_width, 0.0);
        assert_eq!(c.max_height, 200.0);
    }

    #[test]
    fn test_constraints_constrain() {
        let c = Constraints::new(50.0, 150.0, 50.0, 150.0);
        assert_eq!(c.constrain(Size::new(100.0, 100.0)), Size::new(100.0, 100.0));
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(50.0, 50.0));
        assert_eq!(c.constrain(Size::new(200.0, 200.0)), Size::new(150.0, 150.0));
    }

    #[test]
    fn test_constraints_has_bounded_width() {
        assert!(Constraints::new(0.0, 100.0, 0.0, f32::INFINITY).has_bounded_width());
        assert!(!Constraints::unbounded().has_bounded_width());
    }
}
