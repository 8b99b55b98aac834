//! Input events delivered to widgets by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Tap gesture recognized by the host
    GestureTap {
        /// Position
        position: Point,
        /// Number of taps (1 = single, 2 = double)
        count: u8,
    },
}

impl Event {
    /// Position of a completed tap, if this event is one.
    ///
    /// A left mouse press, the end of a touch and a recognized tap gesture
    /// all count as taps.
    #[must_use]
    pub fn tap_position(&self) -> Option<Point> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. }
            | Self::GestureTap { position, .. } => Some(*position),
            Self::MouseDown { .. } => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TouchId(pub u32);

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_position_left_click() {
        let e = Event::MouseDown {
            position: Point::new(10.0, 20.0),
            button: MouseButton::Left,
        };
        assert_eq!(e.tap_position(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_tap_position_ignores_right_click() {
        let e = Event::MouseDown {
            position: Point::new(10.0, 20.0),
            button: MouseButton::Right,
        };
        assert_eq!(e.tap_position(), None);
    }

    #[test]
    fn test_tap_position_touch_and_gesture() {
        let touch = Event::TouchEnd {
            id: TouchId(1),
            position: Point::new(1.0, 2.0),
        };
        let tap = Event::GestureTap {
            position: Point::new(3.0, 4.0),
            count: 1,
        };
        assert_eq!(touch.tap_position(), Some(Point::new(1.0, 2.0)));
        assert_eq!(tap.tap_position(), Some(Point::new(3.0, 4.0)));
        assert_eq!(
            Event::MouseDown {
                position: Point::ORIGIN,
                button: MouseButton::Middle,
            }
            .tap_position(),
            None
        );
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = Event::GestureTap {
            position: Point::new(5.0, 6.0),
            count: 2,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
