//! Core types and traits for the minitab tab bar widget.
//!
//! This crate provides the foundation the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Offset`]
//! - Color representation: [`Color`] with hex parsing and interpolation
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - The [`Widget`] / [`Canvas`] pair and the [`RecordingCanvas`]
//! - Property animation: [`AnimatedProperty`], [`Tween`], [`Easing`]

mod animation;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{AnimatedProperty, Easing, Interpolate, TickOutcome, Timing, Tween};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, Transform2D};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Offset, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, Font, FontStyle, FontWeight, LayoutResult, TextAlign, TextStyle,
    TypeId, Widget,
};
