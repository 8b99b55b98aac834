//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, Transform2D};
use crate::geometry::CornerRadius;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Rect};

/// An open layer: commands drawn since the matching `push_layer`.
#[derive(Debug)]
struct Layer {
    children: Vec<DrawCommand>,
    transform: Transform2D,
    alpha: f32,
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used by tests to verify what was painted, and by hosts that forward the
/// command list to a real renderer.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    layers: Vec<Layer>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.layers.clear();
        std::mem::take(&mut self.commands)
    }

    /// Every recorded command including those nested in layers, depth first.
    #[must_use]
    pub fn flattened(&self) -> Vec<&DrawCommand> {
        fn collect<'a>(command: &'a DrawCommand, out: &mut Vec<&'a DrawCommand>) {
            out.push(command);
            if let DrawCommand::Group { children, .. } = command {
                for child in children {
                    collect(child, out);
                }
            }
        }

        let mut out = Vec::new();
        for command in &self.commands {
            collect(command, &mut out);
        }
        out
    }

    /// Text runs recorded anywhere in the tree.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.flattened()
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of layers still open.
    #[must_use]
    pub fn layer_depth(&self) -> usize {
        self.layers.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.layers.is_empty()
    }

    fn push(&mut self, command: DrawCommand) {
        match self.layers.last_mut() {
            Some(layer) => layer.children.push(command),
            None => self.commands.push(command),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::uniform(radius),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, style: &TextStyle) {
        self.push(DrawCommand::Text {
            content: text.to_string(),
            bounds,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, source: &str, bounds: Rect, tint: Option<Color>) {
        self.push(DrawCommand::Image {
            source: source.to_string(),
            bounds,
            tint,
        });
    }

    fn push_layer(&mut self, transform: Transform2D, alpha: f32) {
        self.layers.push(Layer {
            children: Vec::new(),
            transform,
            alpha: alpha.clamp(0.0, 1.0),
        });
    }

    fn pop_layer(&mut self) {
        if let Some(layer) = self.layers.pop() {
            self.push(DrawCommand::Group {
                children: layer.children,
                transform: layer.transform,
                alpha: layer.alpha,
            });
        }
    }
}
