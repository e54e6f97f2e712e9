//! Rendering module
//!
//! The game never talks to a concrete canvas; it issues draw calls against a
//! [`RenderSurface`]. Entities are drawn as filled triangles, text for the HUD
//! and game-over overlay.

pub mod scene;
pub mod shapes;

pub use scene::draw_frame;
pub use shapes::entity_triangle;

use glam::Vec2;

use crate::sim::Color;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

/// Font and placement for a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Color,
}

/// A drawing target
pub trait RenderSurface {
    /// Wipe the whole surface
    fn clear(&mut self);
    /// Fill the triangle spanned by three points
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color);
    /// Draw a text string anchored at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Triangle { points: [Vec2; 3], color: Color },
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// Surface that keeps the draw calls of the latest frame
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Frames started since creation
    pub frames: u64,
}

impl RecordingSurface {
    /// All text drawn this frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn triangle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Triangle { .. }))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }
}
