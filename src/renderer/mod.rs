//! Rendering interface
//!
//! The host supplies a [`Canvas`] that paints primitives; `shapes` turns the
//! board and session into primitive calls.

pub mod shapes;

use glam::Vec2;

pub use shapes::{draw_balls, draw_board, draw_particles, draw_texts, hsl_to_rgb, slot_color};

/// RGBA, each channel in [0, 1]
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
/// #f39c12
pub const BALL_ORANGE: Color = [243.0 / 255.0, 156.0 / 255.0, 18.0 / 255.0, 1.0];

/// Text placement and weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    /// Centered on the anchor instead of starting at it
    pub centered: bool,
}

impl TextStyle {
    pub const SLOT_LABEL: TextStyle = TextStyle {
        size: 12.0,
        bold: true,
        centered: true,
    };
    pub const SCORE: TextStyle = TextStyle {
        size: 18.0,
        bold: false,
        centered: false,
    };
}

/// Draw primitives; implementations are assumed to always succeed
pub trait Canvas {
    fn clear(&mut self);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn rounded_rect(&mut self, origin: Vec2, size: Vec2, corner_radius: f32, color: Color);
    fn text(&mut self, anchor: Vec2, text: &str, style: TextStyle, color: Color);
}
