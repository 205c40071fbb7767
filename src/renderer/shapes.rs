//! Board and entity drawing

use glam::Vec2;

use super::{BALL_ORANGE, BLACK, Canvas, Color, TextStyle, WHITE};
use crate::multiplier_label;
use crate::sim::{Ball, Board, FloatingText, Particle};

/// Gap between neighbouring slot tiles
const SLOT_GAP: f32 = 5.0;
const SLOT_CORNER_RADIUS: f32 = 10.0;
/// Labels sit this far above the bottom edge
const SLOT_LABEL_INSET: f32 = 10.0;
const SCORE_YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

/// Slot tile color: red-orange at the center shading to yellow at the edges
pub fn slot_color(index: usize, slot_count: usize) -> Color {
    let center = (slot_count.saturating_sub(1)) as f32 / 2.0;
    let distance = if center > 0.0 {
        (index as f32 - center).abs() / center
    } else {
        0.0
    };
    let green = (10.0 + distance * (255.0 - 50.0)).floor();
    [192.0 / 255.0, green / 255.0, 43.0 / 255.0, 1.0]
}

/// HSL (hue degrees, saturation/lightness in [0, 1]) to RGB
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}

/// Static board: pegs, then slot tiles with their multiplier labels
pub fn draw_board(canvas: &mut dyn Canvas, board: &Board) {
    for peg in &board.pegs {
        canvas.circle(peg.pos, peg.radius, WHITE);
    }

    let slots = &board.slots;
    let tile_width = slots.slot_width() - SLOT_GAP;
    let strip_height = board.slot_strip_height();
    for (i, &multiplier) in slots.multipliers().iter().enumerate() {
        let x = slots.slot_left(i) + SLOT_GAP / 2.0;
        canvas.rounded_rect(
            Vec2::new(x, board.landing_y),
            Vec2::new(tile_width, strip_height),
            SLOT_CORNER_RADIUS,
            slot_color(i, slots.len()),
        );
        canvas.text(
            Vec2::new(x + tile_width / 2.0, board.height - SLOT_LABEL_INSET),
            &multiplier_label(multiplier),
            TextStyle::SLOT_LABEL,
            BLACK,
        );
    }
}

/// Balls still falling; landed balls are not drawn
pub fn draw_balls(canvas: &mut dyn Canvas, balls: &[Ball]) {
    for ball in balls.iter().filter(|b| !b.stopped) {
        canvas.circle(ball.pos, ball.radius, BALL_ORANGE);
    }
}

pub fn draw_texts(canvas: &mut dyn Canvas, texts: &[FloatingText]) {
    for text in texts {
        let [r, g, b] = SCORE_YELLOW;
        canvas.text(text.pos, &text.text, TextStyle::SCORE, [r, g, b, text.alpha.max(0.0)]);
    }
}

pub fn draw_particles(canvas: &mut dyn Canvas, particles: &[Particle]) {
    for particle in particles {
        let [r, g, b] = hsl_to_rgb(particle.hue, 1.0, 0.6);
        canvas.circle(particle.pos, particle.radius, [r, g, b, particle.alpha.max(0.0)]);
    }
}
