//! Ball/peg contact detection and response
//!
//! Contacts are soft: a hit changes the ball's velocity only, never its
//! position, so a ball may still overlap a peg right after resolution and be
//! pushed again next frame. Every peg is tested in board order with no early
//! exit; several contacts in one frame accumulate, and each one damps the ball.

use glam::Vec2;
use rand::Rng;

use super::body::Ball;
use super::board::Peg;
use crate::tuning::CollisionTuning;

/// Geometry of a ball/peg overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Angle from the peg center to the ball center (radians)
    pub angle: f32,
    /// Unit vector along `angle`, pointing away from the peg
    pub normal: Vec2,
}

/// Check a ball against one peg
pub fn ball_peg_contact(ball_pos: Vec2, ball_radius: f32, peg: &Peg) -> Option<Contact> {
    let offset = ball_pos - peg.pos;
    let dist = offset.length();
    let min_dist = ball_radius + peg.radius;

    if dist < min_dist {
        let angle = offset.y.atan2(offset.x);
        Some(Contact {
            angle,
            normal: Vec2::from_angle(angle),
        })
    } else {
        None
    }
}

/// Horizontal drift from the board center, normalized to [-1, 1]
#[inline]
pub fn center_bias(x: f32, board_width: f32) -> f32 {
    let center = board_width / 2.0;
    (x - center) / center
}

/// Resolve every peg contact for one ball this frame.
///
/// `bias_strength` comes from the session's drop-count schedule. Returns the
/// number of pegs the ball touched.
pub fn resolve_peg_contacts(
    ball: &mut Ball,
    pegs: &[Peg],
    board_width: f32,
    bias_strength: f32,
    tuning: &CollisionTuning,
    rng: &mut impl Rng,
) -> usize {
    if ball.stopped {
        return 0;
    }

    let mut contacts = 0;
    for peg in pegs {
        let Some(contact) = ball_peg_contact(ball.pos, ball.radius, peg) else {
            continue;
        };
        contacts += 1;

        ball.vel += contact.normal * tuning.repel;

        let bias = center_bias(ball.pos.x, board_width);
        if bias.abs() < tuning.jitter_threshold {
            // Near the center: nudge randomly so a ball can't balance on a peg
            ball.vel.x += (rng.random::<f32>() - 0.5) * tuning.jitter_amplitude;
        } else {
            ball.vel.x -= bias * bias.abs() * bias_strength;
        }

        ball.vel *= tuning.damping;
    }

    contacts
}
