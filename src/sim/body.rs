//! Moving bodies: balls, landing particles and floating score text
//!
//! All updates advance exactly one frame; velocities are in pixels per frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::{BallTuning, EffectsTuning};

/// A dropped ball carrying its wager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Set once the ball has landed and been paid out; never cleared
    pub stopped: bool,
    /// Wager that created this ball (always > 0)
    pub bet: f64,
}

impl Ball {
    /// A ball at rest at `pos`
    pub fn new(id: u32, pos: Vec2, radius: f32, bet: f64) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            stopped: false,
            bet,
        }
    }

    /// Apply gravity, integrate, and bounce off the side walls
    pub fn update(&mut self, tuning: &BallTuning, board_width: f32) {
        if self.stopped {
            return;
        }

        self.vel.y += tuning.gravity;
        self.pos += self.vel;

        let min_x = self.radius;
        let max_x = board_width - self.radius;
        if self.pos.x < min_x || self.pos.x > max_x {
            self.vel.x *= -tuning.wall_restitution;
            self.pos.x = self.pos.x.clamp(min_x, max_x);
        }
    }

    /// Mark the ball as landed. Returns false if it already was.
    pub fn stop(&mut self) -> bool {
        let was_moving = !self.stopped;
        self.stopped = true;
        was_moving
    }
}

/// A fading spark from a landing burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Opacity, 1 at spawn, removed once <= 0
    pub alpha: f32,
    /// Hue in degrees (drawn at full saturation, 60% lightness)
    pub hue: f32,
    fade: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, hue: f32, fade: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            alpha: 1.0,
            hue,
            fade,
        }
    }

    /// Random spark at `pos`
    pub fn spawn(pos: Vec2, tuning: &EffectsTuning, rng: &mut impl Rng) -> Self {
        let radius = rng.random::<f32>() * tuning.particle_radius_spread + tuning.particle_min_radius;
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * tuning.particle_speed,
            (rng.random::<f32>() - 0.5) * tuning.particle_speed,
        );
        let hue = rng.random::<f32>() * 360.0;
        Self::new(pos, vel, radius, hue, tuning.particle_fade)
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.alpha -= self.fade;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

/// `x26`-style label rising from a landing point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub alpha: f32,
    rise: f32,
    fade: f32,
}

impl FloatingText {
    pub fn new(pos: Vec2, text: impl Into<String>, tuning: &EffectsTuning) -> Self {
        Self {
            pos,
            text: text.into(),
            alpha: 1.0,
            rise: tuning.text_rise,
            fade: tuning.text_fade,
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.rise;
        self.alpha -= self.fade;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}
