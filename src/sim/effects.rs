//! Transient landing effects
//!
//! Particles and floating texts live until their opacity runs out; removal
//! from the collection is their only terminal state.

use glam::Vec2;
use rand::Rng;

use super::body::{FloatingText, Particle};
use crate::tuning::EffectsTuning;

/// Live particles and floating score texts
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst of random sparks at `pos`
    pub fn spawn_burst(&mut self, pos: Vec2, tuning: &EffectsTuning, rng: &mut impl Rng) {
        self.particles.reserve(tuning.burst_particles);
        for _ in 0..tuning.burst_particles {
            self.particles.push(Particle::spawn(pos, tuning, rng));
        }
    }

    pub fn spawn_text(&mut self, pos: Vec2, text: impl Into<String>, tuning: &EffectsTuning) {
        self.texts.push(FloatingText::new(pos, text, tuning));
    }

    /// Advance floating texts one frame and drop the faded ones
    pub fn update_texts(&mut self) {
        for text in &mut self.texts {
            text.update();
        }
        self.texts.retain(FloatingText::is_alive);
    }

    /// Advance particles one frame and drop the faded ones
    pub fn update_particles(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn update(&mut self) {
        self.update_texts();
        self.update_particles();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.texts.is_empty()
    }
}
