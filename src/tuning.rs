//! Data-driven board and physics constants
//!
//! Loaded from a JSON file when one is given; every missing field falls back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::SoundClip;
use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::bias::BiasSchedule;

/// Board geometry: dimensions, peg pyramid and slot table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardTuning {
    pub width: f32,
    pub height: f32,
    pub rows: u32,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub start_y: f32,
    pub peg_radius: f32,
    pub slot_strip_height: f32,
    /// One multiplier per slot, left to right
    pub multipliers: Vec<f64>,
}

impl Default for BoardTuning {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            rows: PEG_ROWS,
            spacing_x: PEG_SPACING_X,
            spacing_y: PEG_SPACING_Y,
            start_y: PEG_START_Y,
            peg_radius: PEG_RADIUS,
            slot_strip_height: SLOT_STRIP_HEIGHT,
            multipliers: SLOT_MULTIPLIERS.to_vec(),
        }
    }
}

/// Ball body constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    pub spawn_y: f32,
    pub gravity: f32,
    pub wall_restitution: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            spawn_y: BALL_SPAWN_Y,
            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
        }
    }
}

/// Peg contact response and center steering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    pub repel: f32,
    pub damping: f32,
    pub jitter_threshold: f32,
    pub jitter_amplitude: f32,
    pub bias: BiasSchedule,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            repel: PEG_REPEL,
            damping: PEG_DAMPING,
            jitter_threshold: JITTER_THRESHOLD,
            jitter_amplitude: JITTER_AMPLITUDE,
            bias: BiasSchedule::default(),
        }
    }
}

/// Landing particle burst and floating score text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsTuning {
    pub burst_particles: usize,
    pub particle_speed: f32,
    pub particle_min_radius: f32,
    pub particle_radius_spread: f32,
    pub particle_fade: f32,
    pub text_rise: f32,
    pub text_fade: f32,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        Self {
            burst_particles: BURST_PARTICLES,
            particle_speed: PARTICLE_SPEED,
            particle_min_radius: PARTICLE_MIN_RADIUS,
            particle_radius_spread: PARTICLE_RADIUS_SPREAD,
            particle_fade: PARTICLE_FADE,
            text_rise: TEXT_RISE,
            text_fade: TEXT_FADE,
        }
    }
}

/// Complete tuning record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board: BoardTuning,
    pub ball: BallTuning,
    pub collision: CollisionTuning,
    pub effects: EffectsTuning,
    /// Payout sound table (multiplier -> clip)
    pub sounds: Vec<SoundClip>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board: BoardTuning::default(),
            ball: BallTuning::default(),
            collision: CollisionTuning::default(),
            effects: EffectsTuning::default(),
            sounds: SoundClip::default_table(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the board or effects degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if !(board.width > 0.0 && board.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "board dimensions must be positive, got {}x{}",
                board.width, board.height
            )));
        }
        if board.multipliers.is_empty() {
            return Err(ConfigError::Invalid("slot table is empty".into()));
        }
        if board.multipliers.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ConfigError::Invalid(
                "slot multipliers must be finite and non-negative".into(),
            ));
        }
        if board.slot_strip_height < 0.0 || board.slot_strip_height >= board.height {
            return Err(ConfigError::Invalid(format!(
                "slot strip height {} does not fit a board of height {}",
                board.slot_strip_height, board.height
            )));
        }
        if !(self.ball.radius > 0.0) || self.ball.radius * 2.0 > board.width {
            return Err(ConfigError::Invalid(format!(
                "ball radius {} does not fit the board",
                self.ball.radius
            )));
        }
        if !(self.effects.particle_fade > 0.0 && self.effects.text_fade > 0.0) {
            return Err(ConfigError::Invalid(
                "effect fade rates must be positive".into(),
            ));
        }
        Ok(())
    }
}
