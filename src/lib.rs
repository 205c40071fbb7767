//! Plinko - a falling-ball peg board with slot payouts
//!
//! Core modules:
//! - `sim`: Simulation (board geometry, bodies, peg collisions, payouts, effects)
//! - `game`: Frame loop wiring the simulation to its collaborators
//! - `renderer`: Draw-primitive interface and board/entity drawing
//! - `audio`: Payout sound cues with single-voice preemption
//! - `platform`: Balance display collaborator
//! - `tuning`: Data-driven board and physics constants

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, SessionError};
pub use game::Game;
pub use tuning::Tuning;

/// Default board and physics constants (per-frame units)
pub mod consts {
    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: f32 = 860.0;
    pub const BOARD_HEIGHT: f32 = 800.0;
    /// Height of the slot strip along the bottom edge; balls land when they reach it
    pub const SLOT_STRIP_HEIGHT: f32 = 30.0;

    /// Peg pyramid layout
    pub const PEG_ROWS: u32 = 17;
    pub const PEG_SPACING_X: f32 = 43.0;
    pub const PEG_SPACING_Y: f32 = 43.0;
    pub const PEG_START_Y: f32 = 60.0;
    pub const PEG_RADIUS: f32 = 4.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPAWN_Y: f32 = 30.0;
    /// Downward acceleration added to vertical velocity every frame
    pub const GRAVITY: f32 = 0.2;
    /// Fraction of horizontal speed kept when bouncing off a side wall
    pub const WALL_RESTITUTION: f32 = 0.6;

    /// Peg contact response
    pub const PEG_REPEL: f32 = 2.0;
    pub const PEG_DAMPING: f32 = 0.7;
    /// Below this |bias| a ball gets random jitter instead of steering
    pub const JITTER_THRESHOLD: f32 = 0.05;
    pub const JITTER_AMPLITUDE: f32 = 1.0;
    /// Steering strength outside any milestone tier
    pub const DEFAULT_BIAS_STRENGTH: f32 = 14.0;

    /// Landing effects
    pub const BURST_PARTICLES: usize = 20;
    pub const PARTICLE_SPEED: f32 = 6.0;
    pub const PARTICLE_MIN_RADIUS: f32 = 2.0;
    pub const PARTICLE_RADIUS_SPREAD: f32 = 3.0;
    pub const PARTICLE_FADE: f32 = 0.02;
    pub const TEXT_RISE: f32 = 1.0;
    pub const TEXT_FADE: f32 = 0.02;

    /// Slot multipliers, edges to center to edges
    pub const SLOT_MULTIPLIERS: [f64; 17] = [
        1000.0, 130.0, 26.0, 9.0, 4.0, 2.0, 0.2, 0.2, 0.2, 0.2, 0.2, 2.0, 4.0, 9.0, 26.0, 130.0,
        1000.0,
    ];
}

/// Format a money amount the way the balance readout shows it (2 decimals)
#[inline]
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Label drawn for a multiplier (`x1000`, `x0.2`)
#[inline]
pub fn multiplier_label(multiplier: f64) -> String {
    format!("x{}", multiplier)
}
