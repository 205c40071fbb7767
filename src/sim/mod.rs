//! Board simulation
//!
//! All gameplay logic lives here:
//! - One fixed step per frame (velocities in pixels/frame)
//! - Session-owned RNG, no ambient globals
//! - Pegs resolved in board order
//! - No rendering or platform dependencies

pub mod bias;
pub mod board;
pub mod body;
pub mod collision;
pub mod effects;
pub mod payout;
pub mod state;
pub mod tick;

pub use bias::{BiasSchedule, BiasTier};
pub use board::{Board, Peg, SlotTable};
pub use body::{Ball, FloatingText, Particle};
pub use collision::{Contact, ball_peg_contact, center_bias, resolve_peg_contacts};
pub use effects::Effects;
pub use payout::{Landing, multiplier_at, settle, slot_index};
pub use state::{Session, parse_amount};
pub use tick::{advance_balls, tick};
