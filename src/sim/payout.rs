//! Landing detection and slot payout

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Ball;
use super::board::{Board, SlotTable};

/// Result of settling one landed ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    pub ball_id: u32,
    pub pos: Vec2,
    /// `None` when the ball ended outside every slot
    pub slot: Option<usize>,
    pub multiplier: f64,
    pub bet: f64,
    pub payout: f64,
}

impl Landing {
    /// Balance change over the ball's whole life (stake taken at drop time)
    #[inline]
    pub fn net(&self) -> f64 {
        self.payout - self.bet
    }
}

/// Slot under horizontal position `x`: `floor(x / slot_width)`, if in range
pub fn slot_index(x: f32, slots: &SlotTable) -> Option<usize> {
    let index = (x / slots.slot_width()).floor();
    if index >= 0.0 && (index as usize) < slots.len() {
        Some(index as usize)
    } else {
        None
    }
}

/// Multiplier paid for a ball ending at `x`; 0 outside the table
pub fn multiplier_at(x: f32, slots: &SlotTable) -> f64 {
    slot_index(x, slots)
        .and_then(|i| slots.multiplier(i))
        .unwrap_or(0.0)
}

/// Whether a still-moving ball has reached the slot strip
#[inline]
pub fn has_landed(ball: &Ball, board: &Board) -> bool {
    !ball.stopped && ball.pos.y >= board.landing_y
}

/// Stop a landed ball and credit its payout to `balance`.
///
/// Returns `None` if the ball has not landed or was already settled, so a
/// ball is paid at most once.
pub fn settle(ball: &mut Ball, board: &Board, balance: &mut f64) -> Option<Landing> {
    if !has_landed(ball, board) {
        return None;
    }
    ball.stop();

    let slot = slot_index(ball.pos.x, &board.slots);
    let multiplier = slot.and_then(|i| board.slots.multiplier(i)).unwrap_or(0.0);
    let payout = ball.bet * multiplier;
    *balance += payout;

    Some(Landing {
        ball_id: ball.id,
        pos: ball.pos,
        slot,
        multiplier,
        bet: ball.bet,
        payout,
    })
}
