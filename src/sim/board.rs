//! Static board geometry: peg pyramid and slot table
//!
//! Built once from [`BoardTuning`] and shared read-only by every ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::BoardTuning;

/// A fixed circular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    pub pos: Vec2,
    pub radius: f32,
}

impl Peg {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// Equal-width scoring slots along the bottom edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotTable {
    multipliers: Vec<f64>,
    slot_width: f32,
}

impl SlotTable {
    pub fn new(multipliers: Vec<f64>, board_width: f32) -> Self {
        let slot_width = board_width / multipliers.len().max(1) as f32;
        Self {
            multipliers,
            slot_width,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    #[inline]
    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }

    /// Multiplier of a slot, `None` outside the table
    #[inline]
    pub fn multiplier(&self, index: usize) -> Option<f64> {
        self.multipliers.get(index).copied()
    }

    /// Left edge x of a slot
    #[inline]
    pub fn slot_left(&self, index: usize) -> f32 {
        index as f32 * self.slot_width
    }
}

/// The whole board: pegs, slots and outer dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    /// Balls whose y reaches this line have landed
    pub landing_y: f32,
    /// Pegs in row-major order; collision resolution follows this order
    pub pegs: Vec<Peg>,
    pub slots: SlotTable,
}

impl Board {
    pub fn new(tuning: &BoardTuning) -> Self {
        let pegs = pyramid_pegs(tuning);
        log::debug!(
            "Board {}x{}: {} pegs, {} slots",
            tuning.width,
            tuning.height,
            pegs.len(),
            tuning.multipliers.len()
        );
        Self {
            width: tuning.width,
            height: tuning.height,
            landing_y: tuning.height - tuning.slot_strip_height,
            pegs,
            slots: SlotTable::new(tuning.multipliers.clone(), tuning.width),
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Height of the slot strip drawn below `landing_y`
    #[inline]
    pub fn slot_strip_height(&self) -> f32 {
        self.height - self.landing_y
    }
}

/// Row `r` holds `r + 1` pegs centered on the board; row 0 is left empty so
/// balls enter through a gap.
fn pyramid_pegs(tuning: &BoardTuning) -> Vec<Peg> {
    let center_x = tuning.width / 2.0;
    let mut pegs = Vec::new();

    for row in 1..tuning.rows {
        let y = tuning.start_y + row as f32 * tuning.spacing_y;
        let pegs_in_row = row + 1;
        let row_width = tuning.spacing_x * (pegs_in_row - 1) as f32;
        let offset_x = center_x - row_width / 2.0;

        for i in 0..pegs_in_row {
            let x = offset_x + i as f32 * tuning.spacing_x;
            pegs.push(Peg::new(Vec2::new(x, y), tuning.peg_radius));
        }
    }

    pegs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_board() -> Board {
        Board::new(&BoardTuning::default())
    }

    #[test]
    fn test_pyramid_peg_count() {
        // Rows 1..17 hold 2..=17 pegs; row 0's single peg is omitted
        let board = default_board();
        let expected: usize = (2..=17).sum();
        assert_eq!(board.pegs.len(), expected);
    }

    #[test]
    fn test_rows_are_centered() {
        let board = default_board();
        let first_row: Vec<_> = board.pegs.iter().filter(|p| p.pos.y == 103.0).collect();
        assert_eq!(first_row.len(), 2);
        let mid = (first_row[0].pos.x + first_row[1].pos.x) / 2.0;
        assert!((mid - 430.0).abs() < 1e-4);
        assert!((first_row[1].pos.x - first_row[0].pos.x - 43.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_peg_at_funnel_top() {
        let board = default_board();
        assert!(board.pegs.iter().all(|p| p.pos.y > 60.0));
    }

    #[test]
    fn test_slot_geometry() {
        let board = default_board();
        assert_eq!(board.slots.len(), 17);
        assert!((board.slots.slot_width() - 860.0 / 17.0).abs() < 1e-4);
        assert_eq!(board.landing_y, 770.0);
        assert_eq!(board.slots.multiplier(8), Some(0.2));
        assert_eq!(board.slots.multiplier(0), Some(1000.0));
        assert_eq!(board.slots.multiplier(17), None);
    }

    #[test]
    fn test_slot_table_is_symmetric() {
        let board = default_board();
        let m = board.slots.multipliers();
        for i in 0..m.len() {
            assert_eq!(m[i], m[m.len() - 1 - i]);
        }
    }
}
