//! Drop-count milestone schedule for center-steering strength
//!
//! Every peg contact pulls the ball back toward the board center with a
//! strength picked from this table. Milestone drops (every 10th, 50th, 100th
//! by default) steer more weakly, so edge slots are reached more often on
//! those drops than on ordinary ones.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BIAS_STRENGTH;

/// One milestone rule: drop counts divisible by `every` use `strength`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasTier {
    pub every: u64,
    pub strength: f32,
}

impl BiasTier {
    pub fn new(every: u64, strength: f32) -> Self {
        Self { every, strength }
    }

    /// Whether this tier applies to the given drop count (zero never matches)
    #[inline]
    pub fn matches(&self, total_drops: u64) -> bool {
        self.every != 0 && total_drops != 0 && total_drops.is_multiple_of(self.every)
    }
}

/// Ordered tier table; the first matching tier wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasSchedule {
    pub tiers: Vec<BiasTier>,
    pub default_strength: f32,
}

impl Default for BiasSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                BiasTier::new(100, 2.0),
                BiasTier::new(50, 5.0),
                BiasTier::new(10, 10.0),
            ],
            default_strength: DEFAULT_BIAS_STRENGTH,
        }
    }
}

impl BiasSchedule {
    /// Steering strength for the session's running drop count
    pub fn strength_for(&self, total_drops: u64) -> f32 {
        self.tiers
            .iter()
            .find(|tier| tier.matches(total_drops))
            .map(|tier| tier.strength)
            .unwrap_or(self.default_strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundreds_use_weakest_tier() {
        let schedule = BiasSchedule::default();
        for drops in [100, 200, 300, 1000] {
            assert_eq!(schedule.strength_for(drops), 2.0, "drop {drops}");
        }
    }

    #[test]
    fn test_fifties_use_medium_weak_tier() {
        let schedule = BiasSchedule::default();
        for drops in [50, 150, 250] {
            assert_eq!(schedule.strength_for(drops), 5.0, "drop {drops}");
        }
    }

    #[test]
    fn test_tens_use_medium_tier() {
        let schedule = BiasSchedule::default();
        for drops in [10, 20, 30, 40, 60, 110] {
            assert_eq!(schedule.strength_for(drops), 10.0, "drop {drops}");
        }
    }

    #[test]
    fn test_ordinary_drops_use_strongest_tier() {
        let schedule = BiasSchedule::default();
        for drops in [0, 1, 7, 49, 99, 101] {
            assert_eq!(schedule.strength_for(drops), 14.0, "drop {drops}");
        }
    }

    #[test]
    fn test_zero_divisor_never_matches() {
        let schedule = BiasSchedule {
            tiers: vec![BiasTier::new(0, 1.0)],
            default_strength: 3.0,
        };
        assert_eq!(schedule.strength_for(10), 3.0);
    }
}
