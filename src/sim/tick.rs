//! Per-frame simulation step
//!
//! One call advances the board by exactly one frame: every live ball is
//! integrated, collided against the pegs and checked for landing, then the
//! floating texts and particles are advanced.

use super::board::Board;
use super::collision::resolve_peg_contacts;
use super::payout::{Landing, settle};
use super::state::Session;
use crate::audio::AudioSink;
use crate::multiplier_label;
use crate::tuning::Tuning;

/// Advance every live ball one frame and settle the ones that land.
///
/// Landed balls are paid, get their text and particle burst, notify `audio`,
/// and are removed from the live set before this returns.
pub fn advance_balls(
    session: &mut Session,
    board: &Board,
    tuning: &Tuning,
    audio: &mut dyn AudioSink,
) -> Vec<Landing> {
    let bias_strength = tuning.collision.bias.strength_for(session.total_drops);
    let mut landings = Vec::new();

    for ball in &mut session.balls {
        if ball.stopped {
            continue;
        }

        ball.update(&tuning.ball, board.width);
        resolve_peg_contacts(
            ball,
            &board.pegs,
            board.width,
            bias_strength,
            &tuning.collision,
            &mut session.rng,
        );

        if let Some(landing) = settle(ball, board, &mut session.balance) {
            log::debug!(
                "Ball {} landed in slot {:?} (x{}), paid {:.2}",
                landing.ball_id,
                landing.slot,
                landing.multiplier,
                landing.payout
            );
            session.effects.spawn_text(
                landing.pos,
                multiplier_label(landing.multiplier),
                &tuning.effects,
            );
            session
                .effects
                .spawn_burst(landing.pos, &tuning.effects, &mut session.rng);
            audio.on_payout(landing.multiplier);
            landings.push(landing);
        }
    }

    session.balls.retain(|ball| !ball.stopped);
    landings
}

/// Advance the whole session by one frame
pub fn tick(
    session: &mut Session,
    board: &Board,
    tuning: &Tuning,
    audio: &mut dyn AudioSink,
) -> Vec<Landing> {
    let landings = advance_balls(session, board, tuning, audio);
    session.effects.update();
    landings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::sim::Ball;
    use glam::Vec2;

    /// Records payouts in order
    #[derive(Default)]
    struct Payouts(Vec<f64>);

    impl AudioSink for Payouts {
        fn on_payout(&mut self, multiplier: f64) {
            self.0.push(multiplier);
        }
    }

    fn setup(seed: u64) -> (Session, Board, Tuning) {
        let tuning = Tuning::default();
        let board = Board::new(&tuning.board);
        (Session::new(seed), board, tuning)
    }

    #[test]
    fn test_ball_eventually_lands_and_is_paid_once() {
        let (mut session, board, tuning) = setup(2024);
        let mut audio = Payouts::default();
        session.deposit(10.0).unwrap();
        session.drop_ball(10.0, &board, &tuning.ball).unwrap();
        assert_eq!(session.balance, 0.0);

        let mut landings = Vec::new();
        for _ in 0..5000 {
            landings.extend(tick(&mut session, &board, &tuning, &mut audio));
            if session.balls.is_empty() {
                break;
            }
        }

        assert_eq!(landings.len(), 1);
        let landing = &landings[0];
        assert!(landing.pos.y >= board.landing_y);
        assert_eq!(landing.bet, 10.0);
        assert!((session.balance - landing.payout).abs() < 1e-9);
        assert_eq!(audio.0, vec![landing.multiplier]);
        // Landed ball was retired from the live set
        assert!(session.balls.is_empty());
    }

    #[test]
    fn test_landing_spawns_effects() {
        let (mut session, board, tuning) = setup(1);
        let id = session.next_entity_id();
        // One frame from the landing line, well clear of any peg
        let mut ball = Ball::new(id, Vec2::new(120.0, 769.5), 6.0, 10.0);
        ball.vel = Vec2::new(0.0, 1.0);
        session.balls.push(ball);

        let landings = advance_balls(&mut session, &board, &tuning, &mut NullAudio);
        assert_eq!(landings.len(), 1);
        assert_eq!(landings[0].multiplier, 26.0);
        assert_eq!(session.balance, 260.0);
        assert_eq!(session.effects.particles.len(), 20);
        assert_eq!(session.effects.texts.len(), 1);
        assert_eq!(session.effects.texts[0].text, "x26");
    }

    #[test]
    fn test_ball_above_landing_line_keeps_falling() {
        let (mut session, board, tuning) = setup(1);
        let id = session.next_entity_id();
        session
            .balls
            .push(Ball::new(id, Vec2::new(120.0, 700.0), 6.0, 1.0));

        let landings = tick(&mut session, &board, &tuning, &mut NullAudio);
        assert!(landings.is_empty());
        assert_eq!(session.balls.len(), 1);
        assert!(session.balls[0].pos.y > 700.0);
        assert!(session.effects.is_empty());
    }

    #[test]
    fn test_many_drops_all_settle() {
        let (mut session, board, tuning) = setup(77);
        session.deposit(100.0).unwrap();
        for _ in 0..25 {
            session.drop_ball(1.0, &board, &tuning.ball).unwrap();
        }

        let mut paid = 0.0;
        let mut count = 0;
        for _ in 0..10_000 {
            for landing in tick(&mut session, &board, &tuning, &mut NullAudio) {
                paid += landing.payout;
                count += 1;
            }
            if session.is_idle() {
                break;
            }
        }

        assert_eq!(count, 25);
        assert!(session.is_idle());
        assert!((session.balance - (75.0 + paid)).abs() < 1e-6);
    }
}
