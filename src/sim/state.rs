//! Session state and player actions
//!
//! Everything that changes during play lives in one [`Session`]: the balance,
//! the drop counter, live balls, effects and the RNG. Actions run to
//! completion between frames.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Ball;
use super::board::Board;
use super::effects::Effects;
use crate::error::SessionError;
use crate::format_money;
use crate::tuning::BallTuning;

/// One player's board session
#[derive(Debug, Clone)]
pub struct Session {
    /// Money available to wager; only deposits, drops and payouts change it
    pub balance: f64,
    /// Balls dropped since the session started; picks the bias tier
    pub total_drops: u64,
    /// Balls still falling
    pub balls: Vec<Ball>,
    pub effects: Effects,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            balance: 0.0,
            total_drops: 0,
            balls: Vec::new(),
            effects: Effects::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new ball id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add money to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, SessionError> {
        if !amount.is_finite() || amount <= 0.0 {
            log::debug!("Rejected deposit of {}", amount);
            return Err(SessionError::InvalidDeposit);
        }
        self.balance += amount;
        log::info!("Deposited {}, balance {}", format_money(amount), self.balance_text());
        Ok(self.balance)
    }

    /// Take `amount` from the balance and drop a ball at the funnel top.
    ///
    /// Returns the new ball's id. On error nothing changes.
    pub fn drop_ball(
        &mut self,
        amount: f64,
        board: &Board,
        tuning: &BallTuning,
    ) -> Result<u32, SessionError> {
        if !amount.is_finite() || amount <= 0.0 {
            log::debug!("Rejected wager {}: invalid amount", amount);
            return Err(SessionError::InvalidWager);
        }
        if amount > self.balance {
            log::debug!(
                "Rejected wager {}: balance is {}",
                amount,
                self.balance_text()
            );
            return Err(SessionError::InsufficientBalance);
        }

        self.balance -= amount;
        self.total_drops += 1;

        let id = self.next_entity_id();
        let pos = Vec2::new(board.center_x(), tuning.spawn_y);
        self.balls.push(Ball::new(id, pos, tuning.radius, amount));
        log::info!(
            "Drop #{}: ball {} wagering {}",
            self.total_drops,
            id,
            format_money(amount)
        );
        Ok(id)
    }

    /// Wager the entire balance (as shown, rounded to cents) on one ball
    pub fn play_all(&mut self, board: &Board, tuning: &BallTuning) -> Result<u32, SessionError> {
        if self.balance <= 0.0 {
            return Err(SessionError::InsufficientBalance);
        }
        let wager = (self.balance * 100.0).round() / 100.0;
        self.drop_ball(wager, board, tuning)
    }

    /// Balance as the readout shows it
    pub fn balance_text(&self) -> String {
        format_money(self.balance)
    }

    /// Whether any ball or effect is still animating
    pub fn is_idle(&self) -> bool {
        self.balls.is_empty() && self.effects.is_empty()
    }
}

/// Parse the wager input field. Anything that isn't a number is an invalid wager.
pub fn parse_amount(input: &str) -> Result<f64, SessionError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidWager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{BoardTuning, Tuning};

    fn setup() -> (Session, Board, Tuning) {
        let tuning = Tuning::default();
        let board = Board::new(&tuning.board);
        (Session::new(1), board, tuning)
    }

    #[test]
    fn test_new_session_is_empty() {
        let (session, _, _) = setup();
        assert_eq!(session.balance, 0.0);
        assert_eq!(session.total_drops, 0);
        assert!(session.is_idle());
        assert_eq!(session.balance_text(), "0.00");
    }

    #[test]
    fn test_deposit() {
        let (mut session, _, _) = setup();
        assert_eq!(session.deposit(25.5), Ok(25.5));
        assert_eq!(session.balance_text(), "25.50");
        assert_eq!(session.deposit(0.0), Err(SessionError::InvalidDeposit));
        assert_eq!(session.deposit(-3.0), Err(SessionError::InvalidDeposit));
        assert_eq!(session.deposit(f64::NAN), Err(SessionError::InvalidDeposit));
        assert_eq!(session.balance, 25.5);
    }

    #[test]
    fn test_drop_spawns_ball_and_takes_stake() {
        let (mut session, board, tuning) = setup();
        session.deposit(100.0).unwrap();

        let id = session.drop_ball(10.0, &board, &tuning.ball).unwrap();
        assert_eq!(session.balance, 90.0);
        assert_eq!(session.total_drops, 1);
        assert_eq!(session.balls.len(), 1);

        let ball = &session.balls[0];
        assert_eq!(ball.id, id);
        assert_eq!(ball.pos, Vec2::new(430.0, 30.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.bet, 10.0);
        assert!(!ball.stopped);
    }

    #[test]
    fn test_invalid_wagers_change_nothing() {
        let (mut session, board, tuning) = setup();
        session.deposit(50.0).unwrap();

        for amount in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                session.drop_ball(amount, &board, &tuning.ball),
                Err(SessionError::InvalidWager)
            );
        }
        assert_eq!(session.balance, 50.0);
        assert_eq!(session.total_drops, 0);
        assert!(session.balls.is_empty());
    }

    #[test]
    fn test_wager_over_balance_rejected() {
        let (mut session, board, tuning) = setup();
        session.deposit(5.0).unwrap();
        assert_eq!(
            session.drop_ball(5.01, &board, &tuning.ball),
            Err(SessionError::InsufficientBalance)
        );
        assert_eq!(session.balance, 5.0);
        assert_eq!(session.total_drops, 0);

        // Exactly the balance is allowed
        assert!(session.drop_ball(5.0, &board, &tuning.ball).is_ok());
        assert_eq!(session.balance, 0.0);
    }

    #[test]
    fn test_play_all() {
        let (mut session, board, tuning) = setup();
        assert_eq!(
            session.play_all(&board, &tuning.ball),
            Err(SessionError::InsufficientBalance)
        );

        session.deposit(12.5).unwrap();
        session.play_all(&board, &tuning.ball).unwrap();
        assert_eq!(session.balance, 0.0);
        assert_eq!(session.balls[0].bet, 12.5);
    }

    #[test]
    fn test_ball_ids_are_unique() {
        let (mut session, board, tuning) = setup();
        session.deposit(3.0).unwrap();
        let a = session.drop_ball(1.0, &board, &tuning.ball).unwrap();
        let b = session.drop_ball(1.0, &board, &tuning.ball).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_spawn_point_follows_board_width() {
        let tuning = Tuning {
            board: BoardTuning {
                width: 400.0,
                multipliers: vec![1.0; 4],
                ..Default::default()
            },
            ..Default::default()
        };
        let board = Board::new(&tuning.board);
        let mut session = Session::new(0);
        session.deposit(1.0).unwrap();
        session.drop_ball(1.0, &board, &tuning.ball).unwrap();
        assert_eq!(session.balls[0].pos.x, 200.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 10.5 "), Ok(10.5));
        assert_eq!(parse_amount("abc"), Err(SessionError::InvalidWager));
        assert_eq!(parse_amount(""), Err(SessionError::InvalidWager));
        // Parses, but drop_ball rejects it
        assert!(parse_amount("-5").is_ok());
        assert!(parse_amount("NaN").unwrap().is_nan());
    }
}
