//! Frame loop
//!
//! [`Game`] owns the tuning, board and session, and is the only thing a host
//! talks to: it runs one frame per animation tick and forwards player actions,
//! pushing the balance readout after every change.

use crate::audio::AudioSink;
use crate::error::{ConfigError, SessionError};
use crate::platform::BalanceDisplay;
use crate::renderer::{Canvas, draw_balls, draw_board, draw_particles, draw_texts};
use crate::sim::{Board, Landing, Session, advance_balls, parse_amount, tick};
use crate::tuning::Tuning;

pub struct Game<A: AudioSink, D: BalanceDisplay> {
    pub tuning: Tuning,
    pub board: Board,
    pub session: Session,
    audio: A,
    display: D,
    /// Frames run since start
    pub frame_count: u64,
}

impl<A: AudioSink, D: BalanceDisplay> Game<A, D> {
    /// Start a game on `tuning`, which is validated first
    pub fn new(tuning: Tuning, seed: u64, audio: A, display: D) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let board = Board::new(&tuning.board);
        let mut game = Self {
            tuning,
            board,
            session: Session::new(seed),
            audio,
            display,
            frame_count: 0,
        };
        game.push_balance();
        Ok(game)
    }

    fn push_balance(&mut self) {
        let text = self.session.balance_text();
        self.display.show_balance(&text);
    }

    pub fn deposit(&mut self, amount: f64) -> Result<f64, SessionError> {
        let balance = self.session.deposit(amount)?;
        self.push_balance();
        Ok(balance)
    }

    /// Drop a ball wagering `amount`. Returns the ball id.
    pub fn drop_ball(&mut self, amount: f64) -> Result<u32, SessionError> {
        let id = self
            .session
            .drop_ball(amount, &self.board, &self.tuning.ball)?;
        self.push_balance();
        Ok(id)
    }

    /// Drop a ball with the wager typed into the input field
    pub fn drop_ball_from_input(&mut self, input: &str) -> Result<u32, SessionError> {
        let amount = parse_amount(input)?;
        self.drop_ball(amount)
    }

    /// Wager the whole balance on one ball
    pub fn play_all(&mut self) -> Result<u32, SessionError> {
        let id = self.session.play_all(&self.board, &self.tuning.ball)?;
        self.push_balance();
        Ok(id)
    }

    /// One animation frame: clear, board, balls, texts, particles
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> Vec<Landing> {
        canvas.clear();
        draw_board(canvas, &self.board);

        let landings = advance_balls(
            &mut self.session,
            &self.board,
            &self.tuning,
            &mut self.audio,
        );
        draw_balls(canvas, &self.session.balls);

        self.session.effects.update_texts();
        draw_texts(canvas, &self.session.effects.texts);

        self.session.effects.update_particles();
        draw_particles(canvas, &self.session.effects.particles);

        self.finish_frame(&landings);
        landings
    }

    /// Simulate one frame without drawing
    pub fn step(&mut self) -> Vec<Landing> {
        let landings = tick(
            &mut self.session,
            &self.board,
            &self.tuning,
            &mut self.audio,
        );
        self.finish_frame(&landings);
        landings
    }

    fn finish_frame(&mut self, landings: &[Landing]) {
        self.frame_count += 1;
        if !landings.is_empty() {
            self.push_balance();
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Audio sink, e.g. to mute the sound board
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
