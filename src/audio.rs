//! Payout sound cues
//!
//! The simulation only announces payouts through [`AudioSink`]; it never waits
//! on or observes playback. [`SoundBoard`] maps multipliers to clips and keeps
//! a single voice: a new clip stops whatever is playing.

use serde::{Deserialize, Serialize};

/// Receives one notification per landed ball
pub trait AudioSink {
    fn on_payout(&mut self, multiplier: f64);
}

/// Silent sink (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn on_payout(&mut self, _multiplier: f64) {}
}

/// Playback backend that actually starts and stops clips
pub trait ClipPlayer {
    fn start(&mut self, clip: &str);
    fn stop(&mut self, clip: &str);
}

/// Table entry: landing on `multiplier` plays `clip`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundClip {
    pub multiplier: f64,
    pub clip: String,
}

impl SoundClip {
    pub fn new(multiplier: f64, clip: impl Into<String>) -> Self {
        Self {
            multiplier,
            clip: clip.into(),
        }
    }

    /// One track per payout tier, lowest to highest
    pub fn default_table() -> Vec<SoundClip> {
        [0.2, 2.0, 4.0, 9.0, 26.0, 130.0, 1000.0]
            .iter()
            .enumerate()
            .map(|(i, &m)| SoundClip::new(m, format!("sounds/Track{}_Instrumento.m4a", i + 1)))
            .collect()
    }
}

/// Multiplier -> clip lookup with single-voice preemption
pub struct SoundBoard<P: ClipPlayer> {
    clips: Vec<SoundClip>,
    player: P,
    current: Option<String>,
    muted: bool,
}

impl<P: ClipPlayer> SoundBoard<P> {
    pub fn new(clips: Vec<SoundClip>, player: P) -> Self {
        Self {
            clips,
            player,
            current: None,
            muted: false,
        }
    }

    /// Clip for an exact multiplier, if the table has one
    pub fn clip_for(&self, multiplier: f64) -> Option<&str> {
        self.clips
            .iter()
            .find(|c| c.multiplier == multiplier)
            .map(|c| c.clip.as_str())
    }

    /// Clip started most recently (it may have finished on its own since)
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Mute/unmute. Muting stops the current clip.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            if let Some(clip) = self.current.take() {
                self.player.stop(&clip);
            }
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

impl<P: ClipPlayer> AudioSink for SoundBoard<P> {
    fn on_payout(&mut self, multiplier: f64) {
        if self.muted {
            return;
        }
        let Some(clip) = self.clip_for(multiplier).map(str::to_owned) else {
            log::debug!("No clip for x{}", multiplier);
            return;
        };
        if let Some(previous) = self.current.take() {
            self.player.stop(&previous);
        }
        self.player.start(&clip);
        self.current = Some(clip);
    }
}

/// Player that only logs, for the native runner
#[derive(Debug, Default)]
pub struct LogPlayer;

impl ClipPlayer for LogPlayer {
    fn start(&mut self, clip: &str) {
        log::info!("Playing {}", clip);
    }

    fn stop(&mut self, clip: &str) {
        log::debug!("Stopped {}", clip);
    }
}
