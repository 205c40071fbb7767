//! Error types for session actions and configuration loading

use thiserror::Error;

/// Rejection of a user action (deposit, drop, play-all).
///
/// A rejected action never changes session state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Wager is not a number, not finite, or not positive
    #[error("Invalid amount")]
    InvalidWager,

    /// Wager exceeds the balance, or there is no balance to play with
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Deposit is not a finite positive amount
    #[error("Invalid deposit amount")]
    InvalidDeposit,
}

/// Failure to load or validate a tuning file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the file from disk
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid tuning JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parse but describe an unusable board
    #[error("Invalid config: {0}")]
    Invalid(String),
}
