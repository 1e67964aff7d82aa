//! Error types for the pool league scoring engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("invalid value for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("lineup validation failed: {}", violations.join("; "))]
    Validation { violations: Vec<String> },

    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("player {player_id} is not in the lineup")]
    PlayerNotInLineup { player_id: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LeagueError {
    /// Shorthand for an `InvalidArgument` against a named field.
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        LeagueError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an `InvalidState` with the given reason.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        LeagueError::InvalidState {
            reason: reason.into(),
        }
    }
}
