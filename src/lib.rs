//! Pool League Scoring CLI Library
//!
//! A Rust library for pool league match scoring and lineup management,
//! providing score recomputation, lineup validation, skill-cap totals, and
//! lock handling over plain JSON match documents.
//!
//! ## Features
//!
//! - **Score Recomputation**: Roll individually recorded racks up into
//!   player-match aggregates and team-match scores
//! - **Fallback Scoring Policy**: Points-based scoring with a games-won
//!   fallback for leagues that don't track per-rack points
//! - **Lineup Validation**: Roster membership, duplicate, and batting-order
//!   checks with every violation reported at once
//! - **Skill-Cap Totals**: Planned skill sums and within-cap flags,
//!   alternates excluded
//! - **Lineup Locking**: One-way lock transition with attribution and an
//!   append-only change history
//! - **Scoring Summaries**: Per-pairing point and rack reports
//!
//! ## Quick Start
//!
//! ```rust
//! use rackscore::{FeatureFlags, league::recompute::recompute_team_match};
//!
//! # fn example(team_match: &rackscore::TeamMatch, player_matches: &[rackscore::PlayerMatch]) {
//! let flags = FeatureFlags::default();
//! let updated = recompute_team_match(team_match, player_matches, &flags);
//! # let _ = updated;
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Scoring behavior can be toggled through the environment:
//! ```bash
//! export DISABLE_GAMESWON_FALLBACK=true
//! export ENABLE_BONUS_POINTS=true
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod league;

// Re-export commonly used types
pub use config::FeatureFlags;
pub use error::{LeagueError, Result};
pub use league::ids::{DivisionId, GameId, MatchId, PlayerId, PlayerMatchId, TeamId};
pub use league::types::{
    Game, LineupPlan, LineupPlayer, MatchDocument, PlayerMatch, RackWinner, Roster, TeamMatch,
};
