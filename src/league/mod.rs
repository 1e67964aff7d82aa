//! League domain core: documents, scoring rules, and the lineup engine.
//!
//! Everything in this module is a pure, synchronous computation over
//! in-memory values. Persistence, transport, and auth live with the
//! caller:
//! - `ids`: typed string identifiers
//! - `types`: document types (games, matches, lineups)
//! - `scoring`: precondition checks for game data
//! - `recompute`: games -> player-match -> team-match aggregation
//! - `lineup`: lineup validation, totals, and locking
//! - `summary`: scoring summary reports

pub mod ids;
pub mod lineup;
pub mod recompute;
pub mod scoring;
pub mod summary;
pub mod types;

// Re-export commonly used items for convenience
pub use recompute::{
    recompute_player_match, recompute_team_match, recompute_team_match_with, BonusAdjuster,
    NoBonus, TeamScorePolicy,
};
pub use summary::{match_scoring_summary, MatchScoringSummary, PlayerMatchSummary};
