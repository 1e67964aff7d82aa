//! Domain document types: games, player matches, team matches, lineups.
//!
//! Field names on the wire are camelCase to match the documents the
//! surrounding system stores; aggregates on [`PlayerMatch`] and
//! [`TeamMatch`] are derived state written only by recomputation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LeagueError;

use super::ids::{DivisionId, GameId, MatchId, PlayerId, PlayerMatchId, TeamId};

#[cfg(test)]
mod tests;

/// Which side won a single rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RackWinner {
    Home,
    Away,
}

/// One completed rack. Immutable once recorded; owned by exactly one
/// player match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    #[serde(rename = "playerMatchId")]
    pub player_match_id: PlayerMatchId,
    /// Positive, unique within the owning player match.
    #[serde(rename = "rackNumber")]
    pub rack_number: i32,
    #[serde(rename = "pointsHome")]
    pub points_home: i32,
    #[serde(rename = "pointsAway")]
    pub points_away: i32,
    pub winner: RackWinner,
}

/// One player-vs-player pairing within a team match.
///
/// The five aggregate fields always equal a pure function of the
/// associated games; they are never hand-edited outside recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatch {
    pub id: PlayerMatchId,
    #[serde(rename = "divisionId")]
    pub division_id: DivisionId,
    #[serde(rename = "teamMatchId")]
    pub team_match_id: MatchId,
    #[serde(rename = "homePlayerId")]
    pub home_player_id: PlayerId,
    #[serde(rename = "awayPlayerId")]
    pub away_player_id: PlayerId,
    /// Intended batting order within the team match.
    pub order: i32,
    #[serde(rename = "pointsHome", default)]
    pub points_home: i32,
    #[serde(rename = "pointsAway", default)]
    pub points_away: i32,
    #[serde(rename = "gamesWonHome", default)]
    pub games_won_home: i32,
    #[serde(rename = "gamesWonAway", default)]
    pub games_won_away: i32,
    #[serde(rename = "totalRacks", default)]
    pub total_racks: i32,
}

/// Lifecycle of a team match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    #[serde(rename = "inProgress")]
    InProgress,
    Completed,
    Canceled,
}

/// Bonus points recorded alongside the base team score, never folded
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BonusPoints {
    pub home: i32,
    pub away: i32,
}

/// A scheduled match between two teams in a division.
///
/// `team_score_home`/`team_score_away` derive from the player matches the
/// same way player-match aggregates derive from games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub id: MatchId,
    #[serde(rename = "divisionId")]
    pub division_id: DivisionId,
    pub week: i32,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: DateTime<Utc>,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: TeamId,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: TeamId,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(rename = "lineupPlan", default)]
    pub lineup_plan: LineupPlan,
    #[serde(rename = "teamScoreHome", default)]
    pub team_score_home: i32,
    #[serde(rename = "teamScoreAway", default)]
    pub team_score_away: i32,
    #[serde(rename = "bonusPoints", default)]
    pub bonus_points: BonusPoints,
}

/// Whether a lineup player expects to show up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl FromStr for Availability {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Availability::Available),
            "unavailable" => Ok(Availability::Unavailable),
            other => Err(LeagueError::invalid_argument(
                "availability",
                format!("expected available or unavailable, got {other}"),
            )),
        }
    }
}

/// Which side of a lineup an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineupSide {
    Home,
    Away,
}

impl fmt::Display for LineupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupSide::Home => write!(f, "home"),
            LineupSide::Away => write!(f, "away"),
        }
    }
}

impl FromStr for LineupSide {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(LineupSide::Home),
            "away" => Ok(LineupSide::Away),
            other => Err(LeagueError::invalid_argument(
                "side",
                format!("expected home or away, got {other}"),
            )),
        }
    }
}

/// One roster slot in a lineup plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupPlayer {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "skillLevel")]
    pub skill_level: i32,
    #[serde(rename = "intendedOrder")]
    pub intended_order: i32,
    /// Bench player: listed but excluded from skill sums and cap checks.
    #[serde(rename = "isAlternate", default)]
    pub is_alternate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

/// Computed skill sums and cap compliance for a lineup plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LineupTotals {
    #[serde(rename = "homePlannedSkillSum")]
    pub home_planned_skill_sum: i32,
    #[serde(rename = "awayPlannedSkillSum")]
    pub away_planned_skill_sum: i32,
    #[serde(rename = "homeWithinCap")]
    pub home_within_cap: bool,
    #[serde(rename = "awayWithinCap")]
    pub away_within_cap: bool,
}

/// Append-only record of one lineup change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupHistoryEntry {
    pub at: DateTime<Utc>,
    pub by: String,
    pub change: String,
}

/// A proposed or locked roster assignment for one team match.
///
/// Once `locked` is set the player lists and totals are immutable; only an
/// external unlock operation may clear the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LineupPlan {
    #[serde(default)]
    pub ruleset: String,
    #[serde(rename = "maxTeamSkillCap", default)]
    pub max_team_skill_cap: i32,
    #[serde(default)]
    pub home: Vec<LineupPlayer>,
    #[serde(default)]
    pub away: Vec<LineupPlayer>,
    #[serde(default)]
    pub totals: LineupTotals,
    #[serde(default)]
    pub locked: bool,
    #[serde(rename = "lockedBy", default, skip_serializing_if = "Option::is_none")]
    pub locked_by: Option<String>,
    #[serde(rename = "lockedAt", default, skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub history: Vec<LineupHistoryEntry>,
}

/// The active roster a lineup is validated against. Callers derive this
/// from team memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "playerIds")]
    pub player_ids: Vec<PlayerId>,
}

impl Roster {
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.player_ids.contains(player_id)
    }
}

/// A team match bundled with its player matches and their games, the unit
/// the command layer reads and writes.
///
/// Games are a flat list tagged with `playerMatchId`, mirroring how the
/// surrounding system stores them as separate documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDocument {
    #[serde(rename = "teamMatch")]
    pub team_match: TeamMatch,
    #[serde(rename = "playerMatches", default)]
    pub player_matches: Vec<PlayerMatch>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl MatchDocument {
    /// The games belonging to one player match, in document order.
    pub fn games_for(&self, player_match_id: &PlayerMatchId) -> Vec<Game> {
        self.games
            .iter()
            .filter(|g| &g.player_match_id == player_match_id)
            .cloned()
            .collect()
    }
}
