//! Scoring summary reports for a team match.

use serde::Serialize;

use crate::league::ids::{MatchId, PlayerId, PlayerMatchId};
use crate::league::types::{Game, PlayerMatch, TeamMatch};


/// Per-pairing line of a scoring summary.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerMatchSummary {
    #[serde(rename = "playerMatchId")]
    pub player_match_id: PlayerMatchId,
    pub order: i32,
    #[serde(rename = "homePlayerId")]
    pub home_player_id: PlayerId,
    #[serde(rename = "awayPlayerId")]
    pub away_player_id: PlayerId,
    #[serde(rename = "gamesWonHome")]
    pub games_won_home: i32,
    #[serde(rename = "gamesWonAway")]
    pub games_won_away: i32,
    #[serde(rename = "pointsHome")]
    pub points_home: i32,
    #[serde(rename = "pointsAway")]
    pub points_away: i32,
}

/// Point and rack totals for a team match, itemized per pairing.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScoringSummary {
    #[serde(rename = "teamMatchId")]
    pub team_match_id: MatchId,
    #[serde(rename = "teamScoreHome")]
    pub team_score_home: i32,
    #[serde(rename = "teamScoreAway")]
    pub team_score_away: i32,
    #[serde(rename = "homeGamesWon")]
    pub home_games_won: i32,
    #[serde(rename = "awayGamesWon")]
    pub away_games_won: i32,
    #[serde(rename = "playerMatches")]
    pub player_matches: Vec<PlayerMatchSummary>,
}

/// Build a scoring summary for a team match.
///
/// Point lines are summed straight from the games so the report stays
/// truthful even when a player match's cached aggregates are stale; the
/// team-level scores are read from the (recomputed) team match itself.
/// Pairings come back sorted by intended order.
pub fn match_scoring_summary(
    team_match: &TeamMatch,
    player_matches: &[(PlayerMatch, Vec<Game>)],
) -> MatchScoringSummary {
    let mut summaries: Vec<PlayerMatchSummary> = player_matches
        .iter()
        .map(|(pm, games)| PlayerMatchSummary {
            player_match_id: pm.id.clone(),
            order: pm.order,
            home_player_id: pm.home_player_id.clone(),
            away_player_id: pm.away_player_id.clone(),
            games_won_home: pm.games_won_home,
            games_won_away: pm.games_won_away,
            points_home: games.iter().map(|g| g.points_home).sum(),
            points_away: games.iter().map(|g| g.points_away).sum(),
        })
        .collect();
    summaries.sort_by_key(|s| s.order);

    MatchScoringSummary {
        team_match_id: team_match.id.clone(),
        team_score_home: team_match.team_score_home,
        team_score_away: team_match.team_score_away,
        home_games_won: summaries.iter().map(|s| s.games_won_home).sum(),
        away_games_won: summaries.iter().map(|s| s.games_won_away).sum(),
        player_matches: summaries,
    }
}
