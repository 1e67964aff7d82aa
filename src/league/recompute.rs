//! Score recomputation: games roll up into player-match aggregates,
//! player matches roll up into team scores.
//!
//! Every function here is a pure fold over borrowed data: no clock reads,
//! no mutation of inputs, and repeated calls with the same inputs produce
//! identical output. Callers persist the returned values.

use crate::config::FeatureFlags;
use crate::league::types::{BonusPoints, Game, PlayerMatch, RackWinner, TeamMatch};


/// Recompute a player match's aggregates from the complete set of its
/// games.
///
/// Game order is irrelevant; the rack number is a labeling concern only.
/// Any aggregate values already on the input are overwritten, not merged,
/// so an empty `games` slice resets everything to zero.
pub fn recompute_player_match(player_match: &PlayerMatch, games: &[Game]) -> PlayerMatch {
    let mut updated = player_match.clone();

    updated.points_home = games.iter().map(|g| g.points_home).sum();
    updated.points_away = games.iter().map(|g| g.points_away).sum();
    updated.games_won_home = games.iter().filter(|g| g.winner == RackWinner::Home).count() as i32;
    updated.games_won_away = games.iter().filter(|g| g.winner == RackWinner::Away).count() as i32;
    updated.total_racks = games.len() as i32;

    updated
}

/// How a team match's score derives from its player matches.
///
/// Leagues score purely by points, purely by racks won, or a mix; the
/// policy is picked once per recomputation over the entire player-match
/// set, never per player match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamScorePolicy {
    /// At least one player match recorded points: team score is the sum of
    /// per-rack points.
    PointTotals,
    /// Nobody recorded points: fall back to summing racks won, so legacy
    /// and partially-entered protocols still produce a meaningful result.
    GamesWon,
    /// Nobody recorded points and the fallback is disabled by flag; scores
    /// stay zero until points are filled in.
    Unscored,
}

impl TeamScorePolicy {
    /// Pick the scoring policy for one recomputation call.
    pub fn select(player_matches: &[PlayerMatch], flags: &FeatureFlags) -> Self {
        let has_points = player_matches
            .iter()
            .any(|pm| pm.points_home > 0 || pm.points_away > 0);

        if has_points {
            TeamScorePolicy::PointTotals
        } else if !flags.disable_games_won_fallback {
            TeamScorePolicy::GamesWon
        } else {
            TeamScorePolicy::Unscored
        }
    }
}

/// Pluggable post-processing step awarding bonus points on top of the base
/// team score. Implementations must not depend on anything but their
/// arguments.
pub trait BonusAdjuster {
    fn bonus(&self, team_match: &TeamMatch, player_matches: &[PlayerMatch]) -> BonusPoints;
}

/// Default adjuster: awards nothing.
pub struct NoBonus;

impl BonusAdjuster for NoBonus {
    fn bonus(&self, _team_match: &TeamMatch, _player_matches: &[PlayerMatch]) -> BonusPoints {
        BonusPoints::default()
    }
}

/// Recompute a team match's scores from its (already recomputed) player
/// matches, with no bonus step.
pub fn recompute_team_match(
    team_match: &TeamMatch,
    player_matches: &[PlayerMatch],
    flags: &FeatureFlags,
) -> TeamMatch {
    recompute_team_match_with(team_match, player_matches, flags, &NoBonus)
}

/// Recompute a team match's scores, then apply a bonus adjustment.
///
/// The bonus lands in `bonus_points` and never replaces or feeds back into
/// the base scores. When `enable_bonus_points` is off the adjuster is not
/// consulted and any previously recorded bonus is cleared.
pub fn recompute_team_match_with(
    team_match: &TeamMatch,
    player_matches: &[PlayerMatch],
    flags: &FeatureFlags,
    adjuster: &dyn BonusAdjuster,
) -> TeamMatch {
    let mut updated = team_match.clone();

    match TeamScorePolicy::select(player_matches, flags) {
        TeamScorePolicy::PointTotals => {
            updated.team_score_home = player_matches.iter().map(|pm| pm.points_home).sum();
            updated.team_score_away = player_matches.iter().map(|pm| pm.points_away).sum();
        }
        TeamScorePolicy::GamesWon => {
            updated.team_score_home = player_matches.iter().map(|pm| pm.games_won_home).sum();
            updated.team_score_away = player_matches.iter().map(|pm| pm.games_won_away).sum();
        }
        TeamScorePolicy::Unscored => {
            updated.team_score_home = 0;
            updated.team_score_away = 0;
        }
    }

    updated.bonus_points = if flags.enable_bonus_points {
        adjuster.bonus(team_match, player_matches)
    } else {
        BonusPoints::default()
    };

    updated
}
