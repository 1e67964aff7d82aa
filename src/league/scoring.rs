//! Precondition checks for game scoring data.
//!
//! These run before a game is accepted into the model; the recomputation
//! fold assumes its inputs already passed them.

use std::collections::HashSet;

use crate::error::{LeagueError, Result};
use crate::league::types::Game;


/// Fail with `InvalidArgument` when a point value is negative.
pub fn validate_points(value: i32, field: &str) -> Result<()> {
    if value < 0 {
        return Err(LeagueError::invalid_argument(
            field,
            format!("points must be non-negative (got {value})"),
        ));
    }
    Ok(())
}

/// Fail with `InvalidArgument` when a rack number is not positive.
pub fn validate_rack_number(value: i32, field: &str) -> Result<()> {
    if value <= 0 {
        return Err(LeagueError::invalid_argument(
            field,
            format!("rack number must be greater than 0 (got {value})"),
        ));
    }
    Ok(())
}

/// Check every validated field of a game; first violation wins.
pub fn validate_game(game: &Game) -> Result<()> {
    validate_points(game.points_home, "pointsHome")?;
    validate_points(game.points_away, "pointsAway")?;
    validate_rack_number(game.rack_number, "rackNumber")
}

/// Check that rack numbers are unique within each player match.
///
/// Every duplicate is reported, not just the first.
pub fn validate_rack_sequence(games: &[Game]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for game in games {
        if !seen.insert((&game.player_match_id, game.rack_number)) {
            violations.push(format!(
                "player match {}: duplicate rack number {}",
                game.player_match_id, game.rack_number
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(LeagueError::Validation { violations })
    }
}
