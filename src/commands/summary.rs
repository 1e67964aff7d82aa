//! Scoring summary command.

use std::path::Path;

use crate::commands::common::load_match_document;
use crate::league::summary::{match_scoring_summary, MatchScoringSummary};
use crate::league::types::{Game, PlayerMatch};
use crate::Result;

/// Handle the `summary` command.
pub fn handle_summary(match_file: &Path, as_json: bool) -> Result<()> {
    let doc = load_match_document(match_file)?;

    let pairings: Vec<(PlayerMatch, Vec<Game>)> = doc
        .player_matches
        .iter()
        .map(|pm| (pm.clone(), doc.games_for(&pm.id)))
        .collect();
    let summary = match_scoring_summary(&doc.team_match, &pairings);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary_table(&summary);
    }
    Ok(())
}

fn print_summary_table(summary: &MatchScoringSummary) {
    println!(
        "Match {}: home {} - {} away (racks {}-{})",
        summary.team_match_id,
        summary.team_score_home,
        summary.team_score_away,
        summary.home_games_won,
        summary.away_games_won
    );
    println!(
        "{:>3}  {:<12} {:<12} {:>7} {:>9}",
        "#", "home", "away", "racks", "points"
    );
    for pm in &summary.player_matches {
        println!(
            "{:>3}  {:<12} {:<12} {:>3}-{:<3} {:>4}-{:<4}",
            pm.order,
            pm.home_player_id.as_str(),
            pm.away_player_id.as_str(),
            pm.games_won_home,
            pm.games_won_away,
            pm.points_home,
            pm.points_away
        );
    }
}
