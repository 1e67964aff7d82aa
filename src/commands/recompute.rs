//! Score recomputation and finalization commands.

use std::path::Path;

use crate::commands::common::{emit_match_document, load_match_document};
use crate::config::FeatureFlags;
use crate::league::recompute::{recompute_player_match, recompute_team_match};
use crate::league::scoring::{validate_game, validate_rack_sequence};
use crate::league::types::{MatchDocument, MatchStatus, PlayerMatch};
use crate::Result;


/// Validate every game, then recompute all player-match aggregates and the
/// team-match score.
///
/// Pure document-in, document-out orchestration shared by `recompute` and
/// `finalize`.
pub fn recompute_document(doc: &MatchDocument, flags: &FeatureFlags) -> Result<MatchDocument> {
    for game in &doc.games {
        validate_game(game)?;
    }
    validate_rack_sequence(&doc.games)?;

    let player_matches: Vec<PlayerMatch> = doc
        .player_matches
        .iter()
        .map(|pm| recompute_player_match(pm, &doc.games_for(&pm.id)))
        .collect();
    let team_match = recompute_team_match(&doc.team_match, &player_matches, flags);

    Ok(MatchDocument {
        team_match,
        player_matches,
        games: doc.games.clone(),
    })
}

/// Handle the `recompute` command.
pub fn handle_recompute(match_file: &Path, write: bool, verbose: bool) -> Result<()> {
    let doc = load_match_document(match_file)?;
    let updated = recompute_document(&doc, &FeatureFlags::from_env())?;

    if verbose {
        for pm in &updated.player_matches {
            eprintln!(
                "{}: points {}-{}, racks won {}-{} ({} racks)",
                pm.id, pm.points_home, pm.points_away, pm.games_won_home, pm.games_won_away,
                pm.total_racks
            );
        }
        eprintln!(
            "{}: team score {}-{}",
            updated.team_match.id, updated.team_match.team_score_home,
            updated.team_match.team_score_away
        );
    }

    emit_match_document(match_file, &updated, write)
}

/// Handle the `finalize` command: one last recomputation, then the match is
/// marked completed.
pub fn handle_finalize(match_file: &Path, write: bool) -> Result<()> {
    let doc = load_match_document(match_file)?;
    let mut updated = recompute_document(&doc, &FeatureFlags::from_env())?;
    updated.team_match.status = MatchStatus::Completed;

    emit_match_document(match_file, &updated, write)
}
