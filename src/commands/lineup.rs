//! Lineup plan commands: validation, totals, locking, availability, skill
//! changes.
//!
//! These handlers are the boundary where timestamps enter the system; the
//! lineup engine itself never reads the clock.

use chrono::Utc;
use std::path::Path;

use crate::commands::common::{emit_match_document, load_match_document, load_roster};
use crate::league::ids::PlayerId;
use crate::league::lineup::{apply_skill_change, compute_totals, lock, set_availability, submit};
use crate::league::types::{Availability, LineupSide};
use crate::Result;

/// Handle `lineup validate`: submit the embedded plan against both rosters.
pub fn handle_validate(
    match_file: &Path,
    home_roster_file: &Path,
    away_roster_file: &Path,
    by: &str,
    write: bool,
) -> Result<()> {
    let mut doc = load_match_document(match_file)?;
    let home_roster = load_roster(home_roster_file)?;
    let away_roster = load_roster(away_roster_file)?;

    doc.team_match.lineup_plan = submit(
        &doc.team_match.lineup_plan,
        &home_roster,
        &away_roster,
        by,
        Utc::now(),
    )?;

    let totals = doc.team_match.lineup_plan.totals;
    if !totals.home_within_cap || !totals.away_within_cap {
        eprintln!(
            "Warning: lineup exceeds the skill cap (home {}, away {}, cap {})",
            totals.home_planned_skill_sum,
            totals.away_planned_skill_sum,
            doc.team_match.lineup_plan.max_team_skill_cap
        );
    }

    emit_match_document(match_file, &doc, write)
}

/// Handle `lineup totals`: print recomputed skill sums and cap compliance.
pub fn handle_totals(match_file: &Path) -> Result<()> {
    let doc = load_match_document(match_file)?;
    let plan = &doc.team_match.lineup_plan;
    let totals = compute_totals(plan);

    println!(
        "home: planned skill {} / cap {} ({})",
        totals.home_planned_skill_sum,
        plan.max_team_skill_cap,
        if totals.home_within_cap { "within cap" } else { "over cap" }
    );
    println!(
        "away: planned skill {} / cap {} ({})",
        totals.away_planned_skill_sum,
        plan.max_team_skill_cap,
        if totals.away_within_cap { "within cap" } else { "over cap" }
    );
    Ok(())
}

/// Handle `lineup lock`.
pub fn handle_lock(match_file: &Path, by: &str, write: bool) -> Result<()> {
    let mut doc = load_match_document(match_file)?;
    doc.team_match.lineup_plan = lock(&doc.team_match.lineup_plan, by, Utc::now())?;
    emit_match_document(match_file, &doc, write)
}

/// Handle `lineup availability`.
pub fn handle_availability(
    match_file: &Path,
    side: LineupSide,
    player: &PlayerId,
    availability: Availability,
    by: &str,
    write: bool,
) -> Result<()> {
    let mut doc = load_match_document(match_file)?;
    doc.team_match.lineup_plan = set_availability(
        &doc.team_match.lineup_plan,
        side,
        player,
        availability,
        by,
        Utc::now(),
    )?;
    emit_match_document(match_file, &doc, write)
}

/// Handle `lineup skill`.
pub fn handle_skill(
    match_file: &Path,
    player: &PlayerId,
    skill: i32,
    by: &str,
    write: bool,
) -> Result<()> {
    let mut doc = load_match_document(match_file)?;
    doc.team_match.lineup_plan =
        apply_skill_change(&doc.team_match.lineup_plan, player, skill, by, Utc::now())?;
    emit_match_document(match_file, &doc, write)
}
