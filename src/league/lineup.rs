//! Lineup plan validation, totals, and the lock transition.
//!
//! A plan moves `Draft -> Locked`; unlocking is an external concern. Every
//! operation takes the plan by reference and returns an updated copy, so a
//! failed call leaves the caller's value untouched. Mutating operations
//! append one entry to the plan's append-only history; timestamps and the
//! acting user are supplied by the caller.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::error::{LeagueError, Result};
use crate::league::ids::PlayerId;
use crate::league::types::{
    Availability, LineupHistoryEntry, LineupPlan, LineupPlayer, LineupSide, LineupTotals, Roster,
};


/// Compute skill sums and cap compliance for a plan.
///
/// Alternates are bench players not yet committed to the lineup; they are
/// excluded from the sums and therefore from the cap check.
pub fn compute_totals(plan: &LineupPlan) -> LineupTotals {
    let home_sum = planned_skill_sum(&plan.home);
    let away_sum = planned_skill_sum(&plan.away);

    LineupTotals {
        home_planned_skill_sum: home_sum,
        away_planned_skill_sum: away_sum,
        home_within_cap: home_sum <= plan.max_team_skill_cap,
        away_within_cap: away_sum <= plan.max_team_skill_cap,
    }
}

/// Validate a submitted plan against both rosters and refresh its totals.
///
/// Structural rules per side: every player must be on that team's active
/// roster, no player may appear twice, and intended orders must be unique
/// positive integers. All violations are collected into one `Validation`
/// error rather than stopping at the first.
///
/// Cap compliance is intentionally not enforced here; the within-cap flags
/// are advisory and cap policy varies by ruleset.
pub fn submit(
    plan: &LineupPlan,
    home_roster: &Roster,
    away_roster: &Roster,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<LineupPlan> {
    ensure_unlocked(plan)?;

    let mut violations = side_violations(LineupSide::Home, &plan.home, home_roster);
    violations.extend(side_violations(LineupSide::Away, &plan.away, away_roster));
    if !violations.is_empty() {
        return Err(LeagueError::Validation { violations });
    }

    let mut updated = plan.clone();
    updated.totals = compute_totals(&updated);
    push_history(
        &mut updated,
        actor,
        at,
        format!(
            "lineup submitted: {} home / {} away",
            plan.home.len(),
            plan.away.len()
        ),
    );
    Ok(updated)
}

/// Lock a plan, freezing its player lists and totals.
///
/// Fails with `InvalidState` when already locked; the first lock's
/// attribution fields are never overwritten. Over-cap plans may still be
/// locked; surfacing that condition is the caller's job.
pub fn lock(plan: &LineupPlan, actor: &str, at: DateTime<Utc>) -> Result<LineupPlan> {
    ensure_unlocked(plan)?;

    let mut updated = plan.clone();
    updated.totals = compute_totals(&updated);
    updated.locked = true;
    updated.locked_by = Some(actor.to_string());
    updated.locked_at = Some(at);
    push_history(&mut updated, actor, at, "lineup locked".to_string());
    Ok(updated)
}

/// Apply a player's new skill level wherever they appear in the plan and
/// refresh the totals.
///
/// A player absent from the plan, or already at the new level, is a no-op:
/// the plan comes back unchanged and no history is appended.
pub fn apply_skill_change(
    plan: &LineupPlan,
    player_id: &PlayerId,
    new_skill: i32,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<LineupPlan> {
    ensure_unlocked(plan)?;

    let mut updated = plan.clone();
    let mut changed = false;
    for entry in updated.home.iter_mut().chain(updated.away.iter_mut()) {
        if &entry.player_id == player_id && entry.skill_level != new_skill {
            entry.skill_level = new_skill;
            changed = true;
        }
    }

    if changed {
        updated.totals = compute_totals(&updated);
        push_history(
            &mut updated,
            actor,
            at,
            format!("skill level for player {player_id} set to {new_skill}"),
        );
    }
    Ok(updated)
}

/// Flag a lineup player available or unavailable for the match.
pub fn set_availability(
    plan: &LineupPlan,
    side: LineupSide,
    player_id: &PlayerId,
    availability: Availability,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<LineupPlan> {
    ensure_unlocked(plan)?;

    let mut updated = plan.clone();
    let players = match side {
        LineupSide::Home => &mut updated.home,
        LineupSide::Away => &mut updated.away,
    };
    let entry = players
        .iter_mut()
        .find(|p| &p.player_id == player_id)
        .ok_or_else(|| LeagueError::PlayerNotInLineup {
            player_id: player_id.to_string(),
        })?;
    entry.availability = Some(availability);

    push_history(
        &mut updated,
        actor,
        at,
        format!("player {player_id} marked {availability} ({side})"),
    );
    Ok(updated)
}

fn ensure_unlocked(plan: &LineupPlan) -> Result<()> {
    if plan.locked {
        return Err(LeagueError::invalid_state("lineup plan is already locked"));
    }
    Ok(())
}

fn planned_skill_sum(players: &[LineupPlayer]) -> i32 {
    players
        .iter()
        .filter(|p| !p.is_alternate)
        .map(|p| p.skill_level)
        .sum()
}

fn side_violations(side: LineupSide, players: &[LineupPlayer], roster: &Roster) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen_players = HashSet::new();
    let mut seen_orders = HashSet::new();

    for entry in players {
        if !roster.contains(&entry.player_id) {
            violations.push(format!(
                "{side}: player {} is not on the team roster",
                entry.player_id
            ));
        }
        if !seen_players.insert(&entry.player_id) {
            violations.push(format!("{side}: duplicate player {}", entry.player_id));
        }
        if entry.intended_order <= 0 {
            violations.push(format!(
                "{side}: intendedOrder {} for player {} is not a positive integer",
                entry.intended_order, entry.player_id
            ));
        } else if !seen_orders.insert(entry.intended_order) {
            violations.push(format!(
                "{side}: duplicate intendedOrder {}",
                entry.intended_order
            ));
        }
    }
    violations
}

fn push_history(plan: &mut LineupPlan, actor: &str, at: DateTime<Utc>, change: String) {
    plan.history.push(LineupHistoryEntry {
        at,
        by: actor.to_string(),
        change,
    });
}
