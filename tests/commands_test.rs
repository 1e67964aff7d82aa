//! Integration tests for command handlers

use rackscore::{
    commands::{
        common::load_match_document,
        lineup::{handle_lock, handle_skill, handle_validate},
        recompute::{handle_finalize, handle_recompute},
    },
    league::types::MatchStatus,
    LeagueError,
};
use serde_json::json;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;

fn match_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({
            "teamMatch": {
                "id": "tm_001",
                "divisionId": "DIV1",
                "week": 4,
                "scheduledAt": "2025-03-01T19:00:00Z",
                "homeTeamId": "T1",
                "awayTeamId": "T2",
                "lineupPlan": {
                    "ruleset": "apa-9b",
                    "maxTeamSkillCap": 23,
                    "home": [
                        {"playerId": "H1", "skillLevel": 6, "intendedOrder": 1},
                        {"playerId": "H2", "skillLevel": 5, "intendedOrder": 2}
                    ],
                    "away": [
                        {"playerId": "A1", "skillLevel": 7, "intendedOrder": 1},
                        {"playerId": "A2", "skillLevel": 6, "intendedOrder": 2}
                    ]
                }
            },
            "playerMatches": [
                {"id": "pm_a", "divisionId": "DIV1", "teamMatchId": "tm_001",
                 "homePlayerId": "H1", "awayPlayerId": "A1", "order": 1},
                {"id": "pm_b", "divisionId": "DIV1", "teamMatchId": "tm_001",
                 "homePlayerId": "H2", "awayPlayerId": "A2", "order": 2}
            ],
            "games": [
                {"id": "g1", "playerMatchId": "pm_a", "rackNumber": 1,
                 "pointsHome": 6, "pointsAway": 3, "winner": "home"},
                {"id": "g2", "playerMatchId": "pm_b", "rackNumber": 1,
                 "pointsHome": 4, "pointsAway": 5, "winner": "away"}
            ]
        })
    )
    .unwrap();
    file
}

fn roster_file(team_id: &str, player_ids: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({"teamId": team_id, "playerIds": player_ids})
    )
    .unwrap();
    file
}

#[test]
fn test_handle_recompute_writes_updated_scores() {
    let file = match_file();

    handle_recompute(file.path(), true, false).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    assert_eq!(doc.team_match.team_score_home, 10);
    assert_eq!(doc.team_match.team_score_away, 8);
    assert_eq!(doc.player_matches[0].points_home, 6);
    assert_eq!(doc.player_matches[0].games_won_home, 1);
    assert_eq!(doc.player_matches[1].total_racks, 1);
}

#[test]
fn test_handle_recompute_without_write_leaves_file_alone() {
    let file = match_file();

    handle_recompute(file.path(), false, false).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    assert_eq!(doc.team_match.team_score_home, 0);
}

#[test]
fn test_handle_recompute_missing_file() {
    let err = handle_recompute(Path::new("/nonexistent/match.json"), false, false).unwrap_err();
    match err {
        LeagueError::Io(_) => (),
        other => panic!("Expected Io, got {other:?}"),
    }
}

#[test]
fn test_handle_finalize_marks_match_completed() {
    let file = match_file();

    handle_finalize(file.path(), true).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    assert_eq!(doc.team_match.status, MatchStatus::Completed);
    assert_eq!(doc.team_match.team_score_home, 10);
}

#[test]
fn test_handle_validate_then_lock() {
    let file = match_file();
    let home = roster_file("T1", &["H1", "H2", "H3"]);
    let away = roster_file("T2", &["A1", "A2"]);

    handle_validate(file.path(), home.path(), away.path(), "captain", true).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    let plan = &doc.team_match.lineup_plan;
    assert_eq!(plan.totals.home_planned_skill_sum, 11);
    assert_eq!(plan.totals.away_planned_skill_sum, 13);
    assert_eq!(plan.history.len(), 1);

    handle_lock(file.path(), "captain", true).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    let plan = &doc.team_match.lineup_plan;
    assert!(plan.locked);
    assert_eq!(plan.locked_by.as_deref(), Some("captain"));
    assert_eq!(plan.history.len(), 2);

    // A second lock attempt is rejected and the file keeps the first lock.
    let err = handle_lock(file.path(), "opponent", true).unwrap_err();
    assert!(matches!(err, LeagueError::InvalidState { .. }));
    let doc = load_match_document(file.path()).unwrap();
    assert_eq!(
        doc.team_match.lineup_plan.locked_by.as_deref(),
        Some("captain")
    );
}

#[test]
fn test_handle_validate_rejects_unknown_roster_member() {
    let file = match_file();
    let home = roster_file("T1", &["H1"]); // H2 missing
    let away = roster_file("T2", &["A1", "A2"]);

    let err =
        handle_validate(file.path(), home.path(), away.path(), "captain", true).unwrap_err();

    match err {
        LeagueError::Validation { violations } => {
            assert_eq!(violations.len(), 1);
            assert!(violations[0].contains("H2"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }

    // Nothing was written on failure.
    let doc = load_match_document(file.path()).unwrap();
    assert!(doc.team_match.lineup_plan.history.is_empty());
}

#[test]
fn test_handle_skill_updates_plan_in_place() {
    let file = match_file();

    handle_skill(file.path(), &"H1".parse().unwrap(), 9, "operator", true).unwrap();

    let doc = load_match_document(file.path()).unwrap();
    let plan = &doc.team_match.lineup_plan;
    assert_eq!(plan.home[0].skill_level, 9);
    assert_eq!(plan.totals.home_planned_skill_sum, 14);
    assert_eq!(plan.history.len(), 1);
}
