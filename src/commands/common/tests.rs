//! Unit tests for document file helpers

use super::*;
use serde_json::json;
use std::io::Write as _;
use tempfile::NamedTempFile;

fn sample_document_json() -> serde_json::Value {
    json!({
        "teamMatch": {
            "id": "tm_001",
            "divisionId": "DIV1",
            "week": 4,
            "scheduledAt": "2025-03-01T19:00:00Z",
            "homeTeamId": "T1",
            "awayTeamId": "T2"
        },
        "playerMatches": [
            {"id": "pm_a", "divisionId": "DIV1", "teamMatchId": "tm_001",
             "homePlayerId": "H1", "awayPlayerId": "A1", "order": 1}
        ],
        "games": [
            {"id": "g1", "playerMatchId": "pm_a", "rackNumber": 1,
             "pointsHome": 2, "pointsAway": 1, "winner": "home"}
        ]
    })
}

#[test]
fn test_load_match_document() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_document_json()).unwrap();

    let doc = load_match_document(file.path()).unwrap();

    assert_eq!(doc.team_match.id.as_str(), "tm_001");
    assert_eq!(doc.player_matches.len(), 1);
    assert_eq!(doc.games.len(), 1);
}

#[test]
fn test_load_match_document_missing_file() {
    let err = load_match_document(Path::new("/nonexistent/match.json")).unwrap_err();
    match err {
        crate::LeagueError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_load_match_document_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    let err = load_match_document(file.path()).unwrap_err();
    match err {
        crate::LeagueError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_write_and_reload_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_document_json()).unwrap();
    let doc = load_match_document(file.path()).unwrap();

    let out = NamedTempFile::new().unwrap();
    write_match_document(out.path(), &doc).unwrap();
    let reloaded = load_match_document(out.path()).unwrap();

    assert_eq!(reloaded, doc);
}

#[test]
fn test_load_roster() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({"teamId": "T1", "playerIds": ["H1", "H2"]})
    )
    .unwrap();

    let roster = load_roster(file.path()).unwrap();

    assert_eq!(roster.team_id.as_str(), "T1");
    assert_eq!(roster.player_ids.len(), 2);
}
