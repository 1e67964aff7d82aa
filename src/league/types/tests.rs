//! Unit tests for domain document (de)serialization

use super::*;
use serde_json::json;

#[test]
fn test_game_deserialization() {
    let game: Game = serde_json::from_value(json!({
        "id": "g1",
        "playerMatchId": "pm_001",
        "rackNumber": 3,
        "pointsHome": 2,
        "pointsAway": 1,
        "winner": "home"
    }))
    .unwrap();

    assert_eq!(game.rack_number, 3);
    assert_eq!(game.points_home, 2);
    assert_eq!(game.winner, RackWinner::Home);
}

#[test]
fn test_player_match_aggregates_default_to_zero() {
    // Documents written before a pairing is scored omit the aggregates.
    let pm: PlayerMatch = serde_json::from_value(json!({
        "id": "pm_001",
        "divisionId": "DIV1",
        "teamMatchId": "tm_001",
        "homePlayerId": "P1",
        "awayPlayerId": "P2",
        "order": 1
    }))
    .unwrap();

    assert_eq!(pm.points_home, 0);
    assert_eq!(pm.points_away, 0);
    assert_eq!(pm.games_won_home, 0);
    assert_eq!(pm.games_won_away, 0);
    assert_eq!(pm.total_racks, 0);
}

#[test]
fn test_match_status_wire_names() {
    assert_eq!(
        serde_json::to_value(MatchStatus::Scheduled).unwrap(),
        json!("scheduled")
    );
    assert_eq!(
        serde_json::to_value(MatchStatus::InProgress).unwrap(),
        json!("inProgress")
    );
    assert_eq!(
        serde_json::to_value(MatchStatus::Completed).unwrap(),
        json!("completed")
    );
}

#[test]
fn test_lineup_plan_serializes_camel_case() {
    let plan = LineupPlan {
        ruleset: "apa-9b".to_string(),
        max_team_skill_cap: 23,
        home: vec![LineupPlayer {
            player_id: PlayerId::new("P1"),
            skill_level: 5,
            intended_order: 1,
            is_alternate: false,
            notes: None,
            availability: Some(Availability::Available),
        }],
        ..LineupPlan::default()
    };

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["maxTeamSkillCap"], 23);
    assert_eq!(value["home"][0]["playerId"], "P1");
    assert_eq!(value["home"][0]["intendedOrder"], 1);
    assert_eq!(value["home"][0]["availability"], "available");
    // Unlocked plans omit the lock attribution fields entirely.
    assert!(value.get("lockedBy").is_none());
    assert!(value.get("lockedAt").is_none());
}

#[test]
fn test_match_document_games_for_filters_by_player_match() {
    let doc: MatchDocument = serde_json::from_value(json!({
        "teamMatch": {
            "id": "tm_001",
            "divisionId": "DIV1",
            "week": 4,
            "scheduledAt": "2025-03-01T19:00:00Z",
            "homeTeamId": "T1",
            "awayTeamId": "T2"
        },
        "playerMatches": [],
        "games": [
            {"id": "g1", "playerMatchId": "pm_a", "rackNumber": 1,
             "pointsHome": 1, "pointsAway": 0, "winner": "home"},
            {"id": "g2", "playerMatchId": "pm_b", "rackNumber": 1,
             "pointsHome": 0, "pointsAway": 2, "winner": "away"},
            {"id": "g3", "playerMatchId": "pm_a", "rackNumber": 2,
             "pointsHome": 0, "pointsAway": 1, "winner": "away"}
        ]
    }))
    .unwrap();

    let games = doc.games_for(&PlayerMatchId::new("pm_a"));
    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.player_match_id.as_str() == "pm_a"));
    assert_eq!(doc.team_match.status, MatchStatus::Scheduled);
}
