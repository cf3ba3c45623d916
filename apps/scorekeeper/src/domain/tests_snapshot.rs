use serde_json::json;

use crate::domain::bidding::BidVerdict;
use crate::domain::snapshot::snapshot;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{new_game_with, play_round, play_to_completion, ABC};

#[test]
fn snapshot_in_progress_exposes_pending_entries_and_verdict() {
    let state = new_game_with(&ABC, &[4, 3, 4]);
    let state = state
        .with_bid("A", Some(2))
        .and_then(|s| s.with_bid("B", Some(1)))
        .and_then(|s| s.with_bid("C", Some(1)))
        .and_then(|s| s.with_achieved("C", Some(0)))
        .unwrap();

    let snap = snapshot(&state);
    assert_eq!(snap.phase, Phase::InProgress);
    assert!(!snap.is_complete());
    assert_eq!(snap.round_index, 0);
    assert_eq!(snap.total_rounds, 3);
    assert_eq!(snap.current_target, Some(4));
    assert_eq!(snap.targets, vec![4, 3, 4]);
    assert_eq!(snap.bid_verdict, BidVerdict::Invalid { target: 4, sum: 4 });
    assert_eq!(snap.players[2].pending_bid, Some(1));
    assert_eq!(snap.players[2].pending_achieved, Some(0));
    assert_eq!(snap.players[0].pending_achieved, None);
    assert_eq!(snap.players[0].round_scores, vec![None, None, None]);
    assert!(snap.final_standings.is_none());
}

#[test]
fn snapshot_tracks_scores_and_totals() {
    let state = new_game_with(&ABC, &[4, 3, 4]);
    let (state, _) = play_round(&state, &[1, 1, 1], &[1, 2, 1]);
    let snap = snapshot(&state);
    assert_eq!(snap.round_index, 1);
    assert_eq!(snap.current_target, Some(3));
    assert_eq!(snap.players[1].round_scores, vec![Some(2), None, None]);
    assert_eq!(snap.players[1].total, 2);
    assert_eq!(snap.players[0].total, 12);
}

#[test]
fn snapshot_complete_carries_final_standings() {
    let state = play_to_completion(new_game_with(&ABC, &[2, 1, 2]));
    let snap = snapshot(&state);
    assert!(snap.is_complete());
    assert_eq!(snap.current_target, None);
    let standings = snap.final_standings.expect("standings once complete");
    assert_eq!(standings.len(), 3);
    assert!(standings.iter().all(|s| s.total == 30));
}

#[test]
fn snapshot_serializes_with_tagged_verdict() {
    let state = new_game_with(&ABC, &[1]);
    let value = serde_json::to_value(snapshot(&state)).unwrap();
    assert_eq!(value["phase"], json!("in_progress"));
    assert_eq!(value["bid_verdict"], json!({ "status": "incomplete" }));
    assert_eq!(value["players"][0]["pending_bid"], json!(null));
    assert!(value.get("final_standings").is_none());
}
