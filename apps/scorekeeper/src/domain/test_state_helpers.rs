//! Test-only game state helpers for domain unit tests.

use crate::domain::bidding::Entry;
use crate::domain::roster::Roster;
use crate::domain::rules::RoundSchedule;
use crate::domain::state::{GameState, RoundOutcome};

pub const ABC: [&str; 3] = ["A", "B", "C"];

pub fn roster(names: &[&str]) -> Roster {
    Roster::new(names).expect("test roster should be valid")
}

/// Fresh game on the classic 11-round schedule.
pub fn new_game(names: &[&str]) -> GameState {
    GameState::new(roster(names), RoundSchedule::default())
}

/// Fresh game on an explicit schedule.
pub fn new_game_with(names: &[&str], targets: &[u8]) -> GameState {
    let schedule = RoundSchedule::from_sequence(targets.to_vec(), targets.len())
        .expect("test schedule should be valid");
    GameState::new(roster(names), schedule)
}

/// Fill every bid and achieved entry (seating order) without committing.
pub fn with_entries(state: &GameState, bids: &[Entry], achieved: &[Entry]) -> GameState {
    let names: Vec<String> = state.roster().names().to_vec();
    let mut next = state.clone();
    for (seat, name) in names.iter().enumerate() {
        next = next
            .with_bid(name, bids[seat])
            .and_then(|s| s.with_achieved(name, achieved[seat]))
            .expect("entries should be accepted while in progress");
    }
    next
}

/// Enter one round of values and commit it.
pub fn play_round(state: &GameState, bids: &[u16], achieved: &[u16]) -> (GameState, RoundOutcome) {
    let bids: Vec<Entry> = bids.iter().copied().map(Some).collect();
    let achieved: Vec<Entry> = achieved.iter().copied().map(Some).collect();
    with_entries(state, &bids, &achieved)
        .commit_round()
        .expect("round should commit")
}

/// All-zero bids; always legal since every target is positive.
pub fn safe_bids(players: usize) -> Vec<u16> {
    vec![0; players]
}

/// Play every remaining round with zero bids and zero achieved.
pub fn play_to_completion(mut state: GameState) -> GameState {
    while !state.is_complete() {
        let n = state.roster().len();
        state = play_round(&state, &safe_bids(n), &vec![0; n]).0;
    }
    state
}
