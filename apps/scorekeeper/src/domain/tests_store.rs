use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::bidding::BidVerdict;
use crate::domain::game_transition::GameTransition;
use crate::domain::rules::RoundSchedule;
use crate::domain::store::GameStore;
use crate::domain::test_state_helpers::{roster, ABC};
use crate::errors::DomainError;

fn store(targets: &[u8]) -> GameStore {
    let schedule = RoundSchedule::from_sequence(targets.to_vec(), targets.len()).unwrap();
    GameStore::new(roster(&ABC), schedule)
}

fn record(store: &mut GameStore) -> Rc<RefCell<Vec<GameTransition>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |t, _| sink.borrow_mut().push(t.clone()));
    seen
}

#[test]
fn set_bid_reports_live_verdict() {
    let mut store = store(&[6, 5, 6]);
    assert_eq!(store.set_bid("A", Some(2)), Ok(BidVerdict::Incomplete));
    assert_eq!(store.set_bid("B", Some(2)), Ok(BidVerdict::Incomplete));
    assert_eq!(
        store.set_bid("C", Some(2)),
        Ok(BidVerdict::Invalid { target: 6, sum: 6 })
    );
    // Entry is recorded even though the set is invalid.
    assert_eq!(store.state().pending_bid(2), Some(2));
    assert_eq!(store.set_bid_input("C", "1"), Ok(BidVerdict::Valid));
    assert_eq!(store.bid_verdict(), BidVerdict::Valid);
}

#[test]
fn invalid_input_is_rejected_without_state_change() {
    let mut store = store(&[6, 5, 6]);
    store.set_achieved("A", Some(3)).unwrap();
    let before = store.state().clone();
    assert_eq!(
        store.set_achieved_input("A", "three"),
        Err(DomainError::invalid_value("three"))
    );
    assert_eq!(store.state(), &before);
}

#[test]
fn listeners_see_edges_in_order() {
    let mut store = store(&[3, 3]);
    let seen = record(&mut store);

    store.set_bid("A", Some(1)).unwrap();
    store.set_bid("B", Some(1)).unwrap();
    store.set_bid("C", Some(1)).unwrap(); // sum 3 == target
    store.set_bid("C", Some(0)).unwrap();
    for name in ABC {
        store.set_achieved(name, Some(1)).unwrap();
    }
    store.commit_round().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            GameTransition::BidSetBecameInvalid { target: 3, sum: 3 },
            GameTransition::BidSetBecameValid,
            GameTransition::RoundCommitted { round_index: 0 },
        ]
    );
}

#[test]
fn rejected_commit_notifies_nobody() {
    let mut store = store(&[3, 3]);
    let seen = record(&mut store);
    assert!(matches!(
        store.commit_round(),
        Err(DomainError::IncompleteEntry { .. })
    ));
    assert!(seen.borrow().is_empty());
    assert_eq!(store.state().current_round(), 0);
}

#[test]
fn final_commit_emits_game_completed() {
    let mut store = store(&[2]);
    let seen = record(&mut store);
    for name in ABC {
        store.set_bid(name, Some(0)).unwrap();
        store.set_achieved(name, Some(0)).unwrap();
    }
    let outcome = store.commit_round().unwrap();
    assert_eq!(outcome.scores.len(), 3);
    assert!(store.is_complete());
    assert_eq!(store.total_score("B"), Ok(10));
    assert_eq!(
        *seen.borrow(),
        vec![
            GameTransition::RoundCommitted { round_index: 0 },
            GameTransition::GameCompleted,
        ]
    );
    assert_eq!(store.set_bid("A", Some(1)), Err(DomainError::GameCompleted));
    assert_eq!(store.commit_round().unwrap_err(), DomainError::GameCompleted);
    assert!(store.snapshot().final_standings.is_some());
}

#[test]
fn reset_starts_over_with_same_roster_and_schedule() {
    let mut store = store(&[2]);
    for name in ABC {
        store.set_bid(name, Some(0)).unwrap();
        store.set_achieved(name, Some(0)).unwrap();
    }
    store.commit_round().unwrap();
    assert!(store.is_complete());

    let seen = record(&mut store);
    store.reset();

    assert_eq!(*seen.borrow(), vec![GameTransition::GameReset]);
    assert!(!store.is_complete());
    assert_eq!(store.state().current_round(), 0);
    assert_eq!(store.state().current_target(), Some(2));
    assert_eq!(store.total_score("A"), Ok(0));
    assert_eq!(store.state().roster().names(), &["A", "B", "C"]);
    assert_eq!(store.set_bid("A", Some(1)), Ok(BidVerdict::Incomplete));
}

#[test]
fn reset_mid_round_clears_pending_entries() {
    let mut store = store(&[3, 3]);
    store.set_bid("A", Some(1)).unwrap();
    store.set_bid("B", Some(1)).unwrap();
    store.set_bid("C", Some(1)).unwrap();
    assert!(!store.bid_verdict().is_valid());

    let seen = record(&mut store);
    store.reset();

    // Only the reset itself is announced, not the lifted warning.
    assert_eq!(*seen.borrow(), vec![GameTransition::GameReset]);
    assert_eq!(store.state().pending_bid(0), None);
    assert_eq!(store.bid_verdict(), BidVerdict::Incomplete);
}
