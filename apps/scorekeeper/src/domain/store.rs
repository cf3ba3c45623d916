//! Stateful shell around [`GameState`].
//!
//! The store holds the current state, runs the pure transitions, and tells
//! subscribers what changed. All mutation goes through `&mut self`, so one
//! store is only ever edited from a single control flow at a time.

use std::fmt;

use tracing::{debug, info, warn};

use super::bidding::{BidVerdict, Entry};
use super::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use super::roster::Roster;
use super::rules::RoundSchedule;
use super::snapshot::{snapshot, GameSnapshot};
use super::state::{EntryKind, GameState, RoundOutcome};
use crate::errors::DomainError;

/// Listener invoked once per derived transition, with the new state.
pub type Listener = Box<dyn FnMut(&GameTransition, &GameState)>;

pub struct GameStore {
    state: GameState,
    listeners: Vec<Listener>,
}

impl GameStore {
    pub fn new(roster: Roster, schedule: RoundSchedule) -> Self {
        info!(
            players = roster.len(),
            rounds = schedule.total_rounds(),
            "Game started"
        );
        Self::from_state(GameState::new(roster, schedule))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&GameTransition, &GameState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Record a bid and return the live verdict for the round.
    ///
    /// A bid that makes the set invalid is still recorded; only the commit is
    /// blocked.
    pub fn set_bid(&mut self, player: &str, value: Entry) -> Result<BidVerdict, DomainError> {
        self.set_entry(EntryKind::Bid, player, value)
    }

    pub fn set_achieved(&mut self, player: &str, value: Entry) -> Result<BidVerdict, DomainError> {
        self.set_entry(EntryKind::Achieved, player, value)
    }

    pub fn set_bid_input(&mut self, player: &str, input: &str) -> Result<BidVerdict, DomainError> {
        self.set_entry_input(EntryKind::Bid, player, input)
    }

    pub fn set_achieved_input(
        &mut self,
        player: &str,
        input: &str,
    ) -> Result<BidVerdict, DomainError> {
        self.set_entry_input(EntryKind::Achieved, player, input)
    }

    pub fn set_entry(
        &mut self,
        kind: EntryKind,
        player: &str,
        value: Entry,
    ) -> Result<BidVerdict, DomainError> {
        let next = self.state.with_entry(kind, player, value)?;
        debug!(player, ?kind, ?value, round_index = next.current_round(), "Entry updated");
        Ok(self.replace(next))
    }

    pub fn set_entry_input(
        &mut self,
        kind: EntryKind,
        player: &str,
        input: &str,
    ) -> Result<BidVerdict, DomainError> {
        let next = self.state.with_entry_input(kind, player, input)?;
        debug!(player, ?kind, input, round_index = next.current_round(), "Entry updated");
        Ok(self.replace(next))
    }

    /// Score the open round. On error the state is untouched.
    pub fn commit_round(&mut self) -> Result<RoundOutcome, DomainError> {
        let (next, outcome) = self.state.commit_round().inspect_err(|e| {
            warn!(
                code = %e.code(),
                round_index = self.state.current_round(),
                error = %e,
                "Round commit rejected"
            );
        })?;

        info!(
            round_index = outcome.round_index,
            target = outcome.target,
            "Round committed"
        );
        self.replace(next);

        if self.state.is_complete() {
            info!(standings = ?self.state.standings(), "Game completed");
        }
        Ok(outcome)
    }

    /// Drop the current game, finished or not, and start over with the same
    /// roster and schedule.
    pub fn reset(&mut self) {
        info!(
            round_index = self.state.current_round(),
            completed = self.state.is_complete(),
            "Game reset"
        );
        self.state = self.state.restarted();
        self.notify(&[GameTransition::GameReset]);
    }

    pub fn total_score(&self, player: &str) -> Result<i32, DomainError> {
        self.state.total_score(player)
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn bid_verdict(&self) -> BidVerdict {
        self.state.bid_verdict()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }

    /// Swap in the next state, notify listeners, return the new verdict.
    fn replace(&mut self, next: GameState) -> BidVerdict {
        let before = GameLifecycleView::of(&self.state);
        let after = GameLifecycleView::of(&next);
        self.state = next;

        self.notify(&derive_game_transitions(&before, &after));
        after.bid_verdict
    }

    fn notify(&mut self, transitions: &[GameTransition]) {
        for transition in transitions {
            debug!(?transition, "Game transition");
            for listener in &mut self.listeners {
                listener(transition, &self.state);
            }
        }
    }
}

impl fmt::Debug for GameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
