// apps/scorekeeper/src/domain/game_transition.rs

use serde::{Deserialize, Serialize};

use crate::domain::bidding::BidVerdict;
use crate::domain::state::GameState;

/// The parts of a game state that transitions are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub round_index: usize,
    pub completed: bool,
    pub bid_verdict: BidVerdict,
}

impl GameLifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            round_index: state.current_round(),
            completed: state.is_complete(),
            bid_verdict: state.bid_verdict(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the round with this index was scored.
    RoundCommitted { round_index: usize },

    /// Edge-triggered: the full bid set now sums to the target.
    BidSetBecameInvalid { target: u8, sum: u32 },

    /// Edge-triggered: a previously invalid bid set is acceptable again.
    BidSetBecameValid,

    /// Edge-triggered: InProgress -> Completed
    GameCompleted,

    /// Explicit: the game was thrown away and restarted from round 0.
    /// Never derived from a state diff; only `GameStore::reset` emits it.
    GameReset,
}

/// Derive transitions from before/after lifecycle views.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Rounds scored (one per index advanced)
    for round_index in before.round_index..after.round_index {
        transitions.push(GameTransition::RoundCommitted { round_index });
    }

    // 2. Live bid warning flips
    let was_invalid = matches!(before.bid_verdict, BidVerdict::Invalid { .. });
    match (was_invalid, after.bid_verdict) {
        (false, BidVerdict::Invalid { target, sum }) => {
            transitions.push(GameTransition::BidSetBecameInvalid { target, sum });
        }
        (true, BidVerdict::Valid | BidVerdict::Incomplete) => {
            transitions.push(GameTransition::BidSetBecameValid);
        }
        _ => {}
    }

    // 3. Game End (!Completed -> Completed)
    if !before.completed && after.completed {
        transitions.push(GameTransition::GameCompleted);
    }

    transitions
}
