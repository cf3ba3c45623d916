//! Public snapshot API for rendering game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{BidVerdict, Entry};
use crate::domain::state::{GameState, Phase, Standing};

/// One column of the score grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub pending_bid: Entry,
    pub pending_achieved: Entry,
    /// One slot per scheduled round; `None` renders blank.
    pub round_scores: Vec<Option<i32>>,
    pub total: i32,
}

/// Everything a renderer needs for the current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round_index: usize,
    pub total_rounds: usize,
    /// Target of the open round; absent once complete.
    pub current_target: Option<u8>,
    /// Grid row labels, one per round.
    pub targets: Vec<u8>,
    pub players: Vec<PlayerSnapshot>,
    pub bid_verdict: BidVerdict,
    /// Present only once the game is complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_standings: Option<Vec<Standing>>,
}

impl GameSnapshot {
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }
}

/// Entry point: produce a snapshot of the current game state.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let players = state
        .roster()
        .names()
        .iter()
        .enumerate()
        .map(|(seat, name)| PlayerSnapshot {
            name: name.clone(),
            pending_bid: state.pending_bid(seat),
            pending_achieved: state.pending_achieved(seat),
            round_scores: state.score_sheet()[seat].clone(),
            total: state.total_for(seat),
        })
        .collect();

    GameSnapshot {
        phase: state.phase(),
        round_index: state.current_round(),
        total_rounds: state.schedule().total_rounds(),
        current_target: state.current_target(),
        targets: state.schedule().targets().to_vec(),
        players,
        bid_verdict: state.bid_verdict(),
        final_standings: state.is_complete().then(|| state.standings()),
    }
}
