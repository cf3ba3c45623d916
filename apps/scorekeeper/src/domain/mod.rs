//! Domain layer: pure scoring logic and the game state machine.

pub mod bidding;
pub mod game_transition;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_store;

// Re-exports for ergonomics
pub use bidding::{parse_entry, validate_bids, BidVerdict, Entry};
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use roster::{PlayerId, Roster};
pub use rules::{RoundSchedule, MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS};
pub use scoring::round_score;
pub use snapshot::{snapshot, GameSnapshot, PlayerSnapshot};
pub use state::{EntryKind, GameState, Phase, PlayerRoundScore, RoundOutcome, Standing};
pub use store::GameStore;
