#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

pub use config::{FileConfig, GameConfig, ScheduleSettings};
pub use domain::{
    BidVerdict, Entry, EntryKind, GameSnapshot, GameState, GameStore, GameTransition, Phase,
    PlayerId, Roster, RoundOutcome, RoundSchedule, Standing,
};
pub use errors::{ConfigError, DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
