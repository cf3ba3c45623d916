//! Domain-level error type for the scoring core.
//!
//! Every variant is recoverable: the presentation layer reports it and
//! re-prompts. Operations that fail leave the game state untouched.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bid or achieved input that is not a non-negative integer.
    #[error("invalid value {input:?}: expected a non-negative whole number or blank")]
    InvalidValue { input: String },

    /// Commit attempted while some bids or achieved values are unset.
    #[error("missing entries for: {}", missing.join(", "))]
    IncompleteEntry { missing: Vec<String> },

    /// The full bid set sums to the round target.
    #[error("total bids cannot equal {target} (bid sum is {sum})")]
    InvalidBidSet { target: u8, sum: u32 },

    /// Round lookup outside the configured schedule.
    #[error("round index {round_index} is outside 0..{total_rounds}")]
    OutOfRange {
        round_index: usize,
        total_rounds: usize,
    },

    /// Mutation attempted after the final round was committed.
    #[error("game is complete")]
    GameCompleted,

    /// Entry addressed to a name that is not on the roster.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// Player setup rejected.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

impl DomainError {
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
        }
    }

    pub fn invalid_roster(detail: impl Into<String>) -> Self {
        Self::InvalidRoster(detail.into())
    }

    /// Stable machine-readable code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidValue { .. } => ErrorCode::InvalidValue,
            DomainError::IncompleteEntry { .. } => ErrorCode::IncompleteEntry,
            DomainError::InvalidBidSet { .. } => ErrorCode::InvalidBidSet,
            DomainError::OutOfRange { .. } => ErrorCode::OutOfRange,
            DomainError::GameCompleted => ErrorCode::GameCompleted,
            DomainError::UnknownPlayer(_) => ErrorCode::UnknownPlayer,
            DomainError::InvalidRoster(_) => ErrorCode::InvalidRoster,
        }
    }
}

/// Configuration defects, raised while building a round schedule.
///
/// These are construction-time failures; a game never starts with a
/// schedule that produced one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round schedule is empty")]
    EmptySchedule,

    #[error("round {round_index} has a zero target; targets must be positive")]
    ZeroTarget { round_index: usize },

    #[error("declared {declared} rounds but the schedule has {actual} targets")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("round schedule must be symmetric, got {0:?}")]
    NotSymmetric(Vec<u8>),

    #[error("round schedule must step down to its smallest hand and back up, got {0:?}")]
    NotDownAndUp(Vec<u8>),

    #[error("round schedule has {rounds} rounds; at most {max} are allowed")]
    TooManyRounds { rounds: usize, max: usize },

    #[error("hand sizes must satisfy 1 <= min ({min}) <= max ({max})")]
    InvalidHandRange { max: u8, min: u8 },

    #[error("{var}: {detail}")]
    Env { var: &'static str, detail: String },

    #[error("config file {path}: {detail}")]
    File { path: String, detail: String },
}

impl ConfigError {
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}
