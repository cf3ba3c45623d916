//! Error codes reported to the presentation layer.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Entry validation
    /// Bid/achieved input is not a non-negative integer
    InvalidValue,
    /// Commit attempted with unset entries
    IncompleteEntry,
    /// Bid sum equals the round target
    InvalidBidSet,
    /// Name not on the roster
    UnknownPlayer,

    // Lifecycle
    /// Round lookup outside the schedule
    OutOfRange,
    /// Mutation after the game finished
    GameCompleted,

    // Setup
    InvalidRoster,
    ConfigError,

    // Input
    /// Unrecognized or malformed command line
    InvalidCommand,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "INVALID_VALUE",
            Self::IncompleteEntry => "INCOMPLETE_ENTRY",
            Self::InvalidBidSet => "INVALID_BID_SET",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",

            Self::OutOfRange => "OUT_OF_RANGE",
            Self::GameCompleted => "GAME_COMPLETED",

            Self::InvalidRoster => "INVALID_ROSTER",
            Self::ConfigError => "CONFIG_ERROR",

            Self::InvalidCommand => "INVALID_COMMAND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
