use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A bid or achieved entry. `None` is the explicit unset marker.
pub type Entry = Option<u16>;

/// Outcome of checking a round's bid set against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BidVerdict {
    /// At least one bid is still unset; nothing to block yet.
    Incomplete,
    /// Every player has bid and the sum differs from the target.
    Valid,
    /// Every player has bid and the sum equals the target.
    Invalid { target: u8, sum: u32 },
}

impl BidVerdict {
    pub const REASON_SUM_EQUALS_TARGET: &'static str = "bid sum equals target";

    pub fn is_valid(&self) -> bool {
        !matches!(self, BidVerdict::Invalid { .. })
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            BidVerdict::Invalid { .. } => Some(Self::REASON_SUM_EQUALS_TARGET),
            _ => None,
        }
    }
}

/// Check a full or partial bid set against the round target.
///
/// Achieved counts for a round always add up to the target, so a bid set that
/// also adds up to it would let every player bid exactly right.
pub fn validate_bids(target: u8, bids: &[Entry]) -> BidVerdict {
    let mut sum: u32 = 0;
    for bid in bids {
        match bid {
            Some(b) => sum += u32::from(*b),
            None => return BidVerdict::Incomplete,
        }
    }
    if sum == u32::from(target) {
        BidVerdict::Invalid { target, sum }
    } else {
        BidVerdict::Valid
    }
}

/// Parse raw text from an entry field.
///
/// Blank input clears the entry; anything other than a non-negative whole
/// number is rejected.
pub fn parse_entry(input: &str) -> Result<Entry, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_value(input));
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|_| DomainError::invalid_value(input))
}
