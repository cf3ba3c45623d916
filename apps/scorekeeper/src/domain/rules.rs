use std::ops::RangeInclusive;

use serde::Serialize;

use crate::errors::{ConfigError, DomainError};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 7;

pub const DEFAULT_MAX_HAND: u8 = 7;
pub const DEFAULT_MIN_HAND: u8 = 2;

// Classic up-and-down schedule: 7 → 2 → 7, 11 rounds.
pub const CLASSIC_SCHEDULE: [u8; 11] = [7, 6, 5, 4, 3, 2, 3, 4, 5, 6, 7];

/// Longest explicit schedule accepted. Keeps every player total within `i32`
/// even with maximal exact bids in every round.
pub const MAX_ROUNDS: usize = 1024;

pub fn player_count_range() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// Fixed, ordered per-round targets (hand sizes) for a game.
///
/// The round count is always the length of the sequence; there is no way to
/// build a schedule whose declared round count disagrees with its targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSchedule {
    targets: Vec<u8>,
}

impl RoundSchedule {
    /// Symmetric schedule from `max` down to `min` and back up to `max`.
    pub fn up_and_down(max: u8, min: u8) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidHandRange { max, min });
        }
        let targets = (min..=max)
            .rev()
            .chain((min..max).map(|h| h + 1))
            .collect();
        Ok(Self { targets })
    }

    /// Explicit schedule. `declared_rounds` is the round count the caller
    /// sizes its score sheet with and must match the sequence length.
    pub fn from_sequence(targets: Vec<u8>, declared_rounds: usize) -> Result<Self, ConfigError> {
        if targets.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        if declared_rounds != targets.len() {
            return Err(ConfigError::LengthMismatch {
                declared: declared_rounds,
                actual: targets.len(),
            });
        }
        if targets.len() > MAX_ROUNDS {
            return Err(ConfigError::TooManyRounds {
                rounds: targets.len(),
                max: MAX_ROUNDS,
            });
        }
        if let Some(round_index) = targets.iter().position(|&t| t == 0) {
            return Err(ConfigError::ZeroTarget { round_index });
        }
        if !targets.iter().eq(targets.iter().rev()) {
            return Err(ConfigError::NotSymmetric(targets));
        }
        // Symmetric, so a non-increasing first half means down then back up.
        let mid = (targets.len() - 1) / 2;
        if targets[..=mid].windows(2).any(|w| w[0] < w[1]) {
            return Err(ConfigError::NotDownAndUp(targets));
        }
        Ok(Self { targets })
    }

    /// Target for a 0-based round index.
    pub fn target_for(&self, round_index: usize) -> Result<u8, DomainError> {
        self.targets
            .get(round_index)
            .copied()
            .ok_or(DomainError::OutOfRange {
                round_index,
                total_rounds: self.targets.len(),
            })
    }

    pub fn total_rounds(&self) -> usize {
        self.targets.len()
    }

    pub fn targets(&self) -> &[u8] {
        &self.targets
    }

    pub fn max_hand(&self) -> u8 {
        self.targets.iter().copied().max().unwrap_or(0)
    }

    pub fn min_hand(&self) -> u8 {
        self.targets.iter().copied().min().unwrap_or(0)
    }
}

impl Default for RoundSchedule {
    fn default() -> Self {
        Self {
            targets: CLASSIC_SCHEDULE.to_vec(),
        }
    }
}
