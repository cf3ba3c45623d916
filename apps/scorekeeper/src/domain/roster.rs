//! Validated player list handed to the core at game start.

use std::collections::HashSet;

use serde::Serialize;

use super::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::DomainError;

/// Seat index into the roster (0-based, seating order).
pub type PlayerId = usize;

/// Ordered, unique, non-empty player names. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Trim and validate player names.
    ///
    /// Names are compared after trimming, so `"Ann"` and `" Ann "` collide.
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();

        if names.len() < MIN_PLAYERS {
            return Err(DomainError::invalid_roster(format!(
                "At least {MIN_PLAYERS} players are required (got {})",
                names.len()
            )));
        }
        if names.len() > MAX_PLAYERS {
            return Err(DomainError::invalid_roster(format!(
                "At most {MAX_PLAYERS} players are allowed (got {})",
                names.len()
            )));
        }
        if names.iter().any(String::is_empty) {
            return Err(DomainError::invalid_roster("All player names are required"));
        }
        let mut seen = HashSet::with_capacity(names.len());
        if !names.iter().all(|n| seen.insert(n.as_str())) {
            return Err(DomainError::invalid_roster(
                "All player names must be unique",
            ));
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated roster; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Resolve a name to its seat. Input is trimmed like roster names are.
    pub fn seat_of(&self, name: &str) -> Result<PlayerId, DomainError> {
        let name = name.trim();
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DomainError::UnknownPlayer(name.to_string()))
    }
}
