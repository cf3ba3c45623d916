use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{RoundSchedule, DEFAULT_MAX_HAND, DEFAULT_MIN_HAND};
use crate::errors::ConfigError;

pub const ENV_MAX_HAND: &str = "GUESSING_MAX_HAND";
pub const ENV_MIN_HAND: &str = "GUESSING_MIN_HAND";
pub const ENV_SCHEDULE: &str = "GUESSING_SCHEDULE";
pub const ENV_TOTAL_ROUNDS: &str = "GUESSING_TOTAL_ROUNDS";

/// Round schedule settings from one configuration layer.
///
/// A layer either describes an up-and-down range (`max_hand`/`min_hand`) or
/// an explicit `schedule`, optionally with the `total_rounds` it is expected
/// to have. Unset fields defer to earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hand: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_hand: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<usize>,
}

impl ScheduleSettings {
    /// Read the `GUESSING_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schedule = match lookup(ENV_SCHEDULE) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_list(ENV_SCHEDULE, &raw)?),
            _ => None,
        };
        Ok(Self {
            max_hand: parse_var(&lookup, ENV_MAX_HAND)?,
            min_hand: parse_var(&lookup, ENV_MIN_HAND)?,
            schedule,
            total_rounds: parse_var(&lookup, ENV_TOTAL_ROUNDS)?,
        })
    }

    /// Layer `other` on top of `self`.
    ///
    /// A layer that names a range replaces an earlier explicit schedule and
    /// vice versa, so the most recent layer always decides the shape.
    pub fn overlay(self, other: Self) -> Self {
        let mut merged = self;
        if other.schedule.is_some() {
            merged.max_hand = None;
            merged.min_hand = None;
            merged.total_rounds = None;
            merged.schedule = other.schedule;
        }
        if other.max_hand.is_some() || other.min_hand.is_some() {
            merged.schedule = None;
            merged.total_rounds = None;
            merged.max_hand = other.max_hand.or(merged.max_hand);
            merged.min_hand = other.min_hand.or(merged.min_hand);
        }
        if other.total_rounds.is_some() {
            merged.total_rounds = other.total_rounds;
        }
        merged
    }

    /// Build the schedule, failing fast on any inconsistency.
    pub fn build(&self) -> Result<RoundSchedule, ConfigError> {
        if let Some(targets) = &self.schedule {
            let declared = self.total_rounds.unwrap_or(targets.len());
            return RoundSchedule::from_sequence(targets.clone(), declared);
        }

        let schedule = RoundSchedule::up_and_down(
            self.max_hand.unwrap_or(DEFAULT_MAX_HAND),
            self.min_hand.unwrap_or(DEFAULT_MIN_HAND),
        )?;
        match self.total_rounds {
            Some(declared) if declared != schedule.total_rounds() => {
                Err(ConfigError::LengthMismatch {
                    declared,
                    actual: schedule.total_rounds(),
                })
            }
            _ => Ok(schedule),
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map(Some).map_err(|_| {
            ConfigError::Env {
                var: name,
                detail: format!("expected a non-negative integer, got {raw:?}"),
            }
        }),
        _ => Ok(None),
    }
}

fn parse_list(name: &'static str, raw: &str) -> Result<Vec<u8>, ConfigError> {
    raw.split(',')
        .map(|part| {
            part.trim().parse::<u8>().map_err(|_| ConfigError::Env {
                var: name,
                detail: format!("expected comma-separated hand sizes, got {raw:?}"),
            })
        })
        .collect()
}
