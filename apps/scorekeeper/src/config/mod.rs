//! Game configuration.
//!
//! Layers, lowest precedence first: built-in defaults, `GUESSING_*`
//! environment variables, an optional JSON file, then command-line flags.
//! Every layer funnels into [`ScheduleSettings::build`], which rejects
//! inconsistent schedules before a game can start.

pub mod file;
pub mod schedule;

use std::path::Path;

use tracing::debug;

pub use file::FileConfig;
pub use schedule::ScheduleSettings;

use crate::domain::rules::RoundSchedule;
use crate::errors::ConfigError;

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub schedule: RoundSchedule,
    /// Roster from the config file, if it named one.
    pub players: Option<Vec<String>>,
}

impl GameConfig {
    /// Resolve env → file → flags into a schedule.
    pub fn resolve(
        env: ScheduleSettings,
        file: Option<&Path>,
        flags: ScheduleSettings,
    ) -> Result<Self, ConfigError> {
        let mut settings = env;
        let mut players = None;
        if let Some(path) = file {
            let loaded = FileConfig::load(path)?;
            debug!(path = %path.display(), "Loaded config file");
            settings = settings.overlay(loaded.schedule);
            players = loaded.players;
        }
        settings = settings.overlay(flags);
        debug!(?settings, "Resolved schedule settings");

        Ok(Self {
            schedule: settings.build()?,
            players,
        })
    }
}
