//! JSON game configuration file.
//!
//! ```json
//! {
//!   "players": ["Ann", "Bo", "Cy"],
//!   "max_hand": 7,
//!   "min_hand": 2
//! }
//! ```
//!
//! or with an explicit schedule:
//!
//! ```json
//! { "schedule": [5, 4, 3, 4, 5], "total_rounds": 5 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::schedule::ScheduleSettings;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Default roster, used when no names are given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,

    #[serde(flatten)]
    pub schedule: ScheduleSettings,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json(&raw).map_err(|e| match e {
            ConfigError::File { detail, .. } => ConfigError::File {
                path: path.display().to_string(),
                detail,
            },
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::File {
            path: "<inline>".to_string(),
            detail: e.to_string(),
        })
    }
}
