//! Construction-time settings for a [`HistoryTracker`](crate::HistoryTracker).
//!
//! Trackers built with [`HistoryTracker::new`](crate::HistoryTracker::new) are unbounded.
//! A config only matters when the host wants to cap memory use.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::info;

use crate::ConfigError;

/// File extension recommended for tracker config files.
pub const CONFIG_FILE_EXT: &str = "rewind.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Upper bound on retained snapshots. `None` keeps everything.
    #[serde(default = "default_max_snapshots")]
    pub max_snapshots: Option<usize>,
}

fn default_max_snapshots() -> Option<usize> {
    None
}

impl TrackerConfig {
    pub fn unbounded() -> Self {
        Self {
            max_snapshots: None,
        }
    }

    pub fn with_max_snapshots(max_snapshots: usize) -> Self {
        Self {
            max_snapshots: Some(max_snapshots),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capacity().map(|_| ())
    }

    /// The validated capacity, `None` when unbounded.
    pub(crate) fn capacity(&self) -> Result<Option<NonZeroUsize>, ConfigError> {
        match self.max_snapshots {
            None => Ok(None),
            Some(n) => NonZeroUsize::new(n)
                .map(Some)
                .ok_or(ConfigError::ZeroCapacity),
        }
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load a tracker config from disk.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<TrackerConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read tracker config: {}", path.display()))?;
    let config = TrackerConfig::from_json(&data)
        .with_context(|| format!("parse tracker config: {}", path.display()))?;
    info!(
        "Loaded tracker config from {} (max_snapshots: {:?})",
        path.display(),
        config.max_snapshots
    );
    Ok(config)
}
