//! rewind-history: a linear, navigable chronology of application snapshots.
//!
//! Design rules:
//! - History is linear. Saving after a rewind drops the snapshots newer than the rewind point.
//! - Snapshots are opaque. The tracker never inspects or clones them.
//! - Reading a snapshot before one was saved is a caller bug and panics.
//! - Capacity is optional; when set, the oldest snapshots are dropped first.

pub mod config;
pub mod error;
pub mod tracker;

pub use config::{load_config, TrackerConfig, CONFIG_FILE_EXT};
pub use error::ConfigError;
pub use tracker::HistoryTracker;
