//! Linear undo/redo history over opaque snapshots.
//!
//! The tracker keeps one ordered sequence and a cursor. The cursor counts how
//! far back the caller has navigated: `0` is the newest save, larger values
//! are further in the past. Saving while rewound drops everything newer than
//! the snapshot being viewed, the way an editor drops its redo buffer.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

use crate::{ConfigError, TrackerConfig};

const UNINITIALIZED: &str = "tried to fetch a snapshot from the history before saving one";

/// A chronology of snapshots with a navigation cursor.
///
/// Construction does not need a snapshot, so a tracker can exist before the
/// application has any state to record. The navigation methods (`previous`,
/// `next`, `oldest`, `latest`) panic until `save` or `reboot` has been called.
#[derive(Debug, Clone)]
pub struct HistoryTracker<S> {
    // Oldest first; the logical (newest-first) index is `len - 1 - i`.
    snapshots: VecDeque<S>,
    cursor: usize,
    capacity: Option<NonZeroUsize>,
}

impl<S> HistoryTracker<S> {
    /// Create an empty, unbounded tracker.
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::new(),
            cursor: 0,
            capacity: None,
        }
    }

    /// Create an empty tracker using the given settings.
    pub fn with_config(config: &TrackerConfig) -> Result<Self, ConfigError> {
        let capacity = config.capacity()?;
        debug!("Creating history tracker with capacity {:?}", capacity);
        Ok(Self {
            snapshots: VecDeque::new(),
            cursor: 0,
            capacity,
        })
    }

    /// Is there a snapshot older than the current one?
    pub fn has_previous(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Is there a snapshot newer than the current one?
    pub fn has_next(&self) -> bool {
        self.cursor > 0
    }

    /// Record a new snapshot and make it the current one.
    ///
    /// If the cursor was rewound, every snapshot newer than the one being
    /// viewed is discarded first. The viewed snapshot itself is kept.
    pub fn save(&mut self, snapshot: S) {
        let dropped = self.cursor;
        let kept = self.snapshots.len() - dropped;
        self.snapshots.truncate(kept);
        self.snapshots.push_back(snapshot);
        self.cursor = 0;
        self.enforce_capacity();
        debug!(
            "Saved snapshot, dropped {} newer entries, history length {}",
            dropped,
            self.snapshots.len()
        );
    }

    /// Step one snapshot back. At the oldest snapshot this stays put.
    #[track_caller]
    pub fn previous(&mut self) -> &S {
        self.assert_initialized();
        if self.has_previous() {
            self.cursor += 1;
            trace!("Moved back to cursor {}", self.cursor);
        } else {
            trace!("Already at the oldest snapshot");
        }
        self.current_snapshot()
    }

    /// Step one snapshot forward. At the newest snapshot this stays put.
    #[track_caller]
    pub fn next(&mut self) -> &S {
        self.assert_initialized();
        if self.has_next() {
            self.cursor -= 1;
            trace!("Moved forward to cursor {}", self.cursor);
        } else {
            trace!("Already at the latest snapshot");
        }
        self.current_snapshot()
    }

    /// Jump to the oldest stored snapshot.
    #[track_caller]
    pub fn oldest(&mut self) -> &S {
        self.assert_initialized();
        if self.has_previous() {
            self.cursor = self.snapshots.len() - 1;
            trace!("Jumped to oldest snapshot at cursor {}", self.cursor);
        }
        self.current_snapshot()
    }

    /// Jump to the newest stored snapshot.
    #[track_caller]
    pub fn latest(&mut self) -> &S {
        self.assert_initialized();
        if self.has_next() {
            self.cursor = 0;
            trace!("Jumped to latest snapshot");
        }
        self.current_snapshot()
    }

    /// Throw the whole chronology away and start again from `snapshot`.
    pub fn reboot(&mut self, snapshot: S) {
        debug!("Rebooting history, discarding {} snapshots", self.snapshots.len());
        self.snapshots.clear();
        self.snapshots.push_back(snapshot);
        self.cursor = 0;
    }

    /// The snapshot under the cursor, or `None` before the first save.
    pub fn current(&self) -> Option<&S> {
        let index = self.snapshots.len().checked_sub(self.cursor + 1)?;
        self.snapshots.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }

    /// All stored snapshots, newest first.
    pub fn snapshots(&self) -> impl DoubleEndedIterator<Item = &S> + ExactSizeIterator + '_ {
        self.snapshots.iter().rev()
    }

    #[track_caller]
    fn assert_initialized(&self) {
        if self.snapshots.is_empty() {
            panic!("{}", UNINITIALIZED);
        }
    }

    #[track_caller]
    fn current_snapshot(&self) -> &S {
        match self.current() {
            Some(snapshot) => snapshot,
            None => panic!("{}", UNINITIALIZED),
        }
    }

    // Cursor is 0 after a save, so trimming the oldest end never invalidates it.
    fn enforce_capacity(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        let excess = self.snapshots.len().saturating_sub(capacity.get());
        if excess > 0 {
            self.snapshots.drain(..excess);
            debug!(
                "History over capacity {}, dropped {} oldest snapshots",
                capacity, excess
            );
        }
    }
}

impl<S> Default for HistoryTracker<S> {
    fn default() -> Self {
        Self::new()
    }
}
