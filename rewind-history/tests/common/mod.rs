use rewind_history::HistoryTracker;
use tracing_subscriber::EnvFilter;

/// Route tracker logs to the test output. `RUST_LOG=rewind_history=trace` shows every move.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn tracker_with<S>(snapshots: impl IntoIterator<Item = S>) -> HistoryTracker<S> {
    let mut tracker = HistoryTracker::new();
    for snapshot in snapshots {
        tracker.save(snapshot);
    }
    tracker
}

#[allow(dead_code)]
pub fn contents<S: Clone>(tracker: &HistoryTracker<S>) -> Vec<S> {
    tracker.snapshots().cloned().collect()
}
