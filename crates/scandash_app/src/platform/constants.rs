use std::time::Duration;

/// Scan service to talk to when no base URL argument is given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Cadence of the target-list poll. The next tick does not wait for the
/// prior fetch to resolve.
pub const TARGETS_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Cadence of the scan-status poll, independent of the target poll.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long the input poll blocks before the dispatch loop runs again.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
