use serde::Deserialize;

/// Scan interval assumed when the server omits one.
pub const DEFAULT_SCAN_INTERVAL_MINUTES: u32 = 5;

/// One scan target as returned by `GET /targets/`.
///
/// Immutable from the client's perspective; the whole collection is
/// replaced on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetRecord {
    pub id: u64,
    pub domain: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub scan_interval_minutes: Option<u32>,
}

/// Scan-run status as returned by `GET /targets/status`.
///
/// `running` and `stopped` are independently settable at the source and
/// are not mutually exclusive by contract; see [`ScanMode::of`] for the
/// display precedence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScanStatusRecord {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub stopped: bool,
    #[serde(default)]
    pub current_target: Option<String>,
}

/// The three user-visible scan states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Scanning,
    Stopped,
    Idle,
}

impl ScanMode {
    /// Display precedence: running first, stopped second, idle fallback.
    /// `{running: true, stopped: true}` therefore reads as Scanning.
    pub fn of(status: &ScanStatusRecord) -> Self {
        if status.running {
            ScanMode::Scanning
        } else if status.stopped {
            ScanMode::Stopped
        } else {
            ScanMode::Idle
        }
    }
}
