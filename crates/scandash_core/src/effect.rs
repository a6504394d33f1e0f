use std::path::PathBuf;

/// Side effects requested by `update`; executed by the platform layer.
///
/// None of these carry a cancellation token: a fetch that is still in
/// flight when the next tick fires simply overlaps it, and the
/// last-to-resolve result wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTargets,
    FetchStatus,
    StartScan,
    StopScan,
    UploadBulk { path: PathBuf },
}
