use std::path::PathBuf;

use crate::{ScanStatusRecord, TargetRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Repository poll timer fired (or the startup kick).
    TargetsTick,
    /// Status poll timer fired (or the startup kick).
    StatusTick,
    /// A target-list fetch resolved; replaces the collection wholesale.
    /// Results apply in arrival order, so last write wins.
    TargetsFetched(Vec<TargetRecord>),
    /// A target-list fetch failed; logged at the edge, table untouched.
    TargetsFetchFailed,
    /// A status fetch resolved.
    StatusFetched(ScanStatusRecord),
    /// A status fetch failed; logged at the edge, banner untouched.
    StatusFetchFailed,
    /// Operator requested a scan start.
    StartClicked,
    /// Operator requested a scan stop.
    StopClicked,
    /// Start accepted by the server, naming the domain count.
    StartCompleted { domains: u64 },
    /// Stop accepted by the server.
    StopCompleted,
    /// A start/stop request failed; payload shown to the operator.
    ControlFailed(String),
    /// Operator submitted a path through the file prompt.
    UploadPicked(PathBuf),
    /// Paths dropped/pasted onto the terminal; only the first is used.
    FilesDropped(Vec<PathBuf>),
    /// Upload finished with a server reply; raw JSON body for display.
    UploadCompleted(String),
    /// Upload failed before or during submission.
    UploadFailed(String),
    /// Operator acknowledged the blocking notice.
    NoticeDismissed,
}
