use crate::view_model::{AppViewModel, BannerView, TargetRowView};
use crate::{ScanStatusRecord, TargetRecord};

/// Whole-app state, owned by the main dispatch thread.
///
/// Everything here is ephemeral view state, rebuilt from polling; nothing
/// is persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    targets: Vec<TargetRecord>,
    /// Last good status; `None` until the first successful status poll.
    status: Option<ScanStatusRecord>,
    /// Raw JSON body of the last upload reply, kept verbatim for display.
    upload_result: Option<String>,
    /// Blocking notice awaiting operator acknowledgment.
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let mut rows: Vec<TargetRowView> =
            self.targets.iter().map(TargetRowView::from_record).collect();
        rows.sort_by_key(|row| row.id);
        AppViewModel {
            rows,
            banner: self.status.as_ref().map(BannerView::from_record),
            upload_result: self.upload_result.clone(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; the render loop redraws only
    /// when this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_targets(&mut self, targets: Vec<TargetRecord>) {
        self.targets = targets;
        self.dirty = true;
    }

    pub(crate) fn apply_status(&mut self, status: ScanStatusRecord) {
        if self.status.as_ref() != Some(&status) {
            self.dirty = true;
        }
        self.status = Some(status);
    }

    pub(crate) fn set_upload_result(&mut self, raw: String) {
        self.upload_result = Some(raw);
        self.dirty = true;
    }

    /// A visible notice blocks further submissions until acknowledged.
    pub(crate) fn notice_shown(&self) -> bool {
        self.notice.is_some()
    }

    pub(crate) fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
