use crate::records::{ScanMode, ScanStatusRecord, TargetRecord, DEFAULT_SCAN_INTERVAL_MINUTES};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Table rows, always sorted ascending by id.
    pub rows: Vec<TargetRowView>,
    /// `None` until the first successful status poll.
    pub banner: Option<BannerView>,
    pub upload_result: Option<String>,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRowView {
    pub id: u64,
    pub domain: String,
    pub brand: String,
    pub status: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub scan_interval_minutes: u32,
    pub report_href: String,
}

impl TargetRowView {
    pub fn from_record(record: &TargetRecord) -> Self {
        Self {
            id: record.id,
            domain: record.domain.clone(),
            brand: record.brand.clone().unwrap_or_default(),
            status: record.status.clone(),
            is_verified: record.is_verified,
            is_active: record.is_active,
            scan_interval_minutes: record
                .scan_interval_minutes
                .unwrap_or(DEFAULT_SCAN_INTERVAL_MINUTES),
            report_href: format!("/reports/targets/{}/html", record.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub mode: ScanMode,
    pub text: String,
}

impl BannerView {
    /// Maps a status record to exactly one of the three banner states.
    /// Idempotent: the same record always yields the same text.
    pub fn from_record(status: &ScanStatusRecord) -> Self {
        let mode = ScanMode::of(status);
        let text = match mode {
            ScanMode::Scanning => match status.current_target.as_deref() {
                Some(target) => format!("Scanning, currently processing: {target}"),
                None => "Scanning".to_string(),
            },
            ScanMode::Stopped => "Scanning stopped".to_string(),
            ScanMode::Idle => "Idle, no scans in progress".to_string(),
        };
        Self { mode, text }
    }
}
