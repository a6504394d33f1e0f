//! Scandash core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod records;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use records::{
    ScanMode, ScanStatusRecord, TargetRecord, DEFAULT_SCAN_INTERVAL_MINUTES,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, BannerView, TargetRowView};
