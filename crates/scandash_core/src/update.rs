use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TargetsTick => vec![Effect::FetchTargets],
        Msg::StatusTick => vec![Effect::FetchStatus],
        Msg::TargetsFetched(targets) => {
            state.replace_targets(targets);
            Vec::new()
        }
        Msg::StatusFetched(status) => {
            state.apply_status(status);
            Vec::new()
        }
        // Poll failures are logged at the effect-runner edge; the last
        // good render stays, and the next tick is the only retry.
        Msg::TargetsFetchFailed | Msg::StatusFetchFailed => Vec::new(),
        Msg::StartClicked => vec![Effect::StartScan],
        Msg::StopClicked => vec![Effect::StopScan],
        Msg::StartCompleted { domains } => {
            state.set_notice(format!("Sequential scan started for {domains} domains."));
            Vec::new()
        }
        Msg::StopCompleted => {
            state.set_notice("Scanning stopped.");
            Vec::new()
        }
        Msg::ControlFailed(payload) => {
            state.set_notice(payload);
            Vec::new()
        }
        // A visible notice is blocking: nothing is submitted behind it,
        // whether the path came from the prompt or from a drop.
        Msg::UploadPicked(path) if !state.notice_shown() => {
            vec![Effect::UploadBulk { path }]
        }
        Msg::UploadPicked(_) => Vec::new(),
        Msg::FilesDropped(paths) => {
            if state.notice_shown() {
                return (state, Vec::new());
            }
            match paths.into_iter().next() {
                Some(path) => vec![Effect::UploadBulk { path }],
                None => Vec::new(),
            }
        }
        // Completion triggers exactly one unconditional refresh, success
        // or failure alike; the result itself is shown raw.
        Msg::UploadCompleted(raw) => {
            state.set_upload_result(raw);
            vec![Effect::FetchTargets]
        }
        Msg::UploadFailed(payload) => {
            state.set_notice(payload);
            vec![Effect::FetchTargets]
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
    };

    (state, effects)
}
