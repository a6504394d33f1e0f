use std::sync::{mpsc, Arc};
use std::thread;

use dash_logging::dash_debug;
use scandash_core::{ScanStatusRecord, TargetRecord};

use crate::{ApiClient, ClientError, StartReply};

/// A request for the client thread to issue.
#[derive(Debug)]
pub enum ClientCommand {
    FetchTargets,
    FetchStatus,
    StartScan,
    StopScan,
    UploadBulk { file_name: String, bytes: Vec<u8> },
}

/// Completion of a previously issued command.
#[derive(Debug)]
pub enum ClientEvent {
    TargetsFetched(Result<Vec<TargetRecord>, ClientError>),
    StatusFetched(Result<ScanStatusRecord, ClientError>),
    StartFinished(Result<StartReply, ClientError>),
    StopFinished(Result<(), ClientError>),
    UploadFinished(Result<String, ClientError>),
}

/// Owns the runtime thread that issues HTTP requests.
///
/// Each command is spawned as an independent task, so two fetches for the
/// same endpoint may overlap; completions arrive on the event channel in
/// whatever order they resolve. Nothing is cancellable once sent.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Spawns the runtime thread and returns the command handle together
    /// with the completion channel.
    pub fn new(api: ApiClient) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(api);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                dash_debug!("client command: {}", command_label(&command));
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn send(&self, command: ClientCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(
    api: &ApiClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::FetchTargets => ClientEvent::TargetsFetched(api.fetch_targets().await),
        ClientCommand::FetchStatus => ClientEvent::StatusFetched(api.fetch_status().await),
        ClientCommand::StartScan => ClientEvent::StartFinished(api.start_scan().await),
        ClientCommand::StopScan => ClientEvent::StopFinished(api.stop_scan().await),
        ClientCommand::UploadBulk { file_name, bytes } => {
            ClientEvent::UploadFinished(api.upload_bulk(&file_name, bytes).await)
        }
    };
    let _ = event_tx.send(event);
}

fn command_label(command: &ClientCommand) -> &'static str {
    match command {
        ClientCommand::FetchTargets => "FetchTargets",
        ClientCommand::FetchStatus => "FetchStatus",
        ClientCommand::StartScan => "StartScan",
        ClientCommand::StopScan => "StopScan",
        ClientCommand::UploadBulk { .. } => "UploadBulk",
    }
}
