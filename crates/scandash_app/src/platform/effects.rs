use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use dash_logging::{dash_info, dash_warn};
use scandash_client::{ApiClient, ClientCommand, ClientEvent, ClientHandle};
use scandash_core::{Effect, Msg};

/// Executes the effects the pure core requests, and feeds completions
/// back into the message channel.
pub struct EffectRunner {
    client: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(api: ApiClient, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (client, events) = ClientHandle::new(api);
        spawn_event_loop(events, msg_tx.clone());
        Self { client, msg_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchTargets => self.client.send(ClientCommand::FetchTargets),
                Effect::FetchStatus => self.client.send(ClientCommand::FetchStatus),
                Effect::StartScan => {
                    dash_info!("start scan requested");
                    self.client.send(ClientCommand::StartScan);
                }
                Effect::StopScan => {
                    dash_info!("stop scan requested");
                    self.client.send(ClientCommand::StopScan);
                }
                Effect::UploadBulk { path } => self.submit_upload(path),
            }
        }
    }

    /// Single submission routine for both the picker and the drop path.
    fn submit_upload(&self, path: PathBuf) {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.csv")
            .to_string();
        match std::fs::read(&path) {
            Ok(bytes) => {
                dash_info!("uploading {} ({} bytes)", path.display(), bytes.len());
                self.client
                    .send(ClientCommand::UploadBulk { file_name, bytes });
            }
            Err(err) => {
                dash_warn!("could not read {}: {err}", path.display());
                let _ = self
                    .msg_tx
                    .send(Msg::UploadFailed(format!(
                        "Could not read {}: {err}",
                        path.display()
                    )));
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                ClientEvent::TargetsFetched(Ok(targets)) => Msg::TargetsFetched(targets),
                ClientEvent::TargetsFetched(Err(err)) => {
                    // Stale-but-consistent: keep the last good table, the
                    // next tick is the only retry.
                    dash_warn!("target poll failed: {err}");
                    Msg::TargetsFetchFailed
                }
                ClientEvent::StatusFetched(Ok(status)) => Msg::StatusFetched(status),
                ClientEvent::StatusFetched(Err(err)) => {
                    dash_warn!("status poll failed: {err}");
                    Msg::StatusFetchFailed
                }
                ClientEvent::StartFinished(Ok(reply)) => Msg::StartCompleted {
                    domains: reply.domains,
                },
                ClientEvent::StartFinished(Err(err)) => {
                    dash_warn!("start scan failed: {err}");
                    Msg::ControlFailed(err.to_string())
                }
                ClientEvent::StopFinished(Ok(())) => Msg::StopCompleted,
                ClientEvent::StopFinished(Err(err)) => {
                    dash_warn!("stop scan failed: {err}");
                    Msg::ControlFailed(err.to_string())
                }
                ClientEvent::UploadFinished(Ok(raw)) => Msg::UploadCompleted(raw),
                ClientEvent::UploadFinished(Err(err)) => {
                    dash_warn!("upload failed: {err}");
                    Msg::UploadFailed(err.to_string())
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
