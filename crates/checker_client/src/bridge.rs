use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use checker_logging::{checker_debug, checker_warn};

use crate::api::{ClientSettings, ReqwestApi, SimilarityApi};
use crate::{ClientEvent, UploadSlot};

enum ClientCommand {
    Upload {
        slot: UploadSlot,
        file_name: String,
        bytes: Vec<u8>,
    },
    Check,
}

/// Runs the async API client on a dedicated runtime thread.
///
/// Commands go in over a channel, completion events come back out; the caller
/// polls `try_recv` from its own event loop.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Mutex<mpsc::Receiver<ClientEvent>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn upload(&self, slot: UploadSlot, file_name: impl Into<String>, bytes: Vec<u8>) {
        let _ = self.cmd_tx.send(ClientCommand::Upload {
            slot,
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn check(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Check);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn SimilarityApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Upload {
            slot,
            file_name,
            bytes,
        } => {
            checker_debug!(
                "upload slot={:?} file={} bytes={}",
                slot,
                file_name,
                bytes.len()
            );
            let result = api.upload(slot, &file_name, bytes).await;
            if let Err(err) = &result {
                checker_warn!("upload {:?} failed: {}", slot, err);
            }
            let _ = event_tx.send(ClientEvent::UploadCompleted {
                slot,
                file_name,
                result,
            });
        }
        ClientCommand::Check => {
            let result = api.check().await;
            let _ = event_tx.send(ClientEvent::CheckCompleted { result });
        }
    }
}
