use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use checker_client::{CheckReport, ClientEvent, ClientHandle, ClientSettings, UploadSlot};
use checker_core::{CheckOutcome, DocumentSlot, Effect, Msg};
use checker_logging::{checker_error, checker_info};

pub struct EffectRunner {
    client: Arc<ClientHandle>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let client = Arc::new(ClientHandle::new(settings));
        let runner = Self { client, msg_tx };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadDocument {
                    slot,
                    file_name,
                    bytes,
                } => {
                    checker_info!(
                        "UploadDocument slot={:?} file={} bytes={}",
                        slot,
                        file_name,
                        bytes.len()
                    );
                    self.client.upload(to_client_slot(slot), file_name, bytes);
                }
                Effect::RequestCheck => {
                    checker_info!("RequestCheck");
                    self.client.check();
                }
                Effect::ScheduleAlertDismiss { after } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = msg_tx.send(Msg::AlertExpired);
                    });
                }
                Effect::NotifyCheckFailed { message } => {
                    checker_error!("check failed: {}", message);
                    eprintln!();
                    eprintln!("!! Plagiarism check failed: {message}");
                    eprintln!();
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let client = self.client.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::UploadCompleted {
                        slot,
                        file_name,
                        result,
                    } => {
                        // Upload failures stay log-only (the bridge already
                        // warned); the user retries by picking a file again.
                        Msg::UploadFinished {
                            slot: from_client_slot(slot),
                            file_name,
                            success: result.is_ok(),
                        }
                    }
                    ClientEvent::CheckCompleted { result } => Msg::CheckFinished(
                        result.map(to_outcome).map_err(|err| err.to_string()),
                    ),
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn to_client_slot(slot: DocumentSlot) -> UploadSlot {
    match slot {
        DocumentSlot::Reference => UploadSlot::Reference,
        DocumentSlot::Test => UploadSlot::Test,
    }
}

fn from_client_slot(slot: UploadSlot) -> DocumentSlot {
    match slot {
        UploadSlot::Reference => DocumentSlot::Reference,
        UploadSlot::Test => DocumentSlot::Test,
    }
}

fn to_outcome(report: CheckReport) -> CheckOutcome {
    CheckOutcome {
        similarity: report.similarity,
        plagiarism_level: report.plagiarism_level,
        test_file: report.test_file,
        reference_file: report.reference_file,
    }
}
