use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use relay_logging::{relay_error, relay_info, relay_warn};
use tokio_util::sync::CancellationToken;

use crate::upload::{ChannelProgressSink, ProgressSink, ReqwestUploader, UploadSettings, Uploader};
use crate::{EngineEvent, FailureKind, UploadError, UploadJob};

enum EngineCommand {
    Upload(UploadJob),
}

/// Runs upload transfers on a background tokio runtime.
///
/// Each transfer is a spawned task tied to a child of the handle's
/// cancellation token. Nothing cancels a single transfer today;
/// [`EngineHandle::shutdown`] cancels all of them.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> Self {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let root = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    relay_error!("Failed to start engine runtime: {}", err);
                    fail_all(&cmd_rx, &event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let uploader = uploader.clone();
                let event_tx = event_tx.clone();
                let token = root.child_token();
                runtime.spawn(async move {
                    handle_command(uploader.as_ref(), command, event_tx, token).await;
                });
            }
            // Sender dropped: let in-flight tasks observe cancellation.
            root.cancel();
            runtime.shutdown_timeout(Duration::from_secs(1));
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            cancel,
        }
    }

    pub fn submit(&self, job: UploadJob) {
        relay_info!("Submitting transfer {}", job.transfer_id);
        if self.cmd_tx.send(EngineCommand::Upload(job)).is_err() {
            relay_warn!("Engine thread is gone; transfer dropped");
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    token: CancellationToken,
) {
    match command {
        EngineCommand::Upload(job) => {
            let sink: Arc<dyn ProgressSink> = Arc::new(ChannelProgressSink::new(event_tx.clone()));
            let result = tokio::select! {
                _ = token.cancelled() => Err(UploadError::new(
                    FailureKind::Cancelled,
                    "transfer cancelled",
                )),
                result = uploader.upload(&job, sink) => result,
            };
            if let Err(err) = &result {
                relay_warn!("Transfer {} failed: {}", job.transfer_id, err);
            }
            let _ = event_tx.send(EngineEvent::TransferCompleted {
                transfer_id: job.transfer_id,
                result,
            });
        }
    }
}

fn fail_all(
    cmd_rx: &mpsc::Receiver<EngineCommand>,
    event_tx: &mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Upload(job)) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::TransferCompleted {
            transfer_id: job.transfer_id,
            result: Err(UploadError::new(FailureKind::Io, reason)),
        });
    }
}
