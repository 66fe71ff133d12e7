use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use gigarelay_core::{
    parse_expiry, CopyTarget, Effect, Msg, TransferOutcome, TransferRequest, UploadInput,
    UploadResult,
};
use gigarelay_engine::{
    EngineEvent, EngineHandle, UploadError, UploadJob, UploadLinks, UploadOutcome, UploadSource,
};
use relay_logging::{relay_debug, relay_info, relay_warn};

use super::commands::ShellEvent;
use super::persistence::PreferenceStore;

const ENGINE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Executes core effects and feeds their results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    preferences: PreferenceStore,
    clipboard_tx: mpsc::Sender<(CopyTarget, String)>,
    tx: mpsc::Sender<ShellEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        preferences: PreferenceStore,
        tx: mpsc::Sender<ShellEvent>,
    ) -> Self {
        let clipboard_tx = spawn_clipboard_worker(tx.clone());
        let runner = Self {
            engine,
            preferences,
            clipboard_tx,
            tx,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTransfer(request) => {
                    let job = job_from_request(request);
                    relay_info!(
                        "StartTransfer transfer_id={} duration={}",
                        job.transfer_id,
                        job.duration_days
                    );
                    self.engine.submit(job);
                }
                Effect::PersistLocale { code } => {
                    if let Err(err) = self.preferences.save_locale(&code) {
                        relay_warn!("Could not persist locale {}: {:#}", code, err);
                    }
                }
                Effect::CopyToClipboard { target, text } => {
                    if self.clipboard_tx.send((target, text)).is_err() {
                        let _ = self.tx.send(ShellEvent::Msg(Msg::CopyFailed(target)));
                    }
                }
                Effect::ScheduleCopiedClear { generation, after } => {
                    let tx = self.tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = tx.send(ShellEvent::Msg(Msg::CopiedExpired { generation }));
                    });
                }
                Effect::OpenExternal { url } => {
                    relay_info!("Opening {}", url);
                    if let Err(err) = webbrowser::open(&url) {
                        relay_warn!("Could not open browser for {}: {}", url, err);
                    }
                }
            }
        }
    }

    /// Cancels in-flight transfers.
    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let tx = self.tx.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(ENGINE_POLL_INTERVAL) else {
                continue;
            };
            if tx.send(ShellEvent::Msg(map_engine_event(event))).is_err() {
                break;
            }
        });
    }
}

/// The clipboard handle lives on one thread for the whole run; on some
/// platforms the copied text disappears when the handle is dropped.
fn spawn_clipboard_worker(tx: mpsc::Sender<ShellEvent>) -> mpsc::Sender<(CopyTarget, String)> {
    let (request_tx, request_rx) = mpsc::channel::<(CopyTarget, String)>();
    thread::spawn(move || {
        let mut clipboard = None;
        for (target, text) in request_rx {
            if clipboard.is_none() {
                match arboard::Clipboard::new() {
                    Ok(handle) => clipboard = Some(handle),
                    Err(err) => relay_warn!("Clipboard unavailable: {}", err),
                }
            }
            let copied = match clipboard.as_mut() {
                Some(handle) => match handle.set_text(text) {
                    Ok(()) => true,
                    Err(err) => {
                        relay_warn!("Copy of {} link failed: {}", target.label(), err);
                        false
                    }
                },
                None => false,
            };
            let msg = if copied {
                Msg::CopySucceeded(target)
            } else {
                Msg::CopyFailed(target)
            };
            if tx.send(ShellEvent::Msg(msg)).is_err() {
                break;
            }
        }
    });
    request_tx
}

fn job_from_request(request: TransferRequest) -> UploadJob {
    let source = match request.input {
        UploadInput::File(file) => UploadSource::File {
            path: file.path,
            name: file.name,
            size: file.size,
        },
        UploadInput::Url(url) => UploadSource::Url(url),
    };
    UploadJob {
        transfer_id: request.transfer_id,
        source,
        duration_days: request.retention.days(),
    }
}

fn map_engine_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::TransferProgress {
            transfer_id: progress.transfer_id,
            bytes_sent: progress.bytes_sent,
            total_bytes: progress.total_bytes,
        },
        EngineEvent::TransferCompleted {
            transfer_id,
            result,
        } => Msg::TransferFinished {
            transfer_id,
            outcome: map_outcome(transfer_id, result),
        },
    }
}

fn map_outcome(
    transfer_id: u64,
    result: Result<UploadOutcome, UploadError>,
) -> TransferOutcome {
    match result {
        Ok(UploadOutcome::Accepted(links)) => {
            relay_debug!("Transfer {} accepted", transfer_id);
            TransferOutcome::Accepted(upload_result(links))
        }
        Ok(UploadOutcome::Rejected { error }) => {
            relay_warn!("Transfer {} rejected: {:?}", transfer_id, error);
            TransferOutcome::Rejected { error }
        }
        Err(err) => {
            relay_warn!("Transfer {} failed: {}", transfer_id, err);
            TransferOutcome::TransportFailed {
                description: Some(err.to_string()),
                detail: err.detail,
            }
        }
    }
}

fn upload_result(links: UploadLinks) -> UploadResult {
    let expires_at = links.expires.as_deref().and_then(|raw| {
        let parsed = parse_expiry(raw);
        if parsed.is_none() {
            relay_warn!("Ignoring unparseable expiry {:?}", raw);
        }
        parsed
    });
    UploadResult {
        page_url: links.page_url,
        direct_url: links.direct_url,
        proxy_url: links.proxy_url,
        filename: links.filename,
        expires_at,
    }
}
