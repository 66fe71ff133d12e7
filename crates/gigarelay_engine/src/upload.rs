use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use relay_logging::{relay_debug, relay_info};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tokio_util::io::ReaderStream;

use crate::{
    EngineEvent, FailureKind, TransferId, TransferProgress, UploadError, UploadJob, UploadLinks,
    UploadOutcome, UploadSource,
};

#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Full `{base}/api/upload` URL.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// Read size for streamed file bodies; also the progress granularity.
    pub chunk_size: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8001/api/upload".to_string(),
            connect_timeout: Duration::from_secs(10),
            chunk_size: 256 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        job: &UploadJob,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<UploadOutcome, UploadError>;
}

/// Success and failure bodies share one shape on the wire.
#[derive(Debug, Deserialize)]
struct ReplyBody {
    success: bool,
    url: Option<String>,
    raw_url: Option<String>,
    proxy_url: Option<String>,
    filename: Option<String>,
    expires: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    // No overall timeout: large transfers are bounded by the backend only.
    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))
    }

    async fn build_form(
        &self,
        job: &UploadJob,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Form, UploadError> {
        let form = match &job.source {
            UploadSource::File { path, name, .. } => {
                let part = self
                    .file_part(job.transfer_id, path, name.clone(), sink)
                    .await?;
                Form::new().part("file", part)
            }
            UploadSource::Url(url) => Form::new().text("url", url.clone()),
        };
        Ok(form.text("duration", job.duration_days.to_string()))
    }

    async fn file_part(
        &self,
        transfer_id: TransferId,
        path: &Path,
        name: String,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Part, UploadError> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|err| UploadError::new(FailureKind::Io, err.to_string()))?;
        let total = file
            .metadata()
            .await
            .map_err(|err| UploadError::new(FailureKind::Io, err.to_string()))?
            .len();

        sink.emit(progress(transfer_id, 0, total));
        let sent = Arc::new(AtomicU64::new(0));
        let stream = ReaderStream::with_capacity(file, self.settings.chunk_size).map(
            move |chunk| {
                if let Ok(bytes) = &chunk {
                    let now = sent.fetch_add(bytes.len() as u64, Ordering::Relaxed)
                        + bytes.len() as u64;
                    sink.emit(progress(transfer_id, now, total));
                }
                chunk
            },
        );

        Ok(Part::stream_with_length(reqwest::Body::wrap_stream(stream), total).file_name(name))
    }
}

fn progress(transfer_id: TransferId, bytes_sent: u64, total: u64) -> EngineEvent {
    EngineEvent::Progress(TransferProgress {
        transfer_id,
        bytes_sent,
        total_bytes: Some(total),
    })
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(
        &self,
        job: &UploadJob,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<UploadOutcome, UploadError> {
        let client = self.build_client()?;
        let form = self.build_form(job, sink).await?;

        relay_info!(
            "Upload transfer_id={} duration={} endpoint={}",
            job.transfer_id,
            job.duration_days,
            self.settings.endpoint
        );
        let response = client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        relay_debug!(
            "Upload transfer_id={} status={} body_len={}",
            job.transfer_id,
            status,
            body.len()
        );

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(
                UploadError::new(FailureKind::HttpStatus(status.as_u16()), reason)
                    .with_detail(error_detail(&body)),
            );
        }

        decode_reply(&body)
    }
}

fn decode_reply(body: &[u8]) -> Result<UploadOutcome, UploadError> {
    let reply: ReplyBody = serde_json::from_slice(body)
        .map_err(|err| UploadError::new(FailureKind::Decode, err.to_string()))?;

    if !reply.success {
        return Ok(UploadOutcome::Rejected { error: reply.error });
    }

    match (reply.url, reply.raw_url, reply.proxy_url) {
        (Some(page_url), Some(direct_url), Some(proxy_url)) => {
            Ok(UploadOutcome::Accepted(UploadLinks {
                page_url,
                direct_url,
                proxy_url,
                filename: reply.filename,
                expires: reply.expires,
            }))
        }
        _ => Err(UploadError::new(
            FailureKind::Decode,
            "success reply is missing links",
        )),
    }
}

/// Extracts a string `detail` from an error body, if there is one.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        return UploadError::new(FailureKind::Timeout, err.to_string());
    }
    UploadError::new(FailureKind::Network, err.to_string())
}
