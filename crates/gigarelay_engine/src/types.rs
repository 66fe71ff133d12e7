use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type TransferId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    File {
        path: PathBuf,
        name: String,
        size: u64,
    },
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    pub transfer_id: TransferId,
    pub source: UploadSource,
    pub duration_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub transfer_id: TransferId,
    pub bytes_sent: u64,
    /// `None` when the body length is not known up front.
    pub total_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(TransferProgress),
    TransferCompleted {
        transfer_id: TransferId,
        result: Result<UploadOutcome, UploadError>,
    },
}

/// Links returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLinks {
    pub page_url: String,
    pub direct_url: String,
    pub proxy_url: String,
    pub filename: Option<String>,
    /// ISO-8601 timestamp as sent by the server.
    pub expires: Option<String>,
}

/// A 2xx reply: the backend signals failure through a payload flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted(UploadLinks),
    Rejected { error: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
    /// `detail` field of a non-2xx JSON body.
    pub detail: Option<String>,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
    Io,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "invalid response"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
