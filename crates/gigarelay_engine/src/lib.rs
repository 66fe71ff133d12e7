//! Gigarelay engine: upload transfers and on-disk persistence.
mod engine;
mod persist;
mod types;
mod upload;

pub use engine::EngineHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{
    EngineEvent, FailureKind, TransferId, TransferProgress, UploadError, UploadJob, UploadLinks,
    UploadOutcome, UploadSource,
};
pub use upload::{ChannelProgressSink, ProgressSink, ReqwestUploader, UploadSettings, Uploader};
