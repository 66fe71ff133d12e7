use crate::clipboard::CopyTarget;
use crate::ingest::FileSelection;
use crate::session::{RetentionDays, TransferId, TransferOutcome};
use crate::state::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Navigation toggle.
    PageSelected(Page),
    /// Language picker choice; unknown codes are ignored.
    LocaleSelected(String),
    /// File chosen through the picker.
    FilePicked(FileSelection),
    /// Drop gesture; only the first item is used.
    FilesDropped(Vec<FileSelection>),
    DragEntered,
    DragOver,
    DragLeft,
    /// User edited the URL field.
    UrlInputChanged(String),
    /// User removed the selected file.
    FileRemoved,
    RetentionSelected(RetentionDays),
    UploadClicked,
    /// Start a fresh session from a failed one with the same input.
    RetryClicked,
    /// Engine byte progress for a transfer.
    TransferProgress {
        transfer_id: TransferId,
        bytes_sent: u64,
        total_bytes: Option<u64>,
    },
    /// Engine terminal report for a transfer.
    TransferFinished {
        transfer_id: TransferId,
        outcome: TransferOutcome,
    },
    UploadAnotherClicked,
    CopyClicked(CopyTarget),
    CopySucceeded(CopyTarget),
    CopyFailed(CopyTarget),
    /// Timer expiry for the "copied" indicator.
    CopiedExpired { generation: u64 },
    ProxyInputChanged(String),
    ProxyDownloadClicked,
}
