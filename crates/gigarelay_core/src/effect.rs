use std::time::Duration;

use crate::clipboard::CopyTarget;
use crate::session::TransferRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartTransfer(TransferRequest),
    PersistLocale { code: String },
    CopyToClipboard { target: CopyTarget, text: String },
    ScheduleCopiedClear { generation: u64, after: Duration },
    /// Hand a URL to the platform browser.
    OpenExternal { url: String },
}
