//! Gigarelay core: pure upload-session state machine, locale resolution and
//! view-model helpers. No IO happens here; side effects are returned as
//! [`Effect`] values for the platform layer to run.
mod clipboard;
mod effect;
mod endpoints;
mod format;
mod ingest;
pub mod locale;
mod msg;
mod proxy_link;
mod session;
mod state;
mod update;
mod view_model;

pub use clipboard::{CopyIndicator, CopyTarget, COPIED_INDICATOR_DURATION};
pub use effect::Effect;
pub use endpoints::Endpoints;
pub use format::format_size;
pub use ingest::{FileSelection, IngestSurface, UploadInput};
pub use locale::{LocaleState, Strings};
pub use msg::Msg;
pub use proxy_link::{build_proxy_request_url, ProxyLinkController};
pub use session::{
    parse_expiry, Phase, RetentionDays, SessionEvent, SessionObserver, TransferId,
    TransferOutcome, TransferRequest, UploadResult, UploadSession, GENERIC_FAILURE,
};
pub use state::{AppState, Page};
pub use update::update;
pub use view_model::{
    AppViewModel, FileRowView, LanguageOption, LinkRowView, ProxyView, ResultView,
    RetentionOption, UploadView, PRODUCT_LINE, TELEGRAM_BOT_URL,
};
