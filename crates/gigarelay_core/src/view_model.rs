use chrono::{DateTime, Utc};

use crate::clipboard::CopyTarget;
use crate::format::format_size;
use crate::locale::{Strings, CATALOG};
use crate::session::{Phase, RetentionDays, UploadResult};
use crate::state::{AppState, Page};

pub const TELEGRAM_BOT_URL: &str = "https://t.me/fileshare300100_bot";
pub const PRODUCT_LINE: &str = "GigaFile.nu Proxy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub page: Page,
    pub strings: &'static Strings,
    pub languages: Vec<LanguageOption>,
    pub upload: UploadView,
    pub proxy: ProxyView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub flag: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub phase: Phase,
    pub file: Option<FileRowView>,
    pub url_text: String,
    pub url_field_visible: bool,
    pub drag_active: bool,
    pub retention: Vec<RetentionOption>,
    pub submit_enabled: bool,
    pub submit_label: String,
    /// Shown only while transferring.
    pub progress: Option<u8>,
    pub error: Option<String>,
    /// Failed sessions offer a fresh attempt with the same input.
    pub retry_available: bool,
    /// Terminal sessions offer a return to a pristine form.
    pub reset_available: bool,
    pub result: Option<ResultView>,
    pub api_examples: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionOption {
    pub value: RetentionDays,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub links: Vec<LinkRowView>,
    pub filename: Option<String>,
    pub expires: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRowView {
    pub target: CopyTarget,
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub url: String,
    pub copy_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyView {
    pub input: String,
    pub download_enabled: bool,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let strings = self.locale.strings();
        AppViewModel {
            page: self.page,
            strings,
            languages: CATALOG
                .iter()
                .map(|&(code, entry)| LanguageOption {
                    code,
                    flag: entry.flag,
                    active: code == self.locale.code(),
                })
                .collect(),
            upload: self.upload_view(strings),
            proxy: ProxyView {
                input: self.proxy.input().to_string(),
                download_enabled: self.proxy.can_download(),
            },
        }
    }

    fn upload_view(&self, strings: &'static Strings) -> UploadView {
        let session = &self.session;
        let ingest = session.ingest();
        let phase = session.phase();
        let transferring = phase == Phase::Transferring;
        let submit_label = if transferring {
            strings.uploading_label(session.progress_percent())
        } else {
            strings.upload_btn.to_string()
        };

        UploadView {
            phase,
            file: ingest.file().map(|file| FileRowView {
                name: file.name.clone(),
                size_label: format_size(file.size),
            }),
            url_text: ingest.url_text().to_string(),
            url_field_visible: phase == Phase::Idle && ingest.url_field_visible(),
            drag_active: ingest.is_drag_active(),
            retention: RetentionDays::ALL
                .into_iter()
                .map(|value| RetentionOption {
                    value,
                    selected: value == session.retention(),
                })
                .collect(),
            submit_enabled: session.can_submit(),
            submit_label,
            progress: transferring.then_some(session.progress_percent()),
            error: session.error_message().map(ToOwned::to_owned),
            retry_available: phase == Phase::Failed,
            reset_available: matches!(phase, Phase::Completed | Phase::Failed),
            result: session
                .result()
                .map(|result| self.result_view(strings, result)),
            api_examples: self.endpoints.curl_examples(),
        }
    }

    fn result_view(&self, strings: &'static Strings, result: &UploadResult) -> ResultView {
        let copied = self.copy_indicator.active();
        let row = |target: CopyTarget,
                   label: &'static str,
                   hint: Option<&'static str>,
                   url: &str| LinkRowView {
            target,
            label,
            hint,
            url: url.to_string(),
            copy_label: if copied == Some(target) {
                strings.copied
            } else {
                strings.copy
            },
        };
        ResultView {
            links: vec![
                row(CopyTarget::Page, strings.page_url, None, &result.page_url),
                row(
                    CopyTarget::Direct,
                    strings.direct_url,
                    Some(strings.direct_hint),
                    &result.direct_url,
                ),
                row(
                    CopyTarget::Proxy,
                    strings.proxy_url,
                    Some(strings.proxy_hint),
                    &result.proxy_url,
                ),
            ],
            filename: result.filename.clone().filter(|name| !name.is_empty()),
            expires: result.expires_at,
        }
    }
}
