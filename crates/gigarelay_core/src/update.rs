use relay_logging::relay_debug;

use crate::clipboard::{CopyTarget, COPIED_INDICATOR_DURATION};
use crate::session::UploadResult;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    let changed = match msg {
        Msg::PageSelected(page) => {
            let changed = state.page != page;
            state.page = page;
            changed
        }
        Msg::LocaleSelected(code) => {
            if state.locale.select(code.trim()) {
                effects.push(Effect::PersistLocale {
                    code: state.locale.code().to_string(),
                });
                true
            } else {
                relay_debug!("Ignoring unknown locale code {:?}", code);
                false
            }
        }
        Msg::FilePicked(file) => state.session.pick_file(file),
        Msg::FilesDropped(files) => {
            let drag_was_active = state.session.ingest().is_drag_active();
            state.session.drop_files(files) || drag_was_active
        }
        Msg::DragEntered | Msg::DragOver => state.session.set_drag_active(true),
        Msg::DragLeft => state.session.set_drag_active(false),
        Msg::UrlInputChanged(text) => state.session.set_url_text(text),
        Msg::FileRemoved => state.session.remove_file(),
        Msg::RetentionSelected(retention) => state.session.select_retention(retention),
        Msg::UploadClicked => {
            let transfer_id = state.peek_transfer_id();
            match state.session.begin(transfer_id) {
                Some(request) => {
                    state.commit_transfer_id();
                    effects.push(Effect::StartTransfer(request));
                    true
                }
                None => {
                    relay_debug!(
                        "Upload trigger ignored in phase {:?}",
                        state.session.phase()
                    );
                    false
                }
            }
        }
        Msg::RetryClicked => {
            let transfer_id = state.peek_transfer_id();
            match state.session.retry(transfer_id) {
                Some(request) => {
                    state.commit_transfer_id();
                    state.copy_indicator.clear();
                    effects.push(Effect::StartTransfer(request));
                    true
                }
                None => false,
            }
        }
        Msg::TransferProgress {
            transfer_id,
            bytes_sent,
            total_bytes,
        } => state
            .session
            .apply_progress(transfer_id, bytes_sent, total_bytes),
        Msg::TransferFinished {
            transfer_id,
            outcome,
        } => {
            let applied = state.session.finish(transfer_id, outcome);
            if !applied {
                relay_debug!("Dropping stale completion for transfer {}", transfer_id);
            }
            applied
        }
        Msg::UploadAnotherClicked => {
            let reset = state.session.reset();
            if reset {
                state.copy_indicator.clear();
            }
            reset
        }
        Msg::CopyClicked(target) => {
            if let Some(result) = state.session.result() {
                effects.push(Effect::CopyToClipboard {
                    target,
                    text: link_for(result, target).to_string(),
                });
            }
            false
        }
        Msg::CopySucceeded(target) => {
            let generation = state.copy_indicator.mark(target);
            effects.push(Effect::ScheduleCopiedClear {
                generation,
                after: COPIED_INDICATOR_DURATION,
            });
            true
        }
        Msg::CopyFailed(target) => {
            relay_debug!("Clipboard write for {} failed", target.label());
            false
        }
        Msg::CopiedExpired { generation } => state.copy_indicator.expire(generation),
        Msg::ProxyInputChanged(text) => state.proxy.set_input(text),
        Msg::ProxyDownloadClicked => {
            if let Some(url) = state.proxy.request_url(&state.endpoints) {
                effects.push(Effect::OpenExternal { url });
            }
            false
        }
    };

    if changed {
        state.mark_dirty();
    }
    (state, effects)
}

fn link_for(result: &UploadResult, target: CopyTarget) -> &str {
    match target {
        CopyTarget::Page => &result.page_url,
        CopyTarget::Direct => &result.direct_url,
        CopyTarget::Proxy => &result.proxy_url,
    }
}
