use gigarelay_core::{
    update, AppState, CopyTarget, Effect, Endpoints, LocaleState, Msg, Page, TransferOutcome,
    UploadResult, COPIED_INDICATOR_DURATION,
};

const BASE: &str = "https://relay.example";

fn new_state() -> AppState {
    AppState::new(LocaleState::default(), Endpoints::new(BASE))
}

fn completed_state() -> AppState {
    let (state, _) = update(
        new_state(),
        Msg::UrlInputChanged("https://example.com/a.zip".to_string()),
    );
    let (state, effects) = update(state, Msg::UploadClicked);
    let transfer_id = match &effects[0] {
        Effect::StartTransfer(request) => request.transfer_id,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::TransferFinished {
            transfer_id,
            outcome: TransferOutcome::Accepted(UploadResult {
                page_url: "https://g/p1".to_string(),
                direct_url: "https://g/r1".to_string(),
                proxy_url: "https://g/x1".to_string(),
                filename: None,
                expires_at: None,
            }),
        },
    );
    state
}

#[test]
fn proxy_download_opens_encoded_url() {
    let (state, _) = update(new_state(), Msg::PageSelected(Page::Proxy));
    let (state, _) = update(
        state,
        Msg::ProxyInputChanged("  https://XX.gigafile.nu/AAAA ".to_string()),
    );
    assert!(state.view().proxy.download_enabled);

    let (_state, effects) = update(state, Msg::ProxyDownloadClicked);
    assert_eq!(
        effects,
        vec![Effect::OpenExternal {
            url: format!("{BASE}/api/proxy?url=https%3A%2F%2FXX.gigafile.nu%2FAAAA"),
        }]
    );
}

#[test]
fn blank_proxy_input_issues_nothing() {
    let (state, _) = update(new_state(), Msg::ProxyInputChanged("   ".to_string()));
    assert!(!state.view().proxy.download_enabled);
    let (_state, effects) = update(state, Msg::ProxyDownloadClicked);
    assert!(effects.is_empty());
}

#[test]
fn page_switch_preserves_page_state() {
    let (state, _) = update(new_state(), Msg::ProxyInputChanged("https://a".to_string()));
    let (state, _) = update(state, Msg::UrlInputChanged("https://b".to_string()));
    let (state, _) = update(state, Msg::PageSelected(Page::Proxy));
    let (state, _) = update(state, Msg::PageSelected(Page::Upload));

    let view = state.view();
    assert_eq!(view.page, Page::Upload);
    assert_eq!(view.proxy.input, "https://a");
    assert_eq!(view.upload.url_text, "https://b");
}

#[test]
fn copy_requests_link_text_for_target() {
    let (_state, effects) = update(completed_state(), Msg::CopyClicked(CopyTarget::Direct));
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            target: CopyTarget::Direct,
            text: "https://g/r1".to_string(),
        }]
    );
}

#[test]
fn copy_without_result_does_nothing() {
    let (_state, effects) = update(new_state(), Msg::CopyClicked(CopyTarget::Page));
    assert!(effects.is_empty());
}

#[test]
fn second_copy_restarts_the_indicator_timer() {
    let (state, first) = update(completed_state(), Msg::CopySucceeded(CopyTarget::Page));
    let first_generation = match first.as_slice() {
        [Effect::ScheduleCopiedClear { generation, after }] => {
            assert_eq!(*after, COPIED_INDICATOR_DURATION);
            *generation
        }
        other => panic!("unexpected effects {other:?}"),
    };

    let (state, second) = update(state, Msg::CopySucceeded(CopyTarget::Proxy));
    let second_generation = match second.as_slice() {
        [Effect::ScheduleCopiedClear { generation, .. }] => *generation,
        other => panic!("unexpected effects {other:?}"),
    };
    assert_ne!(first_generation, second_generation);

    let (state, _) = update(
        state,
        Msg::CopiedExpired {
            generation: first_generation,
        },
    );
    let copy_labels = |state: &AppState| -> Vec<&'static str> {
        state
            .view()
            .upload
            .result
            .expect("result")
            .links
            .iter()
            .map(|link| link.copy_label)
            .collect()
    };
    assert_eq!(copy_labels(&state), vec!["Copy", "Copy", "Copied!"]);

    let (state, _) = update(
        state,
        Msg::CopiedExpired {
            generation: second_generation,
        },
    );
    assert_eq!(copy_labels(&state), vec!["Copy", "Copy", "Copy"]);
}

#[test]
fn clipboard_failure_changes_nothing() {
    let mut state = completed_state();
    state.consume_dirty();
    let before = state.clone();
    let (mut next, effects) = update(state, Msg::CopyFailed(CopyTarget::Page));
    assert!(effects.is_empty());
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}

#[test]
fn api_examples_use_configured_base() {
    let view = new_state().view();
    assert!(view.upload.api_examples[0].ends_with("https://relay.example/api/upload"));
    assert!(view.upload.api_examples[1].contains("duration=7"));
}
