use gigarelay_core::{update, AppState, Effect, Endpoints, LocaleState, Msg};

#[test]
fn unknown_locale_is_ignored() {
    let state = AppState::new(LocaleState::resolve(Some("de"), None), Endpoints::default());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::LocaleSelected("xx".to_string()));

    assert_eq!(next.locale().code(), "de");
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn known_locale_switches_strings_and_persists() {
    let (mut state, effects) = update(AppState::default(), Msg::LocaleSelected("ru".to_string()));

    assert_eq!(
        effects,
        vec![Effect::PersistLocale {
            code: "ru".to_string()
        }]
    );
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.strings.upload_btn, "Загрузить");
    let active: Vec<_> = view
        .languages
        .iter()
        .filter(|option| option.active)
        .map(|option| option.code)
        .collect();
    assert_eq!(active, vec!["ru"]);
}

#[test]
fn locale_switch_does_not_disturb_running_transfer() {
    let (state, _) = update(
        AppState::default(),
        Msg::UrlInputChanged("https://example.com/a.zip".to_string()),
    );
    let (state, _) = update(state, Msg::UploadClicked);
    let (state, _) = update(state, Msg::LocaleSelected("es".to_string()));

    let view = state.view();
    assert_eq!(view.upload.submit_label, "Subiendo... 0%");
    assert!(!view.upload.submit_enabled);
}

#[test]
fn language_picker_lists_every_catalog_entry() {
    let flags: Vec<_> = AppState::default()
        .view()
        .languages
        .iter()
        .map(|option| option.flag)
        .collect();
    assert_eq!(flags, vec!["EN", "RU", "ES", "DE", "FR", "JA", "ZH", "PT"]);
}
