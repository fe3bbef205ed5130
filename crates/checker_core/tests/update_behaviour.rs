use std::sync::Once;

use checker_core::{update, AppState, DocumentSlot, Effect, Msg, ALERT_DURATION};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(checker_logging::initialize_for_tests);
}

fn choose_document(state: AppState, slot: DocumentSlot, name: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::DocumentChosen {
            slot,
            file_name: name.to_string(),
            bytes: b"%PDF-1.4 stub".to_vec(),
        },
    )
}

fn upload_ok(state: AppState, slot: DocumentSlot, name: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            slot,
            file_name: name.to_string(),
            success: true,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn choosing_a_document_uploads_without_committing() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = choose_document(state, DocumentSlot::Reference, "a.pdf");

    assert_eq!(
        effects,
        vec![Effect::UploadDocument {
            slot: DocumentSlot::Reference,
            file_name: "a.pdf".to_string(),
            bytes: b"%PDF-1.4 stub".to_vec(),
        }]
    );
    // Nothing is committed until the upload confirms success.
    assert!(next.selection(DocumentSlot::Reference).is_none());
    assert!(!next.consume_dirty());
}

#[test]
fn upload_success_commits_the_selection() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(
        state,
        Msg::UploadFinished {
            slot: DocumentSlot::Reference,
            file_name: "a.pdf".to_string(),
            success: true,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state
            .selection(DocumentSlot::Reference)
            .map(|d| d.file_name.as_str()),
        Some("a.pdf")
    );
    assert!(state.selection(DocumentSlot::Test).is_none());
    assert!(state.consume_dirty());
}

#[test]
fn upload_failure_leaves_state_unchanged() {
    init_logging();
    let state = upload_ok(AppState::new(), DocumentSlot::Reference, "a.pdf");

    let (mut next, effects) = update(
        state.clone(),
        Msg::UploadFinished {
            slot: DocumentSlot::Reference,
            file_name: "broken.pdf".to_string(),
            success: false,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        next.selection(DocumentSlot::Reference)
            .map(|d| d.file_name.as_str()),
        Some("a.pdf")
    );
    assert!(!next.consume_dirty());
}

#[test]
fn reselecting_a_slot_replaces_the_previous_document() {
    init_logging();
    let state = upload_ok(AppState::new(), DocumentSlot::Reference, "old.pdf");
    let state = upload_ok(state, DocumentSlot::Reference, "new.pdf");

    assert_eq!(
        state
            .selection(DocumentSlot::Reference)
            .map(|d| d.file_name.as_str()),
        Some("new.pdf")
    );
}

#[test]
fn check_without_selections_raises_alert_and_stays_offline() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::CheckClicked);

    assert!(state.missing_files_alert());
    assert!(!state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::ScheduleAlertDismiss {
            after: ALERT_DURATION,
        }]
    );
    assert_eq!(ALERT_DURATION.as_secs(), 3);
}

#[test]
fn check_with_one_selection_still_raises_alert() {
    init_logging();
    let state = upload_ok(AppState::new(), DocumentSlot::Reference, "a.pdf");

    let (state, effects) = update(state, Msg::CheckClicked);

    assert!(state.missing_files_alert());
    assert_eq!(
        effects,
        vec![Effect::ScheduleAlertDismiss {
            after: ALERT_DURATION,
        }]
    );
}

#[test]
fn alert_expiry_clears_the_alert() {
    init_logging();
    let (state, _effects) = update(AppState::new(), Msg::CheckClicked);
    assert!(state.missing_files_alert());

    let (mut state, effects) = update(state, Msg::AlertExpired);

    assert!(!state.missing_files_alert());
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn stale_alert_expiry_is_harmless() {
    init_logging();
    // An upload success already cleared the alert before the timer fired.
    let (state, _effects) = update(AppState::new(), Msg::CheckClicked);
    let mut state = upload_ok(state, DocumentSlot::Reference, "a.pdf");
    assert!(!state.missing_files_alert());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::AlertExpired);

    assert!(!state.missing_files_alert());
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn check_with_both_selections_goes_loading() {
    init_logging();
    let state = upload_ok(AppState::new(), DocumentSlot::Reference, "a.pdf");
    let state = upload_ok(state, DocumentSlot::Test, "b.pdf");

    let (state, effects) = update(state, Msg::CheckClicked);

    assert!(state.is_loading());
    assert!(!state.missing_files_alert());
    assert_eq!(effects, vec![Effect::RequestCheck]);
}

#[test]
fn check_click_while_loading_is_ignored() {
    init_logging();
    let state = upload_ok(AppState::new(), DocumentSlot::Reference, "a.pdf");
    let state = upload_ok(state, DocumentSlot::Test, "b.pdf");
    let (mut state, _effects) = update(state, Msg::CheckClicked);
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state, Msg::CheckClicked);

    assert!(next.is_loading());
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
