use crate::{AppState, Effect, Msg, SelectedDocument, ALERT_DURATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentChosen {
            slot,
            file_name,
            bytes,
        } => {
            // The selection is not committed yet; it only becomes visible
            // once the upload reports success.
            vec![Effect::UploadDocument {
                slot,
                file_name,
                bytes,
            }]
        }
        Msg::UploadFinished {
            slot,
            file_name,
            success,
        } => {
            if success {
                state.commit_selection(slot, SelectedDocument { file_name });
            }
            // Failed uploads leave prior state untouched; the user retries by
            // picking a file again.
            Vec::new()
        }
        Msg::CheckClicked => {
            if state.is_loading() {
                // The trigger is disabled while a check is in flight.
                Vec::new()
            } else if !state.has_both_selections() {
                state.raise_missing_files_alert();
                vec![Effect::ScheduleAlertDismiss {
                    after: ALERT_DURATION,
                }]
            } else {
                state.begin_check();
                vec![Effect::RequestCheck]
            }
        }
        Msg::CheckFinished(result) => match result {
            Ok(outcome) => {
                state.finish_check(Some(outcome));
                Vec::new()
            }
            Err(message) => {
                state.finish_check(None);
                vec![Effect::NotifyCheckFailed { message }]
            }
        },
        Msg::AlertExpired => {
            state.clear_missing_files_alert();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
