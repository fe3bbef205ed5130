use std::time::Duration;

use crate::state::DocumentSlot;

/// How long the missing-files alert stays visible before dismissing itself.
pub const ALERT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload the raw document bytes to the slot's endpoint.
    UploadDocument {
        slot: DocumentSlot,
        file_name: String,
        bytes: Vec<u8>,
    },
    /// Ask the service to compare the two most recently uploaded documents.
    RequestCheck,
    /// Arrange for `Msg::AlertExpired` once the window elapses.
    ScheduleAlertDismiss { after: Duration },
    /// Surface a blocking notification for a failed check.
    NotifyCheckFailed { message: String },
}
