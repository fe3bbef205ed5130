use crate::state::{CheckOutcome, DocumentSlot};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a file for one of the two slots.
    DocumentChosen {
        slot: DocumentSlot,
        file_name: String,
        bytes: Vec<u8>,
    },
    /// Upload call for a slot resolved.
    UploadFinished {
        slot: DocumentSlot,
        file_name: String,
        success: bool,
    },
    /// User pressed the check trigger.
    CheckClicked,
    /// Check call resolved; `Err` carries a user-presentable message.
    CheckFinished(Result<CheckOutcome, String>),
    /// The validation-alert window elapsed.
    AlertExpired,
    /// Fallback for placeholder wiring.
    NoOp,
}
