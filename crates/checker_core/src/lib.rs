//! Checker core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ALERT_DURATION};
pub use msg::Msg;
pub use state::{AppState, CheckOutcome, DocumentSlot, SelectedDocument};
pub use update::update;
pub use view_model::{
    classify_level, format_similarity, CheckResultView, CheckerViewModel, LevelSeverity,
};
