//! Checker client: HTTP transport to the external similarity service.
mod api;
mod bridge;
mod types;

pub use api::{ClientSettings, ReqwestApi, SimilarityApi};
pub use bridge::ClientHandle;
pub use types::{ApiError, ApiFailure, CheckReport, ClientEvent, UploadSlot};
