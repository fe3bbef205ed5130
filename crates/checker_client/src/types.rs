use std::fmt;

use serde::Deserialize;

/// Which upload endpoint a document goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    Reference,
    Test,
}

impl UploadSlot {
    pub(crate) fn endpoint_path(self) -> &'static str {
        match self {
            UploadSlot::Reference => "/upload/reference",
            UploadSlot::Test => "/upload/test",
        }
    }
}

/// Response body of `GET /check`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckReport {
    pub similarity: f64,
    pub plagiarism_level: String,
    pub test_file: String,
    pub reference_file: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    UploadCompleted {
        slot: UploadSlot,
        file_name: String,
        result: Result<(), ApiError>,
    },
    CheckCompleted {
        result: Result<CheckReport, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidBaseUrl,
    HttpStatus(u16),
    Timeout,
    InvalidResponse,
    Network,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidBaseUrl => write!(f, "invalid base url"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::InvalidResponse => write!(f, "invalid response body"),
            ApiFailure::Network => write!(f, "network error"),
        }
    }
}
