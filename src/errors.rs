use thiserror::Error;

/// Errors surfaced by remote catalogue operations.
///
/// None of these are fatal to the process: callers report the failure once
/// and continue with the previous (or an empty) result set.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication rejected (status {status})")]
    Auth { status: u16, body: String },

    #[error("app, database, or collection not found (status {status})")]
    NotFound { status: u16, body: String },

    #[error("response decode: {0}")]
    Decode(String),

    #[error("rejected by backend (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected status {status}: {body}")]
    Unexpected { status: u16, body: String },

    #[error("credentials not configured")]
    NotConfigured,
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl CatalogError {
    /// The HTTP status attached to this error, when one exists.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::NotFound { status, .. }
            | Self::Rejected { status, .. }
            | Self::Unexpected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
