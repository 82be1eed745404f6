use axum::http::StatusCode;
use plantly_core::identify::ErrorOutput;
use plantly_core::CoreError;

/// Every way an identification request can fail
#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid upload: {0}")]
    Upload(String),

    #[error("Plant.id API failed with status {status}")]
    ProviderRejected { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed Plant.id response: {0}")]
    Parse(String),

    #[error("Plant.id returned no suggestions")]
    NoSuggestions,
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MalformedResponse(reason) => Error::Parse(reason),
            CoreError::NoSuggestions => Error::NoSuggestions,
        }
    }
}

impl Error {
    /// Status used when the server runs with `--strict-status`
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Upload(_) => StatusCode::BAD_REQUEST,
            Error::ProviderRejected { .. } | Error::Network(_) | Error::Parse(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::NoSuggestions => StatusCode::NOT_FOUND,
        }
    }

    /// JSON body sent to the caller
    pub fn to_output(&self) -> ErrorOutput {
        match self {
            Error::ProviderRejected { body, .. } => ErrorOutput::provider_rejected(body.clone()),
            other => ErrorOutput::new(other.to_string()),
        }
    }
}
