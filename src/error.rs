use crate::builder::BuilderError;
use crate::client::ClientError;
use crate::config::ConfigError;

/// Errors surfaced by resource wrappers, fixtures and polling helpers.
#[derive(thiserror::Error, Debug)]
pub enum MarvinError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Invalid command: {0}")]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A lookup that must match at least one resource matched none
    #[error("No {0} found")]
    NotFound(String),
    /// A resource did not reach the expected state within the poll budget
    #[error("{resource} did not reach state `{expected}` in time")]
    StateTimeout { resource: String, expected: String },
    /// A resource reached a state it cannot recover from, such as a failed
    /// template download
    #[error("{resource} is in unexpected state `{state}`")]
    UnexpectedState { resource: String, state: String },
}

impl MarvinError {
    /// True when the management server rejected a command, either directly
    /// or through a failed async job.
    pub fn is_api_error(&self) -> bool {
        matches!(self, MarvinError::Client(ClientError::Api { .. }))
    }

    /// Error text reported by the management server, if any.
    pub fn api_error_text(&self) -> Option<&str> {
        match self {
            MarvinError::Client(ClientError::Api { text, .. }) => Some(text),
            _ => None,
        }
    }
}

pub type Result<T, E = MarvinError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_are_recognised() {
        let err: MarvinError = ClientError::Api {
            command: "createVolume".to_string(),
            code: 530,
            text: "Failed to create volume".to_string(),
        }
        .into();
        assert!(err.is_api_error());
        assert_eq!(err.api_error_text(), Some("Failed to create volume"));

        let err = MarvinError::NotFound("zone".to_string());
        assert!(!err.is_api_error());
        assert_eq!(err.to_string(), "No zone found");
    }
}
