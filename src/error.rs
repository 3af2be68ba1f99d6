use thiserror::Error;

/// Failures surfaced by [`crate::AdvisoryPipeline::generate`].
///
/// Parsing the model output never fails, so there is no parse variant here.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The HTTP client could not be built from the configuration.
    #[error("failed to set up completion client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("completion service rejected credentials (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("completion service rate limited the request: {message}")]
    RateLimited { message: String },

    #[error("completion service error (status {status}): {message}")]
    Upstream { status: u16, message: String },
}

impl AdvisoryError {
    /// Whether an external retry wrapper may try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(AdvisoryError::RateLimited {
            message: "slow down".into()
        }
        .is_retryable());
        assert!(!AdvisoryError::InvalidInput("crops".into()).is_retryable());
        assert!(!AdvisoryError::Auth {
            status: 401,
            message: String::new()
        }
        .is_retryable());
        assert!(!AdvisoryError::Upstream {
            status: 500,
            message: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_client_setup_not_retryable() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .map_err(AdvisoryError::ClientSetup)
            .unwrap_err();
        assert!(!err.is_retryable());
        assert!(err.to_string().starts_with("failed to set up completion client"));
    }

    #[test]
    fn test_display_includes_status() {
        let err = AdvisoryError::Upstream {
            status: 503,
            message: "overloaded".into(),
        };
        assert_eq!(
            err.to_string(),
            "completion service error (status 503): overloaded"
        );
    }
}
