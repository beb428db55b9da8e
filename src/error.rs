//! Error types for knowledge-hub

/// Errors that can occur while talking to the content backend or loading config
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// The backend could not be reached, answered with a non-success
    /// status, or returned a body that is not valid JSON.
    #[error("{message}")]
    Fetch {
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl HubError {
    /// Build a fetch error without an HTTP status (transport or decode failure)
    pub fn fetch(message: impl Into<String>) -> Self {
        HubError::Fetch {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status carried by a fetch error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            HubError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias for knowledge-hub operations
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_displays_message_verbatim() {
        let err = HubError::Fetch {
            status: Some(500),
            message: "Failed to fetch articles: Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch articles: Internal Server Error"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_fetch_helper_has_no_status() {
        let err = HubError::fetch("connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "connection refused");
    }
}
