use std::fmt;

/// Shown for transport and decoding failures.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong with fetching movies";

/// Shown when OMDb answers `Response: "False"`.
pub const NOT_FOUND_ERROR: &str = "Movie not found";

/// Failure of a single OMDb request. Crosses the worker channel, so it owns its data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    Transport(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not the JSON we expected.
    Decode(String),
    /// OMDb reported that nothing matched.
    NotFound,
}

impl FetchError {
    /// Message for the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => NOT_FOUND_ERROR,
            FetchError::Transport(_) | FetchError::Status(_) | FetchError::Decode(_) => {
                GENERIC_FETCH_ERROR
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(details) => write!(f, "Request failed: {details}"),
            FetchError::Status(code) => write!(f, "Server responded with status {code}"),
            FetchError::Decode(details) => write!(f, "Unexpected response body: {details}"),
            FetchError::NotFound => write!(f, "{NOT_FOUND_ERROR}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(FetchError::NotFound.user_message(), "Movie not found");
        assert_eq!(
            FetchError::Status(500).user_message(),
            "Something went wrong with fetching movies"
        );
        assert_eq!(
            FetchError::Transport("connection refused".to_string()).user_message(),
            GENERIC_FETCH_ERROR
        );
    }

    #[test]
    fn test_display_keeps_details() {
        let err = FetchError::Transport("dns error".to_string());
        assert_eq!(err.to_string(), "Request failed: dns error");
        assert_eq!(FetchError::Status(401).to_string(), "Server responded with status 401");
    }

    #[test]
    fn test_from_serde_error() {
        let err: FetchError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
