use thiserror::Error;

/// The one way things go wrong here: a search attempt failed.
///
/// Network failures, non-2xx statuses and undecodable bodies all collapse
/// into a single human-readable message. Failure is terminal for the
/// attempt; the caller re-triggers, there is nothing to branch on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self {
                message: "unknown error".to_string(),
            };
        }
        Self { message }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_passes_through() {
        let err = RequestError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn empty_message_falls_back_to_unknown() {
        let err = RequestError::new("");
        assert_eq!(err.to_string(), "unknown error");
    }

    #[test]
    fn decode_failure_carries_serde_message() {
        let bad = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = RequestError::from(bad);
        assert!(!err.message.is_empty());
    }
}
