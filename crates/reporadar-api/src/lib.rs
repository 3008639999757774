// GitHub search API client
pub mod error;
pub mod github;

// Re-export common types
pub use error::RequestError;
pub use github::{GitHubClient, GitHubRepo, Owner, SearchResponse, DEFAULT_ORDER, DEFAULT_SORT};

/// Result type alias because typing Result<T, RequestError> everywhere is tedious
pub type Result<T> = std::result::Result<T, RequestError>;
