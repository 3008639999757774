// Core business logic lives here - the brain of the operation
pub mod controller;
pub mod models;
pub mod providers;
pub mod query;
pub mod search;

pub use controller::{ScreenState, SearchController, SearchPhase};
pub use reporadar_api::RequestError;
pub use search::SearchProvider;

/// Result type alias because typing Result<T, RequestError> everywhere is tedious
pub type Result<T> = std::result::Result<T, RequestError>;
