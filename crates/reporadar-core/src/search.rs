use crate::{models::SearchOutcome, Result};

/// Trait for search providers - makes testing easier and keeps things flexible
///
/// The controller only ever talks to this seam, so tests swap in a mock
/// and never touch the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome>;
}
