// GitHub provider - bridges the API client with the SearchProvider trait
use async_trait::async_trait;
use reporadar_api::{GitHubClient, GitHubRepo, DEFAULT_ORDER, DEFAULT_SORT};

use crate::{
    models::{Repository, SearchOutcome},
    search::SearchProvider,
    Result,
};

/// Wrapper around GitHubClient that implements SearchProvider
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for GitHubProvider {
    async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let response = self
            .client
            .search_repositories(query, DEFAULT_SORT, DEFAULT_ORDER)
            .await?;

        Ok(SearchOutcome {
            total_count: response.total_count,
            repositories: response.items.into_iter().map(github_to_repo).collect(),
        })
    }
}

/// Convert a GitHub API repo into our local Repository model.
/// `description` and `language` stay optional here; the render site
/// decides on placeholders, not this layer.
fn github_to_repo(gh: GitHubRepo) -> Repository {
    Repository {
        name: gh.name,
        description: gh.description,
        stars: gh.stargazers_count,
        language: gh.language,
        owner: gh.owner.login,
    }
}
