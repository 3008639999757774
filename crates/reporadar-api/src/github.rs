// GitHub search client - one GET per search, decoded straight into the wire model
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{RequestError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Defaults for the search endpoint: most-starred first.
pub const DEFAULT_SORT: &str = "stars";
pub const DEFAULT_ORDER: &str = "desc";

/// Body of `GET /search/repositories`.
///
/// `total_count` counts every match on the server side and routinely exceeds
/// the number of items actually returned. `items` can come back absent or
/// null on malformed responses; either way it decodes to an empty vec.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<GitHubRepo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<GitHubRepo>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<GitHubRepo>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For pointing at a fake server in tests
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        // GitHub rejects requests without a User-Agent
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("RepoRadar/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Search repositories. Issues exactly one request: no retry, no
    /// pagination, no cache. Anything that goes wrong becomes a
    /// [`RequestError`] with the underlying message.
    pub async fn search_repositories(
        &self,
        query: &str,
        sort: &str,
        order: &str,
    ) -> Result<SearchResponse> {
        let url = format!("{}/search/repositories", self.base_url);
        debug!(query, sort, order, "issuing repository search");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("sort", sort), ("order", order)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::new(format!("Status {}: {}", status, body)));
        }

        let decoded: SearchResponse = response.json().await?;
        debug!(
            total_count = decoded.total_count,
            returned = decoded.items.len(),
            "search response decoded"
        );
        Ok(decoded)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serve one canned HTTP response on a loopback port, then hang up.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn non_success_status_becomes_a_request_error() {
        let base = one_shot_server("500 Internal Server Error", "boom").await;
        let client = GitHubClient::with_base_url(base);

        let err = client
            .search_repositories("language:kotlin created:>2024-03-01", DEFAULT_SORT, DEFAULT_ORDER)
            .await
            .unwrap_err();

        assert!(err.message.contains("500"), "got: {}", err.message);
        assert!(err.message.contains("boom"), "got: {}", err.message);
    }

    #[tokio::test]
    async fn successful_response_decodes_over_the_wire() {
        let base = one_shot_server(
            "200 OK",
            r#"{"total_count": 1, "items": [{"name": "A", "description": null,
                "stargazers_count": 10, "language": "Kotlin",
                "owner": {"login": "u1"}}]}"#,
        )
        .await;
        let client = GitHubClient::with_base_url(base);

        let response = client
            .search_repositories("language:kotlin", DEFAULT_SORT, DEFAULT_ORDER)
            .await
            .unwrap();

        assert_eq!(response.total_count, 1);
        assert_eq!(response.items[0].name, "A");
        assert_eq!(response.items[0].owner.login, "u1");
    }

    #[tokio::test]
    async fn undecodable_body_becomes_a_request_error() {
        let base = one_shot_server("200 OK", "not json at all").await;
        let client = GitHubClient::with_base_url(base);

        let err = client
            .search_repositories("language:kotlin", DEFAULT_SORT, DEFAULT_ORDER)
            .await
            .unwrap_err();

        assert!(!err.message.is_empty());
    }

    #[test]
    fn decodes_items_when_present() {
        let body = r#"{
            "total_count": 2,
            "items": [
                {"name": "A", "description": null, "stargazers_count": 10,
                 "language": "Kotlin", "owner": {"login": "u1"}},
                {"name": "B", "description": "desc", "stargazers_count": 5,
                 "language": "Kotlin", "owner": {"login": "u2"}}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name, "A");
        assert_eq!(response.items[0].description, None);
        assert_eq!(response.items[1].owner.login, "u2");
    }

    #[test]
    fn null_items_decode_as_empty() {
        let body = r#"{"total_count": 0, "items": null}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn absent_items_decode_as_empty() {
        let body = r#"{"total_count": 42}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 42);
        assert!(response.items.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        // Real responses carry dozens of fields we never look at
        let body = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [
                {"name": "A", "full_name": "u1/A", "description": null,
                 "stargazers_count": 10, "forks_count": 3, "language": null,
                 "owner": {"login": "u1", "id": 99}}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items[0].language, None);
    }
}
