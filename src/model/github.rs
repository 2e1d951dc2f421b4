//! GitHub search API client for the trending feed

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use super::feed::FeedRow;

const API_BASE: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("greenfield-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubClient {
    http: Arc<reqwest::Client>,
}

impl GithubClient {
    pub fn new() -> Self {
        Self {
            http: Arc::new(reqwest::Client::new()),
        }
    }

    /// Fetch Rust repositories pushed within the last week, most-starred first.
    pub async fn fetch_trending(&self) -> Result<Vec<FeedRow>> {
        let query = format!("pushed:>={} language:rust", last_week_date());
        tracing::debug!(query, "fetching trending repositories");

        let response = self
            .http
            .get(format!("{API_BASE}/search/repositories"))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("q", query.as_str()), ("sort", "stars"), ("order", "desc")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("github search failed with status {}", status.as_u16());
        }

        let body: SearchResponse = response.json().await?;
        let rows: Vec<FeedRow> = body.items.into_iter().map(FeedRow::from).collect();
        tracing::info!(count = rows.len(), "trending feed fetched");
        Ok(rows)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

fn last_week_date() -> String {
    (Utc::now() - Duration::weeks(1)).format("%Y-%m-%d").to_string()
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<Repo>,
}

#[derive(Debug, Deserialize)]
struct Repo {
    id: u64,
    name: String,
    html_url: String,
    description: Option<String>,
    #[serde(rename = "updated_at")]
    updated: DateTime<Utc>,
    forks_count: u64,
    #[serde(rename = "stargazers_count")]
    stars_count: u64,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

impl From<Repo> for FeedRow {
    fn from(repo: Repo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            url: repo.html_url,
            owner: format!("@{}", repo.owner.login),
            description: repo.description,
            stars: repo.stars_count,
            forks: repo.forks_count,
            updated: repo.updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "id": 724712,
                "name": "ripgrep",
                "html_url": "https://github.com/BurntSushi/ripgrep",
                "description": "recursively searches directories for a regex pattern",
                "updated_at": "2026-08-28T09:15:00Z",
                "forks_count": 2000,
                "stargazers_count": 50000,
                "owner": { "login": "BurntSushi", "avatar_url": "https://example.invalid/a.png" }
            },
            {
                "id": 44838949,
                "name": "alacritty",
                "html_url": "https://github.com/alacritty/alacritty",
                "description": null,
                "updated_at": "2026-08-27T18:00:00Z",
                "forks_count": 3100,
                "stargazers_count": 56000,
                "owner": { "login": "alacritty", "avatar_url": "https://example.invalid/b.png" }
            }
        ]
    }"#;

    #[test]
    fn decodes_search_response() {
        let body: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(body.items.len(), 2);

        let row = FeedRow::from(body.items.into_iter().next().unwrap());
        assert_eq!(row.name, "ripgrep");
        assert_eq!(row.owner, "@BurntSushi");
        assert_eq!(row.stars, 50000);
        assert_eq!(row.forks, 2000);
        assert!(row.description.is_some());
    }

    #[test]
    fn missing_description_is_tolerated() {
        let body: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let row = FeedRow::from(body.items.into_iter().nth(1).unwrap());
        assert!(row.description.is_none());
    }

    #[test]
    fn trending_window_is_a_date() {
        let date = last_week_date();
        assert_eq!(date.len(), 10);
        assert!(date.chars().filter(|&c| c == '-').count() == 2);
    }
}
