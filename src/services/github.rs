/*
 * Responsibility
 * - proxy GitHub's "list user repositories" endpoint for profile pages
 * - the browser never sees our GitHub API credentials
 */
use std::time::Duration;

use serde_json::Value;

/// Thin client around the GitHub REST API. Cheap to clone.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the client secret
        f.debug_struct("GithubClient")
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl GithubClient {
    pub fn new(
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent("devnet-api")
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            client_id,
            client_secret,
        })
    }

    /// Five most recently created public repos for `username`.
    ///
    /// Returns `Ok(None)` when GitHub answers with a non-success status
    /// (unknown user, rate limited); transport failures bubble up as `Err`.
    pub async fn user_repos(&self, username: &str) -> Result<Option<Value>, reqwest::Error> {
        let url = format!("https://api.github.com/users/{username}/repos");

        let mut query: Vec<(&str, String)> = vec![
            ("per_page", "5".to_string()),
            ("sort", "created:asc".to_string()),
        ];
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            query.push(("client_id", id.clone()));
            query.push(("client_secret", secret.clone()));
        }

        let res = self.http.get(&url).query(&query).send().await?;
        if !res.status().is_success() {
            return Ok(None);
        }

        let repos = res.json::<Value>().await?;
        Ok(Some(repos))
    }
}
