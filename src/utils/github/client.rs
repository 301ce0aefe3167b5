//! Blocking client for the parts of the GitHub REST API used by release notes.

use super::types::{GitHubErrorBody, Release};
use crate::error::{Error, Result};
use crate::utils::changelog::PullRequest;
use crate::utils::config::GitHubSettings;
use crate::utils::version::Version;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("relnotes/", env!("CARGO_PKG_VERSION"));

/// GitHub API access for one repository.
pub struct GitHubClient {
    http: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client; the token is read from the configured environment variable.
    pub fn new(settings: &GitHubSettings, owner: &str, repo: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        let token = std::env::var(&settings.token_env)
            .ok()
            .filter(|t| !t.is_empty());
        if token.is_none() {
            debug!("{} not set, using unauthenticated requests", settings.token_env);
        }

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
        })
    }

    /// URL of an endpoint below `/repos/{owner}/{repo}`.
    pub fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url,
            self.owner,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    /// Fetch a single pull request.
    pub fn pull_request(&self, number: u64) -> Result<PullRequest> {
        self.get(&self.repo_url(&format!("pulls/{}", number)))
    }

    /// Fetch the most recent page of releases.
    pub fn releases(&self) -> Result<Vec<Release>> {
        self.get(&self.repo_url("releases?per_page=100"))
    }

    /// Highest released version, optionally ignoring pre-releases.
    pub fn latest_release(&self, include_prereleases: bool) -> Result<Option<Version>> {
        let releases = self.releases()?;
        Ok(latest_release_version(&releases, include_prereleases))
    }

    fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "github request");
        let mut request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = check_response(request.send()?)?;
        Ok(response.json()?)
    }
}

fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.as_u16() == 429 {
        return Err(Error::RateLimited);
    }

    if let Some(remaining) = response.headers().get("X-RateLimit-Remaining")
        && let Ok(remaining) = remaining.to_str()
        && remaining.trim() == "0"
        && !status.is_success()
    {
        return Err(Error::RateLimited);
    }

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<GitHubErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    Err(Error::GitHubStatus {
        status: status.as_u16(),
        message,
    })
}

/// Pick the highest version among published releases.
///
/// Drafts and tags that are not release versions are ignored.
pub fn latest_release_version(releases: &[Release], include_prereleases: bool) -> Option<Version> {
    releases
        .iter()
        .filter(|r| !r.draft)
        .filter(|r| include_prereleases || !r.prerelease)
        .filter_map(|r| Version::parse(r.tag_name.trim_start_matches('v')).ok())
        .max()
}
