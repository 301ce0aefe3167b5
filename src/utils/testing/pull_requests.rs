// in-memory pull requests

use crate::error::{Error, Result};
use crate::utils::changelog::{Author, Label, Milestone, PullRequest};
use crate::utils::git_ops::GitRef;
use crate::utils::source::PullRequestSource;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// builder for pull requests used in tests
///
/// merge times default to `number` minutes after a fixed epoch, so pull
/// requests merge in number order unless told otherwise
#[derive(Debug, Clone)]
pub struct PullRequestBuilder {
    number: u64,
    title: String,
    author: String,
    labels: Vec<String>,
    milestone: Option<String>,
    merged_at: DateTime<Utc>,
}

impl PullRequestBuilder {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            author: "contributor".to_string(),
            labels: Vec::new(),
            milestone: None,
            merged_at: epoch() + Duration::minutes(number as i64),
        }
    }

    pub fn author(mut self, login: impl Into<String>) -> Self {
        self.author = login.into();
        self
    }

    pub fn label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(name.into());
        self
    }

    pub fn milestone(mut self, title: impl Into<String>) -> Self {
        self.milestone = Some(title.into());
        self
    }

    pub fn merged_minutes(mut self, minutes: i64) -> Self {
        self.merged_at = epoch() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> PullRequest {
        PullRequest {
            number: self.number,
            title: self.title,
            html_url: format!("https://github.com/esphome/esphome/pull/{}", self.number),
            user: Author {
                html_url: format!("https://github.com/{}", self.author),
                login: self.author,
            },
            labels: self
                .labels
                .into_iter()
                .map(|name| Label { name })
                .collect(),
            milestone: self.milestone.map(|title| Milestone { title }),
            merged_at: self.merged_at,
        }
    }
}

/// pull request source backed by a map
///
/// `prs_between` ignores the refs and returns every registered number in
/// registration order
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    order: Vec<u64>,
    prs: HashMap<u64, PullRequest>,
    failing: HashSet<u64>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, pr: PullRequest) -> Self {
        self.add(pr);
        self
    }

    pub fn add(&mut self, pr: PullRequest) {
        self.order.push(pr.number);
        self.prs.insert(pr.number, pr);
    }

    /// reference a pull request that fails to load
    pub fn failing(mut self, number: u64) -> Self {
        self.order.push(number);
        self.failing.insert(number);
        self
    }
}

impl PullRequestSource for MockSource {
    fn prs_between(&self, _base: &GitRef, _head: &GitRef) -> Result<Vec<u64>> {
        Ok(self.order.clone())
    }

    fn get_pr(&self, number: u64) -> Result<PullRequest> {
        if self.failing.contains(&number) {
            return Err(Error::GitHubStatus {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }
        self.prs.get(&number).cloned().ok_or(Error::GitHubStatus {
            status: 404,
            message: "Not Found".to_string(),
        })
    }
}
