// changelog data structures

use crate::utils::git_ops::GitRef;
use crate::utils::version::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// author of a pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
}

/// a merged pull request as returned by the GitHub pulls API
///
/// unknown fields in the API payload are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub user: Author,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    pub merged_at: DateTime<Utc>,
}

impl PullRequest {
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

/// a pull request accepted into the changelog, carrying its own label list
///
/// the label list starts as a copy of the pull request labels and may be
/// adjusted by the eligibility filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludedPullRequest {
    pub pr: PullRequest,
    pub labels: Vec<String>,
}

impl IncludedPullRequest {
    pub fn new(pr: PullRequest) -> Self {
        let labels = pr.label_names();
        Self { pr, labels }
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    pub fn has_any_label(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_label(name))
    }

    pub fn remove_label(&mut self, name: &str) {
        self.labels.retain(|l| l != name);
    }
}

/// the pair of release points a changelog covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRange {
    pub base_ref: GitRef,
    pub base_version: Version,
    pub head_ref: GitRef,
    pub head_version: Version,
}

impl ReleaseRange {
    pub fn new(
        base_ref: GitRef,
        base_version: Version,
        head_ref: GitRef,
        head_version: Version,
    ) -> Self {
        Self {
            base_ref,
            base_version,
            head_ref,
            head_version,
        }
    }
}
