// a project whose releases get changelogs

use crate::error::{Error, Result};
use crate::utils::changelog::PullRequest;
use crate::utils::config::RelnotesConfig;
use crate::utils::git_ops::{GitOps, GitRef};
use crate::utils::github::GitHubClient;
use crate::utils::source::PullRequestSource;
use crate::utils::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// release trains with a dedicated branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Stable,
    Beta,
    Dev,
}

impl Branch {
    /// version a changelog up to this branch most likely describes
    pub fn default_head_version(&self, base: &Version) -> Version {
        match self {
            Branch::Stable => base.next_patch_version(),
            Branch::Beta => base.next_beta_version(),
            Branch::Dev => base.next_dev_version(),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Stable => write!(f, "stable"),
            Branch::Beta => write!(f, "beta"),
            Branch::Dev => write!(f, "dev"),
        }
    }
}

impl std::str::FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" | "release" => Ok(Branch::Stable),
            "beta" => Ok(Branch::Beta),
            "dev" => Ok(Branch::Dev),
            _ => Err(format!("invalid branch: {}, use 'stable', 'beta' or 'dev'", s)),
        }
    }
}

/// a local checkout paired with its GitHub repository
///
/// fetched pull requests are cached for the lifetime of the project
pub struct Project {
    path: PathBuf,
    shortname: String,
    branches: HashMap<Branch, String>,
    client: GitHubClient,
    pr_cache: Mutex<HashMap<u64, PullRequest>>,
}

impl Project {
    pub fn new<P: AsRef<Path>>(path: P, config: &RelnotesConfig) -> Result<Self> {
        let path = GitOps::detect_repository_root(path)?;
        let settings = &config.project;

        let mut branches = HashMap::new();
        for (branch, name) in [
            (Branch::Stable, &settings.stable_branch),
            (Branch::Beta, &settings.beta_branch),
            (Branch::Dev, &settings.dev_branch),
        ] {
            if let Some(name) = name {
                branches.insert(branch, name.clone());
            }
        }

        let client = GitHubClient::new(&config.github, &settings.owner, &settings.repo)?;

        Ok(Self {
            path,
            shortname: settings.shortname.clone(),
            branches,
            client,
            pr_cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shortname(&self) -> &str {
        &self.shortname
    }

    /// git ref of a configured release branch
    pub fn branch_ref(&self, branch: Branch) -> Result<GitRef> {
        self.branches
            .get(&branch)
            .map(|name| GitRef::Branch(name.clone()))
            .ok_or_else(|| Error::UnknownBranch {
                branch: branch.to_string(),
            })
    }

    /// highest published release of the project
    pub fn latest_release(&self, include_prereleases: bool) -> Result<Option<Version>> {
        self.client.latest_release(include_prereleases)
    }
}

impl PullRequestSource for Project {
    fn prs_between(&self, base: &GitRef, head: &GitRef) -> Result<Vec<u64>> {
        GitOps::prs_between(&self.path, base, head)
    }

    fn get_pr(&self, number: u64) -> Result<PullRequest> {
        if let Some(pr) = self
            .pr_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&number)
        {
            debug!(number, "pull request cache hit");
            return Ok(pr.clone());
        }

        // fetched without holding the lock so workers don't serialize
        let pr = self.client.pull_request(number)?;
        self.pr_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(number, pr.clone());
        Ok(pr)
    }
}
