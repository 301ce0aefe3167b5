// where pull requests come from

use crate::error::Result;
use crate::utils::changelog::PullRequest;
use crate::utils::git_ops::GitRef;

/// a provider of merged pull requests
///
/// implementations are shared between worker threads while a changelog is
/// generated
pub trait PullRequestSource: Send + Sync {
    /// numbers of the pull requests merged between two refs
    fn prs_between(&self, base: &GitRef, head: &GitRef) -> Result<Vec<u64>>;

    /// full details of one pull request
    fn get_pr(&self, number: u64) -> Result<PullRequest>;
}
