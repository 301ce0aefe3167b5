// decides which pull requests belong in a changelog

use super::labels::{CHERRY_PICKED, REVERTED};
use super::types::{IncludedPullRequest, PullRequest};
use crate::error::{Error, Result};
use crate::utils::version::Version;
use tracing::{debug, warn};

/// why a pull request was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    Reverted,
    /// cherry-picked into a release at or below the base version
    AlreadyReleased,
    /// cherry-picked into a release above the head version
    NotYetReleased,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Eligibility {
    Included(IncludedPullRequest),
    Excluded(ExclusionReason),
}

impl Eligibility {
    pub fn into_included(self) -> Option<IncludedPullRequest> {
        match self {
            Eligibility::Included(included) => Some(included),
            Eligibility::Excluded(_) => None,
        }
    }
}

/// version a cherry-picked pull request was picked into, from its milestone
pub fn milestone_version(pr: &PullRequest) -> Result<Version> {
    let milestone = pr
        .milestone
        .as_ref()
        .ok_or(Error::MissingMilestone { number: pr.number })?;
    Version::parse(&milestone.title)
}

/// apply the inclusion rules to one pull request
///
/// independent of every other pull request, so it can run on any worker
pub fn evaluate(pr: PullRequest, base_version: &Version, head_version: &Version) -> Eligibility {
    let mut included = IncludedPullRequest::new(pr);

    if included.has_label(REVERTED) {
        debug!(number = included.pr.number, "skipping reverted pull request");
        return Eligibility::Excluded(ExclusionReason::Reverted);
    }

    if !included.has_label(CHERRY_PICKED) {
        return Eligibility::Included(included);
    }

    match milestone_version(&included.pr) {
        Ok(pick_version) => {
            if pick_version <= *base_version {
                debug!(
                    number = included.pr.number,
                    %pick_version,
                    "cherry-pick already released"
                );
                return Eligibility::Excluded(ExclusionReason::AlreadyReleased);
            }
            if pick_version > *head_version {
                debug!(
                    number = included.pr.number,
                    %pick_version,
                    "cherry-pick not part of this release"
                );
                return Eligibility::Excluded(ExclusionReason::NotYetReleased);
            }
        }
        Err(err @ Error::MissingMilestone { .. }) => {
            // kept with its label and without range filtering
            warn!(number = included.pr.number, "{}", err);
        }
        Err(err) => {
            warn!(number = included.pr.number, "could not parse milestone: {}", err);
            included.remove_label(CHERRY_PICKED);
        }
    }

    Eligibility::Included(included)
}
