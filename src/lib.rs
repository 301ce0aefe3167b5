pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, Eligibility, ExclusionReason, IncludedPullRequest, OutputFormat, PullRequest,
    ReleaseRange, assemble, evaluate, generate,
};
pub use utils::concurrency::{Job, process_concurrently};
pub use utils::config::{GitHubSettings, ProjectSettings, RelnotesConfig};
pub use utils::git_ops::{GitOps, GitRef};
pub use utils::github::GitHubClient;
pub use utils::project::{Branch, Project};
pub use utils::source::PullRequestSource;
pub use utils::version::Version;
