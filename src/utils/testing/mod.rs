// testing utilities for changelog generation

pub mod git_utils;
pub mod pull_requests;
pub mod scenarios;

pub use git_utils::TestGitRepo;
pub use pull_requests::{MockSource, PullRequestBuilder};
pub use scenarios::TestScenario;
