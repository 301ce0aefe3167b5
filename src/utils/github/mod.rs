// github api access

pub mod client;
pub mod types;

pub use client::{GitHubClient, latest_release_version};
pub use types::Release;
