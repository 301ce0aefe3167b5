pub mod changelog;
pub mod concurrency;
pub mod config;
pub mod git_ops;
pub mod github;
pub mod project;
pub mod source;
pub mod version;

pub mod testing;
