// changelog generation

pub mod classifier;
pub mod config;
pub mod eligibility;
pub mod formatter;
pub mod generator;
pub mod labels;
pub mod types;

pub use classifier::{ClassifiedChanges, classify};
pub use config::{ChangelogConfig, OutputFormat};
pub use eligibility::{Eligibility, ExclusionReason, evaluate, milestone_version};
pub use formatter::{format_collapsible, format_heading, format_line};
pub use generator::{assemble, generate, sort_by_merge_time};
pub use types::{Author, IncludedPullRequest, Label, Milestone, PullRequest, ReleaseRange};
