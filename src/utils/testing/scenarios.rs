// pre-defined release histories

use super::pull_requests::{MockSource, PullRequestBuilder};
use crate::utils::changelog::ReleaseRange;
use crate::utils::git_ops::GitRef;
use crate::utils::version::Version;

/// pre-defined release scenarios
pub enum TestScenario {
    /// 2024.2.0 -> 2024.3.0 from the dev branch
    MajorRelease,
    /// 2024.3.0b1 -> 2024.3.0b2 with cherry-picks of mixed quality
    BetaRelease,
    /// 2024.3.0 -> 2024.3.1 from the stable branch
    PatchRelease,
}

impl TestScenario {
    /// build the pull request source and the release range of a scenario
    pub fn build(self) -> (MockSource, ReleaseRange) {
        match self {
            TestScenario::MajorRelease => Self::build_major_release(),
            TestScenario::BetaRelease => Self::build_beta_release(),
            TestScenario::PatchRelease => Self::build_patch_release(),
        }
    }

    fn range(base: &str, base_ref: &str, head: &str, head_ref: &str) -> ReleaseRange {
        ReleaseRange::new(
            GitRef::from_string(base_ref),
            parse(base),
            GitRef::from_string(head_ref),
            parse(head),
        )
    }

    // registration order differs from merge order on purpose
    fn build_major_release() -> (MockSource, ReleaseRange) {
        let source = MockSource::new()
            .with(
                PullRequestBuilder::new(7, "Add RP2040 platform")
                    .label("new-platform")
                    .label("new-feature")
                    .merged_minutes(70)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(1, "Add BME680 gas sensor")
                    .label("new-component")
                    .merged_minutes(10)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(3, "Rework API encryption")
                    .label("breaking-change")
                    .label("notable-change")
                    .merged_minutes(30)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(2, "Bump esptool to 4.7")
                    .author("dependabot[bot]")
                    .label("dependencies")
                    .merged_minutes(20)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(4, "Speed up compile")
                    .label("new-feature")
                    .label("reverted")
                    .merged_minutes(40)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(5, "Fix wifi reconnect")
                    .label("cherry-picked")
                    .milestone("2024.1.3")
                    .merged_minutes(50)
                    .build(),
            )
            .with(
                PullRequestBuilder::new(6, "Fix OTA timeout")
                    .label("cherry-picked")
                    .milestone("2024.2.1")
                    .merged_minutes(60)
                    .build(),
            );

        (source, Self::range("2024.2.0", "2024.2.0", "2024.3.0", "dev"))
    }

    fn build_beta_release() -> (MockSource, ReleaseRange) {
        let source = MockSource::new()
            .with(
                PullRequestBuilder::new(11, "Fix display rotation")
                    .label("cherry-picked")
                    .milestone("2024.3.0b2")
                    .build(),
            )
            .with(
                PullRequestBuilder::new(12, "Fix uart flush")
                    .label("cherry-picked")
                    .milestone("2024.3.0b1")
                    .build(),
            )
            .with(
                PullRequestBuilder::new(13, "Fix sensor filters")
                    .label("cherry-picked")
                    .milestone("next")
                    .build(),
            )
            .with(
                PullRequestBuilder::new(14, "Fix i2c scan")
                    .label("cherry-picked")
                    .build(),
            );

        (
            source,
            Self::range("2024.3.0b1", "2024.3.0b1", "2024.3.0b2", "beta"),
        )
    }

    fn build_patch_release() -> (MockSource, ReleaseRange) {
        let source = MockSource::new()
            .with(
                PullRequestBuilder::new(21, "Fix BLE scan crash")
                    .label("cherry-picked")
                    .milestone("2024.3.1")
                    .build(),
            )
            .with(
                PullRequestBuilder::new(22, "Fix template number")
                    .label("cherry-picked")
                    .milestone("2024.3.2")
                    .build(),
            )
            .with(PullRequestBuilder::new(23, "Update docs link").build());

        (source, Self::range("2024.3.0", "2024.3.0", "2024.3.1", "release"))
    }
}

fn parse(version: &str) -> Version {
    Version::parse(version).unwrap_or_else(|_| Version::new(0, 0, 0))
}
