use chrono::NaiveDate;
use relnotes::utils::testing::{MockSource, PullRequestBuilder, TestScenario};
use relnotes::{ChangelogConfig, Error, OutputFormat, ReleaseRange, generate};

fn sectioned(format: OutputFormat) -> ChangelogConfig {
    ChangelogConfig::new("esphome")
        .format(format)
        .with_sections(true)
        .include_author(false)
        .release_date(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
}

fn render(scenario: TestScenario, config: &ChangelogConfig) -> String {
    let (source, range) = scenario.build();
    generate(&source, &range, config).unwrap()
}

/// split a sectioned markdown document at the unified list and the dependency block
fn markdown_parts(text: &str) -> (&str, &str, &str) {
    let (head, rest) = text.split_once("### All changes\n").unwrap();
    let (all, deps) = rest.split_once("### Dependency Changes\n").unwrap_or((rest, ""));
    (head, all, deps)
}

#[test]
fn test_integration_flat_list_in_merge_order() {
    let (source, range) = TestScenario::MajorRelease.build();
    let config = ChangelogConfig::new("esphome");
    let text = generate(&source, &range, &config).unwrap();

    assert_eq!(
        text,
        "- Add BME680 gas sensor :esphomepr:`1` by :ghuser:`contributor` (new-component)\n\
         - Bump esptool to 4.7 :esphomepr:`2` by :ghuser:`dependabot[bot]`\n\
         - Rework API encryption :esphomepr:`3` by :ghuser:`contributor` (breaking-change) (notable-change)\n\
         - Fix OTA timeout :esphomepr:`6` by :ghuser:`contributor`\n\
         - Add RP2040 platform :esphomepr:`7` by :ghuser:`contributor` (new-feature) (new-platform)\n"
    );
}

#[test]
fn test_integration_major_release_sections() {
    let text = render(TestScenario::MajorRelease, &sectioned(OutputFormat::Markdown));
    let (head, all, deps) = markdown_parts(&text);

    assert!(head.starts_with("## Full list of changes\n"));
    for heading in [
        "### New Features\n",
        "### New Components\n",
        "### New Platforms\n",
        "### Breaking Changes\n",
        "### Notable Changes\n",
    ] {
        assert!(head.contains(heading), "missing {}", heading);
    }
    // not a pre-release
    assert!(!text.contains("Beta Changes"));

    // sections follow the fixed label order
    let features = head.find("New Features").unwrap();
    let components = head.find("New Components").unwrap();
    let platforms = head.find("New Platforms").unwrap();
    let breaking = head.find("Breaking Changes").unwrap();
    let notable = head.find("Notable Changes").unwrap();
    assert!(features < components && components < platforms);
    assert!(platforms < breaking && breaking < notable);

    // a pull request with two section labels shows up in both sections
    assert_eq!(head.matches("Add RP2040 platform").count(), 2);

    let first = all.find("Add BME680 gas sensor").unwrap();
    let third = all.find("Rework API encryption").unwrap();
    let sixth = all.find("Fix OTA timeout").unwrap();
    let seventh = all.find("Add RP2040 platform").unwrap();
    assert!(first < third && third < sixth && sixth < seventh);

    assert!(!all.contains("Bump esptool"));
    assert!(deps.contains("[esphome#2](https://github.com/esphome/esphome/pull/2)"));
    assert!(deps.starts_with("\n<details>\n"));
}

#[test]
fn test_integration_reverted_and_out_of_range_cherry_picks_dropped() {
    for format in [OutputFormat::Markdown, OutputFormat::Rst] {
        let text = render(TestScenario::MajorRelease, &sectioned(format));
        assert!(!text.contains("Speed up compile"));
        assert!(!text.contains("Fix wifi reconnect"));
        assert!(text.contains("Fix OTA timeout"));
    }
}

#[test]
fn test_integration_dialects_share_content() {
    let markdown = render(TestScenario::MajorRelease, &sectioned(OutputFormat::Markdown));
    let rst = render(TestScenario::MajorRelease, &sectioned(OutputFormat::Rst));

    for text in [
        "Full list of changes",
        "New Features",
        "New Components",
        "New Platforms",
        "Breaking Changes",
        "Beta Changes",
        "Notable Changes",
        "All changes",
        "Dependency Changes",
        "Add BME680 gas sensor",
        "Bump esptool to 4.7",
        "Rework API encryption",
        "Speed up compile",
        "Fix wifi reconnect",
        "Fix OTA timeout",
        "Add RP2040 platform",
    ] {
        assert_eq!(
            markdown.contains(text),
            rst.contains(text),
            "dialects disagree on {}",
            text
        );
    }

    assert!(rst.starts_with("Full list of changes\n--------------------\n"));
    assert!(rst.contains("New Features\n^^^^^^^^^^^^\n"));
    assert!(rst.contains(".. collapse:: Dependency Changes\n\n    - Bump esptool to 4.7 :esphomepr:`2`"));
}

#[test]
fn test_integration_beta_release_cherry_picks() {
    let config = sectioned(OutputFormat::Rst).prerelease(true);
    let text = render(TestScenario::BetaRelease, &config);

    let (_, beta) = text.split_once("Beta Changes\n^^^^^^^^^^^^\n").unwrap();
    let (beta, _) = beta.split_once("All changes\n").unwrap();

    assert!(beta.contains("Fix display rotation"));
    assert!(beta.contains("Fix i2c scan"));
    // unparsable milestone: listed, but no longer a cherry-pick
    assert!(!beta.contains("Fix sensor filters"));
    assert!(text.contains("Fix sensor filters"));
    // picked into the base beta
    assert!(!text.contains("Fix uart flush"));
}

#[test]
fn test_integration_beta_section_needs_prerelease() {
    let text = render(TestScenario::BetaRelease, &sectioned(OutputFormat::Markdown));
    assert!(!text.contains("Beta Changes"));
    assert!(text.contains("Fix display rotation"));
}

#[test]
fn test_integration_patch_release_single_heading() {
    let text = render(TestScenario::PatchRelease, &sectioned(OutputFormat::Rst));

    assert_eq!(
        text,
        "Release 2024.3.1 - March 20\n---------------------------\n\n\
         .. collapse:: All changes\n\n    \
         - Fix BLE scan crash :esphomepr:`21`\n    \
         - Update docs link :esphomepr:`23`\n\n"
    );
}

#[test]
fn test_integration_patch_release_markdown() {
    let text = render(TestScenario::PatchRelease, &sectioned(OutputFormat::Markdown));

    assert!(!text.contains("Full list of changes"));
    assert!(!text.contains("Release 2024.3.1"));
    assert!(text.contains("Fix BLE scan crash"));
    assert!(!text.contains("Fix template number"));
}

#[test]
fn test_integration_empty_range() {
    let range = TestScenario::MajorRelease.build().1;
    let source = MockSource::new();

    let flat = generate(&source, &range, &ChangelogConfig::new("esphome")).unwrap();
    assert_eq!(flat, "");

    let text = generate(&source, &range, &sectioned(OutputFormat::Markdown)).unwrap();
    assert_eq!(
        text,
        "## Full list of changes\n\n### All changes\n\n<details>\n<summary></summary>\n\n\n</details>\n"
    );
}

#[test]
fn test_integration_failed_fetch_aborts() {
    let (source, range) = TestScenario::MajorRelease.build();
    let source = source.failing(99);

    let result = generate(&source, &range, &sectioned(OutputFormat::Rst));
    assert!(matches!(
        result,
        Err(Error::GitHubStatus { status: 502, .. })
    ));
}

#[test]
fn test_integration_worker_count_does_not_change_output() {
    let single = render(
        TestScenario::MajorRelease,
        &sectioned(OutputFormat::Rst).workers(1),
    );
    let parallel = render(
        TestScenario::MajorRelease,
        &sectioned(OutputFormat::Rst).workers(16),
    );
    assert_eq!(single, parallel);
}

#[test]
fn test_integration_sorted_by_merge_time_not_listing_order() {
    let range: ReleaseRange = TestScenario::MajorRelease.build().1;
    let source = MockSource::new()
        .with(PullRequestBuilder::new(40, "Second").merged_minutes(5).build())
        .with(PullRequestBuilder::new(30, "First").merged_minutes(1).build());

    let text = generate(&source, &range, &ChangelogConfig::new("esphome").include_author(false))
        .unwrap();
    assert_eq!(text, "- First :esphomepr:`30`\n- Second :esphomepr:`40`\n");
}
