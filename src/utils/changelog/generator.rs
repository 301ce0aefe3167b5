// changelog document assembly

use super::classifier::{ClassifiedChanges, classify};
use super::config::ChangelogConfig;
use super::eligibility::evaluate;
use super::formatter::{format_collapsible, format_heading, format_line};
use super::labels::{
    ALL_CHANGES_HEADING, CHERRY_PICKED, DEPENDENCY_HEADING, FULL_LIST_HEADING, LABEL_HEADERS,
};
use super::types::{IncludedPullRequest, ReleaseRange};
use crate::error::Result;
use crate::utils::concurrency::{Job, process_concurrently};
use crate::utils::source::PullRequestSource;
use crate::utils::version::Version;
use std::sync::Mutex;
use tracing::info;

/// fetch, filter and render the changelog for a release range
///
/// any failure while fetching aborts the whole generation
pub fn generate<S>(source: &S, range: &ReleaseRange, config: &ChangelogConfig) -> Result<String>
where
    S: PullRequestSource + ?Sized,
{
    info!(
        base = %range.base_version,
        head = %range.head_version,
        "generating changelog"
    );

    let numbers = source.prs_between(&range.base_ref, &range.head_ref)?;
    let collected: Mutex<Vec<IncludedPullRequest>> = Mutex::new(Vec::with_capacity(numbers.len()));

    let jobs: Vec<Job<'_>> = numbers
        .into_iter()
        .map(|number| {
            let collected = &collected;
            Box::new(move || {
                let pr = source.get_pr(number)?;
                if let Some(included) =
                    evaluate(pr, &range.base_version, &range.head_version).into_included()
                {
                    collected
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())
                        .push(included);
                }
                Ok(())
            }) as Job<'_>
        })
        .collect();

    info!("processing {} pull requests", jobs.len());
    process_concurrently(jobs, "load pull requests", config.workers)?;

    let mut entries = collected
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    sort_by_merge_time(&mut entries);

    Ok(assemble(&entries, &range.head_version, config))
}

/// order entries by merge time; equal timestamps keep their relative order
pub fn sort_by_merge_time(entries: &mut [IncludedPullRequest]) {
    entries.sort_by_key(|entry| entry.pr.merged_at);
}

/// render already filtered entries, sorted by merge time
pub fn assemble(
    entries: &[IncludedPullRequest],
    head_version: &Version,
    config: &ChangelogConfig,
) -> String {
    let format = config.format;
    let classified = classify(entries, config.with_sections, |entry| {
        format_line(entry, &config.shortname, format, config.include_author)
    });

    let mut output: Vec<String> = Vec::new();

    if config.with_sections {
        if head_version.is_patch_release() {
            // markdown release notes get their title from the release itself
            if !config.is_markdown() {
                let title = format!(
                    "Release {} - {}",
                    head_version,
                    config.release_date.format("%B %-d")
                );
                output.push(format_heading(&title, format, 2));
            }
        } else {
            output.push(format_heading(FULL_LIST_HEADING, format, 2));
            push_label_sections(&mut output, &classified, config);
            output.push(format_heading(ALL_CHANGES_HEADING, format, 3));
        }

        output.extend(format_collapsible(
            classified.all_changes(),
            format,
            ALL_CHANGES_HEADING,
        ));
    } else {
        output.extend(classified.all_changes().iter().cloned());
    }
    output.push(String::new());

    if config.with_sections {
        let dependency_lines = classified.dependency_changes();
        if !dependency_lines.is_empty() {
            output.push(format_heading(DEPENDENCY_HEADING, format, 3));
            output.extend(format_collapsible(
                &dependency_lines,
                format,
                DEPENDENCY_HEADING,
            ));
        }
    }

    output.join("\n")
}

fn push_label_sections(
    output: &mut Vec<String>,
    classified: &ClassifiedChanges,
    config: &ChangelogConfig,
) {
    for (label, title) in LABEL_HEADERS {
        if *label == CHERRY_PICKED && !config.prerelease {
            continue;
        }
        let lines = classified.group(label);
        if lines.is_empty() {
            continue;
        }

        output.push(format_heading(title, config.format, 3));
        output.extend(lines.iter().cloned());
        output.push(String::new());
    }
}
