// markup for both changelog dialects
//
// everything dialect specific lives here; classification and document
// assembly only ever call these functions

use super::config::OutputFormat;
use super::labels::LINE_LABELS;
use super::types::IncludedPullRequest;

/// render a heading; level 1 is the document title
pub fn format_heading(title: &str, format: OutputFormat, level: usize) -> String {
    match format {
        OutputFormat::Markdown => {
            format!("{} {}\n", "#".repeat(level), title)
        }
        OutputFormat::Rst => {
            let underline = match level {
                0 | 1 => '=',
                2 => '-',
                _ => '^',
            };
            let width = title.chars().count();
            format!("{}\n{}\n", title, underline.to_string().repeat(width))
        }
    }
}

/// render one pull request as a list item
pub fn format_line(
    entry: &IncludedPullRequest,
    shortname: &str,
    format: OutputFormat,
    include_author: bool,
) -> String {
    let pr = &entry.pr;
    let (pr_link, user_link) = match format {
        OutputFormat::Markdown => (
            format!("[{}#{}]({})", shortname, pr.number, pr.html_url),
            format!("[@{}]({})", pr.user.login, pr.user.html_url),
        ),
        OutputFormat::Rst => (
            format!(":{}pr:`{}`", shortname, pr.number),
            format!(":ghuser:`{}`", pr.user.login),
        ),
    };

    let mut line = format!("- {} {}", pr.title, pr_link);
    if include_author {
        line.push_str(" by ");
        line.push_str(&user_link);
    }

    for label in LINE_LABELS.iter().filter(|label| entry.has_label(label)) {
        line.push_str(&format!(" ({})", label));
    }

    line
}

/// wrap lines in a block the reader can expand
pub fn format_collapsible(lines: &[String], format: OutputFormat, summary: &str) -> Vec<String> {
    let mut block = Vec::with_capacity(lines.len() + 5);
    match format {
        OutputFormat::Markdown => {
            block.push("<details>".to_string());
            block.push("<summary></summary>".to_string());
            block.push(String::new());
            block.extend(lines.iter().cloned());
            block.push(String::new());
            block.push("</details>".to_string());
        }
        OutputFormat::Rst => {
            block.push(format!(".. collapse:: {}", summary));
            block.push(String::new());
            block.extend(lines.iter().map(|line| format!("    {}", line)));
            block.push(String::new());
        }
    }
    block
}
