// groups rendered lines by label

use super::labels::DEPENDENCY_LABELS;
use super::types::IncludedPullRequest;
use std::collections::HashMap;

/// rendered lines keyed by label plus the unified change list
///
/// every group keeps the order in which lines were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedChanges {
    groups: HashMap<String, Vec<String>>,
    all_changes: Vec<String>,
}

impl ClassifiedChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// add one line; a pull request with several labels lands in several groups
    pub fn push(&mut self, entry: &IncludedPullRequest, line: String, with_sections: bool) {
        if !with_sections || !entry.has_any_label(DEPENDENCY_LABELS) {
            self.all_changes.push(line.clone());
        }

        for label in &entry.labels {
            self.groups
                .entry(label.clone())
                .or_default()
                .push(line.clone());
        }
    }

    pub fn group(&self, label: &str) -> &[String] {
        self.groups.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_changes(&self) -> &[String] {
        &self.all_changes
    }

    /// lines of every dependency label, in label order
    pub fn dependency_changes(&self) -> Vec<String> {
        DEPENDENCY_LABELS
            .iter()
            .flat_map(|label| self.group(label).iter().cloned())
            .collect()
    }
}

/// classify entries that are already sorted by merge time
pub fn classify<F>(entries: &[IncludedPullRequest], with_sections: bool, render: F) -> ClassifiedChanges
where
    F: Fn(&IncludedPullRequest) -> String,
{
    let mut classified = ClassifiedChanges::new();
    for entry in entries {
        classified.push(entry, render(entry), with_sections);
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::PullRequestBuilder;

    fn entry(number: u64, labels: &[&str]) -> IncludedPullRequest {
        let mut builder = PullRequestBuilder::new(number, &format!("PR {}", number));
        for label in labels {
            builder = builder.label(*label);
        }
        IncludedPullRequest::new(builder.build())
    }

    fn render(entry: &IncludedPullRequest) -> String {
        format!("#{}", entry.pr.number)
    }

    #[test]
    fn test_multi_label_fan_out() {
        let entries = vec![entry(1, &["new-feature", "breaking-change"]), entry(2, &["new-feature"])];
        let classified = classify(&entries, true, render);

        assert_eq!(classified.group("new-feature"), ["#1", "#2"]);
        assert_eq!(classified.group("breaking-change"), ["#1"]);
        assert!(classified.group("new-platform").is_empty());
        assert_eq!(classified.all_changes(), ["#1", "#2"]);
    }

    #[test]
    fn test_groups_keep_input_order() {
        let entries = vec![entry(9, &["x"]), entry(3, &["x"]), entry(5, &["x"])];
        let classified = classify(&entries, true, render);
        assert_eq!(classified.group("x"), ["#9", "#3", "#5"]);
        assert_eq!(classified.all_changes(), ["#9", "#3", "#5"]);
    }

    #[test]
    fn test_dependencies_left_out_of_unified_list_in_section_mode() {
        let entries = vec![entry(1, &["new-feature", "dependencies"]), entry(2, &[])];
        let classified = classify(&entries, true, render);

        assert_eq!(classified.all_changes(), ["#2"]);
        assert_eq!(classified.group("new-feature"), ["#1"]);
        assert_eq!(classified.dependency_changes(), vec!["#1".to_string()]);
    }

    #[test]
    fn test_dependencies_kept_in_flat_mode() {
        let entries = vec![entry(1, &["dependencies"]), entry(2, &[])];
        let classified = classify(&entries, false, render);
        assert_eq!(classified.all_changes(), ["#1", "#2"]);
    }
}
