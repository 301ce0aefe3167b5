// label vocabulary

pub const REVERTED: &str = "reverted";
pub const CHERRY_PICKED: &str = "cherry-picked";

/// sub-sections of a full release, in display order
pub const LABEL_HEADERS: &[(&str, &str)] = &[
    ("new-feature", "New Features"),
    ("new-component", "New Components"),
    ("new-platform", "New Platforms"),
    ("breaking-change", "Breaking Changes"),
    (CHERRY_PICKED, "Beta Changes"),
    ("notable-change", "Notable Changes"),
];

/// labels appended to a line as `(label)`, in this order
pub const LINE_LABELS: &[&str] = &[
    "new-feature",
    "new-component",
    "new-platform",
    "breaking-change",
    "notable-change",
];

pub const DEPENDENCY_LABELS: &[&str] = &["dependencies"];

pub const FULL_LIST_HEADING: &str = "Full list of changes";
pub const ALL_CHANGES_HEADING: &str = "All changes";
pub const DEPENDENCY_HEADING: &str = "Dependency Changes";
