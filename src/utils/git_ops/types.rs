use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GitRef {
    Hash(String),
    Branch(String),
    Tag(String),
    Head,
}

impl GitRef {
    pub fn from_string(s: &str) -> Self {
        if s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            GitRef::Hash(s.to_string())
        } else if s == "HEAD" {
            GitRef::Head
        } else if let Some(tag) = s.strip_prefix("refs/tags/") {
            GitRef::Tag(tag.to_string())
        } else {
            GitRef::Branch(s.to_string())
        }
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitRef::Hash(hash) => write!(f, "{}", hash),
            GitRef::Branch(name) => write!(f, "{}", name),
            GitRef::Tag(name) => write!(f, "refs/tags/{}", name),
            GitRef::Head => write!(f, "HEAD"),
        }
    }
}

/// pull request number of a squash-merge subject such as `Add foo (#1234)`
pub fn pr_number_from_subject(subject: &str) -> Option<u64> {
    let inner = subject.trim_end().strip_suffix(')')?;
    let start = inner.rfind("(#")?;
    if start == 0 {
        return None;
    }

    let digits = &inner[start + 2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// pull request numbers referenced by a list of commit subjects
///
/// consecutive identical subjects are counted once
pub fn pr_numbers_from_subjects<'a, I>(subjects: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut numbers = Vec::new();
    let mut last: Option<&str> = None;

    for subject in subjects {
        if last == Some(subject) {
            continue;
        }
        last = Some(subject);

        if let Some(number) = pr_number_from_subject(subject) {
            numbers.push(number);
        }
    }

    numbers
}
