// release version identifiers

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// a release version such as `2024.3.0`, `2024.3.0b2` or `2024.4.0-dev`
///
/// ordering is lexicographic over `(major, minor, patch)`; for an equal triple a
/// dev version sorts below every beta, and every beta sorts below the stable
/// release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// beta ordinal, 0 for non-beta versions
    pub beta: u32,
    pub dev: bool,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            beta: 0,
            dev: false,
        }
    }

    pub fn with_beta(mut self, beta: u32) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// parse a version from free text
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::VersionParse {
            input: input.to_string(),
        };

        let text = input.trim();
        let (text, dev) = match text.strip_suffix("-dev") {
            Some(rest) => (rest, true),
            None => (text, false),
        };

        let mut parts = text.split('.');
        let major = parse_number(parts.next()).ok_or_else(invalid)?;
        let minor = parse_number(parts.next()).ok_or_else(invalid)?;

        let (patch, beta) = match parts.next() {
            None => (0, 0),
            Some(last) => match last.split_once('b') {
                Some((patch, beta)) => {
                    let patch = parse_number(Some(patch)).ok_or_else(invalid)?;
                    let beta = parse_number(Some(beta)).ok_or_else(invalid)?;
                    if beta == 0 {
                        return Err(invalid());
                    }
                    (patch, beta)
                }
                None => (parse_number(Some(last)).ok_or_else(invalid)?, 0),
            },
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
            beta,
            dev,
        })
    }

    pub fn is_beta(&self) -> bool {
        self.beta > 0
    }

    /// a stable release that only bumps the patch number
    pub fn is_patch_release(&self) -> bool {
        self.patch != 0 && !self.is_beta()
    }

    pub fn next_dev_version(&self) -> Self {
        Self::new(self.major, self.minor + 1, 0).with_dev(true)
    }

    pub fn next_beta_version(&self) -> Self {
        if self.is_beta() {
            Self::new(self.major, self.minor, self.patch).with_beta(self.beta + 1)
        } else {
            Self::new(self.major, self.minor + 1, 0).with_beta(1)
        }
    }

    pub fn next_patch_version(&self) -> Self {
        if self.is_beta() || self.dev {
            Self::new(self.major, self.minor, self.patch)
        } else {
            Self::new(self.major, self.minor, self.patch + 1)
        }
    }

    // dev < beta < stable for the same triple
    fn stage_rank(&self) -> u8 {
        if self.dev {
            0
        } else if self.is_beta() {
            1
        } else {
            2
        }
    }
}

fn parse_number(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.stage_rank().cmp(&other.stage_rank()))
            .then_with(|| self.beta.cmp(&other.beta))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_beta() {
            write!(f, "b{}", self.beta)?;
        }
        if self.dev {
            write!(f, "-dev")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}
