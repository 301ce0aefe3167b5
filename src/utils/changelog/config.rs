// changelog configuration

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// markup dialect of the generated changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// github flavoured markdown
    Markdown,
    /// reStructuredText as used by the documentation site
    Rst,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "rst" => Ok(OutputFormat::Rst),
            _ => Err(format!("invalid changelog format: {}, use 'markdown' or 'rst'", s)),
        }
    }
}

/// settings for a single changelog generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// short project name used in pull request links (e.g. "esphome")
    pub shortname: String,

    /// markup dialect
    pub format: OutputFormat,

    /// produce headed, grouped output instead of a flat list
    pub with_sections: bool,

    /// mention the author of each pull request
    pub include_author: bool,

    /// the release is a pre-release (enables "Beta Changes")
    pub prerelease: bool,

    /// date shown in the patch release heading
    pub release_date: NaiveDate,

    /// maximum number of pull requests fetched in parallel
    pub workers: usize,
}

impl ChangelogConfig {
    pub fn new(shortname: impl Into<String>) -> Self {
        Self {
            shortname: shortname.into(),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sections(mut self, with_sections: bool) -> Self {
        self.with_sections = with_sections;
        self
    }

    pub fn include_author(mut self, include: bool) -> Self {
        self.include_author = include;
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub fn release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = date;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn is_markdown(&self) -> bool {
        self.format == OutputFormat::Markdown
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            shortname: "esphome".to_string(),
            format: OutputFormat::Rst,
            with_sections: false,
            include_author: true,
            prerelease: false,
            release_date: Local::now().date_naive(),
            workers: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("MD".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("rst".parse::<OutputFormat>(), Ok(OutputFormat::Rst));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ChangelogConfig::new("docs")
            .format(OutputFormat::Markdown)
            .with_sections(true)
            .include_author(false)
            .prerelease(true)
            .workers(0);

        assert_eq!(config.shortname, "docs");
        assert!(config.is_markdown());
        assert!(config.with_sections);
        assert!(!config.include_author);
        assert!(config.prerelease);
        assert_eq!(config.workers, 1);
    }
}
