use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// main configuration for relnotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelnotesConfig {
    /// the project changelogs are generated for
    #[serde(default)]
    pub project: ProjectSettings,

    /// github api access
    #[serde(default)]
    pub github: GitHubSettings,

    /// maximum number of pull requests fetched in parallel
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// identity and release branches of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// name shown in pull request links, e.g. `esphome#1234`
    pub shortname: String,
    pub owner: String,
    pub repo: String,
    pub stable_branch: Option<String>,
    pub beta_branch: Option<String>,
    pub dev_branch: Option<String>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            shortname: "esphome".to_string(),
            owner: "esphome".to_string(),
            repo: "esphome".to_string(),
            stable_branch: Some("release".to_string()),
            beta_branch: Some("beta".to_string()),
            dev_branch: Some("dev".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    pub api_url: String,
    /// environment variable holding the api token
    pub token_env: String,
    pub timeout_secs: u64,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_secs: 30,
        }
    }
}

fn default_workers() -> usize {
    8
}

impl Default for RelnotesConfig {
    fn default() -> Self {
        Self {
            project: ProjectSettings::default(),
            github: GitHubSettings::default(),
            workers: default_workers(),
        }
    }
}

impl RelnotesConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: RelnotesConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// load `relnotes.toml` from the repository root, or defaults when absent
    ///
    /// a config file that exists but cannot be read is an error
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Result<Self> {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Self::default()),
        }
    }

    /// find configuration file in repository
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let config_path = repo_path.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::ConfigError {
                reason: "workers must be at least 1".to_string(),
            });
        }
        if self.project.shortname.trim().is_empty() {
            return Err(Error::ConfigError {
                reason: "project.shortname must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
