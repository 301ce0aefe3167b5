use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    RepositoryNotFound {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    ConfigError {
        reason: String,
    },
    UnknownBranch {
        branch: String,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    GitDiscoverError(Box<gix::discover::Error>),
    IoError(std::io::Error),
    RefNotFound {
        ref_name: String,
    },
    InvalidRef {
        ref_name: String,
    },
    VersionParse {
        input: String,
    },
    MissingMilestone {
        number: u64,
    },
    Http(reqwest::Error),
    GitHubStatus {
        status: u16,
        message: String,
    },
    RateLimited,
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RepositoryNotFound { path } => {
                write!(f, "git repository not found in path: {}", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::ConfigError { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
            Error::UnknownBranch { branch } => {
                write!(f, "no branch configured for '{}'", branch)
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::GitDiscoverError(err) => {
                write!(f, "git discover error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::RefNotFound { ref_name } => {
                write!(f, "git reference not found: {}", ref_name)
            }
            Error::InvalidRef { ref_name } => {
                write!(f, "invalid git reference: {}", ref_name)
            }
            Error::VersionParse { input } => {
                write!(f, "could not parse version from '{}'", input)
            }
            Error::MissingMilestone { number } => {
                write!(f, "pull request #{} has no milestone", number)
            }
            Error::Http(err) => {
                write!(f, "http error: {}", err)
            }
            Error::GitHubStatus { status, message } => {
                write!(f, "github api error ({}): {}", status, message)
            }
            Error::RateLimited => {
                write!(f, "github api rate limit exceeded")
            }
            Error::Json(err) => {
                write!(f, "json error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::GitDiscoverError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gix::discover::Error> for Error {
    fn from(err: gix::discover::Error) -> Self {
        Error::GitDiscoverError(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
