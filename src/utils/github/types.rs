use serde::{Deserialize, Serialize};

/// a release entry from the releases API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
}

/// error payload returned with non-success responses
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubErrorBody {
    pub message: String,
}
