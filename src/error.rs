use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("search term cannot be empty")]
    InvalidSearchTerm,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),
}

impl BrowseError {
    /// True for failures of a remote call: connectivity, non-success status,
    /// or a response body that could not be decoded.
    pub fn is_network_or_server(&self) -> bool {
        matches!(
            self,
            BrowseError::Api { .. } | BrowseError::Http(_) | BrowseError::Json(_)
        )
    }

    /// True for input rejected before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, BrowseError::InvalidSearchTerm)
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;
