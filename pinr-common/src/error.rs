use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PinrError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("TOML Parsing Error: {0}")]
    Toml(#[from] Arc<toml::de::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Remote lookup failed: {0}")]
    RemoteLookup(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Dependency Graph Error: {0}")]
    Graph(String),

    #[error("Parsing Error in {0}: {1}")]
    Parse(&'static str, String),
}

impl From<std::io::Error> for PinrError {
    fn from(err: std::io::Error) -> Self {
        PinrError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for PinrError {
    fn from(err: reqwest::Error) -> Self {
        PinrError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for PinrError {
    fn from(err: serde_json::Error) -> Self {
        PinrError::Json(Arc::new(err))
    }
}

impl From<toml::de::Error> for PinrError {
    fn from(err: toml::de::Error) -> Self {
        PinrError::Toml(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PinrError>;
