use thiserror::Error;

#[derive(Error, Debug)]
pub enum MakerError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl From<&str> for MakerError {
    fn from(error: &str) -> Self {
        MakerError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MakerError>;
