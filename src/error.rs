use thiserror::Error;

pub type Result<T> = std::result::Result<T, CographError>;

#[derive(Error, Debug)]
pub enum CographError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
