use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Calculation Error: {0}")]
    Calculation(String),

    #[error("Persistence Error: {0}")]
    Persistence(String),
}

pub type FfResult<T> = Result<T, FrameForgeError>;
