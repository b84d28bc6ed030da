use thiserror::Error;

pub type Result<T> = std::result::Result<T, SentimeterError>;

#[derive(Debug, Error)]
pub enum SentimeterError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scoring failure: {0}")]
    Scoring(String),
}
