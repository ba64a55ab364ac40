use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogicError {
    #[error("logic configuration error: {0}")]
    Config(String),
}

pub type LogicResult<T> = Result<T, LogicError>;
