use thiserror::Error;

use crate::domain::ExpenseId;

/// Error type that captures common expense store and configuration failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),
    #[error("Duplicate expense id: {0}")]
    DuplicateId(ExpenseId),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
