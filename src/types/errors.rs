use serde::Serialize;
use thiserror::Error;

/// Outcome taxonomy shared by every folder operation. Each operation fails
/// independently with one of these; nothing unwinds past its own boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl Serialize for OpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type OpResult<T> = Result<T, OpError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
