//! Error Types
//!
//! The only checked failure in the model is an architecture tag outside
//! the closed NT / ASD / ADHD set.

use thiserror::Error;

/// Main error type for TIDE operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TideError {
    /// Tag did not name one of the three known architectures
    #[error("Unknown architecture type: {0}")]
    InvalidArchitecture(String),
}

pub type Result<T> = std::result::Result<T, TideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_tag() {
        let err = TideError::InvalidArchitecture("INVALID".to_string());
        assert_eq!(err.to_string(), "Unknown architecture type: INVALID");
    }
}
