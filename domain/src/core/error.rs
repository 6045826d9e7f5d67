//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One of the range fields is blank or not an integral number
    #[error("Please enter valid numbers")]
    InvalidNumbers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_numbers_display() {
        let error = DomainError::InvalidNumbers;
        assert_eq!(error.to_string(), "Please enter valid numbers");
    }
}
