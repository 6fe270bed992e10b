//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Text is required")]
    EmptyText,

    #[error("History ID is required")]
    EmptyHistoryId,

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl DomainError {
    /// Check if this error is caused by user input (400-class)
    pub fn is_user_input(&self) -> bool {
        matches!(self, DomainError::EmptyText | DomainError::EmptyHistoryId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_display() {
        assert_eq!(DomainError::EmptyText.to_string(), "Text is required");
    }

    #[test]
    fn test_is_user_input() {
        assert!(DomainError::EmptyText.is_user_input());
        assert!(DomainError::EmptyHistoryId.is_user_input());
        assert!(!DomainError::InvalidModel(String::new()).is_user_input());
    }
}
