//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Entity construction only ever fails with [`DomainError::Validation`], carrying a
/// message that names the violated rule. Callers that need finer dispatch match on
/// the message or wrap the error themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A business rule was violated while building an entity.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed outside of entity construction.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The rule description without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_variant() {
        let err = DomainError::validation("title must be at least 1 character");
        assert_eq!(err.to_string(), "validation failed: title must be at least 1 character");
        assert_eq!(err.message(), "title must be at least 1 character");
    }

    #[test]
    fn invalid_id_keeps_its_own_kind() {
        let err = DomainError::invalid_id("CatalogId: expected 26 characters");
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert_eq!(err.to_string(), "invalid identifier: CatalogId: expected 26 characters");
    }
}
