//! Error types for registry operations

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by fact retriever registry operations
///
/// Both variants carry the identifier the failing operation was given, so
/// callers can report exactly which retriever was at fault.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A retriever with this identifier is already registered
    #[error("fact retriever with identifier '{id}' has already been registered")]
    Conflict { id: String },

    /// No retriever with this identifier is registered
    #[error("fact retriever with identifier '{id}' is not registered")]
    NotFound { id: String },
}

impl RegistryError {
    /// The retriever identifier named by this error
    pub fn id(&self) -> &str {
        match self {
            Self::Conflict { id } | Self::NotFound { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_identifier() {
        let conflict = RegistryError::Conflict {
            id: "os-version".to_string(),
        };
        assert!(conflict.to_string().contains("'os-version'"));
        assert!(conflict.to_string().contains("already been registered"));

        let not_found = RegistryError::NotFound {
            id: "missing".to_string(),
        };
        assert!(not_found.to_string().contains("'missing'"));
        assert!(not_found.to_string().contains("is not registered"));
    }

    #[test]
    fn test_error_id_accessor() {
        let err = RegistryError::Conflict {
            id: "dup".to_string(),
        };
        assert_eq!(err.id(), "dup");
    }
}
