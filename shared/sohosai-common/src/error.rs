//! Common Error Types

/// Errors raised while constructing shared domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Bureau code must not be empty")]
    EmptyBureauCode,

    #[error("Bureau code exceeds {max} characters: {code}")]
    BureauCodeTooLong { code: String, max: usize },

    #[error("Invalid bureau code: {0}")]
    InvalidBureauCode(String),

    #[error("Duplicate member in roster: {0}")]
    DuplicateMember(uuid::Uuid),
}

/// Result alias for shared domain operations.
pub type Result<T> = std::result::Result<T, Error>;
