//! Unified error type for the catalog.
//!
//! The first three variants are the caller-visible business failures; the rest
//! come from the infrastructure underneath (database, configuration).

use thiserror::Error;

/// Business classification of a failure, used by transport layers to map
/// errors onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced product or category does not exist
    NotFound,
    /// Input violates a field-level rule
    Validation,
    /// A uniqueness constraint would be violated
    DuplicateResource,
}

/// All errors produced by the catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// Referenced entity (product or category) does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable message naming the missing id
        message: String,
    },

    /// Input violates a business rule
    #[error("{message}")]
    Validation {
        /// Human-readable message naming the broken rule
        message: String,
    },

    /// Another product already uses the requested name
    #[error("{message}")]
    DuplicateResource {
        /// Human-readable message naming the conflicting value
        message: String,
    },

    /// Stored data breaks a relational invariant
    #[error("Integrity error: {message}")]
    Integrity {
        /// Description of the broken invariant
        message: String,
    },

    #[error("Configuration error: {message}")]
    /// Configuration could not be loaded or parsed
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Returns the business kind of this error, or `None` for infrastructure failures.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::NotFound { .. } => Some(ErrorKind::NotFound),
            Self::Validation { .. } => Some(ErrorKind::Validation),
            Self::DuplicateResource { .. } => Some(ErrorKind::DuplicateResource),
            Self::Integrity { .. } | Self::Config { .. } | Self::Database(_) => None,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
