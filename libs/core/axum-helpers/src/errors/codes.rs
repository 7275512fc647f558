//! Error codes attached to error log events.
//!
//! Problem bodies never carry these codes; they exist so logs and metrics can
//! group failures without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,
    /// Path identifier could not be parsed
    InvalidId,
    /// JSON extraction from request body failed
    JsonExtraction,
    /// Requested resource was not found
    NotFound,
    /// Malformed request not covered by a more specific code
    BadRequest,

    // Server errors
    InternalError,

    // Database errors (2000-2999)
    DatabaseNotFound,
    DatabaseError,
    DatabaseUnavailable,

    // I/O errors (4000s)
    IoError,

    // JSON parsing errors (5000s)
    SerdeJsonError,
}

impl ErrorCode {
    /// Machine-readable identifier, SCREAMING_SNAKE_CASE.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: database errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,

            Self::DatabaseNotFound => 2001,
            Self::DatabaseError => 2003,
            Self::DatabaseUnavailable => 2013,

            Self::IoError => 4001,

            Self::SerdeJsonError => 5001,
        }
    }

    /// Message used as the problem `detail` when nothing more specific is known.
    ///
    /// Server-side codes deliberately say nothing about the underlying cause.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid identifier format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "The requested resource was not found",
            Self::BadRequest => "The request could not be processed",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseNotFound => "The requested record was not found",
            Self::DatabaseError => "A database error occurred",
            Self::DatabaseUnavailable => "Database temporarily unavailable",
            Self::IoError => "An I/O error occurred",
            Self::SerdeJsonError => "Failed to process JSON data",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 11] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidId,
        ErrorCode::JsonExtraction,
        ErrorCode::NotFound,
        ErrorCode::BadRequest,
        ErrorCode::InternalError,
        ErrorCode::DatabaseNotFound,
        ErrorCode::DatabaseError,
        ErrorCode::DatabaseUnavailable,
        ErrorCode::IoError,
        ErrorCode::SerdeJsonError,
    ];

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn codes_fall_in_their_ranges() {
        assert!((1000..2000).contains(&ErrorCode::InvalidId.code()));
        assert!((2000..3000).contains(&ErrorCode::DatabaseUnavailable.code()));
        assert!((4000..5000).contains(&ErrorCode::IoError.code()));
        assert!((5000..6000).contains(&ErrorCode::SerdeJsonError.code()));
    }

    #[test]
    fn display_matches_as_str() {
        for code in ALL {
            assert_eq!(code.to_string(), code.as_str());
            assert!(!code.default_message().is_empty());
        }
    }
}
