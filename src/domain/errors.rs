// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for resolution operations.
//!
//! Only structural misuse is reported through [`ResolveError`]. A key that is
//! simply missing is never an error; it resolves to
//! [`ResolutionResult::Absent`](crate::domain::ResolutionResult::Absent).

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for this crate.
///
/// # Examples
///
/// ```
/// use optchain::domain::errors::ResolveError;
///
/// let error = ResolveError::InvalidPath {
///     path: String::new(),
///     reason: "path must contain at least one segment".to_string(),
/// };
/// assert!(error.to_string().contains("at least one segment"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// A lookup path was empty or contained an empty segment.
    #[error("Invalid lookup path '{path}': {reason}")]
    InvalidPath {
        /// The offending path in dotted notation
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// A variant table violated one of its invariants.
    #[error("Invalid variant table: {message}")]
    InvalidVariantTable {
        /// What was wrong with the table
        message: String,
    },

    /// A present value could not be converted to the requested type.
    #[error("Failed to convert value at '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The path of the value being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A document could not be parsed into a mapping.
    #[error("Failed to parse mapping: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A mapping source failed to load or reload.
    #[error("Mapping source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that failed
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ResolveError {
    /// Creates an `InvalidPath` error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolveError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `TypeConversionError` from a `ParseIntError`.
    pub fn from_parse_int_error(key: impl Into<String>, err: ParseIntError) -> Self {
        ResolveError::TypeConversionError {
            key: key.into(),
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `TypeConversionError` from a `ParseFloatError`.
    pub fn from_parse_float_error(key: impl Into<String>, err: ParseFloatError) -> Self {
        ResolveError::TypeConversionError {
            key: key.into(),
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns `true` if this error signals a malformed lookup path.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, ResolveError::InvalidPath { .. })
    }
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
