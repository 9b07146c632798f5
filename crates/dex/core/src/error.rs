//! Common error infrastructure for dex-core.
//!
//! This module provides the severity classification and the [`DexError`] trait
//! shared by every error type in the crate. Load-time errors
//! ([`SchemaError`](crate::schema::SchemaError),
//! [`ParseError`](crate::schema::ParseError)) live next to the schema they
//! enforce; query-time errors live here.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure family has its own error type
//! - **Rich Context**: Load errors carry the row and column that failed
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Expected outcomes the caller branches on (missing key)
/// - **Validation**: Invalid caller input that should be rejected without retry
/// - **Fatal**: The dataset cannot be served; startup must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller decides a fallback.
    ///
    /// Examples: creature key not found, store not ready yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: category outside the matrix vocabulary passed to a lookup
    Validation,

    /// Fatal error - dataset violates its contract, store must not become ready.
    ///
    /// Examples: missing column, duplicate key, malformed list literal
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error must abort initialization.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Position of a failing cell inside a tabular source.
///
/// Rows are 1-based data rows (the header is row 0), matching what a person
/// sees when opening the file in a spreadsheet minus the header line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub row: usize,
    pub column: String,
}

impl SourceLocation {
    #[must_use]
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

impl core::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "row {}, column '{}'", self.row, self.column)
    }
}

/// Common trait for all dex-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DexError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors returned by queries against a loaded store.
///
/// A successfully loaded store never fails a query except for these expected,
/// recoverable outcomes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No creature is registered under the (normalized) key.
    #[error("creature '{0}' not found")]
    NotFound(String),

    /// Category is not part of the matchup matrix vocabulary.
    #[error("category '{0}' not found")]
    CategoryNotFound(String),

    /// The store has not finished loading.
    #[error("store is not ready")]
    NotReady,
}

impl QueryError {
    /// Returns true for a missing creature key.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl DexError for QueryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::NotReady => ErrorSeverity::Recoverable,
            Self::CategoryNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "QUERY_NOT_FOUND",
            Self::CategoryNotFound(_) => "QUERY_CATEGORY_NOT_FOUND",
            Self::NotReady => "QUERY_NOT_READY",
        }
    }
}
