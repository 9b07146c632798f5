//! Tabular schema of the creature table and the load-time errors that
//! enforce it.
//!
//! Both error types are fatal: a store that fails either check never becomes
//! ready.

use crate::error::{DexError, ErrorSeverity, SourceLocation};
use crate::stats::Stat;

/// Column names of the creature table.
pub mod columns {
    pub const NAME: &str = "name";
    pub const ORDINAL: &str = "pokedex_number";
    pub const TOTAL: &str = "base_total";
    pub const TYPE1: &str = "type1";
    pub const TYPE2: &str = "type2";
    pub const ABILITIES: &str = "abilities";
    pub const WEIGHT: &str = "weight_kg";
    pub const HEIGHT: &str = "height_m";
    pub const IMAGE: &str = "image";

    /// Every column a creature table must declare, in canonical order.
    /// `base_total` is optional and therefore absent here.
    pub const REQUIRED: [&str; 14] = [
        NAME,
        ORDINAL,
        "hp",
        "attack",
        "defense",
        "sp_attack",
        "sp_defense",
        "speed",
        TYPE1,
        TYPE2,
        ABILITIES,
        WEIGHT,
        HEIGHT,
        IMAGE,
    ];
}

/// The dataset violates its structural or invariant contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{table} is missing required column '{column}'")]
    MissingColumn { table: &'static str, column: String },

    #[error("{table} declares column '{column}' more than once")]
    DuplicateColumn { table: &'static str, column: String },

    #[error("row {row}: creature name is empty")]
    EmptyKey { row: usize },

    #[error("row {row}: duplicate creature key '{key}'")]
    DuplicateKey { key: String, row: usize },

    #[error("row {row}: duplicate ordinal {ordinal}")]
    DuplicateOrdinal { ordinal: u32, row: usize },

    #[error("row {row}: stat {stat} is negative ({value})")]
    NegativeAttribute { row: usize, stat: Stat, value: i64 },

    #[error("row {row}: stat {stat} value {value} exceeds the supported range")]
    AttributeOutOfRange { row: usize, stat: Stat, value: i64 },

    #[error("creature '{key}': stored aggregate {stored} does not match computed {computed}")]
    AggregateMismatch {
        key: String,
        stored: u32,
        computed: u32,
    },

    #[error("{location}: measurement must be finite and positive, got '{value}'")]
    NonPositiveMeasurement {
        location: SourceLocation,
        value: String,
    },

    #[error("row {row}: primary category is empty")]
    MissingCategory { row: usize },

    #[error("creature '{key}': category '{category}' listed twice")]
    DuplicateCategory { key: String, category: String },

    #[error("creature '{key}': category '{category}' is not in the matchup vocabulary")]
    UnknownCategory { key: String, category: String },

    #[error("matchup matrix has no categories")]
    EmptyMatrix,

    #[error("matchup matrix label at position {position} is blank")]
    BlankMatrixLabel { position: usize },

    #[error("matchup matrix is not square: {rows} rows, {columns} columns")]
    MatrixNotSquare { rows: usize, columns: usize },

    #[error("matchup matrix lists category '{category}' more than once")]
    DuplicateMatrixCategory { category: String },

    #[error("matchup matrix category '{category}' appears on only one axis")]
    MatrixLabelMismatch { category: String },

    #[error("matchup matrix row {row} has {found} cells, expected {expected}")]
    RaggedMatrixRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matchup {attacker} -> {defender}: '{value}' is not one of 0, 0.25, 0.5, 1, 2")]
    InvalidMultiplier {
        attacker: String,
        defender: String,
        value: String,
    },

    #[error("configured default '{key}' does not name a loaded creature")]
    UnknownDefault { key: String },
}

impl DexError for SchemaError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use SchemaError::*;
        match self {
            MissingColumn { .. } => "SCHEMA_MISSING_COLUMN",
            DuplicateColumn { .. } => "SCHEMA_DUPLICATE_COLUMN",
            EmptyKey { .. } => "SCHEMA_EMPTY_KEY",
            DuplicateKey { .. } => "SCHEMA_DUPLICATE_KEY",
            DuplicateOrdinal { .. } => "SCHEMA_DUPLICATE_ORDINAL",
            NegativeAttribute { .. } => "SCHEMA_NEGATIVE_ATTRIBUTE",
            AttributeOutOfRange { .. } => "SCHEMA_ATTRIBUTE_OUT_OF_RANGE",
            AggregateMismatch { .. } => "SCHEMA_AGGREGATE_MISMATCH",
            NonPositiveMeasurement { .. } => "SCHEMA_NON_POSITIVE_MEASUREMENT",
            MissingCategory { .. } => "SCHEMA_MISSING_CATEGORY",
            DuplicateCategory { .. } => "SCHEMA_DUPLICATE_CATEGORY",
            UnknownCategory { .. } => "SCHEMA_UNKNOWN_CATEGORY",
            EmptyMatrix => "SCHEMA_EMPTY_MATRIX",
            BlankMatrixLabel { .. } => "SCHEMA_BLANK_MATRIX_LABEL",
            MatrixNotSquare { .. } => "SCHEMA_MATRIX_NOT_SQUARE",
            DuplicateMatrixCategory { .. } => "SCHEMA_DUPLICATE_MATRIX_CATEGORY",
            MatrixLabelMismatch { .. } => "SCHEMA_MATRIX_LABEL_MISMATCH",
            RaggedMatrixRow { .. } => "SCHEMA_RAGGED_MATRIX_ROW",
            InvalidMultiplier { .. } => "SCHEMA_INVALID_MULTIPLIER",
            UnknownDefault { .. } => "SCHEMA_UNKNOWN_DEFAULT",
        }
    }
}

/// A field's text could not be decoded into the expected value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{location}: '{value}' is not an integer")]
    InvalidInteger {
        location: SourceLocation,
        value: String,
    },

    #[error("{location}: '{value}' is not a number")]
    InvalidNumber {
        location: SourceLocation,
        value: String,
    },

    #[error("{location}: malformed list '{value}': {reason}")]
    MalformedList {
        location: SourceLocation,
        value: String,
        reason: &'static str,
    },
}

impl ParseError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::InvalidInteger { location, .. }
            | Self::InvalidNumber { location, .. }
            | Self::MalformedList { location, .. } => location,
        }
    }
}

impl DexError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInteger { .. } => "PARSE_INVALID_INTEGER",
            Self::InvalidNumber { .. } => "PARSE_INVALID_NUMBER",
            Self::MalformedList { .. } => "PARSE_MALFORMED_LIST",
        }
    }
}
