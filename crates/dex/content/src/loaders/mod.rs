//! Content loaders for reading the dataset from files.
//!
//! This module provides loaders that convert CSV/TOML sources into validated
//! `dex-core` values. Every loader either returns fully validated data or a
//! [`LoadError`]; no partial results are ever produced.

pub mod abilities;
pub mod config;
pub mod creatures;
pub mod factory;
pub mod matchups;

pub use abilities::parse_ability_list;
pub use config::ConfigLoader;
pub use creatures::CreatureLoader;
pub use factory::ContentFactory;
pub use matchups::MatchupLoader;

use std::path::{Path, PathBuf};

use dex_core::{DexError, ErrorSeverity, ParseError, SchemaError};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Everything that can abort loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {table}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse config TOML")]
    Config(#[source] toml::de::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl DexError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "LOAD_IO",
            Self::Csv { .. } => "LOAD_CSV",
            Self::Config(_) => "LOAD_CONFIG",
            Self::Schema(err) => err.error_code(),
            Self::Parse(err) => err.error_code(),
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn csv_error(table: &'static str) -> impl FnOnce(csv::Error) -> LoadError {
    move |source| LoadError::Csv { table, source }
}
