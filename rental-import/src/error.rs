use crate::models::EntityKind;
use crate::store::StoreError;
use mongodb::bson;
use std::path::PathBuf;
use thiserror::Error;

/// A CSV row (or header) lacks a field its entity kind requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} row at line {line} is missing field `{field}`")]
pub struct RowShapeError {
    pub kind: EntityKind,
    pub field: &'static str,
    /// 1-based line in the source file; the header is line 1.
    pub line: u64,
}

/// Failures that abort an import run.
///
/// Bulk insert failures are not listed here: they are recorded per kind in
/// the run's outcome and the run carries on.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("row shape error in {path}: {source}")]
    RowShape {
        path: PathBuf,
        source: RowShapeError,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        ImportError::Csv {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("malformed document in {collection}: {source}")]
    Decode {
        collection: &'static str,
        source: bson::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
