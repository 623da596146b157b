//! Error taxonomy for the extract, transform and load stages

use crate::storage::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the pipeline stages
///
/// Unparseable Salary or EmployeeID values are not errors; the transformers
/// substitute defaults for them.
#[derive(Debug, Error)]
pub enum EtlError {
    /// A file's content does not match its declared format
    #[error("Failed to parse {format} file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No readable input file was found
    #[error("No supported input files found in {}", .0.display())]
    NoData(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl EtlError {
    pub fn parse(
        path: impl Into<PathBuf>,
        format: Format,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        EtlError::Parse {
            path: path.into(),
            format,
            source: source.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    ///
    /// Input problems exit with 2, database problems with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            EtlError::Load(_) => 1,
            EtlError::Parse { .. } | EtlError::NoData(_) | EtlError::Io { .. } => 2,
        }
    }
}

/// Where in the load a database error happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Connect,
    CreateTable,
    BeginTransaction,
    /// Inserting the zero-based row
    Insert(usize),
    Commit,
}

impl std::fmt::Display for LoadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStage::Connect => write!(f, "connecting"),
            LoadStage::CreateTable => write!(f, "creating table"),
            LoadStage::BeginTransaction => write!(f, "starting transaction"),
            LoadStage::Insert(row) => write!(f, "inserting row {}", row + 1),
            LoadStage::Commit => write!(f, "committing"),
        }
    }
}

/// A failed load, with how far it got
#[derive(Debug, Error)]
#[error("Database error while {stage}: {source}")]
pub struct LoadError {
    pub stage: LoadStage,
    /// Rows inserted in the transaction before the failure
    pub rows_inserted: usize,
    /// Whether those rows were rolled back
    ///
    /// Set after an explicit rollback, and after a failed commit: a
    /// transaction whose commit fails is never made visible.
    pub rolled_back: bool,
    #[source]
    pub source: sqlx::Error,
}

impl LoadError {
    /// Rows that remain in the table after the failure
    pub fn rows_persisted(&self) -> usize {
        if self.rolled_back { 0 } else { self.rows_inserted }
    }
}
