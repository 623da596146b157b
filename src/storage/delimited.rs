//! Delimited text (CSV and TSV) reading

use super::Format;
use crate::error::EtlError;
use crate::etl::Extractor;
use crate::table::{RecordSet, Value};
use csv::ReaderBuilder;
use eyre::Result;
use std::path::{Path, PathBuf};

/// Read a delimited file whose first row is the header
///
/// Each cell is typed on its own with [`Value::infer`].
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
    format: Format,
}

impl CsvReader {
    /// Comma-delimited reader
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
            format: Format::Csv,
        }
    }

    /// Tab-delimited reader
    pub fn tsv(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b'\t',
            format: Format::Tsv,
        }
    }

    pub fn read(&self) -> Result<RecordSet, EtlError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(|e| self.error(e))?;

        let headers = reader.headers().map_err(|e| self.error(e))?.clone();
        let mut set = RecordSet::new(headers.iter());

        for record in reader.records() {
            let record = record.map_err(|e| self.error(e))?;
            set.push_row(record.iter().map(Value::infer).collect());
        }

        Ok(set)
    }

    fn error(&self, e: csv::Error) -> EtlError {
        if e.is_io_error() {
            EtlError::io(&self.path, std::io::Error::from(e))
        } else {
            EtlError::parse(&self.path, self.format, e)
        }
    }
}

impl Extractor for CsvReader {
    type Output = RecordSet;

    async fn extract(&self) -> Result<Self::Output> {
        Ok(self.read()?)
    }
}
