//! Supported input formats and extension dispatch

use super::{CsvReader, JsonReader, XmlReader};
use crate::error::EtlError;
use crate::table::RecordSet;
use std::fmt;
use std::path::Path;

/// A file format the extractor knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Tsv,
    Json,
    Xml,
}

impl Format {
    /// Pick the format from a path's extension, ignoring case
    ///
    /// Returns `None` for unsupported or missing extensions.
    ///
    /// # Example
    /// ```
    /// use employee_etl::storage::Format;
    ///
    /// assert_eq!(Format::from_path("data/staff.TSV"), Some(Format::Tsv));
    /// assert_eq!(Format::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Format::Csv),
            "tsv" => Some(Format::Tsv),
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }

    /// Read a file in this format
    pub fn read(self, path: impl AsRef<Path>) -> Result<RecordSet, EtlError> {
        match self {
            Format::Csv => CsvReader::new(path).read(),
            Format::Tsv => CsvReader::tsv(path).read(),
            Format::Json => JsonReader::new(path).read(),
            Format::Xml => XmlReader::new(path).read(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Csv => "CSV",
            Format::Tsv => "TSV",
            Format::Json => "JSON",
            Format::Xml => "XML",
        };
        write!(f, "{}", name)
    }
}
