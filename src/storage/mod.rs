//! File system input
//!
//! This module handles reading the supported input formats:
//! - CSV and TSV (header row, delimited cells)
//! - JSON (array of flat objects)
//! - XML (root of repeated `<record>` elements)
//! - Directories mixing any of the above

mod delimited;
mod directory;
mod format;
mod json;
mod xml;

pub use delimited::CsvReader;
pub use directory::DirectoryExtractor;
pub use format::Format;
pub use json::JsonReader;
pub use xml::{RECORD_TAG, XmlReader};
