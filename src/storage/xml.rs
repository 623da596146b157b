//! XML `<record>` document reading

use super::Format;
use crate::error::EtlError;
use crate::etl::Extractor;
use crate::table::{RecordSet, Value};
use eyre::Result;
use std::path::{Path, PathBuf};

/// Element name of a row under the document root
pub const RECORD_TAG: &str = "record";

/// Read an XML document whose root holds repeated `<record>` elements
///
/// Each child element of a record maps its tag to its text, kept exactly as
/// written. An element without text is null. Nested elements are not
/// descended into.
///
/// ```xml
/// <employees>
///   <record><EmployeeID>1</EmployeeID><FirstName>Ada</FirstName></record>
/// </employees>
/// ```
pub struct XmlReader {
    path: PathBuf,
}

impl XmlReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<RecordSet, EtlError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| EtlError::io(&self.path, e))?;
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(&content, options)
            .map_err(|e| EtlError::parse(&self.path, Format::Xml, e))?;

        let mut set = RecordSet::default();
        for record in doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name(RECORD_TAG))
        {
            set.push_record(record.children().filter(|n| n.is_element()).map(|child| {
                let value = child.text().map(Value::text).unwrap_or(Value::Null);
                (child.tag_name().name(), value)
            }));
        }

        Ok(set)
    }
}

impl Extractor for XmlReader {
    type Output = RecordSet;

    async fn extract(&self) -> Result<Self::Output> {
        Ok(self.read()?)
    }
}
