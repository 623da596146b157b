//! JSON array-of-records reading

use super::Format;
use crate::error::EtlError;
use crate::etl::Extractor;
use crate::table::{RecordSet, Value};
use eyre::Result;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

/// Read a JSON file holding an array of flat objects
///
/// Each object becomes one row; keys become columns in order of first
/// appearance.
pub struct JsonReader {
    path: PathBuf,
}

impl JsonReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<RecordSet, EtlError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| EtlError::io(&self.path, e))?;
        let parsed: JsonValue = serde_json::from_str(&content)
            .map_err(|e| EtlError::parse(&self.path, Format::Json, e))?;

        let JsonValue::Array(records) = parsed else {
            return Err(EtlError::parse(
                &self.path,
                Format::Json,
                "expected a top-level array of records",
            ));
        };

        let mut set = RecordSet::default();
        for (i, record) in records.into_iter().enumerate() {
            let JsonValue::Object(fields) = record else {
                return Err(EtlError::parse(
                    &self.path,
                    Format::Json,
                    format!("record {} is not an object", i),
                ));
            };
            set.push_record(fields.into_iter().map(|(k, v)| (k, cell(v))));
        }

        Ok(set)
    }
}

fn cell(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::String(s) => Value::Text(s),
        JsonValue::Bool(b) => Value::Text(b.to_string()),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        nested => Value::Text(nested.to_string()),
    }
}

impl Extractor for JsonReader {
    type Output = RecordSet;

    async fn extract(&self) -> Result<Self::Output> {
        Ok(self.read()?)
    }
}
