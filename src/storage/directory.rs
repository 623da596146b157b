//! Directory scanning and format dispatch

use super::Format;
use crate::error::EtlError;
use crate::etl::Extractor;
use crate::table::RecordSet;
use eyre::Result;
use std::path::{Path, PathBuf};

/// Read every supported file in a directory into one record set
///
/// Files are visited in lexicographic order of their names so repeated runs
/// over the same directory produce the same row order. Files whose extension
/// is not CSV, TSV, JSON or XML are skipped. A file that fails to parse aborts
/// the whole extraction.
pub struct DirectoryExtractor {
    path: PathBuf,
}

impl DirectoryExtractor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Supported files in the directory with their formats, sorted by name
    pub fn files(&self) -> Result<Vec<(PathBuf, Format)>, EtlError> {
        let entries = std::fs::read_dir(&self.path).map_err(|e| EtlError::io(&self.path, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| EtlError::io(&self.path, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match Format::from_path(&path) {
                Some(format) => files.push((path, format)),
                None => log::debug!("Skipping unsupported file {}", path.display()),
            }
        }

        files.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Read and concatenate all supported files
    ///
    /// # Errors
    /// - [`EtlError::Io`] if the directory cannot be listed
    /// - [`EtlError::Parse`] if any file is malformed
    /// - [`EtlError::NoData`] if there is no supported file at all
    pub fn read_all(&self) -> Result<RecordSet, EtlError> {
        let files = self.files()?;
        if files.is_empty() {
            return Err(EtlError::NoData(self.path.clone()));
        }

        let mut sets = Vec::with_capacity(files.len());
        for (path, format) in files {
            let set = format.read(&path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            log::info!("Extracted {} rows from {}", set.len(), name);
            sets.push(set);
        }

        let combined = RecordSet::concat(sets);
        if combined.is_empty() {
            log::warn!("Input files in {} contain no rows", self.path.display());
        }
        Ok(combined)
    }
}

impl Extractor for DirectoryExtractor {
    type Output = RecordSet;

    async fn extract(&self) -> Result<Self::Output> {
        Ok(self.read_all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;
    use tempfile::TempDir;

    #[test]
    fn test_reads_all_formats_in_name_order() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("b.json"), r#"[{"EmployeeID": 3}]"#).unwrap();
        std::fs::write(temp.path().join("a.csv"), "EmployeeID\n1\n2\n").unwrap();
        std::fs::write(temp.path().join("c.tsv"), "EmployeeID\tSalary\n4\t10\n").unwrap();
        std::fs::write(
            temp.path().join("d.xml"),
            "<r><record><EmployeeID>5</EmployeeID></record></r>",
        )
        .unwrap();
        std::fs::write(temp.path().join("notes.txt"), "not data").unwrap();

        let set = DirectoryExtractor::new(temp.path()).read_all().unwrap();

        assert_eq!(set.len(), 5);
        assert_eq!(set.columns(), ["EmployeeID", "Salary"]);
        let ids: Vec<_> = (0..5).map(|i| set.get(i, "EmployeeID").unwrap().clone()).collect();
        assert_eq!(
            ids,
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::text("5"),
            ]
        );
        assert_eq!(set.get(0, "Salary"), Some(&Value::Null));
        assert_eq!(set.get(3, "Salary"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_skips_subdirectories_and_unknown_extensions() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("nested.csv")).unwrap();
        std::fs::write(temp.path().join("data.parquet"), "").unwrap();
        std::fs::write(temp.path().join("staff.CSV"), "EmployeeID\n1\n").unwrap();

        let files = DirectoryExtractor::new(temp.path()).files().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].1, Format::Csv);
    }

    #[test]
    fn test_no_supported_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("readme.md"), "# nothing").unwrap();

        let err = DirectoryExtractor::new(temp.path()).read_all().unwrap_err();
        assert!(matches!(err, EtlError::NoData(_)));
    }

    #[test]
    fn test_missing_directory() {
        let err = DirectoryExtractor::new("/nonexistent/input")
            .read_all()
            .unwrap_err();
        assert!(matches!(err, EtlError::Io { .. }));
    }

    #[test]
    fn test_one_bad_file_aborts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.csv"), "EmployeeID\n1\n").unwrap();
        std::fs::write(temp.path().join("b.json"), "{not json").unwrap();

        let err = DirectoryExtractor::new(temp.path()).read_all().unwrap_err();
        assert!(matches!(err, EtlError::Parse { format: Format::Json, .. }));
    }

    #[tokio::test]
    async fn test_extract_trait() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.csv"), "x\n1\n").unwrap();

        let set = DirectoryExtractor::new(temp.path()).extract().await.unwrap();
        assert_eq!(set.shape(), (1, 1));
    }
}
