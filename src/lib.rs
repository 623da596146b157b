//! Employee ETL
//!
//! A batch Extract-Transform-Load job: read CSV, TSV, JSON and XML files from
//! a directory, clean the combined employee table, and insert it into a SQL
//! table in one transaction.

pub mod config;
pub mod db;
pub mod employee;
pub mod error;
pub mod etl;
pub mod storage;
pub mod table;
pub mod transform;

// Re-exports for convenience
pub use config::Config;
pub use db::TableLoader;
pub use employee::{EmployeeField, EmployeeRecord};
pub use error::{EtlError, LoadError, LoadStage};
pub use etl::{Extractor, Loader, Pipeline, Transformer};
pub use storage::{CsvReader, DirectoryExtractor, Format, JsonReader, XmlReader};
pub use table::{RecordSet, Value};
pub use transform::{CleanedTable, EmployeeCleaner, SalaryStats};
