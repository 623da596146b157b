//! Extractor trait for reading data from a source

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// Implementors define how to read a source such as:
/// - A single CSV, TSV, JSON or XML file
/// - A directory of mixed files
///
/// # Example
/// ```no_run
/// use employee_etl::etl::Extractor;
/// use employee_etl::table::RecordSet;
/// use eyre::Result;
///
/// struct EmptySource;
///
/// impl Extractor for EmptySource {
///     type Output = RecordSet;
///
///     async fn extract(&self) -> Result<Self::Output> {
///         Ok(RecordSet::default())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of data extracted
    type Output: Send;

    /// Extract data from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (I/O, parsing, no data)
    fn extract(&self) -> impl std::future::Future<Output = Result<Self::Output>> + Send;
}
