//! Loader trait for writing data to a destination

use eyre::Result;

/// Loader trait for loading data to a destination
///
/// Returns the number of rows written.
///
/// # Example
/// ```no_run
/// use employee_etl::etl::Loader;
/// use employee_etl::table::RecordSet;
/// use eyre::Result;
///
/// struct CountingLoader;
///
/// impl Loader for CountingLoader {
///     type Input = RecordSet;
///
///     async fn load(&self, input: Self::Input) -> Result<usize> {
///         Ok(input.len())
///     }
/// }
/// ```
pub trait Loader: Send + Sync {
    /// The type of data to load
    type Input: Send;

    /// Load data to the destination
    ///
    /// # Errors
    /// Returns an error if loading fails (connection, schema, insert, commit)
    fn load(&self, input: Self::Input) -> impl std::future::Future<Output = Result<usize>> + Send;
}
