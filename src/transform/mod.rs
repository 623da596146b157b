//! Cleaning transformers for the combined employee table
//!
//! Each step is its own [`Transformer`](crate::etl::Transformer);
//! [`EmployeeCleaner`] runs them in order and gathers statistics.

mod cleaner;
mod coerce;
mod dedup;
mod fill;
mod stats;

pub use cleaner::{CleanedTable, EmployeeCleaner};
pub use coerce::{EmployeeIdCoercer, SalaryCoercer, coerce_employee_id, coerce_salary};
pub use dedup::Deduplicator;
pub use fill::DefaultFiller;
pub use stats::SalaryStats;
