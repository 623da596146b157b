//! Exact-duplicate row removal

use crate::etl::Transformer;
use crate::table::RecordSet;
use eyre::Result;
use std::collections::HashSet;

/// Transformer that drops rows identical to an earlier row
///
/// Rows are equal when every cell is equal, type included, so `Int(1)` and
/// `Text("1")` differ. The first occurrence is kept and the surviving rows
/// keep their relative order.
///
/// # Example
/// ```
/// use employee_etl::etl::Transformer;
/// use employee_etl::table::{RecordSet, Value};
/// use employee_etl::transform::Deduplicator;
///
/// let mut set = RecordSet::new(["EmployeeID"]);
/// set.push_row(vec![Value::Int(1)]);
/// set.push_row(vec![Value::Int(2)]);
/// set.push_row(vec![Value::Int(1)]);
///
/// let deduped = Deduplicator.transform(set).unwrap();
/// assert_eq!(deduped.len(), 2);
/// ```
pub struct Deduplicator;

impl Transformer for Deduplicator {
    type Input = RecordSet;
    type Output = RecordSet;

    fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
        let before = input.len();
        let mut seen = HashSet::with_capacity(before);
        input.retain_rows(|row| seen.insert(row.clone()));
        log::debug!("Removed {} duplicate row(s)", before - input.len());
        Ok(input)
    }
}
