//! The full employee cleaning pass

use super::{DefaultFiller, Deduplicator, EmployeeIdCoercer, SalaryCoercer, SalaryStats};
use crate::employee::EmployeeField;
use crate::etl::{Chain, Transformer};
use crate::table::RecordSet;
use eyre::Result;

/// A cleaned record set and the statistics gathered while cleaning it
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedTable {
    pub records: RecordSet,
    pub salary_stats: SalaryStats,
    /// Shape of the table before cleaning
    pub initial_shape: (usize, usize),
}

type Steps = Chain<Deduplicator, Chain<DefaultFiller, Chain<SalaryCoercer, EmployeeIdCoercer>>>;

/// Transformer that cleans a combined employee table
///
/// Steps, in order:
/// 1. Remove exact duplicate rows ([`Deduplicator`])
/// 2. Fill missing known fields with defaults ([`DefaultFiller`])
/// 3. Coerce Salary to a float ([`SalaryCoercer`])
/// 4. Coerce EmployeeID to an integer ([`EmployeeIdCoercer`])
///
/// The initial and final shapes and the Salary statistics are logged. They
/// are reported in the returned [`CleanedTable`] but never change what gets
/// cleaned.
pub struct EmployeeCleaner {
    steps: Steps,
}

impl Default for EmployeeCleaner {
    fn default() -> Self {
        Self {
            steps: Chain::new(
                Deduplicator,
                Chain::new(
                    DefaultFiller,
                    Chain::new(SalaryCoercer, EmployeeIdCoercer),
                ),
            ),
        }
    }
}

impl EmployeeCleaner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transformer for EmployeeCleaner {
    type Input = RecordSet;
    type Output = CleanedTable;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        let initial_shape = input.shape();
        log::info!("Initial shape: {:?}", initial_shape);

        let records = self.steps.transform(input)?;
        log::info!("Missing values handled and data cleaned");
        log::info!("Final shape: {:?}", records.shape());

        let salaries: Vec<f64> = match records.column_index(EmployeeField::Salary.column()) {
            Some(idx) => records
                .rows()
                .iter()
                .filter_map(|row| row[idx].as_f64())
                .collect(),
            None => Vec::new(),
        };
        let salary_stats = SalaryStats::describe(&salaries);
        log::info!("Salary statistics: {}", salary_stats);

        Ok(CleanedTable {
            records,
            salary_stats,
            initial_shape,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn raw_table() -> RecordSet {
        let mut set = RecordSet::new(["EmployeeID", "FirstName", "Salary", "Notes"]);
        set.push_row(vec![
            Value::Int(1),
            Value::text("Ada"),
            Value::Int(1000),
            Value::Null,
        ]);
        set.push_row(vec![
            Value::Int(1),
            Value::text("Ada"),
            Value::Int(1000),
            Value::Null,
        ]);
        set.push_row(vec![
            Value::Null,
            Value::Null,
            Value::text("1500.5"),
            Value::text("temp"),
        ]);
        set.push_row(vec![
            Value::text("ABC123"),
            Value::text("Bob"),
            Value::text("1,234oops"),
            Value::Null,
        ]);
        set
    }

    #[test]
    fn test_clean() {
        let cleaned = EmployeeCleaner::new().transform(raw_table()).unwrap();
        let records = &cleaned.records;

        assert_eq!(cleaned.initial_shape, (4, 4));
        assert_eq!(records.shape(), (3, 7));

        assert_eq!(records.get(0, "EmployeeID"), Some(&Value::Int(1)));
        assert_eq!(records.get(0, "Salary"), Some(&Value::Float(1000.0)));
        assert_eq!(records.get(0, "Notes"), Some(&Value::Null));

        assert_eq!(records.get(1, "EmployeeID"), Some(&Value::Int(-1)));
        assert_eq!(records.get(1, "FirstName"), Some(&Value::text("Unknown")));
        assert_eq!(records.get(1, "Salary"), Some(&Value::Float(1500.5)));
        assert_eq!(records.get(1, "StartDate"), Some(&Value::text("1970-01-01")));

        assert_eq!(records.get(2, "EmployeeID"), Some(&Value::Int(-1)));
        assert_eq!(records.get(2, "Salary"), Some(&Value::Float(0.0)));

        assert_eq!(cleaned.salary_stats.count, 3);
        assert_eq!(cleaned.salary_stats.max, Some(1500.5));
        assert_eq!(cleaned.salary_stats.min, Some(0.0));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = EmployeeCleaner::new();
        let once = cleaner.transform(raw_table()).unwrap();
        let twice = cleaner.transform(once.records.clone()).unwrap();

        assert_eq!(once.records, twice.records);
        assert_eq!(once.salary_stats, twice.salary_stats);
    }

    #[test]
    fn test_rows_equal_only_after_coercion_collapse_on_second_pass() {
        let mut set = RecordSet::new(["EmployeeID", "Salary"]);
        set.push_row(vec![Value::Int(1), Value::text("abc")]);
        set.push_row(vec![Value::Int(1), Value::text("xyz")]);

        let cleaner = EmployeeCleaner::new();
        let once = cleaner.transform(set).unwrap();
        assert_eq!(once.records.len(), 2);
        assert_eq!(once.records.rows()[0], once.records.rows()[1]);

        let twice = cleaner.transform(once.records).unwrap();
        assert_eq!(twice.records.len(), 1);
    }

    #[test]
    fn test_clean_empty_table() {
        let cleaned = EmployeeCleaner::new().transform(RecordSet::default()).unwrap();

        assert_eq!(cleaned.records.shape(), (0, 6));
        assert_eq!(cleaned.salary_stats.count, 0);
    }
}
