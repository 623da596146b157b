//! The six known employee fields and the destination table layout

use crate::table::{RecordSet, Value};

/// A known column of the employee table, in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FirstName,
    LastName,
    Department,
    StartDate,
    Salary,
}

impl EmployeeField {
    /// All fields, in the fixed column order used by the destination table
    pub const ALL: [EmployeeField; 6] = [
        EmployeeField::EmployeeId,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Department,
        EmployeeField::StartDate,
        EmployeeField::Salary,
    ];

    pub const fn column(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "EmployeeID",
            EmployeeField::FirstName => "FirstName",
            EmployeeField::LastName => "LastName",
            EmployeeField::Department => "Department",
            EmployeeField::StartDate => "StartDate",
            EmployeeField::Salary => "Salary",
        }
    }

    /// SQL type of the column in the destination table
    pub const fn sql_type(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "INT",
            EmployeeField::FirstName | EmployeeField::LastName | EmployeeField::Department => {
                "VARCHAR(100)"
            }
            EmployeeField::StartDate => "DATE",
            EmployeeField::Salary => "FLOAT",
        }
    }

    /// Value substituted for a missing cell
    pub fn default_value(self) -> Value {
        match self {
            EmployeeField::EmployeeId => Value::Int(MISSING_EMPLOYEE_ID),
            EmployeeField::FirstName | EmployeeField::LastName | EmployeeField::Department => {
                Value::text(UNKNOWN)
            }
            EmployeeField::StartDate => Value::text(EPOCH_DATE),
            EmployeeField::Salary => Value::Float(0.0),
        }
    }
}

pub const MISSING_EMPLOYEE_ID: i64 = -1;
pub const UNKNOWN: &str = "Unknown";
pub const EPOCH_DATE: &str = "1970-01-01";

/// One cleaned row in the shape the destination table expects
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub start_date: String,
    pub salary: f64,
}

impl EmployeeRecord {
    /// Project every row of a cleaned record set onto the six known columns
    ///
    /// Columns other than the known six are ignored. A known column that is
    /// absent, or a cell that is null or of the wrong type, falls back to the
    /// field default so the projection never fails.
    pub fn from_record_set(set: &RecordSet) -> Vec<EmployeeRecord> {
        let idx = EmployeeField::ALL.map(|f| set.column_index(f.column()));
        let cell = |row: &[Value], field: EmployeeField| -> Value {
            idx[field as usize]
                .and_then(|i| row.get(i))
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or_else(|| field.default_value())
        };
        let text = |row: &[Value], field: EmployeeField| -> String {
            cell(row, field)
                .to_text()
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        set.rows()
            .iter()
            .map(|row| EmployeeRecord {
                employee_id: cell(row, EmployeeField::EmployeeId)
                    .as_i64()
                    .unwrap_or(MISSING_EMPLOYEE_ID),
                first_name: text(row, EmployeeField::FirstName),
                last_name: text(row, EmployeeField::LastName),
                department: text(row, EmployeeField::Department),
                start_date: text(row, EmployeeField::StartDate),
                salary: cell(row, EmployeeField::Salary).as_f64().unwrap_or(0.0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_discriminants() {
        for (i, field) in EmployeeField::ALL.iter().enumerate() {
            assert_eq!(*field as usize, i);
        }
    }

    #[test]
    fn test_projection_ignores_extra_columns() {
        let mut set = RecordSet::new(["Salary", "Extra", "EmployeeID", "FirstName"]);
        set.push_row(vec![
            Value::Float(10.5),
            Value::text("ignored"),
            Value::Int(3),
            Value::Int(42),
        ]);

        let records = EmployeeRecord::from_record_set(&set);

        assert_eq!(
            records,
            vec![EmployeeRecord {
                employee_id: 3,
                first_name: "42".to_string(),
                last_name: "Unknown".to_string(),
                department: "Unknown".to_string(),
                start_date: "1970-01-01".to_string(),
                salary: 10.5,
            }]
        );
    }
}
