//! Numeric coercion for Salary and EmployeeID
//!
//! Neither coercer ever fails: a value that cannot be converted is replaced
//! by the field default.

use crate::employee::{EmployeeField, MISSING_EMPLOYEE_ID};
use crate::etl::Transformer;
use crate::table::{RecordSet, Value};
use eyre::Result;

/// Convert a cell to a salary
///
/// Integers widen to floats, finite floats are kept, text is trimmed and
/// parsed. Everything else, including infinities and NaN, becomes `0.0`.
///
/// # Example
/// ```
/// use employee_etl::table::Value;
/// use employee_etl::transform::coerce_salary;
///
/// assert_eq!(coerce_salary(&Value::text("1500.5")), 1500.5);
/// assert_eq!(coerce_salary(&Value::text("1,234oops")), 0.0);
/// assert_eq!(coerce_salary(&Value::Null), 0.0);
/// ```
pub fn coerce_salary(value: &Value) -> f64 {
    parse_salary(value).unwrap_or(0.0)
}

fn parse_salary(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Null => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Convert a cell to an employee id
///
/// Integers are kept and floats truncate toward zero. Text is trimmed and
/// parsed as an integer, or as a float which is then truncated. Anything
/// else returns `None`.
pub fn coerce_employee_id(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(f) => float_to_id(*f),
        Value::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_id))
        }
        Value::Null => None,
    }
}

fn float_to_id(f: f64) -> Option<i64> {
    // Bounds exclude values that would saturate the cast.
    if f.is_finite() && f > i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Transformer that rewrites every Salary cell as a float
pub struct SalaryCoercer;

impl Transformer for SalaryCoercer {
    type Input = RecordSet;
    type Output = RecordSet;

    fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
        let column = EmployeeField::Salary.column();
        let Some(idx) = input.column_index(column) else {
            return Ok(input);
        };

        for row in input.rows_mut() {
            let salary = parse_salary(&row[idx]).unwrap_or_else(|| {
                log::debug!("Salary {:?} is not numeric, using 0", row[idx]);
                0.0
            });
            row[idx] = Value::Float(salary);
        }
        Ok(input)
    }
}

/// Transformer that rewrites every EmployeeID cell as an integer
///
/// Values that cannot be read as a number are replaced with `-1` and logged
/// as a warning.
pub struct EmployeeIdCoercer;

impl Transformer for EmployeeIdCoercer {
    type Input = RecordSet;
    type Output = RecordSet;

    fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
        let column = EmployeeField::EmployeeId.column();
        let Some(idx) = input.column_index(column) else {
            return Ok(input);
        };

        for row in input.rows_mut() {
            let id = coerce_employee_id(&row[idx]).unwrap_or_else(|| {
                log::warn!(
                    "EmployeeID {:?} is not an integer, using {}",
                    row[idx],
                    MISSING_EMPLOYEE_ID
                );
                MISSING_EMPLOYEE_ID
            });
            row[idx] = Value::Int(id);
        }
        Ok(input)
    }
}
