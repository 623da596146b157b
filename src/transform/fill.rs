//! Missing-value substitution for the known employee fields

use crate::employee::EmployeeField;
use crate::etl::Transformer;
use crate::table::RecordSet;
use eyre::Result;

/// Transformer that replaces null cells of the six known fields with their
/// defaults
///
/// | Field        | Default        |
/// |--------------|----------------|
/// | `EmployeeID` | `-1`           |
/// | `FirstName`  | `"Unknown"`    |
/// | `LastName`   | `"Unknown"`    |
/// | `Department` | `"Unknown"`    |
/// | `StartDate`  | `"1970-01-01"` |
/// | `Salary`     | `0`            |
///
/// A known field missing from the table entirely is appended as a column of
/// defaults. Other columns pass through untouched, as do non-null cells even
/// when they hold unusable values.
pub struct DefaultFiller;

impl Transformer for DefaultFiller {
    type Input = RecordSet;
    type Output = RecordSet;

    fn transform(&self, mut input: Self::Input) -> Result<Self::Output> {
        for field in EmployeeField::ALL {
            let default = field.default_value();
            let idx = input.add_column(field.column(), default.clone());

            let mut filled = 0;
            for row in input.rows_mut() {
                if row[idx].is_null() {
                    row[idx] = default.clone();
                    filled += 1;
                }
            }
            if filled > 0 {
                log::debug!("Filled {} missing {} value(s)", filled, field.column());
            }
        }
        Ok(input)
    }
}
