//! In-memory table with named columns and ordered rows

use super::Value;

/// A row's cells, positionally aligned with [`RecordSet::columns`]
pub type Row = Vec<Value>;

/// An ordered set of named columns and an ordered sequence of rows
///
/// Every row holds exactly one cell per column. Readers build record sets
/// through [`RecordSet::push_record`], which fills columns a record does not
/// mention with [`Value::Null`] and appends columns it introduces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RecordSet {
    /// Create an empty record set with the given columns
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Look up a cell by row position and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Append a column, filling existing rows with `fill`
    ///
    /// Returns the column's index. An existing column is left untouched.
    pub fn add_column(&mut self, name: impl Into<String>, fill: Value) -> usize {
        let name = name.into();
        if let Some(idx) = self.column_index(&name) {
            return idx;
        }
        self.columns.push(name);
        for row in &mut self.rows {
            row.push(fill.clone());
        }
        self.columns.len() - 1
    }

    /// Append a positional row
    ///
    /// Short rows are padded with nulls, long rows are truncated.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    /// Append a row given as `(column, value)` pairs
    ///
    /// Unknown columns are added to the set (null-filled for earlier rows);
    /// columns the record omits are null for this row.
    pub fn push_record<K: AsRef<str>>(&mut self, record: impl IntoIterator<Item = (K, Value)>) {
        let mut row = vec![Value::Null; self.columns.len()];
        for (key, value) in record {
            let idx = self.add_column(key.as_ref(), Value::Null);
            if idx >= row.len() {
                row.resize(idx + 1, Value::Null);
            }
            row[idx] = value;
        }
        self.rows.push(row);
    }

    /// Keep only rows for which `keep` returns true, preserving order
    pub fn retain_rows(&mut self, keep: impl FnMut(&Row) -> bool) {
        self.rows.retain(keep);
    }

    /// Concatenate record sets in order
    ///
    /// The result's columns are the union of all inputs in order of first
    /// appearance. Cells for columns a given input lacks are null.
    ///
    /// # Example
    /// ```
    /// use employee_etl::table::{RecordSet, Value};
    ///
    /// let mut a = RecordSet::new(["EmployeeID", "Salary"]);
    /// a.push_row(vec![Value::Int(1), Value::Int(100)]);
    /// let mut b = RecordSet::new(["EmployeeID", "Department"]);
    /// b.push_row(vec![Value::Int(2), Value::text("Sales")]);
    ///
    /// let combined = RecordSet::concat(vec![a, b]);
    /// assert_eq!(combined.columns(), ["EmployeeID", "Salary", "Department"]);
    /// assert_eq!(combined.get(1, "Salary"), Some(&Value::Null));
    /// ```
    pub fn concat(sets: impl IntoIterator<Item = RecordSet>) -> RecordSet {
        let mut combined = RecordSet::default();
        for set in sets {
            let mapping: Vec<usize> = set
                .columns
                .iter()
                .map(|c| combined.add_column(c.as_str(), Value::Null))
                .collect();
            for row in set.rows {
                let mut out = vec![Value::Null; combined.columns.len()];
                for (value, &idx) in row.into_iter().zip(&mapping) {
                    out[idx] = value;
                }
                combined.rows.push(out);
            }
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_record_unions_columns() {
        let mut set = RecordSet::default();
        set.push_record([("a", Value::Int(1)), ("b", Value::Int(2))]);
        set.push_record([("b", Value::Int(3)), ("c", Value::Int(4))]);

        assert_eq!(set.columns(), ["a", "b", "c"]);
        assert_eq!(set.rows()[0], vec![Value::Int(1), Value::Int(2), Value::Null]);
        assert_eq!(set.rows()[1], vec![Value::Null, Value::Int(3), Value::Int(4)]);
    }

    #[test]
    fn test_concat_preserves_row_order_and_counts() {
        let mut a = RecordSet::new(["x"]);
        a.push_row(vec![Value::Int(1)]);
        a.push_row(vec![Value::Int(2)]);
        let mut b = RecordSet::new(["y", "x"]);
        b.push_row(vec![Value::text("b"), Value::Int(3)]);

        let combined = RecordSet::concat(vec![a, b]);

        assert_eq!(combined.shape(), (3, 2));
        assert_eq!(combined.get(0, "x"), Some(&Value::Int(1)));
        assert_eq!(combined.get(1, "y"), Some(&Value::Null));
        assert_eq!(combined.get(2, "x"), Some(&Value::Int(3)));
        assert_eq!(combined.get(2, "y"), Some(&Value::text("b")));
    }

    #[test]
    fn test_concat_nothing() {
        let combined = RecordSet::concat(Vec::new());
        assert_eq!(combined.shape(), (0, 0));
    }

    #[test]
    fn test_add_column_fills_existing_rows() {
        let mut set = RecordSet::new(["a"]);
        set.push_row(vec![Value::Int(1)]);
        let idx = set.add_column("b", Value::text("x"));

        assert_eq!(idx, 1);
        assert_eq!(set.get(0, "b"), Some(&Value::text("x")));
        assert_eq!(set.add_column("a", Value::Null), 0);
    }

    #[test]
    fn test_push_row_pads() {
        let mut set = RecordSet::new(["a", "b"]);
        set.push_row(vec![Value::Int(1)]);
        assert_eq!(set.rows()[0], vec![Value::Int(1), Value::Null]);
    }
}
