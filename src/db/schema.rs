//! SQL text for the destination table
//!
//! Only the table name is ever formatted into SQL; row values are bound.

use crate::employee::EmployeeField;

/// Idempotent `CREATE TABLE IF NOT EXISTS` for the six-column schema
pub fn create_table_sql(table: &str) -> String {
    let columns = EmployeeField::ALL
        .iter()
        .map(|f| format!("    {} {}", f.column(), f.sql_type()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n)", table, columns)
}

/// Parameterized insert of one row into the six columns, in schema order
pub fn insert_sql(table: &str) -> String {
    let columns = EmployeeField::ALL
        .iter()
        .map(|f| f.column())
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; EmployeeField::ALL.len()].join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", table, columns, placeholders)
}
