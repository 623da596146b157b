//! Relational destination
//!
//! Writes cleaned employee rows into a fixed six-column table through
//! `sqlx`'s `Any` driver, so the same loader serves MySQL and SQLite URLs.

mod loader;
mod schema;

pub use loader::TableLoader;
pub use schema::{create_table_sql, insert_sql};
