//! Transactional loader for the employee table

use super::schema::{create_table_sql, insert_sql};
use crate::config::validate_table_name;
use crate::employee::EmployeeRecord;
use crate::error::{EtlError, LoadError, LoadStage};
use crate::etl::Loader;
use crate::transform::CleanedTable;
use eyre::Result;
use sqlx::{AnyConnection, Connection};

/// Loader that writes cleaned rows into a SQL table
///
/// Each load opens one connection, runs the idempotent create, inserts every
/// row inside a single transaction and commits once. If any insert fails the
/// transaction is rolled back, so a failed load leaves no new rows behind.
/// The connection is closed whether the load succeeds or not.
///
/// MySQL commits DDL implicitly, so a table created by a failed load stays.
///
/// # Example
/// ```no_run
/// use employee_etl::db::TableLoader;
/// use employee_etl::employee::EmployeeRecord;
///
/// # async fn example() -> eyre::Result<()> {
/// let loader = TableLoader::new("sqlite://staff.db?mode=rwc", "employees")?;
/// let count = loader.load_records(&[]).await?;
/// assert_eq!(count, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableLoader {
    url: String,
    table: String,
}

impl TableLoader {
    /// Create a loader for `table` at the database `url`
    ///
    /// # Errors
    /// Returns an error if `table` is not a plain SQL identifier
    pub fn new(url: impl Into<String>, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self {
            url: url.into(),
            table,
        })
    }

    /// Write records, returning how many were inserted
    pub async fn load_records(&self, records: &[EmployeeRecord]) -> Result<usize, LoadError> {
        sqlx::any::install_default_drivers();

        let mut conn = AnyConnection::connect(&self.url)
            .await
            .map_err(|source| LoadError {
                stage: LoadStage::Connect,
                rows_inserted: 0,
                rolled_back: false,
                source,
            })?;

        let result = self.write(&mut conn, records).await;

        if let Err(e) = conn.close().await {
            log::warn!("Failed to close database connection: {}", e);
        }
        result
    }

    async fn write(
        &self,
        conn: &mut AnyConnection,
        records: &[EmployeeRecord],
    ) -> Result<usize, LoadError> {
        let fail = |stage: LoadStage, rows_inserted: usize, rolled_back: bool| {
            move |source: sqlx::Error| LoadError {
                stage,
                rows_inserted,
                rolled_back,
                source,
            }
        };

        sqlx::query(&create_table_sql(&self.table))
            .execute(&mut *conn)
            .await
            .map_err(fail(LoadStage::CreateTable, 0, false))?;

        let mut tx = conn
            .begin()
            .await
            .map_err(fail(LoadStage::BeginTransaction, 0, false))?;

        let insert = insert_sql(&self.table);
        for (i, record) in records.iter().enumerate() {
            let inserted = sqlx::query(&insert)
                .bind(record.employee_id)
                .bind(record.first_name.as_str())
                .bind(record.last_name.as_str())
                .bind(record.department.as_str())
                .bind(record.start_date.as_str())
                .bind(record.salary)
                .execute(&mut *tx)
                .await;

            if let Err(source) = inserted {
                let rolled_back = match tx.rollback().await {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("Rollback failed: {}", e);
                        false
                    }
                };
                return Err(LoadError {
                    stage: LoadStage::Insert(i),
                    rows_inserted: i,
                    rolled_back,
                    source,
                });
            }
        }

        tx.commit()
            .await
            .map_err(fail(LoadStage::Commit, records.len(), true))?;

        Ok(records.len())
    }
}

impl Loader for TableLoader {
    type Input = CleanedTable;

    async fn load(&self, input: Self::Input) -> Result<usize> {
        let records = EmployeeRecord::from_record_set(&input.records);
        let count = self
            .load_records(&records)
            .await
            .map_err(EtlError::from)?;
        log::info!("Inserted {} rows into {}", count, self.table);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sqlite_url(dir: &TempDir) -> String {
        sqlx::any::install_default_drivers();
        format!("sqlite://{}?mode=rwc", dir.path().join("etl.db").display())
    }

    fn record(id: i64, salary: f64) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: id,
            first_name: format!("First{}", id),
            last_name: "Last".to_string(),
            department: "Engineering".to_string(),
            start_date: "2020-01-15".to_string(),
            salary,
        }
    }

    async fn count_rows(url: &str, table: &str) -> i64 {
        let mut conn = AnyConnection::connect(url).await.unwrap();
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
        count
    }

    #[tokio::test]
    async fn test_load_records() {
        let dir = TempDir::new().unwrap();
        let url = sqlite_url(&dir);
        let loader = TableLoader::new(&url, "employees").unwrap();

        let count = loader
            .load_records(&[record(1, 100.0), record(2, 200.5)])
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(count_rows(&url, "employees").await, 2);
    }

    #[tokio::test]
    async fn test_create_is_idempotent_and_inserts_append() {
        let dir = TempDir::new().unwrap();
        let url = sqlite_url(&dir);
        let loader = TableLoader::new(&url, "employees").unwrap();

        loader.load_records(&[record(1, 1.0)]).await.unwrap();
        loader.load_records(&[record(1, 1.0)]).await.unwrap();

        assert_eq!(count_rows(&url, "employees").await, 2);
    }

    #[tokio::test]
    async fn test_empty_load_creates_table() {
        let dir = TempDir::new().unwrap();
        let url = sqlite_url(&dir);
        let loader = TableLoader::new(&url, "employees").unwrap();

        assert_eq!(loader.load_records(&[]).await.unwrap(), 0);
        assert_eq!(count_rows(&url, "employees").await, 0);
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back() {
        let dir = TempDir::new().unwrap();
        let url = sqlite_url(&dir);

        let mut conn = AnyConnection::connect(&url).await.unwrap();
        sqlx::query(
            "CREATE TABLE guarded (EmployeeID INT CHECK (EmployeeID > 0), FirstName VARCHAR(100), \
             LastName VARCHAR(100), Department VARCHAR(100), StartDate DATE, Salary FLOAT)",
        )
        .execute(&mut conn)
        .await
        .unwrap();
        conn.close().await.unwrap();

        let loader = TableLoader::new(&url, "guarded").unwrap();
        let err = loader
            .load_records(&[record(1, 1.0), record(2, 2.0), record(-1, 3.0)])
            .await
            .unwrap_err();

        assert_eq!(err.stage, LoadStage::Insert(2));
        assert_eq!(err.rows_inserted, 2);
        assert!(err.rolled_back);
        assert_eq!(err.rows_persisted(), 0);
        assert_eq!(count_rows(&url, "guarded").await, 0);
    }

    #[tokio::test]
    async fn test_connect_failure() {
        let loader = TableLoader::new("sqlite:///nonexistent/dir/etl.db", "employees").unwrap();

        let err = loader.load_records(&[record(1, 1.0)]).await.unwrap_err();
        assert_eq!(err.stage, LoadStage::Connect);
        assert_eq!(err.rows_persisted(), 0);
    }

    #[test]
    fn test_rejects_unsafe_table_name() {
        assert!(TableLoader::new("sqlite::memory:", "employees; DROP TABLE x").is_err());
    }
}
