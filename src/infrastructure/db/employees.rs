use crate::domain::error::{AppError, Result};
use crate::domain::roster::Employee;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const EMPLOYEES_SCHEMA: &str = include_str!("../../resources/employees/schema.sql");

pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub async fn connect(db_path: &Path) -> Result<Self> {
        let db_url = db_path_to_url(db_path)?;
        Self::connect_url(&db_url, 2).await
    }

    // Single pooled connection so the in-memory database survives acquires.
    #[cfg(test)]
    pub async fn connect_memory() -> Result<Self> {
        Self::connect_url("sqlite::memory:", 1).await
    }

    async fn connect_url(db_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(db_url)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to parse employees DB URL: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect employees DB: {e}")))?;

        Ok(Self { pool })
    }

    /// Drop and recreate the employees table (full-replace load).
    pub async fn reset_table(&self) -> Result<()> {
        sqlx::query("DROP TABLE IF EXISTS employees")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to drop employees table: {e}"))
            })?;

        for statement in EMPLOYEES_SCHEMA.split(';') {
            let stmt = statement.trim();
            if stmt.is_empty() {
                continue;
            }
            sqlx::query(stmt).execute(&self.pool).await.map_err(|e| {
                AppError::DatabaseError(format!("Failed to apply employees schema: {e}"))
            })?;
        }

        Ok(())
    }

    /// Insert all employees in source order inside one transaction.
    ///
    /// Returns the number of rows written. On failure the transaction rolls
    /// back and the error names the employee that was being written.
    pub async fn insert_all(&self, employees: &[Employee]) -> Result<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {e}")))?;

        let mut affected: u64 = 0;
        for employee in employees {
            let res = sqlx::query(
                "INSERT INTO employees (
                    name, first_name, last_name, empno, state,
                    zip, dob, age, sex, marital_status,
                    citizenship, hire_date, termination_date, term_reason, status,
                    department, position, hourly_rate, manager, source,
                    performance_score
                 ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&employee.name)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.empno)
            .bind(&employee.state)
            .bind(&employee.zip)
            .bind(&employee.dob)
            .bind(employee.age)
            .bind(&employee.sex)
            .bind(&employee.marital_status)
            .bind(&employee.citizenship)
            .bind(&employee.hire_date)
            .bind(&employee.termination_date)
            .bind(&employee.term_reason)
            .bind(&employee.status)
            .bind(&employee.department)
            .bind(&employee.position)
            .bind(employee.hourly_rate)
            .bind(&employee.manager)
            .bind(&employee.source)
            .bind(&employee.performance_score)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert employee {} ({}): {e}",
                    employee.empno, employee.name
                ))
            })?;
            affected += res.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {e}")))?;

        Ok(affected)
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to count employees: {e}")))
    }
}

fn db_path_to_url(db_path: &Path) -> Result<String> {
    let db_path_str = db_path.to_str().ok_or_else(|| {
        AppError::DatabaseError("Employees DB path is not valid UTF-8".to_string())
    })?;

    Ok(format!("sqlite://{}", db_path_str.replace("\\", "/")))
}
