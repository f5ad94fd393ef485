//! PostgreSQL store. Rows live in the `students` table, created on start-up if missing.

use super::StudentStore;
use crate::error::StoreError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const COLUMNS: &str = "id, full_name, age, email, address, grade";

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        PgStudentStore { pool }
    }

    /// Create the `students` table if it does not exist. Idempotent.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id SERIAL PRIMARY KEY,
                full_name TEXT NOT NULL,
                age INTEGER NOT NULL,
                email TEXT NOT NULL,
                address TEXT,
                grade DOUBLE PRECISION NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    // An explicit id does not advance the serial sequence; callers only pass ids
    // that the sequence already handed out.
    async fn save(&self, id: Option<i32>, student: NewStudent) -> Result<Student, StoreError> {
        let row = match id {
            None => {
                let sql = format!(
                    "INSERT INTO students (full_name, age, email, address, grade) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Student>(&sql)
                    .bind(&student.full_name)
                    .bind(student.age)
                    .bind(&student.email)
                    .bind(&student.address)
                    .bind(student.grade)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "INSERT INTO students (id, full_name, age, email, address, grade) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     ON CONFLICT (id) DO UPDATE SET \
                     full_name = EXCLUDED.full_name, age = EXCLUDED.age, email = EXCLUDED.email, \
                     address = EXCLUDED.address, grade = EXCLUDED.grade \
                     RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                sqlx::query_as::<_, Student>(&sql)
                    .bind(id)
                    .bind(&student.full_name)
                    .bind(student.age)
                    .bind(&student.email)
                    .bind(&student.address)
                    .bind(student.grade)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        let sql = format!("SELECT {} FROM students ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, StoreError> {
        let sql = format!("SELECT {} FROM students WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        tracing::debug!(id, "delete student row");
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the database named in `database_url` if it does not exist, working
/// through the server's `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let Some((admin, db_name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options pointing at the `postgres` database plus the target database name.
/// `None` when the URL names no database, or names `postgres` itself.
fn maintenance_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, StoreError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
