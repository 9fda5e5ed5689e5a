//! PostgreSQL widget store and DDL for the `widget` table.

use super::{Change, StoreBackend, WidgetStore};
use crate::entity::Widget;
use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

const WIDGET_COLUMNS: &str = "id, name, shape";

const UNIQUE_VIOLATION: &str = "23505";

/// Create the `widget` table if it does not exist. The primary key is not clustered.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS widget (
            id UUID NOT NULL,
            name TEXT NOT NULL,
            shape TEXT,
            CONSTRAINT pk_widget PRIMARY KEY (id)
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if it is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
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

/// Split a connection URL into the maintenance-database URL and the target database name.
/// The query string is carried over to the maintenance URL; a URL without a path names no database.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };
    let authority_start = base
        .find("://")
        .ok_or_else(|| StoreError::Db(sqlx::Error::Configuration("DATABASE_URL: missing scheme".into())))?
        + 3;
    let (prefix, db_name) = match base[authority_start..].find('/') {
        Some(slash) => {
            let split = authority_start + slash;
            (&base[..split], base[split + 1..].trim())
        }
        None => (base, ""),
    };
    let mut admin_url = format!("{prefix}/postgres");
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn map_write_error(e: sqlx::Error, id: Uuid) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::DuplicateKey(id);
        }
    }
    StoreError::Db(e)
}

#[derive(Clone)]
pub struct PgWidgetStore {
    pool: PgPool,
}

impl PgWidgetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WidgetStore for PgWidgetStore {
    async fn list(&self) -> Result<Vec<Widget>, StoreError> {
        let query = format!("SELECT {WIDGET_COLUMNS} FROM widget ORDER BY name");
        let rows = sqlx::query_as::<_, Widget>(&query).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Widget>, StoreError> {
        let query = format!("SELECT {WIDGET_COLUMNS} FROM widget WHERE id = $1");
        let row = sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn commit(&self, changes: &[Change]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for change in changes {
            match change {
                Change::Insert(w) => {
                    tracing::debug!(id = %w.id, "insert widget");
                    sqlx::query("INSERT INTO widget (id, name, shape) VALUES ($1, $2, $3)")
                        .bind(w.id)
                        .bind(&w.name)
                        .bind(&w.shape)
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| map_write_error(e, w.id))?;
                }
                Change::Update(w) => {
                    tracing::debug!(id = %w.id, "update widget");
                    let result = sqlx::query("UPDATE widget SET name = $2, shape = $3 WHERE id = $1")
                        .bind(w.id)
                        .bind(&w.name)
                        .bind(&w.shape)
                        .execute(&mut *tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::Missing(w.id));
                    }
                }
                Change::Remove(id) => {
                    tracing::debug!(id = %id, "delete widget");
                    let result = sqlx::query("DELETE FROM widget WHERE id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::Missing(*id));
                    }
                }
            }
        }
        tx.commit().await?;
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool, StoreError> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM widget)")
            .fetch_one(&self.pool)
            .await?;
        Ok(!exists)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_url_points_at_maintenance_db() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/widgets?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres?sslmode=disable");
        assert_eq!(name, "widgets");
    }

    #[test]
    fn slashes_in_query_do_not_move_the_database_name() {
        let (admin, name) =
            parse_db_name_from_url("postgres://u@db:5432/widgets?sslrootcert=/etc/ssl/ca.pem").unwrap();
        assert_eq!(admin, "postgres://u@db:5432/postgres?sslrootcert=/etc/ssl/ca.pem");
        assert_eq!(name, "widgets");
    }

    #[test]
    fn url_without_path_names_no_database() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres");
        assert_eq!(name, "");
        let (_, name) = parse_db_name_from_url("postgres://localhost:5432/").unwrap();
        assert_eq!(name, "");
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        assert!(parse_db_name_from_url("localhost/widgets").is_err());
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("wid\"gets"), "\"wid\"\"gets\"");
    }
}
