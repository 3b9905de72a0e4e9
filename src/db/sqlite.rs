//! SQLite data source.
//!
//! Mirrors the hosted schema locally so the guide can run against a file instead of the hosted
//! backend.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row as SqlxRow;

use super::{DataSource, Direction, Row, Select};
use crate::errors::DataError;

/// Initialize the database connection pool and create the tables.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create the four guide tables if they don't exist.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS states (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            region TEXT NOT NULL,
            image_url TEXT,
            population INTEGER,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS destinations (
            id TEXT PRIMARY KEY,
            state_id TEXT REFERENCES states(id),
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            short_description TEXT,
            category TEXT NOT NULL,
            image_url TEXT,
            location TEXT,
            best_time_to_visit TEXT,
            average_cost TEXT,
            rating REAL NOT NULL DEFAULT 0 CHECK (rating >= 0),
            views_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attractions (
            id TEXT PRIMARY KEY,
            destination_id TEXT REFERENCES destinations(id),
            name TEXT NOT NULL,
            description TEXT,
            type TEXT NOT NULL,
            location TEXT,
            opening_hours TEXT,
            entry_fee TEXT,
            image_url TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY,
            destination_id TEXT REFERENCES destinations(id),
            author_name TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
            title TEXT,
            content TEXT NOT NULL,
            visit_date TEXT,
            helpful_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the lookups the pages issue
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_states_name ON states(name);
        CREATE INDEX IF NOT EXISTS idx_destinations_rating ON destinations(rating);
        CREATE INDEX IF NOT EXISTS idx_destinations_category ON destinations(category);
        CREATE INDEX IF NOT EXISTS idx_destinations_state_id ON destinations(state_id);
        CREATE INDEX IF NOT EXISTS idx_attractions_destination_id ON attractions(destination_id);
        CREATE INDEX IF NOT EXISTS idx_reviews_destination_id ON reviews(destination_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Data source backed by a local SQLite file.
#[derive(Clone)]
pub struct SqliteSource {
    pool: SqlitePool,
}

impl SqliteSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `path`.
    pub async fn open(path: &Path) -> Result<Self, DataError> {
        Ok(Self::new(init_database(path).await?))
    }

    #[allow(dead_code)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Build the SQL for a validated query. Rows come back as one JSON object per row.
fn build_sql(query: &Select) -> String {
    let fields = query
        .projection()
        .iter()
        .map(|column| format!("'{}', \"{}\"", column, column))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!(
        "SELECT json_object({}) AS data FROM {}",
        fields,
        query.table.name()
    );

    if let Some(filter) = &query.filter {
        sql.push_str(&format!(" WHERE \"{}\" = ?", filter.column));
    }

    // Nulls last ascending, first descending, as the hosted backend orders them
    if let Some(order) = &query.order {
        let clause = match order.direction {
            Direction::Ascending => format!(
                " ORDER BY \"{0}\" IS NULL ASC, \"{0}\" ASC",
                order.column
            ),
            Direction::Descending => format!(
                " ORDER BY \"{0}\" IS NULL DESC, \"{0}\" DESC",
                order.column
            ),
        };
        sql.push_str(&clause);
    }

    if query.limit.is_some() {
        sql.push_str(" LIMIT ?");
    }

    sql
}

impl DataSource for SqliteSource {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, DataError> {
        query.validate()?;
        let sql = build_sql(query);
        tracing::debug!(table = query.table.name(), sql = %sql, "sqlite select");

        let mut statement = sqlx::query(&sql);
        if let Some(filter) = &query.filter {
            statement = statement.bind(filter.value.clone());
        }
        if let Some(limit) = query.limit {
            statement = statement.bind(limit as i64);
        }

        let rows = statement.fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> Result<Row, DataError> {
                let text: String = row.try_get("data")?;
                Ok(serde_json::from_str::<Row>(&text)?)
            })
            .collect()
    }
}
