//! Database connection management
//!
//! SQLite behind a split pool: a wide pool for reads and a single-connection
//! pool for writes. Routing every mutation through the one write connection
//! serializes write transactions, so multi-statement sequences such as
//! count-then-insert never race each other, while WAL mode keeps readers
//! unblocked during a write.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// Paired read/write pools over one SQLite database file
#[derive(Debug, Clone)]
pub struct Db {
    read_pool: SqlitePool,
    write_pool: SqlitePool,
}

impl Db {
    /// Open the database at `config.path` (creating it if missing), run
    /// pending migrations, and build both pools.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
            }
        }

        let options = connect_options(&config.path, config.busy_timeout_ms);

        // One write connection: write transactions queue on pool acquire
        // instead of contending for the database lock.
        let write_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;

        sqlx::migrate!("./migrations")
            .run(&write_pool)
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

        let read_pool = SqlitePoolOptions::new()
            .max_connections(config.max_read_connections)
            .connect_with(options)
            .await?;

        Ok(Self {
            read_pool,
            write_pool,
        })
    }

    /// Pool for SELECT-only work
    pub fn read(&self) -> &SqlitePool {
        &self.read_pool
    }

    /// Pool for anything that mutates. Capped at one connection; keep
    /// transactions short.
    pub fn write(&self) -> &SqlitePool {
        &self.write_pool
    }

    /// Round-trip both pools
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let _: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.read_pool)
            .await?;
        let _: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.write_pool)
            .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.read_pool.close().await;
        self.write_pool.close().await;
    }
}

fn connect_options(path: &Path, busy_timeout_ms: u64) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(busy_timeout_ms))
        .foreign_keys(true)
}
