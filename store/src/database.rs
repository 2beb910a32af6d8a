/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::consts::*;
use super::types::Cli;

/// Handle to the relational store. Owns the connection pool.
#[derive(Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the pool for the configured database and brings the schema up to date.
    pub async fn connect(cli: &Cli) -> Result<Self> {
        let db_url = database_url(cli)?;

        let mut opt = ConnectOptions::new(db_url.clone());

        // Only enable SQL logging at debug level
        if cli.log_level == "debug" {
            opt.sqlx_logging(true)
                .sqlx_logging_level(LevelFilter::Debug);
        } else {
            opt.sqlx_logging(false);
        }

        // An in-memory SQLite database lives inside a single connection.
        let max_connections = if db_url.contains(":memory:") {
            1
        } else {
            MAX_CONNECTIONS
        };

        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .acquire_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));

        let db = Database::connect(opt)
            .await
            .context("Failed to connect to database")?;
        Migrator::up(&db, None)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Connected to {:?} database", db.get_database_backend());

        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection pool");
        self.db.close().await
    }
}

/// Resolves the connection string: url file, then `DATABASE_URL`, then the local fallback.
pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        let url = std::fs::read_to_string(file).context("Failed to read database url from file")?;
        return Ok(url.trim().to_string());
    }

    match &cli.database_url {
        Some(url) if !url.trim().is_empty() => Ok(url.clone()),
        _ => {
            tracing::warn!(
                "No database url provided, falling back to {}",
                DEFAULT_DATABASE_URL
            );
            Ok(DEFAULT_DATABASE_URL.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["holonet-server"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_database_url_prefers_explicit_url() {
        let cli = cli(&["--database-url", "postgres://db/holonet"]);
        assert_eq!(database_url(&cli).unwrap(), "postgres://db/holonet");
    }

    #[test]
    fn test_database_url_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "postgres://file/holonet").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = cli(&[
            "--database-url",
            "postgres://db/holonet",
            "--database-url-file",
            &path,
        ]);

        assert_eq!(database_url(&cli).unwrap(), "postgres://file/holonet");
    }

    #[test]
    fn test_database_url_missing_file_fails() {
        let cli = cli(&["--database-url-file", "/nonexistent/holonet-url"]);
        assert!(database_url(&cli).is_err());
    }

    #[tokio::test]
    async fn test_connect_runs_migrations() {
        let cli = cli(&["--database-url", "sqlite::memory:"]);
        let store = Store::connect(&cli).await.unwrap();

        let applied = Migrator::get_applied_migrations(store.connection())
            .await
            .unwrap();
        assert_eq!(applied.len(), Migrator::migrations().len());

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_close_store_taken_from_shared_state() {
        let cli = cli(&["--database-url", "sqlite::memory:"]);
        let store = Store::connect(&cli).await.unwrap();
        let state = std::sync::Arc::new(crate::types::ServerState { store, cli });

        let handle = std::sync::Arc::clone(&state);
        drop(handle);

        let state = std::sync::Arc::try_unwrap(state).unwrap();
        state.store.close().await.unwrap();
    }
}
