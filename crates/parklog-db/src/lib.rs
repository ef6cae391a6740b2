//! # parklog-db
//!
//! libSQL persistence for parklog: parks, visits, and user accounts.
//!
//! Every statement is a fixed SQL template owned by a repository module with
//! positional `?N` parameters; no SQL is assembled from user input. Each
//! repository call is one round trip, except `delete_park`, which removes a
//! park and its visits inside a single transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all parklog state.
///
/// Wraps a libSQL database and a single connection.
pub struct ParkDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ParkDb {
    /// Open a local database file (or `":memory:"`).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        tracing::debug!(path, "opened local park database");
        Self::from_database(db).await
    }

    /// Open a database served by a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the server is unreachable or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        tracing::debug!(url, "opened remote park database");
        Self::from_database(db).await
    }

    async fn from_database(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let park_db = Self { db, conn };
        park_db.run_migrations().await?;
        Ok(park_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
