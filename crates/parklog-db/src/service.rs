//! Service handle exposing the park, visit, and user repositories.
//!
//! `ParkService` wraps `ParkDb`. All repo methods are implemented as
//! `impl ParkService` blocks in `crate::repos`.

use crate::ParkDb;
use crate::error::DatabaseError;

/// Entry point for every persistence operation.
pub struct ParkService {
    db: ParkDb,
}

impl ParkService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ParkDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the server cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = ParkDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ParkDb`.
    #[must_use]
    pub const fn from_db(db: ParkDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ParkDb {
        &self.db
    }
}
