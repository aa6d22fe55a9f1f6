//! Persistence layer for larder.
//!
//! This module provides `SQLite`-backed storage for the two tracked
//! collections. Each collection is serialized to JSON and stored under a
//! single key in a key-value table, so every write is a whole-collection
//! replace — a single atomic statement, never a partial update.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::entry::{FoodEntry, GuideEntry};
use crate::error::{Error, Result};

/// Key under which the food collection is stored.
const FOODS_KEY: &str = "foods";

/// Key under which the guide collection is stored.
const GUIDE_KEY: &str = "references";

/// Storage engine for larder collections.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Store {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directories and database file if they don't
    /// exist. Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the food collection.
    ///
    /// Returns `None` when the key has never been written, so the caller
    /// can seed defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is invalid.
    pub fn load_foods(&self) -> Result<Option<Vec<FoodEntry>>> {
        self.load_collection(FOODS_KEY)
    }

    /// Replace the stored food collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_foods(&self, foods: &[FoodEntry]) -> Result<()> {
        self.save_collection(FOODS_KEY, foods)
    }

    /// Load the guide collection.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored JSON is invalid.
    pub fn load_guide(&self) -> Result<Option<Vec<GuideEntry>>> {
        self.load_collection(GUIDE_KEY)
    }

    /// Replace the stored guide collection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_guide(&self, guide: &[GuideEntry]) -> Result<()> {
        self.save_collection(GUIDE_KEY, guide)
    }

    fn load_collection<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_collection<T: serde::Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            (key, &json),
        )?;
        debug!("Saved {} bytes under key '{}'", json.len(), key);
        Ok(())
    }
}
