//! SQLite schema definition for the larder store.

/// Statements that create the base schema.
///
/// All statements are idempotent (`IF NOT EXISTS`) so they can run on
/// every startup.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    // Key-value table holding the serialized collections. Each collection
    // lives under a single key and is replaced wholesale on every write.
    r"
    CREATE TABLE IF NOT EXISTS kv (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    ",
    // Metadata table for schema versioning.
    r"
    CREATE TABLE IF NOT EXISTS metadata (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    ",
];
