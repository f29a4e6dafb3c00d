//! Shared primitive type aliases used across the workspace.

/// Database row identifier (INTEGER PRIMARY KEY).
pub type DbId = i64;

/// Timestamp as stored in the database (no timezone column).
pub type Timestamp = chrono::NaiveDateTime;
