//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The unique index on `lower(email)` is what makes case-insensitive
/// email uniqueness atomic: of two racing inserts with the same address,
/// SQLite rejects exactly one with a constraint violation.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT NOT NULL,
    phone       TEXT NOT NULL,
    birthday    TEXT NOT NULL,   -- ISO 8601 date (YYYY-MM-DD)
    notes       TEXT
);

CREATE UNIQUE INDEX IF NOT EXISTS contacts_email_ci_idx
    ON contacts(lower(email));

PRAGMA user_version = 1;
";
