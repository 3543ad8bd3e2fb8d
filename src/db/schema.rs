//! Database schema and migrations for Messagely.
//!
//! Migrations are applied sequentially when the database is first opened or
//! upgraded. Never edit a migration that has shipped; append a new one.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Users table
    r#"
CREATE TABLE users (
    username        TEXT PRIMARY KEY,
    password        TEXT NOT NULL,           -- Argon2 hash
    first_name      TEXT NOT NULL,
    last_name       TEXT NOT NULL,
    phone           TEXT NOT NULL,
    join_at         TEXT NOT NULL,
    last_login_at   TEXT
);
"#,
    // v2: Direct messages between users
    r#"
CREATE TABLE messages (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    from_username   TEXT NOT NULL REFERENCES users(username),
    to_username     TEXT NOT NULL REFERENCES users(username),
    body            TEXT NOT NULL,
    sent_at         TEXT NOT NULL,
    read_at         TEXT                     -- NULL until the recipient reads it
);

CREATE INDEX idx_messages_from_username ON messages(from_username);
CREATE INDEX idx_messages_to_username ON messages(to_username);
"#,
];
