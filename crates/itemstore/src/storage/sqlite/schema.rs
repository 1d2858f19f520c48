//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the items table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) <= 255),
    price REAL NOT NULL,
    description TEXT,
    is_offer INTEGER,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_created_at ON items(created_at);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (id, name, price, description, is_offer, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_ITEMS: &str = r#"
SELECT id, name, price, description, is_offer, created_at, updated_at
FROM items
ORDER BY created_at ASC, id ASC
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, price, description, is_offer, created_at, updated_at
FROM items
WHERE id = ?1
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, price = ?3, description = ?4, is_offer = ?5, updated_at = ?6
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;
