//! PostgreSQL schema definitions and SQL query constants.

/// Creates the items table when missing. Requires PostgreSQL 13+ for
/// `gen_random_uuid()`.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    description TEXT,
    is_offer BOOLEAN,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_items_created_at ON items (created_at);
"#;

/// Column list for items queries.
pub const ITEM_COLUMNS: &str =
    "id, name, price, description, is_offer, created_at, updated_at";

pub fn insert_item() -> String {
    format!(
        "INSERT INTO items (id, name, price, description, is_offer, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {ITEM_COLUMNS}"
    )
}

pub fn select_items() -> String {
    format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at ASC, id ASC")
}

pub fn select_item_by_id() -> String {
    format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1")
}

/// Partial update in one statement.
///
/// `$2`/`$3` are NULL when the field is not supplied. `$4`/`$6` flag
/// whether the nullable columns were supplied, so an explicit `null`
/// clears them while an absent field leaves them untouched.
pub fn update_item() -> String {
    format!(
        "UPDATE items SET
            name = COALESCE($2, name),
            price = COALESCE($3, price),
            description = CASE WHEN $4 THEN $5 ELSE description END,
            is_offer = CASE WHEN $6 THEN $7 ELSE is_offer END,
            updated_at = $8
         WHERE id = $1
         RETURNING {ITEM_COLUMNS}"
    )
}

pub const DELETE_ITEM: &str = "DELETE FROM items WHERE id = $1";
