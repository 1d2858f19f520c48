//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, Utc};
use itemstore_core::item::Item;
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, price, description, is_offer, created_at, updated_at
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let price: f64 = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let is_offer: Option<bool> = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Item {
        id: parse_uuid(&id, 0)?,
        name,
        price,
        description,
        is_offer,
        created_at: parse_datetime(&created_at, 5)?,
        updated_at: parse_datetime(&updated_at, 6)?,
    })
}

/// Parse a UUID from its string form.
fn parse_uuid(s: &str, column: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a datetime for SQLite storage.
///
/// Fixed-width microseconds with a `Z` suffix so text ordering matches
/// chronological ordering.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
