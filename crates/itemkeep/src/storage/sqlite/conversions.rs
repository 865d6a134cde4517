//! SQLite row conversion functions.

use itemkeep_core::item::Item;
use rusqlite::Row;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
