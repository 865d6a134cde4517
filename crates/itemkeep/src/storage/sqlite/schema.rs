//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name
FROM items
ORDER BY id ASC
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name
FROM items
WHERE id = ?1
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (id, name)
VALUES (?1, ?2)
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;
