use itemkeep_core::item::Item;

/// Items the in-memory backend starts with, so a fresh server has
/// something to list.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new(1, "test one"),
        Item::new(2, "test two"),
        Item::new(3, "test three"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_items_are_valid_and_unique() {
        let items = demo_items();
        let ids: HashSet<i64> = items.iter().map(|item| item.id).collect();

        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|item| item.validate().is_ok()));
    }
}
