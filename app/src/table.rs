//! Paginated entity tables.
//!
//! A table holds one page of rows as fetched. Mutations confirmed by the
//! user patch the matching row in place instead of refetching the page.

use crate::format::serial_number;
use cinepass_api::types::{EntityPage, Movie, MovieShow, Owner, Screen};

/// Row with a server id
pub trait Keyed {
    /// Server id
    fn key(&self) -> &str;
}

impl Keyed for Owner {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Movie {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Screen {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for MovieShow {
    fn key(&self) -> &str {
        &self.id
    }
}

/// One page of rows
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable<T> {
    rows: Vec<T>,
    page: u32,
    max_page: u32,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            max_page: 0,
        }
    }
}

impl<T: Keyed> EntityTable<T> {
    /// Empty table on page 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows with page `page` from the server
    pub fn load(&mut self, page: u32, fetched: EntityPage<T>) {
        self.rows = fetched.data;
        self.page = page.max(1);
        self.max_page = fetched.max_page;
    }

    /// Rows of the current page
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Current page, 1-based
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Last page reported by the server
    #[must_use]
    pub const fn max_page(&self) -> u32 {
        self.max_page
    }

    /// Rows with their display serial number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &T)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| (serial_number(self.page, index), row))
    }

    /// Row with id `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.key() == key)
    }

    /// Apply `f` to the row with id `key`. Returns whether a row matched.
    pub fn patch(&mut self, key: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.rows.iter_mut().find(|row| row.key() == key) {
            Some(row) => {
                f(row);
                true
            },
            None => false,
        }
    }

    /// Replace the row with the same id, or add `row` at the top
    pub fn upsert(&mut self, row: T) {
        match self.rows.iter().position(|existing| existing.key() == row.key()) {
            Some(index) => self.rows[index] = row,
            None => self.rows.insert(0, row),
        }
    }

    /// Drop the row with id `key`. Returns whether a row matched.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key() != key);
        self.rows.len() != before
    }
}

impl EntityTable<Owner> {
    /// Flip the blocked flag of `key`
    pub fn toggle_blocked(&mut self, key: &str) -> bool {
        self.patch(key, |owner| owner.is_blocked = !owner.is_blocked)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner(id: &str) -> Owner {
        serde_json::from_value(json!({"_id": id, "name": id, "email": format!("{id}@cinepass.in")}))
            .unwrap()
    }

    fn page(ids: &[&str]) -> EntityPage<Owner> {
        EntityPage {
            data: ids.iter().map(|id| owner(id)).collect(),
            max_page: 4,
        }
    }

    #[test]
    fn test_load_and_number() {
        let mut table = EntityTable::new();
        table.load(2, page(&["a", "b"]));
        let serials: Vec<usize> = table.numbered().map(|(n, _)| n).collect();
        assert_eq!(serials, vec![11, 12]);
        assert_eq!(table.max_page(), 4);
    }

    #[test]
    fn test_toggle_blocked_by_id() {
        let mut table = EntityTable::new();
        table.load(1, page(&["a", "b"]));

        assert!(table.toggle_blocked("b"));
        assert!(table.get("b").unwrap().is_blocked);
        assert!(!table.get("a").unwrap().is_blocked);
        assert!(!table.toggle_blocked("zzz"));
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut table = EntityTable::new();
        table.load(1, page(&["a"]));

        let mut renamed = owner("a");
        renamed.name = "Renamed".to_string();
        table.upsert(renamed);
        table.upsert(owner("c"));

        let names: Vec<&str> = table.rows().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["c", "Renamed"]);

        assert!(table.remove("a"));
        assert!(!table.remove("a"));
        assert_eq!(table.rows().len(), 1);
    }
}
