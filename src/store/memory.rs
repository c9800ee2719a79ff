//! In-memory bookmark store.
//!
//! Behaves like the SQLite store (sequential ids that are never reused,
//! id-ordered listing) without touching disk. Used by handler tests.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::bookmark::{Bookmark, BookmarkChanges, NewBookmark};

use super::{BookmarkStore, StoreError, StoreResult};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i32, Bookmark>,
    next_id: i32,
}

/// In-memory bookmark store
#[derive(Debug)]
pub struct InMemoryBookmarkStore {
    table: RwLock<Table>,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore for InMemoryBookmarkStore {
    fn get_all(&self) -> StoreResult<Vec<Bookmark>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    fn get_by_id(&self, id: i32) -> StoreResult<Option<Bookmark>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    fn insert(&self, bookmark: &NewBookmark) -> StoreResult<Bookmark> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;

        let id = table.next_id;
        table.next_id += 1;

        let row = bookmark.clone().with_id(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    fn update(&self, id: i32, changes: &BookmarkChanges) -> StoreResult<usize> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;

        match table.rows.get_mut(&id) {
            Some(row) => {
                changes.apply_to(row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, id: i32) -> StoreResult<usize> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        Ok(usize::from(table.rows.remove(&id).is_some()))
    }
}
