//! SQLite bookmark store implementation.
//!
//! Persistent storage for bookmarks using SQLite and Diesel ORM.

use diesel::prelude::*;

use crate::bookmark::{Bookmark, BookmarkChanges, NewBookmark};

use super::connection::DbPool;
use super::schema::bookmarks;
use super::{BookmarkStore, StoreResult};

/// SQLite-backed bookmark store.
pub struct SqliteBookmarkStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBookmarkStore {
    /// Create a new store over an already migrated connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BookmarkStore for SqliteBookmarkStore {
    fn get_all(&self) -> StoreResult<Vec<Bookmark>> {
        let mut conn = self.pool.get()?;

        let rows = bookmarks::table
            .order(bookmarks::id.asc())
            .select(Bookmark::as_select())
            .load(&mut conn)?;

        Ok(rows)
    }

    fn get_by_id(&self, id: i32) -> StoreResult<Option<Bookmark>> {
        let mut conn = self.pool.get()?;

        let row = bookmarks::table
            .find(id)
            .select(Bookmark::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row)
    }

    fn insert(&self, bookmark: &NewBookmark) -> StoreResult<Bookmark> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(bookmarks::table)
            .values(bookmark)
            .returning(Bookmark::as_returning())
            .get_result(&mut conn)?;

        Ok(row)
    }

    fn update(&self, id: i32, changes: &BookmarkChanges) -> StoreResult<usize> {
        let mut conn = self.pool.get()?;

        let affected = diesel::update(bookmarks::table.find(id))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete(&self, id: i32) -> StoreResult<usize> {
        let mut conn = self.pool.get()?;

        let affected = diesel::delete(bookmarks::table.find(id)).execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connection::{create_pool, run_migrations};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SqliteBookmarkStore) {
        let tmp = TempDir::new().unwrap();
        let url = tmp.path().join("bookmarks.db");
        let pool = create_pool(url.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();
        (tmp, SqliteBookmarkStore::new(pool))
    }

    fn new_bookmark(title: &str) -> NewBookmark {
        NewBookmark {
            title: title.to_string(),
            url: "someplace.com".to_string(),
            description: "Lorem some stuff".to_string(),
            rating: 1.0,
        }
    }

    #[test]
    fn test_empty_table() {
        let (_tmp, store) = create_test_store();
        assert!(store.get_all().unwrap().is_empty());
        assert!(store.get_by_id(1).unwrap().is_none());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let (_tmp, store) = create_test_store();

        let first = store.insert(&new_bookmark("first")).unwrap();
        let second = store.insert(&new_bookmark("second")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "second");
    }

    #[test]
    fn test_get_all_in_insertion_order() {
        let (_tmp, store) = create_test_store();
        for title in ["a", "b", "c"] {
            store.insert(&new_bookmark(title)).unwrap();
        }

        let titles: Vec<_> = store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_round_trip() {
        let (_tmp, store) = create_test_store();
        let inserted = store.insert(&new_bookmark("round trip")).unwrap();

        let fetched = store.get_by_id(inserted.id).unwrap().unwrap();
        assert_eq!(fetched, inserted);
    }

    #[test]
    fn test_partial_update() {
        let (_tmp, store) = create_test_store();
        let inserted = store.insert(&new_bookmark("old")).unwrap();

        let changes = BookmarkChanges {
            title: Some("new".to_string()),
            ..Default::default()
        };
        assert_eq!(store.update(inserted.id, &changes).unwrap(), 1);

        let fetched = store.get_by_id(inserted.id).unwrap().unwrap();
        assert_eq!(fetched.title, "new");
        assert_eq!(fetched.url, inserted.url);
        assert_eq!(fetched.description, inserted.description);
        assert_eq!(fetched.rating, inserted.rating);
    }

    #[test]
    fn test_update_missing_row_affects_nothing() {
        let (_tmp, store) = create_test_store();
        let changes = BookmarkChanges {
            rating: Some(3.0),
            ..Default::default()
        };
        assert_eq!(store.update(42, &changes).unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let (_tmp, store) = create_test_store();
        let inserted = store.insert(&new_bookmark("doomed")).unwrap();

        assert_eq!(store.delete(inserted.id).unwrap(), 1);
        assert!(store.get_by_id(inserted.id).unwrap().is_none());
        assert_eq!(store.delete(inserted.id).unwrap(), 0);
    }

    #[test]
    fn test_missing_table_is_a_query_error() {
        let tmp = TempDir::new().unwrap();
        let url = tmp.path().join("unmigrated.db");
        let store = SqliteBookmarkStore::new(create_pool(url.to_str().unwrap()).unwrap());

        let err = store.get_all().unwrap_err();
        assert_eq!(err.kind(), "query");
    }
}
