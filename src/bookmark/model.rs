//! Bookmark record types.
//!
//! `Bookmark` is a stored row, `NewBookmark` a validated create request and
//! `BookmarkChanges` a validated partial update.

use std::fmt;

use diesel::prelude::*;

use crate::store::schema::bookmarks;

/// Updatable bookmark fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Url,
    Description,
    Rating,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Url, Field::Description, Field::Rating];

    /// Name of the field as it appears in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
            Field::Description => "description",
            Field::Rating => "rating",
        }
    }

    /// JSON type the field must carry
    pub fn expected(&self) -> &'static str {
        match self {
            Field::Rating => "a number",
            _ => "a string",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted bookmark.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Bookmark {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: f64,
}

/// A bookmark that passed create validation and has no id yet.
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = bookmarks)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: f64,
}

impl NewBookmark {
    /// Attach a store-assigned id
    pub fn with_id(self, id: i32) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// Partial update. `None` fields are left untouched by the store.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = bookmarks)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
}

impl BookmarkChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }

    /// Overwrite the supplied fields of `bookmark` in place.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
