//! # Bookmark Resource
//!
//! Request validation, response sanitization, the error taxonomy and the
//! error envelope for the bookmark resource. Persistence lives in
//! [`crate::store`], routing in [`crate::http_server`].

pub mod errors;
pub mod model;
pub mod serialize;
pub mod validate;

pub use errors::{BookmarkError, BookmarkResult, ErrorEnvelope, ServerFailure};
pub use model::{Bookmark, BookmarkChanges, Field, NewBookmark};
pub use serialize::{escape_html, serialize_bookmark, SerializedBookmark};
pub use validate::{validate_changes, validate_new, BookmarkFields};
