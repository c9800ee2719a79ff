//! Bookmark HTTP Routes
//!
//! CRUD endpoints for the bookmark resource. Each handler runs validation,
//! then at most one store call, then serialization.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::bookmark::{
    serialize_bookmark, validate_changes, validate_new, BookmarkError, BookmarkFields,
    BookmarkResult, SerializedBookmark,
};
use crate::store::{BookmarkStore, StoreError, StoreResult};

// ==================
// Shared State
// ==================

/// Bookmark state shared across handlers
#[derive(Clone)]
pub struct BookmarkState {
    pub store: Arc<dyn BookmarkStore>,
}

impl BookmarkState {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// Run a store call on the blocking pool.
    async fn run<T, F>(&self, op: F) -> BookmarkResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn BookmarkStore) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?;
        Ok(result?)
    }
}

// ==================
// Router
// ==================

/// Create bookmark routes. The collection answers with or without a
/// trailing slash.
pub fn bookmark_routes(state: BookmarkState) -> Router {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/bookmarks/", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark),
        )
        .with_state(state)
}

/// Ids that do not parse name no bookmark.
fn parse_id(raw: &str) -> BookmarkResult<i32> {
    raw.parse().map_err(|_| BookmarkError::NotFound)
}

// ==================
// Handlers
// ==================

/// GET /bookmarks
async fn list_bookmarks(
    State(state): State<BookmarkState>,
) -> BookmarkResult<Json<Vec<SerializedBookmark>>> {
    let bookmarks = state.run(|store| store.get_all()).await?;
    Ok(Json(bookmarks.iter().map(serialize_bookmark).collect()))
}

/// GET /bookmarks/:id
async fn get_bookmark(
    State(state): State<BookmarkState>,
    Path(id): Path<String>,
) -> BookmarkResult<Json<SerializedBookmark>> {
    let id = parse_id(&id)?;

    let bookmark = state
        .run(move |store| store.get_by_id(id))
        .await?
        .ok_or(BookmarkError::NotFound)?;

    Ok(Json(serialize_bookmark(&bookmark)))
}

/// POST /bookmarks
async fn create_bookmark(
    State(state): State<BookmarkState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Value>, JsonRejection>,
) -> BookmarkResult<impl IntoResponse> {
    let Json(body) = body?;
    let new_bookmark = validate_new(&BookmarkFields::from(body))?;

    let bookmark = state.run(move |store| store.insert(&new_bookmark)).await?;
    tracing::info!(id = bookmark.id, "bookmark created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serialize_bookmark(&bookmark)),
    ))
}

/// PATCH /bookmarks/:id
async fn update_bookmark(
    State(state): State<BookmarkState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> BookmarkResult<StatusCode> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let changes = validate_changes(&BookmarkFields::from(body))?;

    let affected = state.run(move |store| store.update(id, &changes)).await?;
    if affected == 0 {
        return Err(BookmarkError::NotFound);
    }

    tracing::info!(id, "bookmark updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /bookmarks/:id
async fn delete_bookmark(
    State(state): State<BookmarkState>,
    Path(id): Path<String>,
) -> BookmarkResult<StatusCode> {
    let id = parse_id(&id)?;

    let affected = state.run(move |store| store.delete(id)).await?;
    if affected == 0 {
        return Err(BookmarkError::NotFound);
    }

    tracing::info!(id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
