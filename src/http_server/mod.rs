//! # HTTP Server Module
//!
//! Axum server exposing the bookmark resource.
//!
//! # Endpoints
//!
//! - `/` and `/health` - Liveness
//! - `/bookmarks` and `/bookmarks/` - List (GET) and create (POST)
//! - `/bookmarks/:id` - Read (GET), partial update (PATCH), delete (DELETE)

pub mod bookmark_routes;
pub mod config;
pub mod error_handler;
pub mod health_routes;
pub mod server;

pub use bookmark_routes::BookmarkState;
pub use config::HttpServerConfig;
pub use server::HttpServer;
