//! bookmarkd - a small HTTP service for storing and serving bookmarks
//!
//! Layers, leaf first: [`store`] (Diesel/SQLite data access), [`bookmark`]
//! (validation, sanitization, errors), [`http_server`] (routes and
//! middleware), [`cli`] (process entry).

pub mod bookmark;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod store;
