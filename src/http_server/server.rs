//! # HTTP Server
//!
//! Combines the bookmark and health routers with the middleware stack:
//! access logging, CORS, security headers, the terminal error handler and
//! panic catching.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::bookmark_routes::{bookmark_routes, BookmarkState};
use super::config::HttpServerConfig;
use super::error_handler::{error_handler, handle_panic, not_found};
use super::health_routes::health_routes;
use crate::config::Environment;
use crate::store::BookmarkStore;

/// HTTP Server for the bookmark API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store
    pub fn new(
        config: HttpServerConfig,
        environment: Environment,
        store: Arc<dyn BookmarkStore>,
    ) -> Self {
        let router = Self::build_router(&config, environment, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        environment: Environment,
        store: Arc<dyn BookmarkStore>,
    ) -> Router {
        let bookmark_state = BookmarkState::new(store);

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Production keeps access logs terse, development includes headers.
        let trace = TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(!environment.is_production()),
            )
            .on_response(DefaultOnResponse::new().level(Level::INFO));

        Router::new()
            .merge(health_routes())
            .merge(bookmark_routes(bookmark_state))
            .fallback(not_found)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn_with_state(environment, error_handler))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_DNS_PREFETCH_CONTROL,
                HeaderValue::from_static("off"),
            ))
            .layer(cors)
            .layer(trace)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "bookmark API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryBookmarkStore;

    fn server(config: HttpServerConfig) -> HttpServer {
        HttpServer::new(
            config,
            Environment::Test,
            Arc::new(InMemoryBookmarkStore::new()),
        )
    }

    #[test]
    fn test_server_creation() {
        let server = server(HttpServerConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = server(HttpServerConfig {
            port: 8080,
            ..Default::default()
        });
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = server(config).router();
    }
}
