//! HTTP host: wraps module routes in the shared middleware stack and serves them.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{middleware::from_fn, response::Json, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub mod config;
pub mod request_id;
pub mod shutdown;
pub mod web;

pub use config::ApiIngressConfig;

/// Name under which the ingress reads its configuration from the module bag.
pub const MODULE_NAME: &str = "api_ingress";

pub struct ApiIngress {
    config: ApiIngressConfig,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self { config }
    }

    /// Build from the raw per-module config value; `None` means defaults.
    pub fn from_module_config(raw: Option<&serde_json::Value>) -> Result<Self> {
        Ok(Self::new(ApiIngressConfig::from_module_config(raw)?))
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Build the HTTP router around `routes`, publishing `openapi` at `/openapi.json`.
    pub fn build_router(&self, routes: Router, openapi: utoipa::openapi::OpenApi) -> Router {
        tracing::debug!("Building router");

        let openapi = Arc::new(openapi);
        let mut router = routes
            .route("/health", get(web::health_check))
            .route(
                "/openapi.json",
                get(move || {
                    let openapi = Arc::clone(&openapi);
                    async move { Json(openapi.as_ref().clone()) }
                }),
            );
        if self.config.enable_docs {
            router = router.route("/docs", get(web::serve_docs));
        }

        // Layers added later wrap the earlier ones. Outermost to innermost:
        // SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions -> Timeout -> CORS -> BodyLimit
        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        if self.config.request_timeout_sec > 0 {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(
                self.config.request_timeout_sec,
            )));
        }

        router = router
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(request_id::make_request_span)
                    .on_response(request_id::record_response),
            );

        let x_request_id = request_id::header();
        router
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId))
    }
}

/// Bind `addr` and serve `router` until SIGINT/SIGTERM.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "HTTP server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::wait_for_shutdown().await {
                tracing::error!("shutdown signal listener failed: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("HTTP server terminated with error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
