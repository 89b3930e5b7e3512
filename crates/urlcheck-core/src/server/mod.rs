//! urlinfo HTTP API: reputation lookups over the in-memory store.

mod urlinfo;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;

use crate::store::UrlStore;

/// Shared handler state. The store is read-only after loading.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UrlStore>,
}

/// Builds the lookup router.
///
/// `original_path` is a wildcard so URLs with nested paths resolve without
/// the caller escaping every slash; percent-escaped segments are decoded by
/// the extractor.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/urlinfo/{request_id}/{hostname_and_port}/{*original_path}",
            get(urlinfo::get_url_info),
        )
        .with_state(state)
}

/// Binds `addr` and serves lookup requests until the process is terminated.
pub async fn serve(addr: &str, store: UrlStore) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, urls = store.len(), "urlinfo API listening");

    let router = build_router(AppState {
        store: Arc::new(store),
    });
    axum::serve(listener, router)
        .await
        .context("urlinfo API server failed")?;
    Ok(())
}
