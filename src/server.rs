//! HTTP service bootstrap.
//!
//! [`serve`] loads the embedding model, binds the listener, and runs the
//! axum router until ctrl-c. The model loads fully before the socket binds:
//! a process that cannot load its model never reaches a servable state.

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;

use crate::api;
use crate::config::SembedConfig;
use crate::embedding::{self, EmbeddingProvider};

/// Shared application state, created once at startup.
///
/// The provider is immutable for the process lifetime; handlers borrow it
/// read-only through the `Arc`.
pub struct AppState {
    pub embedding: Arc<dyn EmbeddingProvider>,
}

/// Build the service router: health check at `/`, embedding at `/embed`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/embed", post(api::embed))
        .with_state(state)
}

/// Start the HTTP service.
pub async fn serve(config: SembedConfig) -> Result<()> {
    let provider = embedding::create_provider(&config.embedding)?;
    let embedding: Arc<dyn EmbeddingProvider> = Arc::from(provider);
    tracing::info!(
        model = %config.embedding.model,
        dimensions = embedding.dimensions(),
        "embedding model ready"
    );

    let state = Arc::new(AppState { embedding });
    let app = router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
