use axum::{Router, routing::get};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use heroapi_app::HeroStore;
use heroapi_types::{ApplicationError, Result};

use crate::handlers::hero_lookup;

/// Fixed route prefix both operations are served under. The token mirrors the
/// upstream superhero API access-token path segment.
pub const BASE_PATH: &str = "/api/4b3e7de93f96e6c75ce7e09a504a7c6b";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HeroStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HeroStore>) -> AppState {
        AppState { store }
    }
}

pub struct WebRouter {}

impl WebRouter {
    /// Builds the service router. Public so tests can mount it on their own
    /// listener.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(&format!("{BASE_PATH}/{{*rest}}"), get(hero_lookup))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
