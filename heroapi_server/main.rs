use std::sync::Arc;

use heroapi_app::{Config, MemoryHeroStore};
use heroapi_types::{ApplicationError, Result};
use heroapi_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();

    let config = Config::from_env();
    let store = Arc::new(MemoryHeroStore::with_sample_roster());
    let state = AppState::new(store);

    tracing::info!("Starting heroapi with the built-in roster");
    WebRouter::serve(state, config.port).await
}
