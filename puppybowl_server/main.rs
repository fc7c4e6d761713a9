use std::sync::Arc;

use puppybowl_api::HttpRosterApi;
use puppybowl_app::{RosterApp, config::Config};
use puppybowl_types::{Result, errors::ApplicationError};
use puppybowl_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let config = Config::from_env();
    let app = setup_app(&config).await;

    WebRouter::serve(AppState::new(app), config.port).await
}

async fn setup_app(config: &Config) -> Arc<RosterApp> {
    let api = HttpRosterApi::from_config(config);
    tracing::info!("Using roster API at {}", api.api_url());

    let app = Arc::new(RosterApp::new(Arc::new(api)));
    app.bootstrap().await;
    app
}
