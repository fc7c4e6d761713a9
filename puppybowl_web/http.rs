use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use puppybowl_app::RosterApp;
use puppybowl_types::{Result, errors::ApplicationError};

use crate::handlers::{create_player, home, remove_player, select_player};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<RosterApp>,
}

impl AppState {
    pub fn new(app: Arc<RosterApp>) -> AppState {
        AppState { app }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/players", post(create_player))
            .route("/players/{id}", get(select_player))
            .route("/players/{id}/remove", post(remove_player))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;
        Self::serve_on(state, listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_on(state: AppState, listener: TcpListener) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
