use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use roster_app::app_bus::AppBus;
use roster_types::{Result, errors::ApplicationError};

use crate::handlers::{
    create_player, delete_player, get_player, list_players, roster_create, roster_delete,
    roster_page, roster_update, update_player,
};

const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .nest_service("/assets", ServeDir::new(ASSETS_DIR))
            // Client pages
            .route("/", get(roster_page))
            .route("/roster", post(roster_create))
            .route("/roster/{id}", post(roster_update))
            .route("/roster/{id}/delete", post(roster_delete))
            // JSON API
            .route("/players", get(list_players).post(create_player))
            .route(
                "/players/{id}",
                get(get_player).put(update_player).delete(delete_player),
            )
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_with_listener(state, listener).await
    }

    /// Serves on an already bound listener (tests bind port 0).
    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
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
