pub mod config;
mod game;

pub use game::core::{Match, MatchError, Move, MoveInput, MoveResult, RoundResult, Slot, Winner};
pub use game::gateway::GatewayState;
pub use game::matchmaking::{notices, MatchId, RouterError, SessionRouter, SessionStore};
pub use game::messages;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade, ws::WebSocket},
    response::Response,
    routing::get,
};
use std::sync::Arc;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayState>,
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    game::gateway::handle_connection(socket, state.gateway).await;
}

pub fn app(total_rounds: u32) -> Router {
    app_with_state(Arc::new(GatewayState::new(total_rounds)))
}

/// Build the app around an existing gateway, so callers can inspect it
pub fn app_with_state(gateway: Arc<GatewayState>) -> Router {
    let state = AppState { gateway };

    Router::new()
        .route("/health", get(health))
        .route("/ws", get(ws_handler))
        .with_state(state)
}
