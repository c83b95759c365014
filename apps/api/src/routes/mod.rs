pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::agent::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/agent", post(handlers::handle_agent_turn))
        .with_state(state)
}
