use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/joke", post(handlers::generate))
        .route("/api/history", axum::routing::delete(handlers::clear_history))
        .route("/api/history/:id", post(handlers::show_history))
        .route("/api/favorite", post(handlers::toggle_favorite))
        .route("/api/copy", post(handlers::copy))
        .route("/api/share", get(handlers::share))
        .with_state(state)
}
