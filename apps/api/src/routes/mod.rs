pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::puzzle::handlers as puzzle_handlers;
use crate::state::AppState;
use crate::words::handlers as words_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/puzzles",
            post(puzzle_handlers::handle_generate_puzzle),
        )
        .route(
            "/api/v1/puzzles/:id/clues",
            get(puzzle_handlers::handle_get_clues),
        )
        .route(
            "/api/v1/topics/words",
            post(words_handlers::handle_topic_words),
        )
        .with_state(state)
}
