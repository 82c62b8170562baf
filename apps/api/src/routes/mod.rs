pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML interview flow
        .route("/", get(handlers::handle_start_page))
        .route("/interviews", post(handlers::handle_start_interview))
        .route("/interviews/:id", get(handlers::handle_show_interview))
        .route(
            "/interviews/:id/responses",
            post(handlers::handle_submit_response),
        )
        .route("/interviews/:id/end", post(handlers::handle_end_interview))
        // JSON API
        .route(
            "/api/v1/interviews/:id",
            get(handlers::handle_get_interview),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
