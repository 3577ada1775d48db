pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::guidance::handlers as guidance;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment flow
        .route("/api/v1/tracks", get(assessment::handle_list_tracks))
        .route("/api/v1/sessions", post(assessment::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(assessment::handle_get_session).delete(assessment::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/track",
            post(assessment::handle_choose_track),
        )
        .route(
            "/api/v1/sessions/:id/question",
            get(assessment::handle_current_question),
        )
        .route(
            "/api/v1/sessions/:id/answers",
            post(assessment::handle_submit_answer),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(assessment::handle_reset_session),
        )
        // Guidance pipeline
        .route(
            "/api/v1/sessions/:id/guidance",
            post(guidance::handle_generate_guidance),
        )
        .route(
            "/api/v1/sessions/:id/report",
            get(guidance::handle_download_report),
        )
        .with_state(state)
}
