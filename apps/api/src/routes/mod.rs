pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as assessment;
use crate::matching::handlers as matching;
use crate::roadmap::handlers as roadmap;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring
        .route("/api/v1/scores", post(scoring::handle_score))
        // Matching
        .route("/api/v1/companies", get(matching::handle_list_companies))
        .route("/api/v1/matches", post(matching::handle_match_all))
        .route(
            "/api/v1/companies/:id/match",
            post(matching::handle_match_company),
        )
        // Roadmap
        .route("/api/v1/roadmap", post(roadmap::handle_generate_roadmap))
        .route(
            "/api/v1/roadmap/tasks/:task_id/toggle",
            post(roadmap::handle_toggle_task),
        )
        // Assessment
        .route("/api/v1/assessment", post(assessment::handle_assess))
        .route(
            "/api/v1/assessment/demo",
            get(assessment::handle_demo_assessment),
        )
        .with_state(state)
}
