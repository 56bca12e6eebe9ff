//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};

use crate::dashboard::demo::demo_profile;
use crate::dashboard::pipeline::{assess, Assessment};
use crate::models::profile::Profile;
use crate::state::AppState;

/// POST /api/v1/assessment
///
/// Full pipeline for one profile: scores, ranked matches, roadmap, advice, summary.
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Json<Assessment> {
    Json(assess(&profile, &state.catalog, state.config.plan_defaults()))
}

/// GET /api/v1/assessment/demo
///
/// Same as above for the built-in demo profile.
pub async fn handle_demo_assessment(State(state): State<AppState>) -> Json<Assessment> {
    Json(assess(
        &demo_profile(),
        &state.catalog,
        state.config.plan_defaults(),
    ))
}
