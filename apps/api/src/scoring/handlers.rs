//! Axum route handlers for the Scoring API.

use axum::Json;
use tracing::debug;

use crate::models::profile::Profile;
use crate::models::skills::SkillScores;
use crate::scoring::scorer::score;

/// POST /api/v1/scores
///
/// Scores a raw profile. Never fails on content: unknown levels score 0.
pub async fn handle_score(Json(profile): Json<Profile>) -> Json<SkillScores> {
    let skills = score(&profile);
    debug!(
        "Scored profile: dsa={} fundamentals={} projects={} experience={} overall={}",
        skills.dsa,
        skills.fundamentals.average,
        skills.projects,
        skills.experience,
        skills.overall
    );
    Json(skills)
}
