//! Axum route handlers for the Roadmap API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::roadmap::Roadmap;
use crate::models::skills::{SkillGap, SkillScores};
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::progress::{compute_progress, RoadmapProgress};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub skills: SkillScores,
    #[serde(default)]
    pub gaps: Vec<SkillGap>,
    pub timeline_weeks: u32,
    pub weekly_hours: u32,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
    pub progress: RoadmapProgress,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmap
///
/// The generator itself tolerates zero budgets; this endpoint refuses them so
/// clients get an error instead of an empty plan.
pub async fn handle_generate_roadmap(
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if request.timeline_weeks == 0 {
        return Err(AppError::Validation(
            "timeline_weeks must be at least 1".to_string(),
        ));
    }
    if request.weekly_hours == 0 {
        return Err(AppError::Validation(
            "weekly_hours must be greater than 0".to_string(),
        ));
    }

    let roadmap = generate_roadmap(
        &request.skills,
        &request.gaps,
        request.timeline_weeks,
        request.weekly_hours,
    );
    info!(
        "Generated {}-week roadmap from {} gaps ({}h/week over {} weeks)",
        roadmap.total_weeks,
        request.gaps.len(),
        request.weekly_hours,
        request.timeline_weeks
    );

    let progress = compute_progress(&roadmap);
    Ok(Json(RoadmapResponse { roadmap, progress }))
}

/// POST /api/v1/roadmap/tasks/:task_id/toggle
///
/// Stateless: the client posts its roadmap and gets it back with the task flipped.
pub async fn handle_toggle_task(
    Path(task_id): Path<String>,
    Json(mut roadmap): Json<Roadmap>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if !roadmap.toggle_task(&task_id) {
        return Err(AppError::NotFound(format!("Task {task_id} not found")));
    }

    let progress = compute_progress(&roadmap);
    Ok(Json(RoadmapResponse { roadmap, progress }))
}
