//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::matcher::{match_all, match_company, CompanyMatch};
use crate::models::company::Company;
use crate::models::skills::SkillScores;
use crate::state::AppState;

/// Catalog entry with its tier's display label alongside.
#[derive(Debug, Serialize)]
pub struct CompanyEntry {
    #[serde(flatten)]
    pub company: Company,
    pub tier_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyEntry>,
}

/// GET /api/v1/companies
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<CompanyListResponse> {
    let companies = state
        .catalog
        .iter()
        .map(|company| CompanyEntry {
            tier_label: company.tier.label(),
            company: company.clone(),
        })
        .collect();
    Json(CompanyListResponse { companies })
}

/// POST /api/v1/matches
///
/// Ranks the whole catalog against the posted skill scores, best fit first.
pub async fn handle_match_all(
    State(state): State<AppState>,
    Json(skills): Json<SkillScores>,
) -> Json<Vec<CompanyMatch>> {
    let matches = match_all(&state.catalog, &skills);
    debug!("Matched skills against {} companies", matches.len());
    Json(matches)
}

/// POST /api/v1/companies/:id/match
pub async fn handle_match_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    Json(skills): Json<SkillScores>,
) -> Result<Json<CompanyMatch>, AppError> {
    let company = state
        .catalog
        .iter()
        .find(|c| c.id == company_id)
        .ok_or_else(|| AppError::NotFound(format!("Company {company_id} not found")))?;

    Ok(Json(match_company(company, &skills)))
}
