//! Company Matcher: measures a skill profile against each company's
//! requirements.
//!
//! Pure and deterministic. Reads reject-rule thresholds and the company's fit
//! weights; the scorer's global overall weights are never consulted here.

use serde::{Deserialize, Serialize};

use crate::models::company::Company;
use crate::models::skills::{round1, Priority, SkillDimension, SkillGap, SkillScores};
use crate::scoring::scorer::MAX_SCORE;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Recommended,
    Prepare,
    Avoid,
}

/// Fit assessment for one company. Recomputed on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyMatch {
    pub company: Company,
    pub fit_score: u32, // 0 – 100
    pub status: MatchStatus,
    pub gaps: Vec<SkillGap>, // high → medium → low
    pub prep_time: u32,      // weeks
    pub reject_reason: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

const AVOID_BELOW: u32 = 50;
const RECOMMEND_FROM: u32 = 75;

/// Matches skills against every company, best fit first.
///
/// `sort_by` is stable, so equal fit scores keep catalog order.
pub fn match_all(companies: &[Company], skills: &SkillScores) -> Vec<CompanyMatch> {
    let mut matches: Vec<CompanyMatch> = companies
        .iter()
        .map(|company| match_company(company, skills))
        .collect();
    matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    matches
}

/// Matches skills against a single company.
///
/// Algorithm:
/// 1. First reject rule that holds supplies the reject reason
/// 2. Gaps for every dimension below the company minimum
/// 3. fit_score = Σ(current / 5 × weight) × 100, rounded
/// 4. prep_time = Σ ceil(gap × weeks-per-point)
/// 5. Status: rejected or fit < 50 → avoid; fit ≥ 75 with ≤ 1 gap → recommended; else prepare
pub fn match_company(company: &Company, skills: &SkillScores) -> CompanyMatch {
    let reject_reason = check_reject_rules(company, skills);
    let gaps = compute_gaps(company, skills);
    let fit_score = compute_fit_score(company, skills);
    let prep_time = estimate_prep_time(&gaps);

    let status = if reject_reason.is_some() || fit_score < AVOID_BELOW {
        MatchStatus::Avoid
    } else if fit_score >= RECOMMEND_FROM && gaps.len() <= 1 {
        MatchStatus::Recommended
    } else {
        MatchStatus::Prepare
    };

    CompanyMatch {
        company: company.clone(),
        fit_score,
        status,
        gaps,
        prep_time,
        reject_reason,
    }
}

/// Returns the message of the first rule that holds. Rule order matters.
fn check_reject_rules(company: &Company, skills: &SkillScores) -> Option<String> {
    company
        .reject_rules
        .iter()
        .find(|rule| rule.operator.holds(skills.get(rule.field), rule.value))
        .map(|rule| rule.message.clone())
}

fn compute_gaps(company: &Company, skills: &SkillScores) -> Vec<SkillGap> {
    let requirements = &company.requirements;

    let mut gaps: Vec<SkillGap> = SkillDimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let current = skills.get(dimension);
            let required = requirements.minimum(dimension);
            if current >= required {
                return None;
            }
            Some(SkillGap {
                skill: dimension,
                current: round1(current),
                required,
                gap: round1(required - current),
                priority: Priority::from_weight(requirements.weights.get(dimension)),
            })
        })
        .collect();

    // Stable: dimension order survives within a priority tier.
    gaps.sort_by_key(|gap| gap.priority);
    gaps
}

/// Weighted fit percentage. Clamped so a catalog whose weights overshoot 1.0
/// still reports within 0–100.
fn compute_fit_score(company: &Company, skills: &SkillScores) -> u32 {
    let weights = &company.requirements.weights;
    let weighted: f64 = SkillDimension::ALL
        .into_iter()
        .map(|dimension| skills.get(dimension) / MAX_SCORE * weights.get(dimension))
        .sum();

    (weighted * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Study weeks needed to close one point of gap on a dimension.
fn weeks_per_point(dimension: SkillDimension) -> f64 {
    match dimension {
        SkillDimension::Dsa => 4.0,
        SkillDimension::Fundamentals => 2.0,
        SkillDimension::Projects => 3.0,
        // Experience doesn't compress through study.
        SkillDimension::Experience => 1.0,
    }
}

fn estimate_prep_time(gaps: &[SkillGap]) -> u32 {
    gaps.iter()
        .map(|gap| (gap.gap * weeks_per_point(gap.skill)).ceil() as u32)
        .sum()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
