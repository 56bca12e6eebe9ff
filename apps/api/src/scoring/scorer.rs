use std::collections::HashSet;

use crate::models::profile::{Complexity, Experience, ExperienceType, Level, Profile, Project};
use crate::models::skills::{round1, FundamentalsScore, SkillScores};

pub const MAX_SCORE: f64 = 5.0;

/// Weights for the overall score. These are global and independent of any
/// company's fit weights or reject thresholds.
#[derive(Debug, Clone)]
pub struct OverallWeights {
    pub dsa: f64,
    pub fundamentals: f64,
    pub projects: f64,
    pub experience: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            dsa: 0.35,
            fundamentals: 0.25,
            projects: 0.25,
            experience: 0.15,
        }
    }
}

/// Months of experience that saturate the score before the type multiplier.
const FULL_EXPERIENCE_MONTHS: f64 = 24.0;

/// Scores a raw profile. Total: unknown levels and empty lists score 0.
pub fn score(profile: &Profile) -> SkillScores {
    let dsa = compute_dsa_score(profile.dsa_level, profile.dsa_problems);
    let fundamentals = compute_fundamentals_score(
        profile.os_level,
        profile.cn_level,
        profile.dbms_level,
        profile.oops_level,
    );
    let projects = compute_projects_score(&profile.projects);
    let experience = compute_experience_score(&profile.experiences);

    let mut skills = SkillScores {
        dsa,
        fundamentals,
        projects,
        experience,
        overall: 0.0,
    };
    skills.overall = compute_overall_score(&skills, &OverallWeights::default());
    skills
}

pub fn level_score(level: Level) -> f64 {
    match level {
        Level::None => 0.0,
        Level::Beginner => 1.0,
        Level::Basic => 1.5,
        Level::Intermediate => 2.5,
        Level::Advanced => 4.0,
        Level::Expert => 5.0,
        Level::Unknown => 0.0,
    }
}

/// Step bonus for demonstrated volume of solved problems.
fn problem_bonus(problems_solved: u32) -> f64 {
    match problems_solved {
        500.. => 1.0,
        300.. => 0.75,
        150.. => 0.5,
        50.. => 0.25,
        _ => 0.0,
    }
}

pub fn compute_dsa_score(level: Level, problems_solved: u32) -> f64 {
    (level_score(level) + problem_bonus(problems_solved)).min(MAX_SCORE)
}

pub fn compute_fundamentals_score(
    os: Level,
    cn: Level,
    dbms: Level,
    oops: Level,
) -> FundamentalsScore {
    FundamentalsScore::new(
        level_score(os),
        level_score(cn),
        level_score(dbms),
        level_score(oops),
    )
}

/// Single project score. Deliberately uncapped; only the mean is capped.
fn project_score(project: &Project) -> f64 {
    let mut score = match project.complexity {
        Complexity::Basic => 1.0,
        Complexity::Intermediate => 2.0,
        Complexity::Advanced => 3.0,
        Complexity::Unknown => 0.0,
    };
    let distinct: HashSet<&str> = project.technologies.iter().map(String::as_str).collect();
    if distinct.len() >= 4 {
        score += 0.5;
    }
    if project.has_deployment {
        score += 0.5;
    }
    if project.has_github {
        score += 0.25;
    }
    score
}

pub fn compute_projects_score(projects: &[Project]) -> f64 {
    if projects.is_empty() {
        return 0.0;
    }
    let total: f64 = projects.iter().map(project_score).sum();
    (total / projects.len() as f64).min(MAX_SCORE)
}

fn quality_multiplier(kind: ExperienceType) -> f64 {
    match kind {
        ExperienceType::Fulltime => 1.5,
        ExperienceType::Internship => 1.2,
        ExperienceType::Freelance | ExperienceType::Other => 1.0,
    }
}

/// Total months scaled by the single best experience type present.
pub fn compute_experience_score(experiences: &[Experience]) -> f64 {
    if experiences.is_empty() {
        return 0.0;
    }
    let total_months: u64 = experiences.iter().map(|e| u64::from(e.duration)).sum();
    let multiplier = experiences
        .iter()
        .map(|e| quality_multiplier(e.kind))
        .fold(1.0_f64, f64::max);

    let score = (total_months as f64 / FULL_EXPERIENCE_MONTHS * MAX_SCORE * multiplier).min(MAX_SCORE);
    round1(score)
}

/// Weighted overall score rounded to one decimal.
pub fn compute_overall_score(skills: &SkillScores, weights: &OverallWeights) -> f64 {
    round1(
        skills.dsa * weights.dsa
            + skills.fundamentals.average * weights.fundamentals
            + skills.projects * weights.projects
            + skills.experience * weights.experience,
    )
}
