//! Company catalog: static reference data for the matcher.
//!
//! The built-in catalog is used unless `COMPANY_CATALOG_PATH` points at a JSON
//! array of companies, in which case that file replaces it wholesale.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::models::company::{
    Company, InterviewPattern, RejectOperator, RejectRule, Requirements, Tier, Weights,
};
use crate::models::skills::SkillDimension;
use crate::scoring::scorer::MAX_SCORE;

/// Tolerance when checking that a company's fit weights sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Loads the catalog from `path`, or falls back to the built-in catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Company>> {
    let catalog = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read company catalog {}", path.display()))?;
            let companies: Vec<Company> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid company catalog JSON in {}", path.display()))?;
            info!("Loaded {} companies from {}", companies.len(), path.display());
            companies
        }
        None => {
            let companies = default_catalog();
            info!("Using built-in company catalog ({} companies)", companies.len());
            companies
        }
    };

    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Rejects catalogs the matcher can't make sense of. Weight sums that drift
/// from 1.0 are only warned about.
pub fn validate_catalog(companies: &[Company]) -> Result<()> {
    let mut seen = HashSet::new();

    for company in companies {
        if company.id.trim().is_empty() {
            bail!("Company '{}' has an empty id", company.name);
        }
        if !seen.insert(company.id.as_str()) {
            bail!("Duplicate company id '{}'", company.id);
        }

        for dimension in SkillDimension::ALL {
            let minimum = company.requirements.minimum(dimension);
            if !(0.0..=MAX_SCORE).contains(&minimum) {
                bail!(
                    "Company '{}' requires {} {minimum}, outside 0–{MAX_SCORE}",
                    company.id,
                    dimension
                );
            }
            if company.requirements.weights.get(dimension) < 0.0 {
                bail!("Company '{}' has a negative {} weight", company.id, dimension);
            }
        }

        let total = company.requirements.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warn!(
                "Company '{}' fit weights sum to {total:.3}, expected 1.0",
                company.id
            );
        }
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in catalog
// ────────────────────────────────────────────────────────────────────────────

fn rule(field: SkillDimension, value: f64, message: &str) -> RejectRule {
    RejectRule {
        field,
        operator: RejectOperator::Lt,
        value,
        message: message.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    tier: Tier,
    minimums: [f64; 4],
    weights: [f64; 4],
    rounds: &[&str],
    focus_areas: &[&str],
    typical_duration: &str,
    reject_rules: Vec<RejectRule>,
) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        tier,
        requirements: Requirements {
            min_dsa: minimums[0],
            min_fundamentals: minimums[1],
            min_projects: minimums[2],
            min_experience: minimums[3],
            weights: Weights {
                dsa: weights[0],
                fundamentals: weights[1],
                projects: weights[2],
                experience: weights[3],
            },
        },
        interview_pattern: InterviewPattern {
            rounds: strings(rounds),
            focus_areas: strings(focus_areas),
            typical_duration: typical_duration.to_string(),
        },
        reject_rules,
    }
}

/// Ten reference companies across the three tiers.
/// Minimums and weights are ordered dsa, fundamentals, projects, experience.
pub fn default_catalog() -> Vec<Company> {
    use SkillDimension::{Dsa, Fundamentals, Projects};

    vec![
        company(
            "google",
            "Google",
            Tier::Tier1,
            [4.5, 4.0, 3.5, 2.0],
            [0.4, 0.25, 0.2, 0.15],
            &["Phone Screen", "Technical 1", "Technical 2", "System Design", "Behavioral"],
            &["DSA", "Problem Solving", "System Design", "Googleyness"],
            "4-6 weeks",
            vec![
                rule(Dsa, 4.0, "DSA skills below Google threshold"),
                rule(Fundamentals, 3.5, "CS fundamentals need improvement"),
            ],
        ),
        company(
            "microsoft",
            "Microsoft",
            Tier::Tier1,
            [4.0, 4.0, 3.0, 1.5],
            [0.35, 0.3, 0.2, 0.15],
            &["HR Screen", "Technical 1", "Technical 2", "Design Round", "AA Round"],
            &["DSA", "System Design", "Problem Solving", "Leadership"],
            "3-5 weeks",
            vec![
                rule(Dsa, 3.5, "DSA below Microsoft threshold"),
                rule(Fundamentals, 3.5, "Fundamentals need strengthening"),
            ],
        ),
        company(
            "amazon",
            "Amazon",
            Tier::Tier1,
            [4.0, 3.5, 3.5, 2.0],
            [0.35, 0.2, 0.25, 0.2],
            &["OA", "Phone Screen", "Virtual Onsite (4 rounds)"],
            &["DSA", "Leadership Principles", "System Design", "Behavioral"],
            "2-4 weeks",
            vec![
                rule(Dsa, 3.5, "DSA skills need improvement"),
                rule(Projects, 3.0, "More impactful projects needed"),
            ],
        ),
        company(
            "meta",
            "Meta",
            Tier::Tier1,
            [4.5, 3.5, 3.0, 1.5],
            [0.45, 0.2, 0.2, 0.15],
            &["Recruiter Call", "Technical Screen", "Onsite (3-4 rounds)"],
            &["DSA", "Coding Speed", "System Design"],
            "3-5 weeks",
            vec![rule(Dsa, 4.0, "Meta requires very strong DSA")],
        ),
        company(
            "flipkart",
            "Flipkart",
            Tier::Tier2,
            [3.5, 3.5, 3.0, 1.5],
            [0.35, 0.25, 0.25, 0.15],
            &["Machine Coding", "Problem Solving", "System Design", "Hiring Manager"],
            &["DSA", "Machine Coding", "LLD", "System Design"],
            "2-3 weeks",
            vec![rule(Dsa, 3.0, "DSA needs improvement for Flipkart")],
        ),
        company(
            "atlassian",
            "Atlassian",
            Tier::Tier2,
            [3.5, 4.0, 4.0, 2.0],
            [0.25, 0.25, 0.3, 0.2],
            &["Values Interview", "Technical 1", "Technical 2", "Manager Round"],
            &["Values Alignment", "System Design", "Problem Solving"],
            "3-4 weeks",
            vec![rule(Projects, 3.0, "Need stronger project portfolio")],
        ),
        company(
            "razorpay",
            "Razorpay",
            Tier::Tier2,
            [3.0, 3.5, 3.5, 1.5],
            [0.3, 0.25, 0.3, 0.15],
            &["Technical Screen", "Problem Solving", "System Design", "Culture Fit"],
            &["DSA", "System Design", "Fintech Domain"],
            "2-3 weeks",
            vec![rule(Dsa, 2.5, "DSA fundamentals needed")],
        ),
        company(
            "tcs",
            "TCS Digital",
            Tier::Tier3,
            [2.5, 3.0, 2.0, 0.5],
            [0.3, 0.35, 0.2, 0.15],
            &["Aptitude Test", "Technical Interview", "HR Round"],
            &["CS Fundamentals", "Basic DSA", "Communication"],
            "1-2 weeks",
            vec![rule(Fundamentals, 2.0, "Basic CS knowledge required")],
        ),
        company(
            "infosys",
            "Infosys",
            Tier::Tier3,
            [2.0, 2.5, 2.0, 0.0],
            [0.25, 0.35, 0.25, 0.15],
            &["Online Assessment", "Technical Interview", "HR Round"],
            &["Aptitude", "CS Fundamentals", "Communication"],
            "1-2 weeks",
            vec![],
        ),
        company(
            "wipro",
            "Wipro",
            Tier::Tier3,
            [2.0, 2.5, 1.5, 0.0],
            [0.25, 0.35, 0.25, 0.15],
            &["Written Test", "Technical Interview", "HR Round"],
            &["Aptitude", "Basic Programming", "Communication"],
            "1 week",
            vec![],
        ),
    ]
}
