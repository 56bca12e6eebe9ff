//! Assessment pipeline: Profile → Scores → Matches → Roadmap in one pass.
//!
//! Gaps feeding the roadmap come from every company the candidate is not yet
//! recommended for, de-duplicated by skill in match order.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dashboard::advice::{build_advice, Advice};
use crate::dashboard::summary::{summarize, ReadinessSummary};
use crate::matching::matcher::{match_all, CompanyMatch, MatchStatus};
use crate::models::company::Company;
use crate::models::profile::{CareerGoals, Profile};
use crate::models::roadmap::Roadmap;
use crate::models::skills::{SkillGap, SkillScores};
use crate::roadmap::generator::generate_roadmap_at;
use crate::scoring::scorer::score;

/// Roadmap weeks per month of timeline.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Used when a profile leaves its timeline or weekly hours at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDefaults {
    pub timeline_months: u32,
    pub weekly_hours: u32,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            timeline_months: 4,
            weekly_hours: 20,
        }
    }
}

/// Everything the dashboard renders for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub skills: SkillScores,
    pub matches: Vec<CompanyMatch>,
    pub roadmap: Roadmap,
    pub advice: Vec<Advice>,
    pub summary: ReadinessSummary,
}

pub fn assess(profile: &Profile, catalog: &[Company], defaults: PlanDefaults) -> Assessment {
    assess_at(profile, catalog, defaults, Utc::now())
}

pub fn assess_at(
    profile: &Profile,
    catalog: &[Company],
    defaults: PlanDefaults,
    generated_at: DateTime<Utc>,
) -> Assessment {
    let skills = score(profile);
    let matches = match_all(catalog, &skills);
    let gaps = collect_unmet_gaps(&matches);
    let (timeline_weeks, weekly_hours) = plan_budget(&profile.goals, defaults);

    let roadmap = generate_roadmap_at(&skills, &gaps, timeline_weeks, weekly_hours, generated_at);
    let advice = build_advice(&matches, &roadmap, &skills);
    let summary = summarize(&skills, &matches);

    info!(
        "Assessment: overall={} recommended={} prepare={} avoid={} roadmap_weeks={}",
        skills.overall,
        summary.recommended_count,
        summary.prepare_count,
        summary.avoid_count,
        roadmap.total_weeks
    );

    Assessment {
        skills,
        matches,
        roadmap,
        advice,
        summary,
    }
}

/// Gaps of every non-recommended match, first occurrence per skill kept.
pub fn collect_unmet_gaps(matches: &[CompanyMatch]) -> Vec<SkillGap> {
    let mut seen = HashSet::new();
    matches
        .iter()
        .filter(|m| m.status != MatchStatus::Recommended)
        .flat_map(|m| m.gaps.iter())
        .filter(|gap| seen.insert(gap.skill))
        .cloned()
        .collect()
}

/// Converts profile goals to `(timeline_weeks, weekly_hours)`.
pub fn plan_budget(goals: &CareerGoals, defaults: PlanDefaults) -> (u32, u32) {
    let months = if goals.timeline_months == 0 {
        defaults.timeline_months
    } else {
        goals.timeline_months
    };
    let weekly_hours = if goals.weekly_hours == 0 {
        defaults.weekly_hours
    } else {
        goals.weekly_hours
    };
    (months.saturating_mul(WEEKS_PER_MONTH), weekly_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::demo::demo_profile;
    use crate::matching::catalog::default_catalog;
    use crate::models::skills::{FundamentalsScore, SkillDimension};
    use crate::roadmap::generator::INTERVIEW_PREP_THEME;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_plan_budget_converts_months_to_weeks() {
        let goals = CareerGoals {
            timeline_months: 3,
            weekly_hours: 15,
            ..CareerGoals::default()
        };
        assert_eq!(plan_budget(&goals, PlanDefaults::default()), (12, 15));
    }

    #[test]
    fn test_plan_budget_falls_back_to_defaults() {
        assert_eq!(
            plan_budget(&CareerGoals::default(), PlanDefaults::default()),
            (16, 20)
        );
    }

    #[test]
    fn test_unmet_gaps_skip_recommended_and_dedupe() {
        let skills = score(&demo_profile());
        let matches = match_all(&default_catalog(), &skills);
        let gaps = collect_unmet_gaps(&matches);

        let unique: HashSet<SkillDimension> = gaps.iter().map(|g| g.skill).collect();
        assert_eq!(unique.len(), gaps.len());
        assert!(!gaps.is_empty());
        assert!(matches
            .iter()
            .filter(|m| m.status != MatchStatus::Recommended)
            .flat_map(|m| &m.gaps)
            .all(|g| unique.contains(&g.skill)));
    }

    #[test]
    fn test_unmet_gaps_empty_when_all_recommended() {
        let skills = SkillScores {
            dsa: 5.0,
            fundamentals: FundamentalsScore::new(5.0, 5.0, 5.0, 5.0),
            projects: 5.0,
            experience: 5.0,
            overall: 5.0,
        };
        let matches = match_all(&default_catalog(), &skills);
        assert!(matches.iter().all(|m| m.status == MatchStatus::Recommended));
        assert!(collect_unmet_gaps(&matches).is_empty());
    }

    #[test]
    fn test_assess_demo_profile_end_to_end() {
        let catalog = default_catalog();
        let assessment = assess_at(&demo_profile(), &catalog, PlanDefaults::default(), fixed_time());

        assert_eq!(assessment.skills.dsa, 3.0);
        assert_eq!(assessment.skills.projects, 2.75);
        assert_eq!(assessment.matches.len(), catalog.len());
        assert_eq!(assessment.roadmap.generated_at, fixed_time());
        // 4 months → 16 weeks
        assert!(assessment.roadmap.weeks.iter().all(|w| w.week_number <= 16));
        assert_eq!(
            assessment.roadmap.weeks.last().map(|w| w.theme.as_str()),
            Some(INTERVIEW_PREP_THEME)
        );
        assert_eq!(
            assessment.summary.recommended_count
                + assessment.summary.prepare_count
                + assessment.summary.avoid_count,
            catalog.len()
        );
    }

    #[test]
    fn test_google_avoided_for_demo_profile() {
        let assessment = assess(&demo_profile(), &default_catalog(), PlanDefaults::default());
        let google = assessment
            .matches
            .iter()
            .find(|m| m.company.id == "google")
            .unwrap();
        assert_eq!(google.status, MatchStatus::Avoid);
        assert_eq!(
            google.reject_reason.as_deref(),
            Some("DSA skills below Google threshold")
        );
    }
}
