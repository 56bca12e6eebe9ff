use serde::{Deserialize, Serialize};

use crate::matching::matcher::{CompanyMatch, MatchStatus};
use crate::models::skills::SkillScores;

/// Floor for the displayed prep estimate, in weeks.
const MIN_PREP_WEEKS: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadinessSummary {
    pub overall_score: f64,
    pub readiness_level: String,
    pub recommended_count: usize,
    pub prepare_count: usize,
    pub avoid_count: usize,
    pub estimated_prep_weeks: u32,
    /// Weakest area; the first listed wins ties.
    pub primary_focus: String,
}

pub fn readiness_level(overall: f64) -> &'static str {
    match overall {
        s if s >= 4.5 => "Elite Ready",
        s if s >= 4.0 => "Strong",
        s if s >= 3.0 => "Intermediate",
        s if s >= 2.0 => "Building Up",
        _ => "Getting Started",
    }
}

pub fn primary_focus(skills: &SkillScores) -> &'static str {
    let areas = [
        ("DSA", skills.dsa),
        ("CS Core", skills.fundamentals.average),
        ("Projects", skills.projects),
        ("Experience", skills.experience),
    ];
    areas
        .iter()
        .fold(areas[0], |lowest, &area| if area.1 < lowest.1 { area } else { lowest })
        .0
}

pub fn summarize(skills: &SkillScores, matches: &[CompanyMatch]) -> ReadinessSummary {
    let count = |status: MatchStatus| matches.iter().filter(|m| m.status == status).count();

    let estimated_prep_weeks = matches
        .iter()
        .map(|m| m.prep_time)
        .max()
        .unwrap_or(0)
        .max(MIN_PREP_WEEKS);

    ReadinessSummary {
        overall_score: skills.overall,
        readiness_level: readiness_level(skills.overall).to_string(),
        recommended_count: count(MatchStatus::Recommended),
        prepare_count: count(MatchStatus::Prepare),
        avoid_count: count(MatchStatus::Avoid),
        estimated_prep_weeks,
        primary_focus: primary_focus(skills).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::default_catalog;
    use crate::matching::matcher::match_all;
    use crate::models::skills::FundamentalsScore;

    fn make_skills(dsa: f64, fundamentals: f64, projects: f64, experience: f64) -> SkillScores {
        SkillScores {
            dsa,
            fundamentals: FundamentalsScore::new(fundamentals, fundamentals, fundamentals, fundamentals),
            projects,
            experience,
            overall: 0.0,
        }
    }

    #[test]
    fn test_readiness_levels() {
        assert_eq!(readiness_level(4.6), "Elite Ready");
        assert_eq!(readiness_level(4.0), "Strong");
        assert_eq!(readiness_level(3.2), "Intermediate");
        assert_eq!(readiness_level(2.0), "Building Up");
        assert_eq!(readiness_level(0.4), "Getting Started");
    }

    #[test]
    fn test_primary_focus_picks_lowest() {
        assert_eq!(primary_focus(&make_skills(3.0, 2.0, 4.0, 2.5)), "CS Core");
        assert_eq!(primary_focus(&make_skills(3.0, 3.0, 3.0, 1.0)), "Experience");
    }

    #[test]
    fn test_primary_focus_tie_keeps_first() {
        assert_eq!(primary_focus(&make_skills(1.0, 1.0, 1.0, 1.0)), "DSA");
    }

    #[test]
    fn test_prep_weeks_floor() {
        let summary = summarize(&make_skills(5.0, 5.0, 5.0, 5.0), &[]);
        assert_eq!(summary.estimated_prep_weeks, 4);
        assert_eq!(summary.recommended_count, 0);
    }

    #[test]
    fn test_counts_cover_all_matches() {
        let skills = make_skills(3.5, 3.0, 2.0, 1.0);
        let matches = match_all(&default_catalog(), &skills);
        let summary = summarize(&skills, &matches);

        assert_eq!(
            summary.recommended_count + summary.prepare_count + summary.avoid_count,
            matches.len()
        );
        let longest = matches.iter().map(|m| m.prep_time).max().unwrap();
        assert_eq!(summary.estimated_prep_weeks, longest.max(4));
    }
}
