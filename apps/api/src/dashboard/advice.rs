use serde::{Deserialize, Serialize};

use crate::matching::matcher::{CompanyMatch, MatchStatus};
use crate::models::roadmap::Roadmap;
use crate::models::skills::SkillScores;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Company,
    Skill,
    Approach,
}

/// One "what not to do" entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advice {
    pub kind: AdviceKind,
    pub title: String,
    pub reason: String,
}

const MAX_COMPANY_ADVICE: usize = 2;
const MAX_SKIP_ADVICE: usize = 2;
/// Below this on both DSA and fundamentals, system design is premature.
const SYSTEM_DESIGN_READY_FROM: f64 = 3.0;

/// Builds the negative-advice list: companies to hold off on, topics to skip,
/// and approaches that waste time at the current level.
pub fn build_advice(matches: &[CompanyMatch], roadmap: &Roadmap, skills: &SkillScores) -> Vec<Advice> {
    let mut advice: Vec<Advice> = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Avoid)
        .take(MAX_COMPANY_ADVICE)
        .map(|m| {
            let focus = m
                .gaps
                .first()
                .map(|g| g.skill.label())
                .unwrap_or("Multiple skills");
            Advice {
                kind: AdviceKind::Company,
                title: format!("Don't apply to {} yet", m.company.name),
                reason: format!(
                    "{focus} needs significant improvement. Focus on fundamentals first."
                ),
            }
        })
        .collect();

    advice.extend(
        roadmap
            .excluded_topics
            .iter()
            .take(MAX_SKIP_ADVICE)
            .map(|topic| Advice {
                kind: AdviceKind::Skill,
                title: format!("Skip {topic}"),
                reason: "Low ROI for your timeline. Focus on core interview topics instead."
                    .to_string(),
            }),
    );

    if skills.dsa < SYSTEM_DESIGN_READY_FROM
        && skills.fundamentals.average < SYSTEM_DESIGN_READY_FROM
    {
        advice.push(Advice {
            kind: AdviceKind::Approach,
            title: "Don't jump to system design".to_string(),
            reason: "Master DSA and CS fundamentals first. System design comes later.".to_string(),
        });
    }

    advice
}
