use serde::{Deserialize, Serialize};

use crate::models::skills::SkillDimension;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier 1 (FAANG+)",
            Tier::Tier2 => "Tier 2 (Product)",
            Tier::Tier3 => "Tier 3 (Service)",
        }
    }
}

/// Fit-score weights. Expected to sum to 1.0; the catalog loader warns when
/// they don't but does not reject the company.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    pub dsa: f64,
    pub fundamentals: f64,
    pub projects: f64,
    pub experience: f64,
}

impl Weights {
    pub fn get(&self, dimension: SkillDimension) -> f64 {
        match dimension {
            SkillDimension::Dsa => self.dsa,
            SkillDimension::Fundamentals => self.fundamentals,
            SkillDimension::Projects => self.projects,
            SkillDimension::Experience => self.experience,
        }
    }

    pub fn total(&self) -> f64 {
        self.dsa + self.fundamentals + self.projects + self.experience
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    pub min_dsa: f64,
    pub min_fundamentals: f64,
    pub min_projects: f64,
    pub min_experience: f64,
    pub weights: Weights,
}

impl Requirements {
    pub fn minimum(&self, dimension: SkillDimension) -> f64 {
        match dimension {
            SkillDimension::Dsa => self.min_dsa,
            SkillDimension::Fundamentals => self.min_fundamentals,
            SkillDimension::Projects => self.min_projects,
            SkillDimension::Experience => self.min_experience,
        }
    }
}

/// Display-only; never read by the matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterviewPattern {
    pub rounds: Vec<String>,
    pub focus_areas: Vec<String>,
    pub typical_duration: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectOperator {
    Lt,
    Gt,
    Eq,
    Ne,
}

impl RejectOperator {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            RejectOperator::Lt => value < threshold,
            RejectOperator::Gt => value > threshold,
            RejectOperator::Eq => value == threshold,
            RejectOperator::Ne => value != threshold,
        }
    }
}

/// Hard disqualifier. Rule order within a company is significant: the first
/// rule that holds supplies the reject reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectRule {
    pub field: SkillDimension,
    pub operator: RejectOperator,
    pub value: f64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub requirements: Requirements,
    #[serde(default)]
    pub interview_pattern: InterviewPattern,
    #[serde(default)]
    pub reject_rules: Vec<RejectRule>,
}
