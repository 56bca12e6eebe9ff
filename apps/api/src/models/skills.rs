use std::fmt;

use serde::{Deserialize, Serialize};

/// The four scored skill dimensions. Reject rules, gaps and roadmap pools all
/// key off this enum rather than field names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillDimension {
    Dsa,
    Fundamentals,
    Projects,
    Experience,
}

impl SkillDimension {
    pub const ALL: [SkillDimension; 4] = [
        SkillDimension::Dsa,
        SkillDimension::Fundamentals,
        SkillDimension::Projects,
        SkillDimension::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillDimension::Dsa => "DSA",
            SkillDimension::Fundamentals => "CS Fundamentals",
            SkillDimension::Projects => "Projects",
            SkillDimension::Experience => "Experience",
        }
    }
}

impl fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declaration order is the sort order: high sorts first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Maps a company's weight for a dimension to the priority of a gap on it.
    pub fn from_weight(weight: f64) -> Self {
        if weight >= 0.3 {
            Priority::High
        } else if weight >= 0.2 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FundamentalsScore {
    pub os: f64,
    pub cn: f64,
    pub dbms: f64,
    pub oops: f64,
    /// Unrounded mean of the four above.
    pub average: f64,
}

impl FundamentalsScore {
    pub fn new(os: f64, cn: f64, dbms: f64, oops: f64) -> Self {
        Self {
            os,
            cn,
            dbms,
            oops,
            average: (os + cn + dbms + oops) / 4.0,
        }
    }
}

/// Normalised 0–5 skill profile produced by the scorer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillScores {
    pub dsa: f64,
    pub fundamentals: FundamentalsScore,
    pub projects: f64,
    pub experience: f64,
    pub overall: f64,
}

impl SkillScores {
    /// Current value on a dimension. Fundamentals resolve to their average.
    pub fn get(&self, dimension: SkillDimension) -> f64 {
        match dimension {
            SkillDimension::Dsa => self.dsa,
            SkillDimension::Fundamentals => self.fundamentals.average,
            SkillDimension::Projects => self.projects,
            SkillDimension::Experience => self.experience,
        }
    }
}

/// One unmet company requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGap {
    pub skill: SkillDimension,
    pub current: f64,
    pub required: f64,
    pub gap: f64,
    pub priority: Priority,
}

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
