use serde::{Deserialize, Serialize};

/// Self-assessed proficiency. DSA uses beginner..expert, the CS fundamentals
/// use none..advanced; both share one score table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    None,
    Beginner,
    Basic,
    Intermediate,
    Advanced,
    Expert,
    /// Anything the form layer sent that we don't recognise. Scores as 0.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceType {
    Internship,
    Fulltime,
    Freelance,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub branch: String,
    pub college: String,
    pub graduation_year: Option<i32>,
    pub cgpa: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub complexity: Complexity,
    pub has_deployment: bool,
    pub has_github: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub company: String,
    pub role: String,
    /// Months.
    pub duration: u32,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerGoals {
    pub target_roles: Vec<String>,
    pub target_companies: Vec<String>,
    pub timeline_months: u32,
    pub weekly_hours: u32,
}

/// Raw onboarding profile as submitted by the form layer.
///
/// Every field defaults so a partially filled form still scores; missing
/// levels land on `Level::Unknown` and contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub education: Education,
    pub dsa_level: Level,
    pub dsa_problems: u32,
    pub os_level: Level,
    pub cn_level: Level,
    pub dbms_level: Level,
    pub oops_level: Level,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub goals: CareerGoals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_level_deserializes_to_unknown() {
        let level: Level = serde_json::from_value(json!("guru")).unwrap();
        assert_eq!(level, Level::Unknown);
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let profile: Profile = serde_json::from_value(json!({
            "dsa_level": "advanced",
            "projects": [{ "name": "Chat", "complexity": "intermediate" }],
            "experiences": [{ "type": "contract", "duration": 6 }]
        }))
        .unwrap();

        assert_eq!(profile.dsa_level, Level::Advanced);
        assert_eq!(profile.os_level, Level::Unknown);
        assert_eq!(profile.dsa_problems, 0);
        assert_eq!(profile.projects[0].complexity, Complexity::Intermediate);
        assert!(!profile.projects[0].has_deployment);
        assert_eq!(profile.experiences[0].kind, ExperienceType::Other);
        assert_eq!(profile.goals.timeline_months, 0);
    }
}
