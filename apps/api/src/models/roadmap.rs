use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::skills::Priority;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Dsa,
    Fundamentals,
    Projects,
    Softskills,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapTask {
    /// `task-N`, unique within one roadmap.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: Priority,
    pub estimated_hours: u32,
    pub resources: Vec<String>,
    /// Always false from the generator; only callers flip it.
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapWeek {
    pub week_number: u32,
    pub theme: String,
    pub tasks: Vec<RoadmapTask>,
    pub estimated_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub generated_at: DateTime<Utc>,
    pub total_weeks: u32,
    pub weeks: Vec<RoadmapWeek>,
    pub excluded_topics: Vec<String>,
}
