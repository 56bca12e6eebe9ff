//! Roadmap Generator: turns aggregated skill gaps into an hour-budgeted,
//! week-by-week study plan.
//!
//! Flow: dedupe gaps → priority order → pick a content pool per gap →
//!       spend the global hour budget topic by topic → pack tasks into weeks →
//!       append the interview-prep week if the timeline still has room.
//!
//! Truncation is lossy on purpose: a topic that doesn't fit the remaining
//! budget ends that pool, and tasks packed past the final week are dropped.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::roadmap::{Roadmap, RoadmapTask, RoadmapWeek, TaskCategory};
use crate::models::skills::{Priority, SkillDimension, SkillGap, SkillScores};
use crate::roadmap::topics::{
    Topic, CN, DBMS, DSA_ADVANCED, DSA_BEGINNER, DSA_INTERMEDIATE, EXCLUDED_LOW_PRIORITY,
    EXCLUDED_SHORT_TIME, OOPS, OS, PROJECTS,
};

pub const INTERVIEW_PREP_THEME: &str = "Interview Preparation";

/// DSA score below which the beginner pool is used.
const DSA_BEGINNER_BELOW: f64 = 2.0;
/// DSA score below which the intermediate pool is used.
const DSA_INTERMEDIATE_BELOW: f64 = 3.5;

const EXCLUDED_SHORT_TIME_COUNT: usize = 3;
const EXCLUDED_LOW_PRIORITY_COUNT: usize = 2;

/// Content selected for one gap.
struct StudyPlan {
    theme: &'static str,
    category: TaskCategory,
    topics: Vec<&'static Topic>,
}

/// Generates a roadmap stamped with the current time.
pub fn generate_roadmap(
    skills: &SkillScores,
    gaps: &[SkillGap],
    timeline_weeks: u32,
    weekly_hours: u32,
) -> Roadmap {
    generate_roadmap_at(skills, gaps, timeline_weeks, weekly_hours, Utc::now())
}

/// Deterministic core of [`generate_roadmap`].
///
/// Zero `timeline_weeks` yields an empty roadmap; zero `weekly_hours` yields
/// no study tasks. Callers are expected to pass positive values.
pub fn generate_roadmap_at(
    skills: &SkillScores,
    gaps: &[SkillGap],
    timeline_weeks: u32,
    weekly_hours: u32,
    generated_at: DateTime<Utc>,
) -> Roadmap {
    let budget_hours = u64::from(timeline_weeks) * u64::from(weekly_hours);
    let mut used_hours = 0_u64;
    let mut current_week = 1_u32;
    let mut next_task_id = 1_u32;
    let mut weeks: Vec<RoadmapWeek> = Vec::new();

    for gap in prioritize_gaps(gaps) {
        if current_week > timeline_weeks {
            break;
        }

        let Some(plan) = select_study_plan(gap.skill, skills.dsa) else {
            continue;
        };

        let mut tasks = Vec::new();
        for topic in &plan.topics {
            let hours = u64::from(topic.hours);
            if used_hours + hours > budget_hours {
                break;
            }
            tasks.push(build_task(next_task_id, topic, plan.category, gap.priority));
            next_task_id += 1;
            used_hours += hours;
        }

        // Greedy weekly packing. Week numbers carry on across gaps.
        let mut week_tasks: Vec<RoadmapTask> = Vec::new();
        let mut week_hours = 0_u32;

        for task in tasks {
            if week_hours + task.estimated_hours > weekly_hours && !week_tasks.is_empty() {
                weeks.push(RoadmapWeek {
                    week_number: current_week,
                    theme: plan.theme.to_string(),
                    tasks: std::mem::take(&mut week_tasks),
                    estimated_hours: week_hours,
                });
                current_week += 1;
                week_hours = 0;

                if current_week > timeline_weeks {
                    break;
                }
            }

            week_hours += task.estimated_hours;
            week_tasks.push(task);
        }

        if !week_tasks.is_empty() && current_week <= timeline_weeks {
            weeks.push(RoadmapWeek {
                week_number: current_week,
                theme: plan.theme.to_string(),
                tasks: week_tasks,
                estimated_hours: week_hours,
            });
            current_week += 1;
        }
    }

    // Not charged against the hour budget.
    if current_week <= timeline_weeks {
        weeks.push(interview_prep_week(current_week, next_task_id));
    }

    Roadmap {
        generated_at,
        total_weeks: weeks.len() as u32,
        weeks,
        excluded_topics: excluded_topics(),
    }
}

/// Keeps the first gap per skill, then orders high → medium → low (stable).
fn prioritize_gaps(gaps: &[SkillGap]) -> Vec<&SkillGap> {
    let mut seen: HashSet<SkillDimension> = HashSet::new();
    let mut unique: Vec<&SkillGap> = gaps.iter().filter(|gap| seen.insert(gap.skill)).collect();
    unique.sort_by_key(|gap| gap.priority);
    unique
}

/// Picks the content pool for a gap. Experience has none: it can't be studied.
fn select_study_plan(skill: SkillDimension, current_dsa: f64) -> Option<StudyPlan> {
    match skill {
        SkillDimension::Dsa => {
            let topics = if current_dsa < DSA_BEGINNER_BELOW {
                DSA_BEGINNER.iter().chain(&DSA_INTERMEDIATE[..2]).collect()
            } else if current_dsa < DSA_INTERMEDIATE_BELOW {
                DSA_INTERMEDIATE.iter().chain(&DSA_ADVANCED[..2]).collect()
            } else {
                DSA_ADVANCED.iter().collect()
            };
            Some(StudyPlan {
                theme: "Data Structures & Algorithms",
                category: TaskCategory::Dsa,
                topics,
            })
        }
        SkillDimension::Fundamentals => Some(StudyPlan {
            theme: "Computer Science Fundamentals",
            category: TaskCategory::Fundamentals,
            topics: OS.iter().chain(CN).chain(DBMS).chain(OOPS).collect(),
        }),
        SkillDimension::Projects => Some(StudyPlan {
            theme: "Project Building",
            category: TaskCategory::Projects,
            topics: PROJECTS.iter().collect(),
        }),
        SkillDimension::Experience => None,
    }
}

fn build_task(id: u32, topic: &Topic, category: TaskCategory, priority: Priority) -> RoadmapTask {
    let description = match category {
        TaskCategory::Dsa => format!("Master {} with focused practice", topic.title),
        TaskCategory::Fundamentals => format!("Learn and revise {}", topic.title),
        TaskCategory::Projects => format!("Build and deploy {}", topic.title),
        TaskCategory::Softskills => topic.title.to_string(),
    };

    RoadmapTask {
        id: task_id(id),
        title: topic.title.to_string(),
        description,
        category,
        priority,
        estimated_hours: topic.hours,
        resources: topic.resources.iter().map(|r| r.to_string()).collect(),
        is_completed: false,
    }
}

fn task_id(n: u32) -> String {
    format!("task-{n}")
}

fn interview_prep_week(week_number: u32, first_task_id: u32) -> RoadmapWeek {
    let tasks = vec![
        RoadmapTask {
            id: task_id(first_task_id),
            title: "Mock Interviews".to_string(),
            description: "Practice with peers or platforms like Pramp".to_string(),
            category: TaskCategory::Softskills,
            priority: Priority::Medium,
            estimated_hours: 6,
            resources: vec![
                "Pramp".to_string(),
                "Interviewing.io".to_string(),
                "Peer Mock Sessions".to_string(),
            ],
            is_completed: false,
        },
        RoadmapTask {
            id: task_id(first_task_id + 1),
            title: "Resume & LinkedIn Polish".to_string(),
            description: "Update resume and LinkedIn with quantified achievements".to_string(),
            category: TaskCategory::Softskills,
            priority: Priority::High,
            estimated_hours: 4,
            resources: vec!["Resume Worded".to_string(), "LinkedIn Learning".to_string()],
            is_completed: false,
        },
    ];

    RoadmapWeek {
        week_number,
        theme: INTERVIEW_PREP_THEME.to_string(),
        estimated_hours: tasks.iter().map(|t| t.estimated_hours).sum(),
        tasks,
    }
}

/// Fixed advisory list; does not depend on the gaps.
pub fn excluded_topics() -> Vec<String> {
    EXCLUDED_SHORT_TIME
        .iter()
        .take(EXCLUDED_SHORT_TIME_COUNT)
        .chain(EXCLUDED_LOW_PRIORITY.iter().take(EXCLUDED_LOW_PRIORITY_COUNT))
        .map(|s| s.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::FundamentalsScore;
    use chrono::TimeZone;

    fn make_skills(dsa: f64) -> SkillScores {
        SkillScores {
            dsa,
            fundamentals: FundamentalsScore::new(2.0, 2.0, 2.0, 2.0),
            projects: 1.0,
            experience: 0.0,
            overall: 0.0,
        }
    }

    fn make_gap(skill: SkillDimension, priority: Priority) -> SkillGap {
        SkillGap {
            skill,
            current: 1.0,
            required: 3.0,
            gap: 2.0,
            priority,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
    }

    fn generate(skills: &SkillScores, gaps: &[SkillGap], weeks: u32, hours: u32) -> Roadmap {
        generate_roadmap_at(skills, gaps, weeks, hours, fixed_time())
    }

    fn week_hours(roadmap: &Roadmap) -> Vec<u32> {
        roadmap.weeks.iter().map(|w| w.estimated_hours).collect()
    }

    fn study_hours(roadmap: &Roadmap) -> u32 {
        roadmap
            .weeks
            .iter()
            .filter(|w| w.theme != INTERVIEW_PREP_THEME)
            .map(|w| w.estimated_hours)
            .sum()
    }

    #[test]
    fn test_no_gaps_yields_single_interview_week() {
        let roadmap = generate(&make_skills(3.0), &[], 16, 20);

        assert_eq!(roadmap.total_weeks, 1);
        assert_eq!(roadmap.weeks[0].week_number, 1);
        assert_eq!(roadmap.weeks[0].theme, INTERVIEW_PREP_THEME);
        assert_eq!(roadmap.weeks[0].estimated_hours, 10);
        assert_eq!(roadmap.weeks[0].tasks[0].id, "task-1");
        assert_eq!(roadmap.weeks[0].tasks[1].id, "task-2");
        assert_eq!(roadmap.weeks[0].tasks[1].priority, Priority::High);
    }

    #[test]
    fn test_zero_timeline_yields_empty_roadmap() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];
        let roadmap = generate(&make_skills(3.0), &gaps, 0, 20);
        assert_eq!(roadmap.total_weeks, 0);
        assert!(roadmap.weeks.is_empty());
        assert_eq!(roadmap.excluded_topics.len(), 5);
    }

    #[test]
    fn test_zero_weekly_hours_yields_no_study_tasks() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];
        let roadmap = generate(&make_skills(3.0), &gaps, 4, 0);
        assert_eq!(roadmap.total_weeks, 1);
        assert_eq!(roadmap.weeks[0].theme, INTERVIEW_PREP_THEME);
    }

    #[test]
    fn test_dsa_intermediate_pool_packed_greedily() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];
        let roadmap = generate(&make_skills(3.0), &gaps, 16, 20);

        // Pool: 10, 8, 8, 12, 12, 20, 15
        assert_eq!(week_hours(&roadmap), vec![18, 20, 12, 20, 15, 10]);
        assert_eq!(roadmap.total_weeks, 6);
        assert_eq!(roadmap.weeks[0].tasks[0].title, "Binary Search Mastery");
        assert_eq!(roadmap.weeks[5].theme, INTERVIEW_PREP_THEME);
        assert!(roadmap.weeks[..5]
            .iter()
            .all(|w| w.theme == "Data Structures & Algorithms"));
    }

    #[test]
    fn test_dsa_pool_tiers_follow_current_score() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];

        let beginner = generate(&make_skills(1.5), &gaps, 16, 20);
        assert_eq!(beginner.weeks[0].tasks[0].title, "Arrays & Strings Basics");

        let advanced = generate(&make_skills(3.5), &gaps, 16, 20);
        assert_eq!(advanced.weeks[0].tasks[0].title, "Dynamic Programming");
        let task_count: usize = advanced.weeks[..advanced.weeks.len() - 1]
            .iter()
            .map(|w| w.tasks.len())
            .sum();
        assert_eq!(task_count, 4);
    }

    #[test]
    fn test_budget_stops_pool_without_partial_tasks() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];
        let roadmap = generate(&make_skills(3.0), &gaps, 2, 20);

        // Budget 40: 10 + 8 + 8 + 12 = 38, next 12 does not fit.
        assert_eq!(week_hours(&roadmap), vec![18, 20]);
        assert_eq!(roadmap.total_weeks, 2);
        assert!(roadmap.weeks.iter().all(|w| w.theme != INTERVIEW_PREP_THEME));
    }

    #[test]
    fn test_tasks_past_final_week_are_dropped() {
        let gaps = vec![make_gap(SkillDimension::Dsa, Priority::High)];
        let roadmap = generate(&make_skills(1.0), &gaps, 2, 12);

        // Budget 24 admits 10, 8, 6; the 6h task would need week 3.
        assert_eq!(week_hours(&roadmap), vec![10, 8]);
        let titles: Vec<&str> = roadmap
            .weeks
            .iter()
            .flat_map(|w| &w.tasks)
            .map(|t| t.title.as_str())
            .collect();
        assert!(!titles.contains(&"Basic Sorting Algorithms"));
    }

    #[test]
    fn test_experience_gap_contributes_no_tasks() {
        let gaps = vec![make_gap(SkillDimension::Experience, Priority::High)];
        let roadmap = generate(&make_skills(3.0), &gaps, 8, 20);
        assert_eq!(roadmap.total_weeks, 1);
        assert_eq!(roadmap.weeks[0].theme, INTERVIEW_PREP_THEME);
    }

    #[test]
    fn test_fundamentals_uses_all_four_pools() {
        let gaps = vec![make_gap(SkillDimension::Fundamentals, Priority::Medium)];
        let roadmap = generate(&make_skills(3.0), &gaps, 16, 20);

        let tasks: Vec<&RoadmapTask> = roadmap
            .weeks
            .iter()
            .filter(|w| w.theme == "Computer Science Fundamentals")
            .flat_map(|w| &w.tasks)
            .collect();
        assert_eq!(tasks.len(), 14);
        assert_eq!(tasks[0].title, "Process & Threads");
        assert_eq!(tasks[13].title, "Design Patterns");
        assert!(tasks.iter().all(|t| t.category == TaskCategory::Fundamentals));
        assert!(tasks.iter().all(|t| t.priority == Priority::Medium));
        assert_eq!(study_hours(&roadmap), 58);
    }

    #[test]
    fn test_gaps_deduplicated_then_prioritized() {
        let gaps = vec![
            make_gap(SkillDimension::Dsa, Priority::Medium),
            make_gap(SkillDimension::Projects, Priority::High),
            make_gap(SkillDimension::Dsa, Priority::High),
        ];
        let roadmap = generate(&make_skills(3.0), &gaps, 40, 20);

        assert_eq!(roadmap.weeks[0].theme, "Project Building");
        let dsa_tasks: Vec<&RoadmapTask> = roadmap
            .weeks
            .iter()
            .flat_map(|w| &w.tasks)
            .filter(|t| t.category == TaskCategory::Dsa)
            .collect();
        assert_eq!(dsa_tasks.len(), 7);
        assert!(dsa_tasks.iter().all(|t| t.priority == Priority::Medium));
    }

    #[test]
    fn test_week_numbers_contiguous_across_gaps() {
        let gaps = vec![
            make_gap(SkillDimension::Dsa, Priority::High),
            make_gap(SkillDimension::Fundamentals, Priority::Medium),
            make_gap(SkillDimension::Projects, Priority::Low),
        ];
        let roadmap = generate(&make_skills(2.5), &gaps, 10, 15);

        for (index, week) in roadmap.weeks.iter().enumerate() {
            assert_eq!(week.week_number, index as u32 + 1);
            assert!(week.week_number <= 10);
            let sum: u32 = week.tasks.iter().map(|t| t.estimated_hours).sum();
            assert_eq!(sum, week.estimated_hours);
        }
        assert_eq!(roadmap.total_weeks as usize, roadmap.weeks.len());
        assert!(study_hours(&roadmap) <= 10 * 15);
    }

    #[test]
    fn test_task_ids_unique_and_incomplete() {
        let gaps = vec![
            make_gap(SkillDimension::Dsa, Priority::High),
            make_gap(SkillDimension::Projects, Priority::Medium),
        ];
        let roadmap = generate(&make_skills(1.0), &gaps, 20, 25);

        let mut ids = HashSet::new();
        for task in roadmap.weeks.iter().flat_map(|w| &w.tasks) {
            assert!(ids.insert(task.id.clone()), "duplicate id {}", task.id);
            assert!(!task.is_completed);
        }
    }

    #[test]
    fn test_budget_invariant_over_many_inputs() {
        let gaps = vec![
            make_gap(SkillDimension::Fundamentals, Priority::High),
            make_gap(SkillDimension::Dsa, Priority::High),
            make_gap(SkillDimension::Projects, Priority::Medium),
            make_gap(SkillDimension::Experience, Priority::Low),
        ];
        for timeline in 1..=12 {
            for hours in [5, 10, 15, 20, 40] {
                for dsa in [0.5, 2.5, 4.0] {
                    let roadmap = generate(&make_skills(dsa), &gaps, timeline, hours);
                    assert!(study_hours(&roadmap) <= timeline * hours);
                    assert!(roadmap.weeks.iter().all(|w| w.week_number <= timeline));
                }
            }
        }
    }

    #[test]
    fn test_excluded_topics_fixed() {
        let topics = excluded_topics();
        assert_eq!(topics.len(), 5);
        assert_eq!(topics[0], "Competitive Programming (CP) contests");
        assert_eq!(topics[3], "Blockchain development");
        assert_eq!(topics[4], "Game development");
    }

    #[test]
    fn test_generated_at_is_passed_through() {
        let roadmap = generate(&make_skills(3.0), &[], 4, 20);
        assert_eq!(roadmap.generated_at, fixed_time());
    }
}
