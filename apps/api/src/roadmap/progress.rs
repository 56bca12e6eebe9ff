use serde::{Deserialize, Serialize};

use crate::models::roadmap::{Roadmap, RoadmapWeek};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekProgress {
    pub week_number: u32,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapProgress {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub percent: f64,
    pub weeks: Vec<WeekProgress>,
}

impl Roadmap {
    /// Flips `is_completed` on the task with `task_id`.
    /// Returns false when no task has that id.
    pub fn toggle_task(&mut self, task_id: &str) -> bool {
        match self
            .weeks
            .iter_mut()
            .flat_map(|week| week.tasks.iter_mut())
            .find(|task| task.id == task_id)
        {
            Some(task) => {
                task.is_completed = !task.is_completed;
                true
            }
            None => false,
        }
    }
}

fn percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

fn week_progress(week: &RoadmapWeek) -> WeekProgress {
    let completed_tasks = week.tasks.iter().filter(|t| t.is_completed).count();
    WeekProgress {
        week_number: week.week_number,
        completed_tasks,
        total_tasks: week.tasks.len(),
        percent: percent(completed_tasks, week.tasks.len()),
    }
}

pub fn compute_progress(roadmap: &Roadmap) -> RoadmapProgress {
    let weeks: Vec<WeekProgress> = roadmap.weeks.iter().map(week_progress).collect();
    let completed_tasks = weeks.iter().map(|w| w.completed_tasks).sum();
    let total_tasks = weeks.iter().map(|w| w.total_tasks).sum();

    RoadmapProgress {
        completed_tasks,
        total_tasks,
        percent: percent(completed_tasks, total_tasks),
        weeks,
    }
}
