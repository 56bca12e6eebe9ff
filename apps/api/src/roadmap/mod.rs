// Roadmap Generator: skill gaps + time budget -> week-by-week study plan.

pub mod generator;
pub mod handlers;
pub mod progress;
pub mod topics;
