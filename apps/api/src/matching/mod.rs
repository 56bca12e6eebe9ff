// Matcher: skill scores x company catalog -> ranked fit assessments with gaps.

pub mod catalog;
pub mod handlers;
pub mod matcher;
