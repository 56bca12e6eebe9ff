// Dashboard: runs the whole Profile -> Scores -> Matches -> Roadmap pipeline and
// derives the advice and summary views from its output.

pub mod advice;
pub mod demo;
pub mod handlers;
pub mod pipeline;
pub mod summary;
