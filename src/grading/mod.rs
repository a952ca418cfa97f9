//! Answer checking and score bookkeeping
//!
//! The engine compares a committed answer against the active quiz and keeps
//! the running correct/attempt counters. An incomplete answer is not an
//! error: it grades as [`Verdict::Ungraded`] and leaves the counters alone.

pub mod engine;

pub use engine::{GradeReport, GradingEngine, ScoreState, Verdict};
