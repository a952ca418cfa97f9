//! Inequality targets and their random generation
//!
//! A quiz is an immutable inequality the learner must graph. Direction and
//! endpoint openness are never chosen independently: both derive from one of
//! the four real inequality operators, so a generated target is always
//! internally consistent.

pub mod generator;
pub mod types;

pub use generator::{QuizGenerator, DEFAULT_VARIABLES};
pub use types::{Direction, Openness, Operator, Quiz};
