//! Grading engine
//!
//! An attempt is gradeable once both the endpoint and the ray direction are
//! committed. Grading reads only committed fields; the hover preview is
//! never consulted.

use crate::interaction::AnswerState;
use crate::quiz::{Direction, Openness, Quiz};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of checking an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Endpoint, openness, and direction all match the quiz
    Correct,
    /// A complete answer that does not match the quiz
    Incorrect,
    /// The answer was not complete enough to grade
    Ungraded,
}

/// Verdict plus the feedback line shown to the learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// The grading outcome
    pub verdict: Verdict,
    /// Feedback text for the banner
    pub message: String,
}

/// Process-lifetime correct/attempt counters
///
/// Mutated only by the grading engine; reset only by an explicit external
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreState {
    /// Correct attempts
    pub correct: u32,
    /// Graded attempts, correct or not
    pub attempts: u32,
}

impl ScoreState {
    /// Zero both counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Compares committed answers against quizzes
#[derive(Debug, Clone, Copy, Default)]
pub struct GradingEngine;

impl GradingEngine {
    /// Create a grading engine
    pub fn new() -> Self {
        Self
    }

    /// Grade an answer against the active quiz.
    ///
    /// Increments `attempts` for every complete answer and `correct` only
    /// when all three parts match. An incomplete answer returns
    /// [`Verdict::Ungraded`] without touching the counters.
    pub fn check(&self, quiz: &Quiz, answer: &AnswerState, score: &mut ScoreState) -> GradeReport {
        let (Some(point), Some(direction)) = (answer.selected_point, answer.ray_direction) else {
            return GradeReport {
                verdict: Verdict::Ungraded,
                message: "Place an endpoint and choose a ray direction before checking."
                    .to_string(),
            };
        };

        score.attempts += 1;

        let correct = point == quiz.bound
            && answer.endpoint == quiz.openness
            && direction == quiz.direction;

        debug!(
            point,
            endpoint = %answer.endpoint,
            %direction,
            quiz = %quiz.text,
            correct,
            "graded attempt"
        );

        if correct {
            score.correct += 1;
            GradeReport {
                verdict: Verdict::Correct,
                message: format!("Correct! That is the graph of {}.", quiz.text),
            }
        } else {
            GradeReport {
                verdict: Verdict::Incorrect,
                message: format!(
                    "Not quite. The graph of {} has {} endpoint at {} with the ray extending {}.",
                    quiz.text,
                    article(quiz.openness),
                    quiz.bound,
                    side(quiz.direction),
                ),
            }
        }
    }
}

fn article(openness: Openness) -> &'static str {
    match openness {
        Openness::Open => "an open",
        Openness::Closed => "a closed",
    }
}

fn side(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "to the left",
        Direction::Right => "to the right",
    }
}
