//! Random quiz generation
//!
//! Draws a uniform bound, a uniform operator-table entry, and a uniform
//! display variable. The generator keeps no state across calls other than
//! its RNG, so consecutive quizzes are uncorrelated.

use crate::coords::DomainRange;
use crate::quiz::types::{Operator, Quiz};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Display variable alphabet used when none is configured
pub const DEFAULT_VARIABLES: &[char] = &['x', 'y', 'n', 'm', 'a', 'b'];

/// Produces random inequality targets
pub struct QuizGenerator {
    rng: StdRng,
    variables: Vec<char>,
}

impl QuizGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a deterministic generator for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            variables: DEFAULT_VARIABLES.to_vec(),
        }
    }

    /// Replace the display variable alphabet; rejects an empty set
    pub fn with_variables(mut self, variables: &[char]) -> crate::Result<Self> {
        if variables.is_empty() {
            return Err(crate::Error::Config(
                "variable alphabet must not be empty".to_string(),
            ));
        }
        self.variables = variables.to_vec();
        Ok(self)
    }

    /// Generate a fresh quiz with a bound inside the given range
    pub fn generate(&mut self, range: DomainRange) -> Quiz {
        let bound = self.rng.gen_range(range.min..=range.max);
        let operator = Operator::ALL[self.rng.gen_range(0..Operator::ALL.len())];
        let variable = self.variables[self.rng.gen_range(0..self.variables.len())];

        let quiz = Quiz::new(variable, operator, bound);
        debug!(text = %quiz.text, "generated quiz");
        quiz
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new()
    }
}
