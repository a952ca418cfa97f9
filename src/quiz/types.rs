//! Core types for inequality quizzes
//!
//! Defines the ray directions, endpoint openness, the fixed 4-way operator
//! table, and the immutable quiz value built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a solution ray extends from its endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward smaller values
    Left,
    /// Toward larger values
    Right,
}

impl Direction {
    /// Direction from a clicked tick relative to an anchor tick.
    ///
    /// A click exactly on the anchor resolves to `Right`; intent is
    /// ambiguous there and the tie is a defined boundary policy.
    pub fn toward(tick: i64, anchor: i64) -> Self {
        if tick < anchor {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Whether the endpoint itself belongs to the solution set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Openness {
    /// Excluded endpoint (hollow marker)
    #[default]
    Open,
    /// Included endpoint (filled marker)
    Closed,
}

impl Openness {
    /// The other openness value
    pub fn toggled(self) -> Self {
        match self {
            Openness::Open => Openness::Closed,
            Openness::Closed => Openness::Open,
        }
    }
}

impl fmt::Display for Openness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Openness::Open => write!(f, "open"),
            Openness::Closed => write!(f, "closed"),
        }
    }
}

/// The four inequality operators a quiz can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `>` — right-extending ray, open endpoint
    Greater,
    /// `<` — left-extending ray, open endpoint
    Less,
    /// `≥` — right-extending ray, closed endpoint
    GreaterOrEqual,
    /// `≤` — left-extending ray, closed endpoint
    LessOrEqual,
}

impl Operator {
    /// All operators, in table order
    pub const ALL: [Operator; 4] = [
        Operator::Greater,
        Operator::Less,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
    ];

    /// The printed inequality symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterOrEqual => "≥",
            Operator::LessOrEqual => "≤",
        }
    }

    /// Ray direction this operator requires
    pub fn direction(&self) -> Direction {
        match self {
            Operator::Greater | Operator::GreaterOrEqual => Direction::Right,
            Operator::Less | Operator::LessOrEqual => Direction::Left,
        }
    }

    /// Endpoint openness this operator requires
    pub fn openness(&self) -> Openness {
        match self {
            Operator::Greater | Operator::Less => Openness::Open,
            Operator::GreaterOrEqual | Operator::LessOrEqual => Openness::Closed,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable inequality target
///
/// Built once per question; replaced atomically together with an answer
/// reset when the learner moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Display variable symbol, used only for the prompt text
    pub variable: char,
    /// The inequality bound, always within the active domain range
    pub bound: i64,
    /// Required ray direction
    pub direction: Direction,
    /// Required endpoint openness
    pub openness: Openness,
    /// Human-readable prompt, e.g. `x ≥ 2`
    pub text: String,
}

impl Quiz {
    /// Build a quiz from an operator-table entry
    pub fn new(variable: char, operator: Operator, bound: i64) -> Self {
        Self {
            variable,
            bound,
            direction: operator.direction(),
            openness: operator.openness(),
            text: format!("{} {} {}", variable, operator.symbol(), bound),
        }
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
