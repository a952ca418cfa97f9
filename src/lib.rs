//! # Numberline
//!
//! An interactive engine for graphing single-variable inequalities on a
//! number line and grading the result against a randomly generated target.
//!
//! ## Overview
//!
//! A learner answers an inequality prompt (e.g. `x ≥ 2`) by clicking on a
//! pixel track: the first click places the endpoint, the second click fixes
//! the ray direction, and a further click on the endpoint toggles it between
//! open and closed. Hovering previews the ray direction without committing
//! it. An explicit check compares the built-up answer against the target and
//! updates running score counters.
//!
//! ## Quick Start
//!
//! ```
//! use numberline::{DomainRange, Session, Verdict};
//! use numberline::quiz::QuizGenerator;
//!
//! let range = DomainRange::new(-6, 6).unwrap();
//! let mut session =
//!     Session::with_generator(range, 500.0, QuizGenerator::seeded(7)).unwrap();
//!
//! // Place an endpoint at the quiz bound, then fix the ray direction.
//! let bound_px = session.mapper().scale(session.quiz().bound);
//! session.click(bound_px);
//! session.click(bound_px + 120.0);
//!
//! let report = session.check();
//! assert_ne!(report.verdict, Verdict::Ungraded);
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`coords`]: Affine mapping between domain ticks and track pixels
//! - [`quiz`]: Random inequality target generation
//! - [`interaction`]: The click/hover state machine that builds the answer
//! - [`grading`]: Answer checking and score bookkeeping
//! - [`session`]: High-level facade wiring the pieces together, plus
//!   recordable event scripts
//! - [`app`]: CLI, configuration, and terminal rendering
//!
//! ## Event Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ pointer px  │───▶│ TrackMapper │───▶│ Interaction  │───▶│ AnswerState │
//! │ click/hover │    │ (unscale)   │    │ StateMachine │    │             │
//! └─────────────┘    └─────────────┘    └──────────────┘    └──────┬──────┘
//!                                                                  │ check
//!                                                                  ▼
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//! │  next quiz  │◀───│QuizGenerator│◀───│ ScoreState & │◀───│  Grading    │
//! │ + answer    │    │             │    │ GradeReport  │    │  Engine     │
//! │   reset     │    └─────────────┘    └──────────────┘    └─────────────┘
//! └─────────────┘
//! ```
//!
//! The core performs no I/O; a rendering collaborator polls the session
//! state after each event and draws whatever it likes.

pub mod app;
pub mod coords;
pub mod grading;
pub mod interaction;
pub mod quiz;
pub mod session;

// Re-export commonly used types
pub use coords::{DomainRange, TrackMapper};
pub use grading::{GradeReport, GradingEngine, ScoreState, Verdict};
pub use interaction::{AnswerState, InteractionStateMachine, Phase};
pub use quiz::{Direction, Openness, Operator, Quiz, QuizGenerator};
pub use session::{Script, Session, SessionEvent};

/// Result type alias for the numberline engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the numberline engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
