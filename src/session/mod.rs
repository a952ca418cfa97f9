//! High-level quiz session
//!
//! Wires the mapper, state machine, generator, and grading engine into the
//! single-threaded surface an event-driven UI talks to: forward pointer
//! events in, poll the state back out. Also provides recordable event
//! scripts so a whole interaction can be saved, replayed, and asserted on.

pub mod script;

pub use script::{Script, SessionEvent};

use crate::coords::{DomainRange, TrackMapper};
use crate::grading::{GradeReport, GradingEngine, ScoreState};
use crate::interaction::{AnswerState, InteractionStateMachine};
use crate::quiz::{Quiz, QuizGenerator};
use tracing::{debug, warn};

/// One learner's quiz session: an active quiz, the answer being built, and
/// the running score.
///
/// All events are handled synchronously; there is no sharing across
/// concurrent sessions.
pub struct Session {
    machine: InteractionStateMachine,
    generator: QuizGenerator,
    engine: GradingEngine,
    score: ScoreState,
    quiz: Quiz,
    last_report: Option<GradeReport>,
}

impl Session {
    /// Configure a session and generate its first quiz.
    ///
    /// Fails only on bad geometry (inverted range, non-positive width).
    pub fn new(range: DomainRange, track_width_px: f64) -> crate::Result<Self> {
        Self::with_generator(range, track_width_px, QuizGenerator::new())
    }

    /// Like [`Session::new`] but with a caller-supplied generator, typically
    /// seeded for reproducible quiz sequences.
    pub fn with_generator(
        range: DomainRange,
        track_width_px: f64,
        mut generator: QuizGenerator,
    ) -> crate::Result<Self> {
        let mapper = TrackMapper::new(range, track_width_px)?;
        let quiz = generator.generate(range);
        Ok(Self {
            machine: InteractionStateMachine::new(mapper),
            generator,
            engine: GradingEngine::new(),
            score: ScoreState::default(),
            quiz,
            last_report: None,
        })
    }

    /// The active quiz
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The answer state as built so far
    pub fn answer(&self) -> &AnswerState {
        self.machine.answer()
    }

    /// Running score counters
    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// The report from the most recent check, if any since the last quiz
    pub fn last_report(&self) -> Option<&GradeReport> {
        self.last_report.as_ref()
    }

    /// The pixel/tick mapper in use
    pub fn mapper(&self) -> &TrackMapper {
        self.machine.mapper()
    }

    /// Forward a click at a track pixel offset
    pub fn click(&mut self, px: f64) {
        self.machine.click(px);
    }

    /// Forward a hover at a track pixel offset
    pub fn hover(&mut self, px: f64) {
        self.machine.hover(px);
    }

    /// Grade the current answer against the active quiz
    pub fn check(&mut self) -> GradeReport {
        let report = self.engine.check(&self.quiz, self.machine.answer(), &mut self.score);
        self.last_report = Some(report.clone());
        report
    }

    /// Replace the quiz and reset the answer state in one step
    pub fn next(&mut self) -> &Quiz {
        self.quiz = self.generator.generate(self.mapper().range());
        self.machine.reset();
        self.last_report = None;
        debug!(quiz = %self.quiz.text, "advanced to next quiz");
        &self.quiz
    }

    /// Zero the score counters; everything else is untouched
    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    /// Discard the answer in progress without touching the quiz or score.
    /// Available from any phase.
    pub fn reset_answer(&mut self) {
        self.machine.reset();
    }

    /// Apply one recorded event, returning the grade report if the event
    /// was a check
    pub fn apply(&mut self, event: SessionEvent) -> Option<GradeReport> {
        match event {
            SessionEvent::Click { px } => {
                self.click(px);
                None
            }
            SessionEvent::Hover { px } => {
                self.hover(px);
                None
            }
            SessionEvent::Check => Some(self.check()),
            SessionEvent::Next => {
                self.next();
                None
            }
        }
    }

    /// Run a whole script through this session, producing one transcript
    /// line per event
    pub fn replay(&mut self, script: &Script) -> Vec<String> {
        if script.is_empty() {
            warn!(name = %script.name, "replaying an empty script");
        }
        let mut transcript = Vec::with_capacity(script.len());
        for event in &script.events {
            let line = match *event {
                SessionEvent::Click { px } => {
                    self.click(px);
                    format!("click {:.1}px -> {:?}", px, self.answer().phase)
                }
                SessionEvent::Hover { px } => {
                    self.hover(px);
                    format!("hover {:.1}px -> preview {:?}", px, self.answer().preview_direction)
                }
                SessionEvent::Check => {
                    let report = self.check();
                    format!("check -> {:?}: {}", report.verdict, report.message)
                }
                SessionEvent::Next => {
                    self.next();
                    format!("next -> {}", self.quiz.text)
                }
            };
            transcript.push(line);
        }
        transcript
    }
}
