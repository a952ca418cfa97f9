//! The pointer-driven answer state machine
//!
//! Clicks and hovers arrive as raw track pixels and deterministically build
//! up a three-part answer: endpoint position, endpoint openness, and ray
//! direction. This is the only stateful part of the core; every transition
//! is observable by re-reading [`AnswerState`] and the machine performs no
//! I/O of its own.

pub mod state_machine;

pub use state_machine::{AnswerState, InteractionStateMachine, Phase};
