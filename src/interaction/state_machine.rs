//! Click/hover state machine
//!
//! Three phases, one cycle:
//!
//! ```text
//!                    click (place endpoint)
//!   NoSelection ───────────────────────────▶ AwaitingDirection
//!        ▲                                         │
//!        │ click elsewhere                         │ click (fix ray)
//!        │ (full reset)                            ▼
//!        └──────────────────────────────── DirectionFixed ──┐
//!                                                 ▲         │ click on the
//!                                                 └─────────┘ endpoint
//!                                                   (toggle open/closed)
//! ```
//!
//! Hover only matters while awaiting a direction, where it sets an
//! ephemeral preview that grading never reads.

use crate::coords::TrackMapper;
use crate::quiz::{Direction, Openness};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Where the machine is in the three-click answer cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Nothing placed yet
    #[default]
    NoSelection,
    /// Endpoint placed, waiting for the ray direction
    AwaitingDirection,
    /// Endpoint and ray committed; endpoint clicks toggle openness
    DirectionFixed,
}

/// The answer being built up by pointer events
///
/// Owned exclusively by the state machine and reset whenever a new quiz
/// replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnswerState {
    /// Selected endpoint tick, if placed
    pub selected_point: Option<i64>,
    /// Endpoint openness; only an endpoint click in `DirectionFixed`
    /// changes it, only a full reset forces it back to `Open`
    pub endpoint: Openness,
    /// Committed ray direction, if fixed
    pub ray_direction: Option<Direction>,
    /// Hover-only preview of the direction a click would commit;
    /// never part of the graded answer
    pub preview_direction: Option<Direction>,
    /// Current phase of the answer cycle
    pub phase: Phase,
}

impl AnswerState {
    /// Whether the answer is complete enough to grade
    pub fn is_complete(&self) -> bool {
        self.selected_point.is_some() && self.ray_direction.is_some()
    }
}

/// Consumes pointer events against a [`TrackMapper`] and accumulates an
/// [`AnswerState`]
#[derive(Debug, Clone)]
pub struct InteractionStateMachine {
    mapper: TrackMapper,
    answer: AnswerState,
}

impl InteractionStateMachine {
    /// Create a machine in the initial `NoSelection` state
    pub fn new(mapper: TrackMapper) -> Self {
        Self {
            mapper,
            answer: AnswerState::default(),
        }
    }

    /// The mapper used to resolve pixels into ticks
    pub fn mapper(&self) -> &TrackMapper {
        &self.mapper
    }

    /// Read the current answer state
    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    /// Handle a click at a track pixel offset
    pub fn click(&mut self, px: f64) {
        let tick = self.mapper.unscale(px);
        match self.answer.phase {
            Phase::DirectionFixed if Some(tick) == self.answer.selected_point => {
                // Only path that changes openness
                self.answer.endpoint = self.answer.endpoint.toggled();
                debug!(tick, endpoint = %self.answer.endpoint, "endpoint toggled");
            }
            Phase::NoSelection => {
                self.answer.selected_point = Some(tick);
                self.answer.ray_direction = None;
                self.answer.preview_direction = None;
                self.answer.phase = Phase::AwaitingDirection;
                debug!(tick, "endpoint placed");
            }
            Phase::AwaitingDirection => {
                let anchor = self
                    .answer
                    .selected_point
                    .expect("endpoint is set outside NoSelection");
                let direction = Direction::toward(tick, anchor);
                self.answer.ray_direction = Some(direction);
                self.answer.preview_direction = None;
                self.answer.phase = Phase::DirectionFixed;
                debug!(tick, anchor, %direction, "ray direction fixed");
            }
            Phase::DirectionFixed => {
                // Third click away from the endpoint starts over
                debug!(tick, "click away from endpoint, starting over");
                self.reset();
            }
        }
    }

    /// Handle a hover at a track pixel offset.
    ///
    /// Only touches the preview while awaiting a direction; a no-op in any
    /// other phase. Idempotent, so high-frequency pointer movement may be
    /// throttled or coalesced by the caller without changing behavior.
    pub fn hover(&mut self, px: f64) {
        if self.answer.phase != Phase::AwaitingDirection {
            return;
        }
        let tick = self.mapper.unscale(px);
        let anchor = self
            .answer
            .selected_point
            .expect("endpoint is set outside NoSelection");
        let direction = Direction::toward(tick, anchor);
        trace!(tick, %direction, "hover preview");
        self.answer.preview_direction = Some(direction);
    }

    /// Full reset: clear the endpoint and both directions, openness back to
    /// `Open`, phase back to `NoSelection`. Always available; used when a
    /// new quiz replaces the old one.
    pub fn reset(&mut self) {
        self.answer = AnswerState::default();
    }
}
