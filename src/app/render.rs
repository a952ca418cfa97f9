//! Terminal rendering of the session state
//!
//! The core only emits state; this module is the CLI's stand-in for a real
//! rendering collaborator. One character per tick: `o`/`#` for an
//! open/closed endpoint, `=` for the committed ray, `~` for the hover
//! preview, `.` for empty ticks.

use crate::coords::DomainRange;
use crate::interaction::AnswerState;
use crate::quiz::{Direction, Openness};
use crate::session::Session;

fn on_ray(tick: i64, anchor: i64, direction: Direction) -> bool {
    match direction {
        Direction::Left => tick < anchor,
        Direction::Right => tick > anchor,
    }
}

/// Render the answer as a one-line tick row
pub fn render_answer(range: DomainRange, answer: &AnswerState) -> String {
    let mut row = String::with_capacity(range.ticks().count());
    for tick in range.ticks() {
        let cell = if Some(tick) == answer.selected_point {
            match answer.endpoint {
                Openness::Open => 'o',
                Openness::Closed => '#',
            }
        } else if answer
            .selected_point
            .zip(answer.ray_direction)
            .is_some_and(|(anchor, d)| on_ray(tick, anchor, d))
        {
            '='
        } else if answer
            .selected_point
            .zip(answer.preview_direction)
            .is_some_and(|(anchor, d)| on_ray(tick, anchor, d))
        {
            '~'
        } else {
            '.'
        };
        row.push(cell);
    }
    row
}

/// Render the full status block: prompt, tick row, range, score, feedback
pub fn render_status(session: &Session) -> String {
    let range = session.mapper().range();
    let score = session.score();
    let mut out = format!(
        "Graph: {}\n{}\n[{} .. {}]  score {}/{}",
        session.quiz().text,
        render_answer(range, session.answer()),
        range.min,
        range.max,
        score.correct,
        score.attempts,
    );
    if let Some(report) = session.last_report() {
        out.push('\n');
        out.push_str(&report.message);
    }
    out
}
