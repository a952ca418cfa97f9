//! CLI, configuration, and terminal rendering
//!
//! Everything here is the glue around the core: the core emits state, and
//! this layer decides how to ask for events and draw the result.

pub mod cli;
pub mod config;
pub mod render;
