//! Coordinate mapping between the number line and the pixel track
//!
//! The widget receives raw pointer positions in track pixels and reasons
//! about integer ticks on a bounded number line. [`TrackMapper`] is the
//! bidirectional affine transform between the two, snapping to the nearest
//! tick on the inverse direction.

pub mod mapper;

pub use mapper::{DomainRange, TrackMapper};
