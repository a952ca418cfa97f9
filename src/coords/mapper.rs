//! Tick/pixel affine mapping with snapping
//!
//! Both directions are total: `scale` is defined for every in-range tick,
//! and `unscale` clamps so that any pixel, however far outside the track,
//! resolves to a valid tick. Bad geometry (inverted range, non-positive
//! track width) is rejected at construction, never at call time.

use serde::{Deserialize, Serialize};

/// Inclusive integer range of valid ticks on the number line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRange {
    /// Smallest tick (inclusive)
    pub min: i64,
    /// Largest tick (inclusive)
    pub max: i64,
}

impl DomainRange {
    /// Create a range, rejecting `min >= max`
    pub fn new(min: i64, max: i64) -> crate::Result<Self> {
        if min >= max {
            return Err(crate::Error::Config(format!(
                "domain range must satisfy min < max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Number of unit intervals between min and max
    pub fn span(&self) -> i64 {
        self.max - self.min
    }

    /// Whether a tick lies within the range
    pub fn contains(&self, tick: i64) -> bool {
        tick >= self.min && tick <= self.max
    }

    /// Iterate all ticks from min to max inclusive
    pub fn ticks(&self) -> impl Iterator<Item = i64> {
        self.min..=self.max
    }
}

/// Affine transform between domain ticks and track pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMapper {
    range: DomainRange,
    width_px: f64,
}

impl TrackMapper {
    /// Create a mapper over a validated range and a positive track width
    pub fn new(range: DomainRange, width_px: f64) -> crate::Result<Self> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "track width must be a positive finite pixel count, got {}",
                width_px
            )));
        }
        Ok(Self { range, width_px })
    }

    /// The domain range this mapper covers
    pub fn range(&self) -> DomainRange {
        self.range
    }

    /// Track width in pixels
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Map an in-range tick to its pixel offset on the track
    pub fn scale(&self, tick: i64) -> f64 {
        (tick - self.range.min) as f64 / self.range.span() as f64 * self.width_px
    }

    /// Map a pixel offset to the nearest tick, clamped into the range.
    ///
    /// Total over all finite and non-finite inputs: out-of-track pixels
    /// resolve to the nearest boundary tick.
    pub fn unscale(&self, px: f64) -> i64 {
        let raw = (px / self.width_px * self.range.span() as f64 + self.range.min as f64).round();
        // NaN casts to 0 and is then clamped like any other stray input
        (raw as i64).clamp(self.range.min, self.range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> TrackMapper {
        TrackMapper::new(DomainRange::new(-6, 6).unwrap(), 500.0).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert!(DomainRange::new(5, 5).is_err());
        assert!(DomainRange::new(6, -6).is_err());
        assert!(DomainRange::new(-6, 6).is_ok());
    }

    #[test]
    fn test_mapper_rejects_bad_width() {
        let range = DomainRange::new(0, 10).unwrap();
        assert!(TrackMapper::new(range, 0.0).is_err());
        assert!(TrackMapper::new(range, -1.0).is_err());
        assert!(TrackMapper::new(range, f64::NAN).is_err());
        assert!(TrackMapper::new(range, f64::INFINITY).is_err());
        assert!(TrackMapper::new(range, 1.0).is_ok());
    }

    #[test]
    fn test_scale_endpoints() {
        let m = mapper();
        assert_eq!(m.scale(-6), 0.0);
        assert_eq!(m.scale(6), 500.0);
        assert_eq!(m.scale(0), 250.0);
    }

    #[test]
    fn test_unscale_is_exact_inverse_on_ticks() {
        let m = mapper();
        for tick in m.range().ticks() {
            assert_eq!(m.unscale(m.scale(tick)), tick, "tick {}", tick);
        }
    }

    #[test]
    fn test_unscale_snaps_to_nearest_tick() {
        let m = mapper();
        // One tick is 500/12 ≈ 41.67px; just under half a tick still snaps back
        let tick_px = 500.0 / 12.0;
        assert_eq!(m.unscale(250.0 + tick_px * 0.49), 0);
        assert_eq!(m.unscale(250.0 + tick_px * 0.51), 1);
    }

    #[test]
    fn test_unscale_clamps_out_of_track() {
        let m = mapper();
        assert_eq!(m.unscale(-10.0), -6);
        assert_eq!(m.unscale(-1e9), -6);
        assert_eq!(m.unscale(510.0), 6);
        assert_eq!(m.unscale(1e9), 6);
    }

    #[test]
    fn test_unscale_total_on_non_finite() {
        let m = mapper();
        assert!(m.range().contains(m.unscale(f64::NAN)));
        assert_eq!(m.unscale(f64::INFINITY), 6);
        assert_eq!(m.unscale(f64::NEG_INFINITY), -6);
    }

    #[test]
    fn test_unscale_always_in_range() {
        let m = mapper();
        let mut px = -700.0;
        while px <= 1200.0 {
            assert!(m.range().contains(m.unscale(px)), "px {}", px);
            px += 7.3;
        }
    }

    #[test]
    fn test_asymmetric_range() {
        let m = TrackMapper::new(DomainRange::new(3, 17).unwrap(), 280.0).unwrap();
        assert_eq!(m.scale(3), 0.0);
        assert_eq!(m.scale(17), 280.0);
        for tick in m.range().ticks() {
            assert_eq!(m.unscale(m.scale(tick)), tick);
        }
    }

    #[test]
    fn test_range_span_and_contains() {
        let range = DomainRange::new(-6, 6).unwrap();
        assert_eq!(range.span(), 12);
        assert!(range.contains(-6));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert_eq!(range.ticks().count(), 13);
    }
}
