#![forbid(unsafe_code)]

//! Drag-start threshold detection.
//!
//! Only movement along the active axis counts. Perpendicular wobble during a
//! press never starts a drag, however large.

use dragsort_core::{Axis, Point};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_DRAG_THRESHOLD;

/// Per-axis movement that must be exceeded before a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_DRAG_THRESHOLD,
            vertical: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl Thresholds {
    #[must_use]
    pub const fn for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Whether travel from `origin` to `current` along `axis` is strictly greater
/// than the threshold for that axis.
#[must_use]
pub fn exceeded(origin: Point, current: Point, axis: Axis, thresholds: Thresholds) -> bool {
    current.delta_from(origin, axis).abs() > thresholds.for_axis(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn exact_threshold_does_not_start() {
        let t = Thresholds::default();
        assert!(!exceeded(p(10.0, 0.0), p(13.0, 0.0), Axis::Horizontal, t));
        assert!(!exceeded(p(10.0, 0.0), p(7.0, 0.0), Axis::Horizontal, t));
    }

    #[test]
    fn epsilon_past_threshold_starts() {
        let t = Thresholds::default();
        assert!(exceeded(p(10.0, 0.0), p(13.0 + 1e-9, 0.0), Axis::Horizontal, t));
        assert!(exceeded(p(0.0, 10.0), p(0.0, 6.9), Axis::Vertical, t));
    }

    #[test]
    fn perpendicular_motion_is_ignored() {
        let t = Thresholds::default();
        assert!(!exceeded(p(0.0, 0.0), p(0.0, 500.0), Axis::Horizontal, t));
        assert!(!exceeded(p(0.0, 0.0), p(-500.0, 1.0), Axis::Vertical, t));
    }

    #[test]
    fn per_axis_values_are_independent() {
        let t = Thresholds {
            horizontal: 1.0,
            vertical: 20.0,
        };
        assert!(exceeded(p(0.0, 0.0), p(2.0, 0.0), Axis::Horizontal, t));
        assert!(!exceeded(p(0.0, 0.0), p(0.0, 2.0), Axis::Vertical, t));
    }

    #[test]
    fn non_positive_threshold_disables_gating() {
        let zero = Thresholds {
            horizontal: 0.0,
            vertical: 0.0,
        };
        assert!(exceeded(p(0.0, 0.0), p(0.5, 0.0), Axis::Horizontal, zero));
        let negative = Thresholds {
            horizontal: -1.0,
            vertical: -1.0,
        };
        assert!(exceeded(p(4.0, 4.0), p(4.0, 4.0), Axis::Vertical, negative));
    }
}
