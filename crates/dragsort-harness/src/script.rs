#![forbid(unsafe_code)]

//! Deterministic pointer scripts.
//!
//! A [`PointerScript`] describes the path of a held pointer along one axis,
//! starting from the press origin. The cross-axis coordinate never changes.
//! Scripts compose:
//!
//! ```ignore
//! let trace = PointerScript::new(Point::new(50.0, 10.0), Axis::Horizontal)
//!     .sweep_by(300.0, 30)
//!     .jitter(4.0, 20, 7)
//!     .sweep_by(-300.0, 30)
//!     .released(0u32);
//! ```

use dragsort::DragInputTrace;
use dragsort_core::{Axis, Point, PointerInput};

/// xorshift64, seeded; zero seeds are bumped to one.
#[derive(Debug, Clone)]
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[-1.0, 1.0]`.
    fn next_signed_unit(&mut self) -> f64 {
        let unit = (self.next() >> 11) as f64 / (1u64 << 53) as f64;
        unit * 2.0 - 1.0
    }
}

/// A press origin plus the positions of every following move.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerScript {
    axis: Axis,
    origin: Point,
    moves: Vec<Point>,
}

impl PointerScript {
    #[must_use]
    pub fn new(origin: Point, axis: Axis) -> Self {
        Self {
            axis,
            origin,
            moves: Vec::new(),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Positions of every scripted move, in order.
    #[must_use]
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    /// Where the pointer currently is.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.moves.last().copied().unwrap_or(self.origin)
    }

    /// Signed distance of the cursor from the origin along the axis.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.cursor().delta_from(self.origin, self.axis)
    }

    /// Move to `along` (absolute, on the axis) in `steps` equal increments.
    #[must_use]
    pub fn sweep_to(mut self, along: f64, steps: usize) -> Self {
        let start = self.axis.component(self.cursor());
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let position = self.at(start + (along - start) * t);
            self.moves.push(position);
        }
        self
    }

    /// Move by `delta` relative to the cursor in `steps` equal increments.
    #[must_use]
    pub fn sweep_by(self, delta: f64, steps: usize) -> Self {
        let along = self.axis.component(self.cursor()) + delta;
        self.sweep_to(along, steps)
    }

    /// `count` moves scattered within `amplitude` of the cursor, then back on it.
    #[must_use]
    pub fn jitter(mut self, amplitude: f64, count: usize, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let anchor = self.axis.component(self.cursor());
        for _ in 0..count {
            let position = self.at(anchor + rng.next_signed_unit() * amplitude);
            self.moves.push(position);
        }
        let settled = self.at(anchor);
        self.moves.push(settled);
        self
    }

    /// Sweep out by `delta` and back again, `times` times.
    #[must_use]
    pub fn reversals(mut self, delta: f64, steps: usize, times: usize) -> Self {
        for _ in 0..times {
            self = self.sweep_by(delta, steps).sweep_by(-delta, steps);
        }
        self
    }

    /// Repeat the current position `count` times.
    #[must_use]
    pub fn hold(mut self, count: usize) -> Self {
        let cursor = self.cursor();
        self.moves.extend(std::iter::repeat_n(cursor, count));
        self
    }

    /// Press, every move, then a primary release at the cursor.
    #[must_use]
    pub fn released<I>(&self, item: I) -> DragInputTrace<I> {
        let mut trace = self.pressed(item);
        trace.push(None, PointerInput::release(self.cursor()));
        trace
    }

    /// Press, every move, then capture loss.
    #[must_use]
    pub fn aborted<I>(&self, item: I) -> DragInputTrace<I> {
        let mut trace = self.pressed(item);
        trace.push(None, PointerInput::CaptureLost);
        trace
    }

    /// Press and every move, with the session left open.
    #[must_use]
    pub fn pressed<I>(&self, item: I) -> DragInputTrace<I> {
        let mut trace = DragInputTrace::new();
        trace.push(Some(item), PointerInput::press(self.origin));
        for &position in &self.moves {
            trace.push(None, PointerInput::drag_to(position));
        }
        trace
    }

    fn at(&self, along: f64) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(along, self.origin.y),
            Axis::Vertical => Point::new(self.origin.x, along),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sweep_ends_on_target() {
        let script = PointerScript::new(Point::new(10.0, 5.0), Axis::Horizontal).sweep_to(40.0, 3);
        assert_eq!(
            script.moves(),
            &[
                Point::new(20.0, 5.0),
                Point::new(30.0, 5.0),
                Point::new(40.0, 5.0)
            ]
        );
        assert_eq!(script.delta(), 30.0);
    }

    #[test]
    fn vertical_sweep_keeps_x() {
        let script = PointerScript::new(Point::new(3.0, 0.0), Axis::Vertical).sweep_by(-20.0, 2);
        assert!(script.moves().iter().all(|p| p.x == 3.0));
        assert_eq!(script.cursor(), Point::new(3.0, -20.0));
    }

    #[test]
    fn jitter_is_bounded_deterministic_and_settles() {
        let a = PointerScript::new(Point::new(0.0, 0.0), Axis::Horizontal).jitter(2.0, 50, 42);
        let b = PointerScript::new(Point::new(0.0, 0.0), Axis::Horizontal).jitter(2.0, 50, 42);
        assert_eq!(a, b);
        assert!(a.moves().iter().all(|p| p.x.abs() <= 2.0));
        assert_eq!(a.cursor(), Point::new(0.0, 0.0));
        assert_eq!(a.moves().len(), 51);
    }

    #[test]
    fn reversals_return_to_start() {
        let script =
            PointerScript::new(Point::new(5.0, 5.0), Axis::Horizontal).reversals(100.0, 4, 3);
        assert_eq!(script.moves().len(), 24);
        assert_eq!(script.delta(), 0.0);
    }

    #[test]
    fn traces_bracket_moves() {
        let script = PointerScript::new(Point::new(0.0, 0.0), Axis::Horizontal)
            .sweep_by(10.0, 2)
            .hold(1);
        let released = script.released(7u32);
        assert_eq!(released.len(), 5);
        assert_eq!(released.frames[0].item, Some(7));
        assert_eq!(
            released.frames[4].input,
            PointerInput::release(Point::new(10.0, 0.0))
        );
        let aborted = script.aborted(7u32);
        assert_eq!(aborted.frames[4].input, PointerInput::CaptureLost);
        assert!(aborted.validate().is_ok());
    }
}
