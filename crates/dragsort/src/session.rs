#![forbid(unsafe_code)]

//! Drag session state and transition diagnostics.
//!
//! ```text
//! Idle -> Armed -> Dragging -> Idle (released: maybe commit)
//!           \          \-----> Idle (aborted: never commit)
//!            \---------------> Idle (released or aborted before the threshold)
//! ```
//!
//! A session exists from press to release/capture-loss. Every exit resets
//! all fields to neutral; nothing carries over into the next press.

use dragsort_core::Point;
use serde::{Deserialize, Serialize};

use crate::commit::CommitOutcome;
use crate::target::TargetTracker;

/// Lifecycle phase of a container's drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pressed, threshold not exceeded yet. Nothing moves.
    Armed,
    /// Threshold exceeded; siblings are being displaced.
    Dragging,
}

/// Transient per-container drag state.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    origin: Point,
    origin_index: Option<usize>,
    dragged_index: Option<usize>,
    target: TargetTracker,
    spacing: f64,
    started: bool,
    captured: bool,
    last_signed_delta: f64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            origin_index: None,
            dragged_index: None,
            target: TargetTracker::new(),
            spacing: 0.0,
            started: false,
            captured: false,
            last_signed_delta: 0.0,
        }
    }

    /// Begin a session at `origin` for the item at `index`.
    pub fn arm(&mut self, origin: Point, index: usize, spacing: f64) {
        *self = Self {
            origin,
            origin_index: Some(index),
            dragged_index: Some(index),
            spacing,
            captured: true,
            ..Self::new()
        };
    }

    /// Return every field to neutral.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match (self.captured, self.started) {
            (false, _) => DragPhase::Idle,
            (true, false) => DragPhase::Armed,
            (true, true) => DragPhase::Dragging,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.captured
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Index of the pressed item at press time.
    #[must_use]
    pub const fn origin_index(&self) -> Option<usize> {
        self.origin_index
    }

    /// Index of the dragged item as of the last evaluated move.
    #[must_use]
    pub const fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    #[must_use]
    pub const fn target_index(&self) -> Option<usize> {
        self.target.candidate()
    }

    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub const fn last_signed_delta(&self) -> f64 {
        self.last_signed_delta
    }

    pub(crate) fn start(&mut self) {
        self.started = true;
    }

    pub(crate) fn set_dragged_index(&mut self, index: usize) {
        self.dragged_index = Some(index);
    }

    pub(crate) fn record_delta(&mut self, delta: f64) {
        self.last_signed_delta = delta;
    }

    pub(crate) fn target_mut(&mut self) -> &mut TargetTracker {
        &mut self.target
    }
}

/// Why an event changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// The behavior is not attached to a container.
    Detached,
    /// The current phase does not accept this event.
    InvalidSession,
    ButtonNotAllowed,
    /// A move arrived without the primary button held.
    ButtonNotHeld,
    /// The pressed item is not a realized child of the container.
    ItemNotRealized,
    SessionAlreadyActive,
    ThresholdNotReached,
    /// Geometry for the dragged item was missing; the tick was skipped.
    CollaboratorUnavailable,
}

/// Effect of one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Armed {
        index: usize,
        origin: Point,
        spacing: f64,
    },
    DragStarted {
        index: usize,
        delta: f64,
        target_index: Option<usize>,
    },
    DragUpdated {
        index: usize,
        delta: f64,
        target_index: Option<usize>,
    },
    Released {
        outcome: CommitOutcome,
    },
    Aborted {
        index: Option<usize>,
    },
    Noop {
        reason: NoopReason,
    },
}

impl DragEffect {
    #[must_use]
    pub const fn noop(reason: NoopReason) -> Self {
        Self::Noop { reason }
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One state-machine step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragPhase,
    pub to: DragPhase,
    pub effect: DragEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_idle() {
        let session = DragSession::new();
        assert_eq!(session.phase(), DragPhase::Idle);
        assert!(!session.is_active());
        assert_eq!(session.target_index(), None);
    }

    #[test]
    fn arm_then_start_walks_phases() {
        let mut session = DragSession::new();
        session.arm(Point::new(4.0, 2.0), 3, 8.0);
        assert_eq!(session.phase(), DragPhase::Armed);
        assert_eq!(session.origin_index(), Some(3));
        assert_eq!(session.spacing(), 8.0);
        session.start();
        assert_eq!(session.phase(), DragPhase::Dragging);
    }

    #[test]
    fn arm_clears_previous_session_fields() {
        let mut session = DragSession::new();
        session.arm(Point::new(0.0, 0.0), 1, 0.0);
        session.start();
        session.record_delta(-12.0);
        session.arm(Point::new(9.0, 9.0), 0, 0.0);
        assert!(!session.started());
        assert_eq!(session.last_signed_delta(), 0.0);
    }

    #[test]
    fn reset_returns_everything_to_neutral() {
        let mut session = DragSession::new();
        session.arm(Point::new(1.0, 1.0), 2, -4.0);
        session.start();
        session.set_dragged_index(5);
        session.reset();
        assert_eq!(session, DragSession::new());
    }

    #[test]
    fn transition_serializes_with_effect_tag() {
        let transition = DragTransition {
            transition_id: 7,
            from: DragPhase::Armed,
            to: DragPhase::Armed,
            effect: DragEffect::noop(NoopReason::ThresholdNotReached),
        };
        let json = serde_json::to_string(&transition).expect("serialize transition");
        assert!(json.contains(r#""effect":"noop""#));
        assert!(json.contains(r#""reason":"threshold_not_reached""#));
    }
}
