#![forbid(unsafe_code)]

//! Recorded pointer input and deterministic replay.
//!
//! A [`DragInputTrace`] captures what a host delivered to one container. Two
//! replays of the same trace against identical collaborators yield identical
//! transitions, which makes traces usable as regression fixtures.

use std::fmt;

use dragsort_core::{Point, PointerInput};
use serde::{Deserialize, Serialize};

use crate::behavior::ItemDragBehavior;
use crate::collaborator::{BackingSequence, FeedbackSink, GeometryProvider, SelectionSink};
use crate::session::{DragPhase, DragTransition};

/// Current on-disk schema for [`DragInputTrace`].
pub const DRAG_INPUT_TRACE_SCHEMA_VERSION: u16 = 1;

fn default_schema_version() -> u16 {
    DRAG_INPUT_TRACE_SCHEMA_VERSION
}

/// One recorded signal. `item` is present for presses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragInputFrame<I> {
    pub item: Option<I>,
    pub input: PointerInput,
}

/// Ordered pointer input for one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragInputTrace<I> {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    #[serde(default = "Vec::new")]
    pub frames: Vec<DragInputFrame<I>>,
}

impl<I> Default for DragInputTrace<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> DragInputTrace<I> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schema_version: DRAG_INPUT_TRACE_SCHEMA_VERSION,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, item: Option<I>, input: PointerInput) {
        self.frames.push(DragInputFrame { item, input });
    }

    /// Primary press on `item`.
    #[must_use]
    pub fn press(mut self, item: I, position: Point) -> Self {
        self.push(Some(item), PointerInput::press(position));
        self
    }

    /// Move with the primary button held.
    #[must_use]
    pub fn drag_to(mut self, position: Point) -> Self {
        self.push(None, PointerInput::drag_to(position));
        self
    }

    /// Primary release.
    #[must_use]
    pub fn release(mut self, position: Point) -> Self {
        self.push(None, PointerInput::release(position));
        self
    }

    #[must_use]
    pub fn capture_lost(mut self) -> Self {
        self.push(None, PointerInput::CaptureLost);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check schema version and frame well-formedness.
    pub fn validate(&self) -> Result<(), DragInputTraceError> {
        if self.schema_version != DRAG_INPUT_TRACE_SCHEMA_VERSION {
            return Err(DragInputTraceError::UnsupportedSchemaVersion {
                version: self.schema_version,
                expected: DRAG_INPUT_TRACE_SCHEMA_VERSION,
            });
        }
        if self.frames.is_empty() {
            return Err(DragInputTraceError::EmptyFrames);
        }
        for (index, frame) in self.frames.iter().enumerate() {
            if let Some(position) = frame.input.position()
                && !(position.x.is_finite() && position.y.is_finite())
            {
                return Err(DragInputTraceError::NonFinitePosition { index });
            }
            if matches!(frame.input, PointerInput::Press { .. }) && frame.item.is_none() {
                return Err(DragInputTraceError::PressWithoutItem { index });
            }
        }
        Ok(())
    }

    /// Replay every frame through `behavior`.
    pub fn replay<G, F, Q, S>(
        &self,
        behavior: &mut ItemDragBehavior<G, F, Q, S>,
    ) -> Result<DragReplayOutcome, DragInputTraceError>
    where
        I: Copy,
        G: GeometryProvider<Item = I>,
        F: FeedbackSink,
        Q: BackingSequence,
        S: SelectionSink,
    {
        self.validate()?;
        let transitions = self
            .frames
            .iter()
            .map(|frame| behavior.dispatch(frame.item, frame.input))
            .collect();
        Ok(DragReplayOutcome {
            transitions,
            final_phase: behavior.phase(),
        })
    }
}

/// Transitions produced by one replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragReplayOutcome {
    pub transitions: Vec<DragTransition>,
    pub final_phase: DragPhase,
}

/// Validation failures for recorded traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInputTraceError {
    UnsupportedSchemaVersion { version: u16, expected: u16 },
    EmptyFrames,
    NonFinitePosition { index: usize },
    PressWithoutItem { index: usize },
}

impl fmt::Display for DragInputTraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSchemaVersion { version, expected } => write!(
                f,
                "unsupported drag input trace schema version {version} (expected {expected})"
            ),
            Self::EmptyFrames => write!(f, "drag input trace must contain at least one frame"),
            Self::NonFinitePosition { index } => {
                write!(f, "drag input trace frame {index} has a non-finite position")
            }
            Self::PressWithoutItem { index } => {
                write!(f, "drag input trace frame {index} is a press without an item")
            }
        }
    }
}

impl std::error::Error for DragInputTraceError {}
