#![forbid(unsafe_code)]

//! Drag-to-reorder decision engine.
//!
//! A user presses an item inside a container, drags it along one axis, sees
//! siblings shift to make room, and releases to commit a new ordering. This
//! crate decides all of that from geometry alone:
//!
//! - [`threshold`] gates drag start on movement along the active axis,
//! - [`displacement`] resolves how far each sibling shifts per move,
//! - [`target`] collapses those shifts into one drop index,
//! - [`commit`] performs the single remove/insert on release, and
//! - [`behavior`] ties them into a per-container session state machine.
//!
//! Rendering, hit-testing, and data ownership stay with the host, which lends
//! the engine the collaborators declared in [`collaborator`].
//!
//! # Example
//!
//! ```ignore
//! let mut behavior = ItemDragBehavior::new(DragConfig::default(), geometry, feedback, items)?;
//! behavior.attach();
//! behavior.dispatch(Some(item), PointerInput::press(origin));
//! behavior.dispatch(None, PointerInput::drag_to(cursor));
//! let transition = behavior.dispatch(None, PointerInput::release(cursor));
//! ```

pub mod behavior;
pub mod collaborator;
pub mod commit;
pub mod config;
pub mod displacement;
pub mod session;
pub mod shared;
pub mod target;
pub mod threshold;
pub mod trace;

pub use behavior::ItemDragBehavior;
pub use collaborator::{
    BackingSequence, FeedbackSink, GeometryProvider, NoSelection, SelectionSink,
};
pub use commit::{CommitOutcome, CommitSkipReason, commit_reorder};
pub use config::{DEFAULT_DRAG_THRESHOLD, DragConfig, DragConfigError};
pub use displacement::{Displacement, DraggedProjection, Shift};
pub use session::{DragEffect, DragPhase, DragSession, DragTransition, NoopReason};
pub use shared::SharedDragBehavior;
pub use target::TargetTracker;
pub use threshold::Thresholds;
pub use trace::{
    DRAG_INPUT_TRACE_SCHEMA_VERSION, DragInputFrame, DragInputTrace, DragInputTraceError,
    DragReplayOutcome,
};

pub use dragsort_core::{
    Axis, ItemBounds, Offset, Point, PointerButton, PointerButtons, PointerInput, Rect, Size,
};
