#![forbid(unsafe_code)]

//! Test collaborators for dragsort.
//!
//! Everything here is deterministic and in-memory:
//!
//! | Type | Stands in for |
//! |------|---------------|
//! | [`StackGeometry`] | A stacked row or column with spacing and an optional realized window |
//! | [`RecordingFeedback`] | A visual layer that records every translation, marker, and stack order |
//! | [`RecordingSelection`] | A selection model that remembers every assignment |
//! | [`PointerScript`] | A user dragging: sweeps, jitter, reversals |

pub mod feedback;
pub mod geometry;
pub mod script;

pub use feedback::{FeedbackCall, RecordingFeedback, RecordingSelection};
pub use geometry::StackGeometry;
pub use script::PointerScript;
