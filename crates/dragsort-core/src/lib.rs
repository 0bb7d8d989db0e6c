#![forbid(unsafe_code)]

//! Core: geometry primitives, pointer input vocabulary, and logging.
//!
//! # Role in dragsort
//! `dragsort-core` is the vocabulary layer. It owns the axis-aware geometry
//! types the engine reads from a container and the pointer input values a host
//! delivers to it. It holds no state and performs no layout.
//!
//! # How it fits in the system
//! The engine (`dragsort`) consumes [`geometry::ItemBounds`] and
//! [`event::PointerInput`] values and emits translations expressed as
//! [`geometry::Offset`]. Test collaborators in `dragsort-harness` build on the
//! same types, so every crate agrees on coordinates.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{PointerButton, PointerButtons, PointerInput};
pub use geometry::{Axis, ItemBounds, Offset, Point, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, trace_span, warn};
