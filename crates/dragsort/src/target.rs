#![forbid(unsafe_code)]

//! Target index tracking.
//!
//! Collapses one move's displacements into a single candidate drop index:
//! the largest index among siblings that slid backward, otherwise the
//! smallest index among siblings that slid forward. A move that displaces
//! nothing keeps the previous candidate; only the end of the session clears it.

use crate::displacement::{Displacement, Shift};

/// Candidate drop index implied by one move's displacements, if any.
#[must_use]
pub fn collapse(displacements: &[Displacement]) -> Option<usize> {
    let backward = displacements
        .iter()
        .filter(|d| d.shift == Shift::Backward)
        .map(|d| d.index)
        .max();
    backward.or_else(|| {
        displacements
            .iter()
            .filter(|d| d.shift == Shift::Forward)
            .map(|d| d.index)
            .min()
    })
}

/// Running candidate for the active session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetTracker {
    candidate: Option<usize>,
}

impl TargetTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { candidate: None }
    }

    #[must_use]
    pub const fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    /// Fold one move into the candidate and return it.
    pub fn observe(&mut self, displacements: &[Displacement]) -> Option<usize> {
        if let Some(index) = collapse(displacements) {
            self.candidate = Some(index);
        }
        self.candidate
    }

    pub fn reset(&mut self) {
        self.candidate = None;
    }
}
