#![forbid(unsafe_code)]

//! Recording collaborators.
//!
//! [`RecordingFeedback`] keeps both the latest value per index (what a user
//! would currently see) and an ordered call log. The log serializes to JSONL:
//!
//! ```json
//! {"call":"translation","index":1,"offset":{"x":-110.0,"y":0.0}}
//! {"call":"marker","index":0,"dragging":false}
//! {"call":"stack_order","index":2,"order":0}
//! ```

use std::collections::BTreeMap;

use dragsort::{FeedbackSink, SelectionSink};
use dragsort_core::Offset;
use serde::Serialize;

/// One recorded feedback call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum FeedbackCall {
    Translation { index: usize, offset: Offset },
    Marker { index: usize, dragging: bool },
    StackOrder { index: usize, order: i32 },
}

/// Feedback sink that remembers everything it was told.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    translations: BTreeMap<usize, Offset>,
    markers: BTreeMap<usize, bool>,
    stack_orders: BTreeMap<usize, i32>,
    calls: Vec<FeedbackCall>,
}

impl RecordingFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current translation of `index`; untouched items are at rest.
    #[must_use]
    pub fn translation(&self, index: usize) -> Offset {
        self.translations.get(&index).copied().unwrap_or(Offset::ZERO)
    }

    #[must_use]
    pub fn marker(&self, index: usize) -> bool {
        self.markers.get(&index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn stack_order(&self, index: usize) -> i32 {
        self.stack_orders.get(&index).copied().unwrap_or(0)
    }

    /// Indices currently carrying a non-zero translation.
    #[must_use]
    pub fn displaced(&self) -> Vec<usize> {
        self.translations
            .iter()
            .filter(|(_, offset)| !offset.is_zero())
            .map(|(&index, _)| index)
            .collect()
    }

    /// True when no index carries a translation, drag marker, or stack order.
    #[must_use]
    pub fn all_neutral(&self) -> bool {
        self.translations.values().all(|o| o.is_zero())
            && self.markers.values().all(|&m| !m)
            && self.stack_orders.values().all(|&o| o == 0)
    }

    /// Indices that were ever touched by any call.
    #[must_use]
    pub fn touched(&self) -> Vec<usize> {
        let mut touched: Vec<usize> = self
            .translations
            .keys()
            .chain(self.markers.keys())
            .chain(self.stack_orders.keys())
            .copied()
            .collect();
        touched.sort_unstable();
        touched.dedup();
        touched
    }

    #[must_use]
    pub fn calls(&self) -> &[FeedbackCall] {
        &self.calls
    }

    /// Forget the call log, keeping current values.
    pub fn clear_log(&mut self) {
        self.calls.clear();
    }

    /// The call log as newline-delimited JSON.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        self.calls
            .iter()
            .filter_map(|call| serde_json::to_string(call).ok())
            .map(|line| line + "\n")
            .collect()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn set_translation(&mut self, index: usize, offset: Offset) {
        self.translations.insert(index, offset);
        self.calls.push(FeedbackCall::Translation { index, offset });
    }

    fn set_drag_marker(&mut self, index: usize, dragging: bool) {
        self.markers.insert(index, dragging);
        self.calls.push(FeedbackCall::Marker { index, dragging });
    }

    fn set_stack_order(&mut self, index: usize, order: i32) {
        self.stack_orders.insert(index, order);
        self.calls.push(FeedbackCall::StackOrder { index, order });
    }
}

/// Selection model that keeps every assigned index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSelection {
    history: Vec<usize>,
}

impl RecordingSelection {
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.history.last().copied()
    }

    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }
}

impl SelectionSink for RecordingSelection {
    fn set_selected_index(&mut self, index: usize) {
        self.history.push(index);
    }
}
