#![forbid(unsafe_code)]

//! Reorder commit.
//!
//! The only mutation the engine ever performs on the backing sequence: one
//! remove/insert pair, guarded by bounds checks against the sequence as it is
//! now (it may have changed size since the press).

use serde::{Deserialize, Serialize};

use crate::collaborator::{BackingSequence, SelectionSink};

/// Why a release did not move anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CommitSkipReason {
    /// The pointer never travelled past the drag threshold.
    NotStarted,
    /// No sibling was ever displaced, or the dragged index was never resolved.
    NoTarget,
    SameIndex,
    /// An index no longer fits the sequence.
    StaleIndex { index: usize, len: usize },
}

/// Result of finalizing a released session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommitOutcome {
    Moved { from: usize, to: usize },
    Skipped { reason: CommitSkipReason },
}

impl CommitOutcome {
    #[must_use]
    pub const fn skipped(reason: CommitSkipReason) -> Self {
        Self::Skipped { reason }
    }

    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Move the element at `from` to `to` and select it.
pub fn commit_reorder<Q, S>(
    from: usize,
    to: usize,
    sequence: &mut Q,
    selection: &mut S,
) -> CommitOutcome
where
    Q: BackingSequence + ?Sized,
    S: SelectionSink + ?Sized,
{
    if from == to {
        return CommitOutcome::skipped(CommitSkipReason::SameIndex);
    }
    let len = sequence.count();
    for index in [from, to] {
        if index >= len {
            return CommitOutcome::skipped(CommitSkipReason::StaleIndex { index, len });
        }
    }
    let Some(item) = sequence.remove_at(from) else {
        return CommitOutcome::skipped(CommitSkipReason::StaleIndex { index: from, len });
    };
    sequence.insert_at(to, item);
    selection.set_selected_index(to);
    CommitOutcome::Moved { from, to }
}
