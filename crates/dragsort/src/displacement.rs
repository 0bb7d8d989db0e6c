#![forbid(unsafe_code)]

//! Sibling displacement.
//!
//! Given where the dragged item would be if it followed the pointer, decide
//! for every other realized sibling whether it must slide out of the way.
//! Each sibling is judged on its own, from scratch, on every move: a sibling
//! that no longer overlaps drops back to neutral even if it was shifted on a
//! previous move.
//!
//! The midpoint a trailing sibling is compared against moves by half the
//! spacing when spacing is negative (overlapping layouts). The midpoint for a
//! leading sibling is never adjusted.

use dragsort_core::ItemBounds;
use serde::{Deserialize, Serialize};

/// Which way a sibling moved to make room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Sibling after the dragged item slid toward the start of the axis.
    Backward,
    /// Sibling before the dragged item slid toward the end of the axis.
    Forward,
    Neutral,
}

/// Translation for one sibling along the active axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub index: usize,
    pub offset: f64,
    pub shift: Shift,
}

impl Displacement {
    #[must_use]
    pub const fn neutral(index: usize) -> Self {
        Self {
            index,
            offset: 0.0,
            shift: Shift::Neutral,
        }
    }

    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self.shift, Shift::Neutral)
    }
}

/// The dragged item's layout bounds plus the pointer travel applied to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggedProjection {
    /// Untranslated layout bounds of the dragged item.
    pub bounds: ItemBounds,
    /// Signed pointer travel along the axis since the press.
    pub delta: f64,
    /// Container spacing captured when the session armed.
    pub spacing: f64,
}

impl DraggedProjection {
    #[must_use]
    pub const fn new(bounds: ItemBounds, delta: f64, spacing: f64) -> Self {
        Self {
            bounds,
            delta,
            spacing,
        }
    }

    /// Projected trailing edge; overlap (negative spacing) pulls it back.
    #[must_use]
    pub fn trailing_edge(&self) -> f64 {
        self.bounds.start + self.delta + self.bounds.extent + self.spacing.min(0.0)
    }

    /// Projected leading edge.
    #[must_use]
    pub fn leading_edge(&self) -> f64 {
        self.bounds.start + self.delta
    }

    /// Distance a displaced sibling travels: one slot.
    #[must_use]
    pub fn slot(&self) -> f64 {
        self.bounds.extent + self.spacing
    }

    /// Decide the displacement of one sibling.
    #[must_use]
    pub fn resolve(&self, index: usize, sibling: ItemBounds) -> Displacement {
        let origin = self.bounds.start;
        let midpoint = sibling.midpoint();

        if sibling.start > origin {
            let adjusted = if self.spacing < 0.0 {
                midpoint + self.spacing / 2.0
            } else {
                midpoint
            };
            if self.trailing_edge() >= adjusted {
                return Displacement {
                    index,
                    offset: -self.slot(),
                    shift: Shift::Backward,
                };
            }
        } else if sibling.start < origin && self.leading_edge() <= midpoint {
            return Displacement {
                index,
                offset: self.slot(),
                shift: Shift::Forward,
            };
        }

        Displacement::neutral(index)
    }
}

/// Resolve every sibling, skipping `dragged_index` if it appears.
pub fn resolve_siblings(
    dragged: &DraggedProjection,
    dragged_index: usize,
    siblings: impl IntoIterator<Item = (usize, ItemBounds)>,
) -> Vec<Displacement> {
    siblings
        .into_iter()
        .filter(|(index, _)| *index != dragged_index)
        .map(|(index, bounds)| dragged.resolve(index, bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Four 100-wide items with 10 spacing: starts at 0, 110, 220, 330.
    fn row(spacing: f64) -> Vec<(usize, ItemBounds)> {
        (0..4)
            .map(|i| (i, ItemBounds::new(i as f64 * (100.0 + spacing), 100.0)))
            .collect()
    }

    fn drag(index: usize, delta: f64, spacing: f64) -> Vec<Displacement> {
        let items = row(spacing);
        let projection = DraggedProjection::new(items[index].1, delta, spacing);
        resolve_siblings(&projection, index, items)
    }

    #[test]
    fn no_travel_leaves_every_sibling_neutral() {
        let out = drag(1, 0.0, 10.0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(Displacement::is_neutral));
        assert!(out.iter().all(|d| d.index != 1));
    }

    #[test]
    fn trailing_sibling_moves_back_once_midpoint_is_reached() {
        // Item 1 spans 110..210; item 2 midpoint is 270. End reaches 270 at delta 60.
        let before = drag(1, 59.0, 10.0);
        assert!(before.iter().all(Displacement::is_neutral));

        let at = drag(1, 60.0, 10.0);
        let item2 = at.iter().find(|d| d.index == 2).expect("item 2 resolved");
        assert_eq!(item2.shift, Shift::Backward);
        assert_eq!(item2.offset, -110.0);
    }

    #[test]
    fn leading_sibling_moves_forward_once_midpoint_is_reached() {
        // Item 2 starts at 220; item 1 midpoint is 160. Leading edge hits 160 at delta -60.
        let before = drag(2, -59.0, 10.0);
        assert!(before.iter().all(Displacement::is_neutral));

        let at = drag(2, -60.0, 10.0);
        let item1 = at.iter().find(|d| d.index == 1).expect("item 1 resolved");
        assert_eq!(item1.shift, Shift::Forward);
        assert_eq!(item1.offset, 110.0);
        assert!(at.iter().find(|d| d.index == 0).expect("item 0").is_neutral());
    }

    #[test]
    fn reversing_resets_sibling_to_neutral() {
        let far = drag(0, 250.0, 10.0);
        assert_eq!(
            far.iter().filter(|d| d.shift == Shift::Backward).count(),
            2,
            "items 1 and 2 should make room"
        );
        let back = drag(0, 100.0, 10.0);
        let shifted: Vec<_> = back.iter().filter(|d| !d.is_neutral()).collect();
        assert_eq!(shifted.len(), 1);
        assert_eq!(shifted[0].index, 1);
    }

    #[test]
    fn negative_spacing_adjusts_trailing_midpoint_only() {
        // Overlap of 20: starts at 0, 80, 160, 240.
        let spacing = -20.0;
        let items = row(spacing);
        let projection = DraggedProjection::new(items[1].1, 0.0, spacing);
        // Trailing edge = 80 + 100 - 20 = 160; item 2 midpoint 210 adjusted to 200.
        assert_eq!(projection.trailing_edge(), 160.0);
        let trailing = DraggedProjection::new(items[1].1, 40.0, spacing);
        assert_eq!(trailing.resolve(2, items[2].1).shift, Shift::Backward);
        let short = DraggedProjection::new(items[1].1, 39.9, spacing);
        assert_eq!(short.resolve(2, items[2].1).shift, Shift::Neutral);

        // Leading side uses the raw midpoint (50): leading edge 80 + delta <= 50.
        let leading = DraggedProjection::new(items[1].1, -30.0, spacing);
        assert_eq!(leading.resolve(0, items[0].1).shift, Shift::Forward);
        assert_eq!(leading.resolve(0, items[0].1).offset, 80.0);
        let shy = DraggedProjection::new(items[1].1, -29.9, spacing);
        assert_eq!(shy.resolve(0, items[0].1).shift, Shift::Neutral);
    }

    #[test]
    fn sibling_sharing_origin_start_is_never_displaced() {
        let bounds = ItemBounds::new(50.0, 40.0);
        let projection = DraggedProjection::new(bounds, 500.0, 0.0);
        assert!(projection.resolve(9, bounds).is_neutral());
        let projection = DraggedProjection::new(bounds, -500.0, 0.0);
        assert!(projection.resolve(9, bounds).is_neutral());
    }
}
