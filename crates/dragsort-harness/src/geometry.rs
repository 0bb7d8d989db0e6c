#![forbid(unsafe_code)]

//! Stacked layout geometry.
//!
//! Items are laid out back to back along one axis, separated by `spacing`
//! (negative spacing overlaps neighbours). Items are identified by a stable
//! `u32` key so tests can follow an element across a reorder.

use std::ops::Range;

use dragsort::GeometryProvider;
use dragsort_core::{Axis, Rect};

/// Thickness of every item across the layout axis.
const CROSS_EXTENT: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    key: u32,
    extent: f64,
}

/// Back-to-back layout of keyed items.
#[derive(Debug, Clone, PartialEq)]
pub struct StackGeometry {
    axis: Axis,
    spacing: f64,
    entries: Vec<Entry>,
    starts: Vec<f64>,
    window: Option<Range<usize>>,
    unmeasured: Vec<usize>,
}

impl StackGeometry {
    /// `count` items of equal `extent`, keyed `0..count`.
    #[must_use]
    pub fn uniform(count: usize, extent: f64, spacing: f64, axis: Axis) -> Self {
        Self::with_extents(std::iter::repeat_n(extent, count), spacing, axis)
    }

    /// One item per extent, keyed in order from zero.
    #[must_use]
    pub fn with_extents(extents: impl IntoIterator<Item = f64>, spacing: f64, axis: Axis) -> Self {
        let entries = extents
            .into_iter()
            .zip(0u32..)
            .map(|(extent, key)| Entry { key, extent })
            .collect();
        let mut geometry = Self {
            axis,
            spacing,
            entries,
            starts: Vec::new(),
            window: None,
            unmeasured: Vec::new(),
        };
        geometry.relayout();
        geometry
    }

    /// Only indices in `window` are realized.
    #[must_use]
    pub fn with_window(mut self, window: Range<usize>) -> Self {
        self.window = Some(window);
        self
    }

    /// Scroll the realized window; `None` realizes everything.
    pub fn set_window(&mut self, window: Option<Range<usize>>) {
        self.window = window;
    }

    /// Keep `indices` realized but report no bounds for them, like items
    /// still waiting on layout.
    pub fn set_unmeasured(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.unmeasured = indices.into_iter().collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in layout order.
    #[must_use]
    pub fn keys(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.key).collect()
    }

    /// Extent of the item at `index` along the layout axis.
    #[must_use]
    pub fn extent_at(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|e| e.extent)
    }

    /// Leading coordinate of the item at `index` along the layout axis.
    #[must_use]
    pub fn start_at(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    /// Re-lay the items out in `order`, as a host would after a commit.
    ///
    /// Keys missing from `order` are dropped; unknown keys are ignored.
    pub fn sync_order(&mut self, order: &[u32]) {
        let entries = order
            .iter()
            .filter_map(|key| self.entries.iter().find(|e| e.key == *key).copied())
            .collect();
        self.entries = entries;
        self.relayout();
    }

    fn relayout(&mut self) {
        let mut cursor = 0.0;
        self.starts = self
            .entries
            .iter()
            .map(|entry| {
                let start = cursor;
                cursor += entry.extent + self.spacing;
                start
            })
            .collect();
    }

    fn is_realized(&self, index: usize) -> bool {
        index < self.entries.len()
            && self
                .window
                .as_ref()
                .is_none_or(|window| window.contains(&index))
    }
}

impl GeometryProvider for StackGeometry {
    type Item = u32;

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        if !self.is_realized(index) || self.unmeasured.contains(&index) {
            return None;
        }
        let start = self.starts[index];
        let extent = self.entries[index].extent;
        Some(match self.axis {
            Axis::Horizontal => Rect::new(start, 0.0, extent, CROSS_EXTENT),
            Axis::Vertical => Rect::new(0.0, start, CROSS_EXTENT, extent),
        })
    }

    fn index_of(&self, item: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.key == item)
            .filter(|&index| self.is_realized(index))
    }

    fn realized_indices(&self) -> Vec<usize> {
        let all = 0..self.entries.len();
        match &self.window {
            Some(window) => (window.start.min(all.end)..window.end.min(all.end)).collect(),
            None => all.collect(),
        }
    }

    fn orientation(&self) -> Axis {
        self.axis
    }

    fn spacing(&self) -> f64 {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uniform_layout_accumulates_spacing() {
        let geometry = StackGeometry::uniform(3, 100.0, 10.0, Axis::Horizontal);
        assert_eq!(geometry.start_at(2), Some(220.0));
        assert_eq!(
            geometry.bounds_of(1),
            Some(Rect::new(110.0, 0.0, 100.0, CROSS_EXTENT))
        );
        assert_eq!(geometry.bounds_of(3), None);
    }

    #[test]
    fn vertical_layout_uses_y() {
        let geometry = StackGeometry::with_extents([20.0, 40.0], -5.0, Axis::Vertical);
        assert_eq!(
            geometry.bounds_of(1),
            Some(Rect::new(0.0, 15.0, CROSS_EXTENT, 40.0))
        );
    }

    #[test]
    fn window_limits_realization() {
        let geometry = StackGeometry::uniform(10, 10.0, 0.0, Axis::Vertical).with_window(3..6);
        assert_eq!(geometry.realized_indices(), vec![3, 4, 5]);
        assert_eq!(geometry.index_of(2), None);
        assert_eq!(geometry.index_of(4), Some(4));
        assert_eq!(geometry.bounds_of(6), None);
    }

    #[test]
    fn unmeasured_items_stay_realized_without_bounds() {
        let mut geometry = StackGeometry::uniform(3, 10.0, 0.0, Axis::Horizontal);
        geometry.set_unmeasured([1]);
        assert_eq!(geometry.realized_indices(), vec![0, 1, 2]);
        assert_eq!(geometry.index_of(1), Some(1));
        assert_eq!(geometry.bounds_of(1), None);
        assert!(geometry.bounds_of(2).is_some());
    }

    #[test]
    fn sync_order_follows_keys() {
        let mut geometry = StackGeometry::with_extents([10.0, 20.0, 30.0], 0.0, Axis::Horizontal);
        geometry.sync_order(&[2, 0, 1]);
        assert_eq!(geometry.keys(), vec![2, 0, 1]);
        assert_eq!(geometry.index_of(0), Some(1));
        assert_eq!(geometry.start_at(1), Some(30.0));
        assert_eq!(geometry.extent_at(0), Some(30.0));
    }
}
