#![forbid(unsafe_code)]

//! Capabilities the engine consumes from its host.
//!
//! The engine never owns layout, rendering, or data. A host lends it:
//! - a [`GeometryProvider`] describing the realized items of one container,
//! - a [`FeedbackSink`] that applies translations, drag markers, and stacking,
//! - a [`BackingSequence`] holding the ordered data, and
//! - optionally a [`SelectionSink`] tracking the current selection.
//!
//! Every trait is implemented for `&mut T`, so collaborators can be borrowed
//! for the lifetime of a behavior instead of moved into it.

use std::collections::VecDeque;
use std::fmt;

use dragsort_core::{Axis, Offset, Rect};

/// Layout facts about one container, read fresh on every move.
pub trait GeometryProvider {
    /// Handle identifying a pressed item.
    type Item: Copy + PartialEq + fmt::Debug;

    /// Untranslated layout bounds of the item at `index`, if realized.
    fn bounds_of(&self, index: usize) -> Option<Rect>;

    /// Current index of `item`, if it is a realized child of the container.
    fn index_of(&self, item: Self::Item) -> Option<usize>;

    /// Indices of every realized item, in container order.
    fn realized_indices(&self) -> Vec<usize>;

    /// Axis the container lays its items out along.
    fn orientation(&self) -> Axis;

    /// Gap between adjacent items; negative when items overlap.
    fn spacing(&self) -> f64;
}

/// Fire-and-forget visual feedback.
pub trait FeedbackSink {
    fn set_translation(&mut self, index: usize, offset: Offset);
    fn set_drag_marker(&mut self, index: usize, dragging: bool);
    fn set_stack_order(&mut self, index: usize, order: i32);
}

/// Ordered data behind a container.
pub trait BackingSequence {
    type Item;

    /// Remove and return the element at `index`; `None` when out of bounds.
    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;

    /// Insert `item` at `index`, clamped to the end of the sequence.
    fn insert_at(&mut self, index: usize, item: Self::Item);

    fn count(&self) -> usize;
}

/// Receives the moved element's new index after a commit.
pub trait SelectionSink {
    fn set_selected_index(&mut self, index: usize);
}

/// Selection sink for containers without a selection concept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSelection;

impl SelectionSink for NoSelection {
    fn set_selected_index(&mut self, _index: usize) {}
}

impl<T> BackingSequence for Vec<T> {
    type Item = T;

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.remove(index))
    }

    fn insert_at(&mut self, index: usize, item: T) {
        let index = index.min(self.len());
        self.insert(index, item);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> BackingSequence for VecDeque<T> {
    type Item = T;

    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }

    fn insert_at(&mut self, index: usize, item: T) {
        let index = index.min(self.len());
        self.insert(index, item);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl SelectionSink for Option<usize> {
    fn set_selected_index(&mut self, index: usize) {
        *self = Some(index);
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    type Item = G::Item;

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        (**self).bounds_of(index)
    }

    fn index_of(&self, item: Self::Item) -> Option<usize> {
        (**self).index_of(item)
    }

    fn realized_indices(&self) -> Vec<usize> {
        (**self).realized_indices()
    }

    fn orientation(&self) -> Axis {
        (**self).orientation()
    }

    fn spacing(&self) -> f64 {
        (**self).spacing()
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &mut G {
    type Item = G::Item;

    fn bounds_of(&self, index: usize) -> Option<Rect> {
        (**self).bounds_of(index)
    }

    fn index_of(&self, item: Self::Item) -> Option<usize> {
        (**self).index_of(item)
    }

    fn realized_indices(&self) -> Vec<usize> {
        (**self).realized_indices()
    }

    fn orientation(&self) -> Axis {
        (**self).orientation()
    }

    fn spacing(&self) -> f64 {
        (**self).spacing()
    }
}

impl<F: FeedbackSink + ?Sized> FeedbackSink for &mut F {
    fn set_translation(&mut self, index: usize, offset: Offset) {
        (**self).set_translation(index, offset);
    }

    fn set_drag_marker(&mut self, index: usize, dragging: bool) {
        (**self).set_drag_marker(index, dragging);
    }

    fn set_stack_order(&mut self, index: usize, order: i32) {
        (**self).set_stack_order(index, order);
    }
}

impl<Q: BackingSequence + ?Sized> BackingSequence for &mut Q {
    type Item = Q::Item;

    fn remove_at(&mut self, index: usize) -> Option<Self::Item> {
        (**self).remove_at(index)
    }

    fn insert_at(&mut self, index: usize, item: Self::Item) {
        (**self).insert_at(index, item);
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<S: SelectionSink + ?Sized> SelectionSink for &mut S {
    fn set_selected_index(&mut self, index: usize) {
        (**self).set_selected_index(index);
    }
}
