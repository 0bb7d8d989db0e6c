#![forbid(unsafe_code)]

//! Thread-shared behavior handle.
//!
//! The engine is single-threaded per container. Hosts that deliver pointer
//! events from more than one thread wrap each container's behavior in a
//! [`SharedDragBehavior`], which serializes dispatch behind one mutex.
//! Independent containers hold independent handles and never contend.

use std::sync::{Arc, Mutex, MutexGuard};

use dragsort_core::PointerInput;

use crate::behavior::ItemDragBehavior;
use crate::collaborator::{BackingSequence, FeedbackSink, GeometryProvider, SelectionSink};
use crate::session::{DragPhase, DragTransition};

/// Cloneable, mutex-serialized access to one container's behavior.
#[derive(Debug)]
pub struct SharedDragBehavior<G, F, Q, S>
where
    G: GeometryProvider,
{
    inner: Arc<Mutex<ItemDragBehavior<G, F, Q, S>>>,
}

impl<G, F, Q, S> Clone for SharedDragBehavior<G, F, Q, S>
where
    G: GeometryProvider,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G, F, Q, S> SharedDragBehavior<G, F, Q, S>
where
    G: GeometryProvider,
    F: FeedbackSink,
    Q: BackingSequence,
    S: SelectionSink,
{
    pub fn new(behavior: ItemDragBehavior<G, F, Q, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(behavior)),
        }
    }

    /// Dispatch one signal while holding the container lock.
    pub fn dispatch(&self, item: Option<G::Item>, input: PointerInput) -> DragTransition {
        self.lock().dispatch(item, input)
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.lock().phase()
    }

    /// Run `f` with exclusive access to the behavior.
    pub fn with<R>(&self, f: impl FnOnce(&mut ItemDragBehavior<G, F, Q, S>) -> R) -> R {
        f(&mut self.lock())
    }

    // A collaborator panic poisons the lock; the behavior itself stays usable.
    fn lock(&self) -> MutexGuard<'_, ItemDragBehavior<G, F, Q, S>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DragConfig;
    use dragsort_core::{Axis, Offset, Point, Rect};
    use std::thread;

    #[derive(Debug)]
    struct Column;

    impl GeometryProvider for Column {
        type Item = usize;

        fn bounds_of(&self, index: usize) -> Option<Rect> {
            (index < 3).then(|| Rect::new(0.0, index as f64 * 50.0, 80.0, 50.0))
        }

        fn index_of(&self, item: usize) -> Option<usize> {
            (item < 3).then_some(item)
        }

        fn realized_indices(&self) -> Vec<usize> {
            vec![0, 1, 2]
        }

        fn orientation(&self) -> Axis {
            Axis::Vertical
        }

        fn spacing(&self) -> f64 {
            0.0
        }
    }

    #[derive(Debug, Default)]
    struct Discard;

    impl FeedbackSink for Discard {
        fn set_translation(&mut self, _index: usize, _offset: Offset) {}
        fn set_drag_marker(&mut self, _index: usize, _dragging: bool) {}
        fn set_stack_order(&mut self, _index: usize, _order: i32) {}
    }

    #[test]
    fn dispatch_from_another_thread_is_serialized() {
        let mut behavior = ItemDragBehavior::new(
            DragConfig::along(Axis::Vertical),
            Column,
            Discard,
            vec!["a", "b", "c"],
        )
        .expect("valid config");
        behavior.attach();
        let shared = SharedDragBehavior::new(behavior);

        shared.dispatch(Some(0), PointerInput::press(Point::new(10.0, 10.0)));
        let worker = {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.dispatch(None, PointerInput::drag_to(Point::new(10.0, 60.0)));
                shared.dispatch(None, PointerInput::release(Point::new(10.0, 60.0)))
            })
        };
        let released = worker.join().expect("worker thread");
        assert!(matches!(
            released.effect,
            crate::session::DragEffect::Released { .. }
        ));
        assert_eq!(shared.phase(), DragPhase::Idle);
        shared.with(|b| assert_eq!(b.sequence(), &vec!["b", "a", "c"]));
    }
}
