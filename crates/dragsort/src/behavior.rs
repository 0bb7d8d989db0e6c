#![forbid(unsafe_code)]

//! Drag-to-reorder behavior for one container.
//!
//! [`ItemDragBehavior`] owns the session state for a single container and
//! borrows (or owns) the host collaborators it needs. Hosts forward pointer
//! signals to it; every call returns a [`DragTransition`] describing what
//! happened, including explicit no-op reasons for ignored events.
//!
//! # Invariants
//!
//! 1. Before the threshold is exceeded nothing is translated and no target is
//!    tracked.
//! 2. The dragged item only receives its own pointer-driven translation; every
//!    other realized item receives exactly one displacement per evaluated move.
//! 3. Release and capture loss always neutralize every translation, drag
//!    marker, and (when enabled) stack order, whether or not a drag started.
//! 4. The backing sequence is mutated at most once per session, only on a
//!    primary-button release after a started drag.

use dragsort_core::{ItemBounds, Offset, Point, PointerButton, PointerButtons, PointerInput};
use rustc_hash::FxHashMap;

use crate::collaborator::{
    BackingSequence, FeedbackSink, GeometryProvider, NoSelection, SelectionSink,
};
use crate::commit::{CommitOutcome, CommitSkipReason, commit_reorder};
use crate::config::{DragConfig, DragConfigError};
use crate::displacement::{Displacement, DraggedProjection, Shift, resolve_siblings};
use crate::session::{DragEffect, DragPhase, DragSession, DragTransition, NoopReason};
use crate::threshold;

/// Stacking step between adjacent items when stack override is on.
const STACK_ORDER_STRIDE: i32 = 10;
/// How far above/below a passed-over sibling the dragged item is stacked.
const STACK_ORDER_LIFT: i32 = 5;

/// Collaborator-facing drag engine for one container.
#[derive(Debug)]
pub struct ItemDragBehavior<G, F, Q, S = NoSelection>
where
    G: GeometryProvider,
{
    config: DragConfig,
    attached: bool,
    session: DragSession,
    dragged_item: Option<G::Item>,
    /// Last displacement applied per sibling during this session.
    applied: FxHashMap<usize, f64>,
    /// Stack orders assigned during this session.
    stack: FxHashMap<usize, i32>,
    transition_counter: u64,
    geometry: G,
    feedback: F,
    sequence: Q,
    selection: S,
}

impl<G, F, Q> ItemDragBehavior<G, F, Q, NoSelection>
where
    G: GeometryProvider,
    F: FeedbackSink,
    Q: BackingSequence,
{
    /// Construct a detached behavior with validated configuration.
    pub fn new(
        config: DragConfig,
        geometry: G,
        feedback: F,
        sequence: Q,
    ) -> Result<Self, DragConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            attached: false,
            session: DragSession::new(),
            dragged_item: None,
            applied: FxHashMap::default(),
            stack: FxHashMap::default(),
            transition_counter: 0,
            geometry,
            feedback,
            sequence,
            selection: NoSelection,
        })
    }
}

impl<G, F, Q, S> ItemDragBehavior<G, F, Q, S>
where
    G: GeometryProvider,
    F: FeedbackSink,
    Q: BackingSequence,
    S: SelectionSink,
{
    /// Replace the selection sink.
    pub fn with_selection<S2: SelectionSink>(self, selection: S2) -> ItemDragBehavior<G, F, Q, S2> {
        ItemDragBehavior {
            config: self.config,
            attached: self.attached,
            session: self.session,
            dragged_item: self.dragged_item,
            applied: self.applied,
            stack: self.stack,
            transition_counter: self.transition_counter,
            geometry: self.geometry,
            feedback: self.feedback,
            sequence: self.sequence,
            selection,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Whether pointer signals are currently handled.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Per-container session state, for diagnostics.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Current session phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// The geometry provider.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access for hosts that reflow the container between moves.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// The feedback sink, for hosts that inspect applied visuals.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// The backing sequence in its current order.
    pub fn sequence(&self) -> &Q {
        &self.sequence
    }

    /// Mutable access for hosts that edit items outside a drag.
    pub fn sequence_mut(&mut self) -> &mut Q {
        &mut self.sequence
    }

    /// The selection sink updated after each commit.
    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// Tear the behavior apart, returning the collaborators.
    pub fn into_parts(self) -> (G, F, Q, S) {
        (self.geometry, self.feedback, self.sequence, self.selection)
    }

    /// Start handling pointer events.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop handling pointer events. A live session is aborted first.
    pub fn detach(&mut self) -> Option<DragTransition> {
        let transition = self
            .session
            .is_active()
            .then(|| self.capture_lost());
        self.attached = false;
        transition
    }

    /// Dispatch one pointer signal. `item` is only consulted for presses.
    pub fn dispatch(&mut self, item: Option<G::Item>, input: PointerInput) -> DragTransition {
        match input {
            PointerInput::Press { position, button } => match item {
                Some(item) => self.pointer_pressed(item, position, button),
                None => self.noop(NoopReason::ItemNotRealized),
            },
            PointerInput::Move { position, buttons } => self.pointer_moved(position, buttons),
            PointerInput::Release { position, button } => self.pointer_released(position, button),
            PointerInput::CaptureLost => self.capture_lost(),
        }
    }

    /// Handle a press on `item`.
    pub fn pointer_pressed(
        &mut self,
        item: G::Item,
        position: Point,
        button: PointerButton,
    ) -> DragTransition {
        if !self.attached {
            return self.noop(NoopReason::Detached);
        }
        if button != PointerButton::Primary {
            return self.noop(NoopReason::ButtonNotAllowed);
        }
        if self.session.is_active() {
            return self.noop(NoopReason::SessionAlreadyActive);
        }
        let Some(index) = self.geometry.index_of(item) else {
            return self.noop(NoopReason::ItemNotRealized);
        };

        let spacing = if self.geometry.orientation() == self.config.axis {
            self.geometry.spacing()
        } else {
            0.0
        };

        let from = self.session.phase();
        self.session.arm(position, index, spacing);
        self.dragged_item = Some(item);

        let realized = self.geometry.realized_indices();
        for &i in &realized {
            self.feedback.set_translation(i, Offset::ZERO);
        }
        self.feedback.set_drag_marker(index, true);
        if self.config.override_stack_order {
            for &i in &realized {
                let order = stack_order_for_index(i);
                self.stack.insert(i, order);
                self.feedback.set_stack_order(i, order);
            }
        }

        dragsort_core::debug!(
            index,
            x = position.x,
            y = position.y,
            spacing,
            "drag session armed"
        );
        self.transition(
            from,
            DragEffect::Armed {
                index,
                origin: position,
                spacing,
            },
        )
    }

    /// Handle pointer movement while captured.
    pub fn pointer_moved(&mut self, position: Point, buttons: PointerButtons) -> DragTransition {
        if !self.attached {
            return self.noop(NoopReason::Detached);
        }
        let Some(item) = self.dragged_item.filter(|_| self.session.is_active()) else {
            return self.noop(NoopReason::InvalidSession);
        };
        if !buttons.contains(PointerButtons::PRIMARY) {
            return self.noop(NoopReason::ButtonNotHeld);
        }

        let axis = self.config.axis;
        let origin = self.session.origin();
        if !self.session.started()
            && !threshold::exceeded(origin, position, axis, self.config.thresholds())
        {
            return self.noop(NoopReason::ThresholdNotReached);
        }

        let Some((index, bounds)) = self
            .geometry
            .index_of(item)
            .and_then(|index| Some((index, self.geometry.bounds_of(index)?)))
        else {
            dragsort_core::debug!(?item, "dragged item geometry unavailable; skipping move");
            return self.noop(NoopReason::CollaboratorUnavailable);
        };

        let from = self.session.phase();
        let just_started = !self.session.started();
        if just_started {
            self.session.start();
            dragsort_core::debug!(index, "drag started");
        }

        let delta = position.delta_from(origin, axis);
        self.session.set_dragged_index(index);
        self.feedback.set_translation(index, axis.offset(delta));

        let projection =
            DraggedProjection::new(ItemBounds::along(bounds, axis), delta, self.session.spacing());
        let mut unmeasured = Vec::new();
        let siblings: Vec<(usize, ItemBounds)> = self
            .geometry
            .realized_indices()
            .into_iter()
            .filter_map(|i| match self.geometry.bounds_of(i) {
                Some(rect) => Some((i, ItemBounds::along(rect, axis))),
                None => {
                    unmeasured.push(i);
                    None
                }
            })
            .collect();
        let mut displacements = resolve_siblings(&projection, index, siblings);
        // A realized sibling without bounds cannot overlap, so it goes neutral.
        displacements.extend(
            unmeasured
                .into_iter()
                .filter(|&i| i != index)
                .map(Displacement::neutral),
        );

        for displacement in &displacements {
            self.apply_displacement(index, displacement, delta);
        }

        let previous_target = self.session.target_index();
        let target_index = self.session.target_mut().observe(&displacements);
        if displacements.iter().any(|d| !d.is_neutral()) {
            self.session.record_delta(delta);
        }
        if target_index != previous_target {
            dragsort_core::trace!(?previous_target, ?target_index, delta, "drop target changed");
        }

        let effect = if just_started {
            DragEffect::DragStarted {
                index,
                delta,
                target_index,
            }
        } else {
            DragEffect::DragUpdated {
                index,
                delta,
                target_index,
            }
        };
        self.transition(from, effect)
    }

    /// Handle a button release while captured.
    pub fn pointer_released(&mut self, _position: Point, button: PointerButton) -> DragTransition {
        if !self.attached {
            return self.noop(NoopReason::Detached);
        }
        if !self.session.is_active() {
            return self.noop(NoopReason::InvalidSession);
        }
        if button != PointerButton::Primary {
            return self.noop(NoopReason::ButtonNotAllowed);
        }

        let from = self.session.phase();
        let dragged = self.session.dragged_index();
        self.clean_up(dragged);

        let outcome = match (self.session.started(), dragged, self.session.target_index()) {
            (false, _, _) => CommitOutcome::skipped(CommitSkipReason::NotStarted),
            (true, Some(from_index), Some(to_index)) => {
                commit_reorder(from_index, to_index, &mut self.sequence, &mut self.selection)
            }
            (true, _, _) => CommitOutcome::skipped(CommitSkipReason::NoTarget),
        };
        if outcome.is_moved() {
            dragsort_core::info!(?outcome, "reorder committed");
        } else {
            dragsort_core::debug!(?outcome, "release without reorder");
        }

        self.finish();
        self.transition(from, DragEffect::Released { outcome })
    }

    /// Handle external loss of pointer capture. Never commits.
    pub fn capture_lost(&mut self) -> DragTransition {
        if !self.attached {
            return self.noop(NoopReason::Detached);
        }
        if !self.session.is_active() {
            return self.noop(NoopReason::InvalidSession);
        }
        let from = self.session.phase();
        let dragged = self.session.dragged_index();
        self.clean_up(dragged);
        dragsort_core::debug!(?dragged, "drag session aborted");
        self.finish();
        self.transition(from, DragEffect::Aborted { index: dragged })
    }

    fn apply_displacement(&mut self, dragged: usize, displacement: &Displacement, delta: f64) {
        let axis = self.config.axis;
        let sibling = displacement.index;
        let previous = self.applied.get(&sibling).copied().unwrap_or(0.0);

        if self.config.override_stack_order {
            let sibling_order = self.stack.get(&sibling).copied().unwrap_or(0);
            let dragged_order = self.stack.get(&dragged).copied().unwrap_or(0);
            let lifted = match displacement.shift {
                Shift::Backward if dragged_order < sibling_order => {
                    Some(sibling_order + STACK_ORDER_LIFT)
                }
                Shift::Forward if dragged_order > sibling_order => {
                    Some(sibling_order - STACK_ORDER_LIFT)
                }
                Shift::Neutral if previous != 0.0 => Some(if delta < 0.0 {
                    sibling_order + STACK_ORDER_LIFT
                } else {
                    sibling_order - STACK_ORDER_LIFT
                }),
                _ => None,
            };
            if let Some(order) = lifted {
                self.stack.insert(dragged, order);
                self.feedback.set_stack_order(dragged, order);
            }
        }

        self.feedback
            .set_translation(sibling, axis.offset(displacement.offset));
        if displacement.is_neutral() {
            self.applied.remove(&sibling);
        } else {
            self.applied.insert(sibling, displacement.offset);
        }
    }

    /// Neutralize every visual side effect of the session.
    fn clean_up(&mut self, dragged: Option<usize>) {
        let mut touched = self.geometry.realized_indices();
        touched.extend(self.applied.keys().copied());
        touched.extend(self.stack.keys().copied());
        touched.extend(dragged);
        touched.extend(self.session.origin_index());
        touched.sort_unstable();
        touched.dedup();

        for index in touched {
            self.feedback.set_translation(index, Offset::ZERO);
            self.feedback.set_drag_marker(index, false);
            if self.config.override_stack_order {
                self.feedback.set_stack_order(index, 0);
            }
        }
    }

    fn finish(&mut self) {
        self.session.reset();
        self.dragged_item = None;
        self.applied.clear();
        self.stack.clear();
    }

    fn noop(&mut self, reason: NoopReason) -> DragTransition {
        let phase = self.session.phase();
        self.transition(phase, DragEffect::noop(reason))
    }

    fn transition(&mut self, from: DragPhase, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.session.phase(),
            effect,
        }
    }
}

const fn stack_order_for_index(index: usize) -> i32 {
    let index = if index > (i32::MAX / STACK_ORDER_STRIDE) as usize {
        i32::MAX / STACK_ORDER_STRIDE
    } else {
        index as i32
    };
    index * STACK_ORDER_STRIDE
}
