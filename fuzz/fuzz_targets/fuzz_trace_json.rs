#![no_main]

use dragsort::{Axis, DragConfig, DragInputTrace, ItemDragBehavior};
use dragsort_harness::{RecordingFeedback, StackGeometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(trace) = serde_json::from_slice::<DragInputTrace<u32>>(data) else {
        return;
    };

    let Ok(mut behavior) = ItemDragBehavior::new(
        DragConfig::default(),
        StackGeometry::uniform(6, 50.0, 2.0, Axis::Horizontal),
        RecordingFeedback::new(),
        vec![0u32, 1, 2, 3, 4, 5],
    ) else {
        return;
    };
    behavior.attach();

    // Invalid traces must be rejected without touching the behavior.
    if trace.validate().is_err() {
        assert!(trace.replay(&mut behavior).is_err());
        assert!(behavior.feedback().calls().is_empty());
        return;
    }

    let outcome = trace
        .replay(&mut behavior)
        .expect("validated trace must replay");
    assert_eq!(outcome.transitions.len(), trace.len());
    for pair in outcome.transitions.windows(2) {
        assert!(pair[0].transition_id < pair[1].transition_id);
    }
});
