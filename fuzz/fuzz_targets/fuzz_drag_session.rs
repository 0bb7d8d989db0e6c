#![no_main]

use dragsort::{
    Axis, DragConfig, DragEffect, ItemDragBehavior, Point, PointerButton, PointerButtons,
};
use dragsort_harness::{RecordingFeedback, StackGeometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header: item count (2..17), spacing (-8..24), axis, stack override.
    if data.len() < 3 {
        return;
    }
    let count = (data[0] % 16) as usize + 2;
    let spacing = f64::from(data[1] % 32) - 8.0;
    let axis = if data[2] & 1 == 0 {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let config = DragConfig::along(axis).with_stack_override(data[2] & 2 != 0);

    let extents = (0..count).map(|i| 16.0 + f64::from((i as u8).wrapping_mul(37) % 64));
    let geometry = StackGeometry::with_extents(extents, spacing, axis);
    let Ok(mut behavior) = ItemDragBehavior::new(
        config,
        geometry,
        RecordingFeedback::new(),
        (0..count as u32).collect::<Vec<_>>(),
    ) else {
        return;
    };
    behavior.attach();

    // Body: 3-byte ops (opcode, position hi, position lo).
    for op in data[3..].chunks_exact(3) {
        let along = f64::from(u16::from_be_bytes([op[1], op[2]])) / 16.0 - 512.0;
        let position = match axis {
            Axis::Horizontal => Point::new(along, 4.0),
            Axis::Vertical => Point::new(4.0, along),
        };
        let before = behavior.sequence().clone();
        let transition = match op[0] % 8 {
            0 => behavior.pointer_pressed(u32::from(op[1] % 20), position, PointerButton::Primary),
            1 => behavior.pointer_released(position, PointerButton::Primary),
            2 => behavior.pointer_released(position, PointerButton::Secondary),
            3 => behavior.capture_lost(),
            4 => behavior.pointer_moved(position, PointerButtons::NONE),
            _ => behavior.pointer_moved(position, PointerButtons::PRIMARY),
        };

        match transition.effect {
            DragEffect::Released { outcome } => {
                assert!(behavior.feedback().all_neutral(), "residual feedback after release");
                if !outcome.is_moved() {
                    assert_eq!(behavior.sequence(), &before, "skipped commit mutated");
                }
            }
            DragEffect::Aborted { .. } => {
                assert!(behavior.feedback().all_neutral(), "residual feedback after abort");
                assert_eq!(behavior.sequence(), &before, "abort mutated");
            }
            _ => assert_eq!(behavior.sequence(), &before, "non-release mutated"),
        }
    }

    let mut sorted = behavior.sequence().clone();
    sorted.sort_unstable();
    assert!(sorted.iter().copied().eq(0..count as u32), "sequence lost items");
});
