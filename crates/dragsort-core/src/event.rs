#![forbid(unsafe_code)]

//! Pointer input delivered to a container.
//!
//! Hosts translate their native pointer events into [`PointerInput`] values.
//! Events for one container arrive ordered and exactly once; pointer capture
//! guarantees that only one press is in flight per container.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

bitflags! {
    /// Set of buttons held during a move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PointerButtons: u8 {
        /// No buttons held.
        const NONE      = 0b000;
        const PRIMARY   = 0b001;
        const SECONDARY = 0b010;
        const MIDDLE    = 0b100;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::PRIMARY,
            PointerButton::Secondary => Self::SECONDARY,
            PointerButton::Middle => Self::MIDDLE,
        }
    }
}

/// One pointer lifecycle signal for a container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerInput {
    Press {
        position: Point,
        button: PointerButton,
    },
    Move {
        position: Point,
        buttons: PointerButtons,
    },
    Release {
        position: Point,
        button: PointerButton,
    },
    /// Capture was taken away (device disconnect, focus steal, ...).
    CaptureLost,
}

impl PointerInput {
    /// Primary-button press at `position`.
    #[must_use]
    pub const fn press(position: Point) -> Self {
        Self::Press {
            position,
            button: PointerButton::Primary,
        }
    }

    /// Move with the primary button held.
    #[must_use]
    pub const fn drag_to(position: Point) -> Self {
        Self::Move {
            position,
            buttons: PointerButtons::PRIMARY,
        }
    }

    /// Primary-button release at `position`.
    #[must_use]
    pub const fn release(position: Point) -> Self {
        Self::Release {
            position,
            button: PointerButton::Primary,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Press { position, .. }
            | Self::Move { position, .. }
            | Self::Release { position, .. } => Some(*position),
            Self::CaptureLost => None,
        }
    }
}
