#![forbid(unsafe_code)]

//! Axis-aware geometric primitives.
//!
//! Coordinates are container-local logical units (`f64`). Nothing here rounds
//! or clamps: hosts report whatever their layout produced, including negative
//! positions for items scrolled out of view.

use serde::{Deserialize, Serialize};

/// The single layout dimension along which dragging happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `point` along this axis.
    #[inline]
    #[must_use]
    pub const fn component(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Translation that moves by `delta` along this axis only.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: f64) -> Offset {
        match self {
            Self::Horizontal => Offset::new(delta, 0.0),
            Self::Vertical => Offset::new(0.0, delta),
        }
    }
}

/// A pointer position in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Signed distance travelled from `origin` to `self` along `axis`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Point, axis: Axis) -> f64 {
        axis.component(self) - axis.component(origin)
    }
}

/// A render translation. The zero offset is the identity transform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this offset leaves the item where layout put it.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Width and height of a layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[inline]
    #[must_use]
    pub const fn length(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Layout bounds of one realized item, untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One item's bounds projected onto the active axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemBounds {
    /// Leading coordinate along the axis.
    pub start: f64,
    /// Length along the axis.
    pub extent: f64,
}

impl ItemBounds {
    #[inline]
    #[must_use]
    pub const fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// Project `rect` onto `axis`.
    #[inline]
    #[must_use]
    pub const fn along(rect: Rect, axis: Axis) -> Self {
        Self {
            start: axis.component(rect.origin()),
            extent: rect.size().length(axis),
        }
    }

    /// Trailing coordinate (exclusive).
    #[inline]
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.extent
    }

    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.start + self.extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_swaps_axes() {
        assert_eq!(Axis::Horizontal.perpendicular(), Axis::Vertical);
        assert_eq!(Axis::Vertical.perpendicular(), Axis::Horizontal);
    }

    #[test]
    fn offset_is_axis_aligned() {
        assert_eq!(Axis::Horizontal.offset(4.5), Offset::new(4.5, 0.0));
        assert_eq!(Axis::Vertical.offset(-2.0), Offset::new(0.0, -2.0));
        assert!(Axis::Vertical.offset(0.0).is_zero());
    }

    #[test]
    fn bounds_project_per_axis() {
        let rect = Rect::new(10.0, 40.0, 30.0, 20.0);
        assert_eq!(
            ItemBounds::along(rect, Axis::Horizontal),
            ItemBounds::new(10.0, 30.0)
        );
        assert_eq!(
            ItemBounds::along(rect, Axis::Vertical),
            ItemBounds::new(40.0, 20.0)
        );
    }

    #[test]
    fn midpoint_and_end() {
        let bounds = ItemBounds::new(100.0, 50.0);
        assert_eq!(bounds.midpoint(), 125.0);
        assert_eq!(bounds.end(), 150.0);
    }

    #[test]
    fn delta_reads_only_active_axis() {
        let origin = Point::new(5.0, 5.0);
        let now = Point::new(9.0, -20.0);
        assert_eq!(now.delta_from(origin, Axis::Horizontal), 4.0);
        assert_eq!(now.delta_from(origin, Axis::Vertical), -25.0);
    }

    #[test]
    fn axis_serializes_snake_case() {
        let json = serde_json::to_string(&Axis::Vertical).expect("serialize axis");
        assert_eq!(json, "\"vertical\"");
    }
}
