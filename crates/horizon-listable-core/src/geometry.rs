//! Geometry types shared by the builders, the layout adapter, and backing views.
//!
//! All values are logical points. A [`SizeConstraint`] is what the host layout
//! offers an element during measurement; an axis can be bounded or
//! unbounded, and unbounded axes report [`f32::INFINITY`] from
//! [`SizeConstraint::maximum`].

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if both dimensions are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Shrink the rectangle by the given insets.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.horizontal()).max(0.0),
            (self.size.height - insets.vertical()).max(0.0),
        )
    }
}

/// Insets applied around the content of a list or table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create new insets.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform insets (same value on all sides).
    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Create symmetric insets (same horizontal and vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal inset (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// An RGBA color with components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One axis of a [`SizeConstraint`].
///
/// Serialized as a number of points, or `null` when unconstrained. Negative
/// bounds are read as zero, and non-finite bounds as unconstrained, whether
/// the value was deserialized or built from the variant directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f32>", into = "Option<f32>")]
pub enum Axis {
    /// The element may use at most this many points.
    AtMost(f32),
    /// The parent places no limit on this axis.
    #[default]
    Unconstrained,
}

impl Axis {
    /// This axis with its bound clamped to `0.0..` and non-finite bounds
    /// replaced by [`Axis::Unconstrained`].
    #[inline]
    pub fn normalized(self) -> Self {
        match self {
            Self::AtMost(value) => Self::from(value),
            Self::Unconstrained => Self::Unconstrained,
        }
    }

    /// The largest value allowed on this axis.
    ///
    /// Unconstrained axes report [`f32::INFINITY`]. Never negative.
    #[inline]
    pub fn maximum(self) -> f32 {
        self.bound().unwrap_or(f32::INFINITY)
    }

    /// Returns the bound, if any.
    #[inline]
    pub fn bound(self) -> Option<f32> {
        match self.normalized() {
            Self::AtMost(value) => Some(value),
            Self::Unconstrained => None,
        }
    }

    /// Check if this axis has a finite bound.
    #[inline]
    pub fn is_bounded(self) -> bool {
        self.bound().is_some()
    }
}

impl From<f32> for Axis {
    fn from(value: f32) -> Self {
        if value.is_finite() {
            Self::AtMost(value.max(0.0))
        } else {
            Self::Unconstrained
        }
    }
}

impl From<Axis> for Option<f32> {
    fn from(axis: Axis) -> Self {
        axis.bound()
    }
}

impl From<Option<f32>> for Axis {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Self::Unconstrained, Self::from)
    }
}

/// The space a parent offers an element while measuring it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeConstraint {
    /// Horizontal limit.
    pub width: Axis,
    /// Vertical limit.
    pub height: Axis,
}

impl SizeConstraint {
    /// Create a constraint from per-axis limits.
    ///
    /// Accepts `f32` (infinite values become unconstrained), `Option<f32>`,
    /// or an [`Axis`] directly.
    pub fn new(width: impl Into<Axis>, height: impl Into<Axis>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// A constraint that allows at most `size` on both axes.
    pub fn at_most(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// A constraint with no limit on either axis.
    pub const fn unconstrained() -> Self {
        Self {
            width: Axis::Unconstrained,
            height: Axis::Unconstrained,
        }
    }

    /// The largest size allowed by this constraint.
    pub fn maximum(&self) -> Size {
        Size::new(self.width.maximum(), self.height.maximum())
    }

    /// Clamp `size` so it fits within this constraint.
    pub fn clamp(&self, size: Size) -> Size {
        let max = self.maximum();
        Size::new(
            size.width.clamp(0.0, max.width),
            size.height.clamp(0.0, max.height),
        )
    }
}

impl From<Size> for SizeConstraint {
    fn from(size: Size) -> Self {
        Self::at_most(size)
    }
}
