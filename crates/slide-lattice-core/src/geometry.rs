//! Basic geometry types and the slide axis.
//!
//! Title strips lay out their items along a single axis. [`SlideDirection`]
//! picks that axis and projects points, sizes and rectangles onto it, so the
//! offset math in the controllers is written once for both directions.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

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

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }
}

/// The axis a title strip (and its paired content pager) slides along.
///
/// Fixed for the lifetime of a controller. Horizontal strips use x/width,
/// vertical strips use y/height; the orthogonal coordinate of every offset
/// the controllers produce is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Items laid out left to right.
    #[default]
    Horizontal,
    /// Items laid out top to bottom.
    Vertical,
}

impl SlideDirection {
    /// Returns true for [`SlideDirection::Horizontal`].
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SlideDirection::Horizontal)
    }

    /// Project a point onto the slide axis.
    #[inline]
    pub fn coordinate(&self, point: Point) -> f32 {
        match self {
            SlideDirection::Horizontal => point.x,
            SlideDirection::Vertical => point.y,
        }
    }

    /// Build a point with `value` on the slide axis and zero on the other.
    #[inline]
    pub fn point(&self, value: f32) -> Point {
        match self {
            SlideDirection::Horizontal => Point::new(value, 0.0),
            SlideDirection::Vertical => Point::new(0.0, value),
        }
    }

    /// Length of a size along the slide axis.
    #[inline]
    pub fn length(&self, size: Size) -> f32 {
        match self {
            SlideDirection::Horizontal => size.width,
            SlideDirection::Vertical => size.height,
        }
    }

    /// Length of a size across the slide axis.
    #[inline]
    pub fn cross_length(&self, size: Size) -> f32 {
        match self {
            SlideDirection::Horizontal => size.height,
            SlideDirection::Vertical => size.width,
        }
    }

    /// Build a size from lengths along and across the slide axis.
    #[inline]
    pub fn size(&self, length: f32, cross_length: f32) -> Size {
        match self {
            SlideDirection::Horizontal => Size::new(length, cross_length),
            SlideDirection::Vertical => Size::new(cross_length, length),
        }
    }

    /// Leading edge of a rectangle on the slide axis.
    #[inline]
    pub fn origin(&self, rect: &Rect) -> f32 {
        self.coordinate(rect.origin)
    }

    /// Extent of a rectangle on the slide axis.
    #[inline]
    pub fn extent(&self, rect: &Rect) -> f32 {
        self.length(rect.size)
    }

    /// Trailing edge of a rectangle on the slide axis.
    #[inline]
    pub fn max_edge(&self, rect: &Rect) -> f32 {
        self.origin(rect) + self.extent(rect)
    }

    /// Center of a rectangle on the slide axis.
    #[inline]
    pub fn center(&self, rect: &Rect) -> f32 {
        self.coordinate(rect.center())
    }

    /// Build a rectangle from a position and extent along the slide axis and
    /// a cross extent starting at zero.
    #[inline]
    pub fn rect(&self, position: f32, extent: f32, cross_extent: f32) -> Rect {
        Rect {
            origin: self.point(position),
            size: self.size(extent, cross_extent),
        }
    }
}
