//! Core value types for stack layout.

use glam::DVec2;

/// A width and height in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a size with the same length in both dimensions.
    pub const fn splat(length: f64) -> Self {
        Self::new(length, length)
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Length along the given axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Axis-aligned rectangle, positioned relative to the stack container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Create a frame with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a frame at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Create a frame from origin and size vectors.
    pub fn from_vecs(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Insets on all four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create uniform insets.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric insets.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Create insets from leading/trailing values, mapping them to left/right
    /// for the given layout direction.
    pub fn directional(
        top: f64,
        leading: f64,
        bottom: f64,
        trailing: f64,
        direction: LayoutDirection,
    ) -> Self {
        match direction {
            LayoutDirection::LeftToRight => Self::new(top, leading, bottom, trailing),
            LayoutDirection::RightToLeft => Self::new(top, trailing, bottom, leading),
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Offsets applied to an item's icon and text relative to their centered
/// position inside the item's content area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconTextInsets {
    pub icon: EdgeInsets,
    pub text: EdgeInsets,
}

/// Horizontal layout direction of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_right_to_left(self) -> bool {
        self == LayoutDirection::RightToLeft
    }
}

/// A stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Side by side
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// The combination of outer stacking (items relative to each other) and
/// inner stacking (icon relative to text) chosen for a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    /// Items side by side, icon beside text.
    HorizontalHorizontal,
    /// Items side by side, icon above text.
    HorizontalVertical,
    /// Items top to bottom, icon beside text.
    VerticalHorizontal,
    /// Items top to bottom, icon above text. Text may wrap.
    VerticalVertical,
}

impl Arrangement {
    /// Axis along which items are stacked.
    pub fn outer(self) -> Axis {
        match self {
            Arrangement::HorizontalHorizontal | Arrangement::HorizontalVertical => Axis::Horizontal,
            Arrangement::VerticalHorizontal | Arrangement::VerticalVertical => Axis::Vertical,
        }
    }

    /// Axis along which icon and text are stacked inside each item.
    pub fn inner(self) -> Axis {
        match self {
            Arrangement::HorizontalHorizontal | Arrangement::VerticalHorizontal => Axis::Horizontal,
            Arrangement::HorizontalVertical | Arrangement::VerticalVertical => Axis::Vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_insets_mirror() {
        let ltr = EdgeInsets::directional(1.0, 2.0, 3.0, 4.0, LayoutDirection::LeftToRight);
        let rtl = EdgeInsets::directional(1.0, 2.0, 3.0, 4.0, LayoutDirection::RightToLeft);

        assert_eq!(ltr, EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rtl, EdgeInsets::new(1.0, 4.0, 3.0, 2.0));
    }

    #[test]
    fn test_insets_totals() {
        let insets = EdgeInsets::symmetric(5.0, 3.0);
        assert!((insets.horizontal() - 10.0).abs() < 0.001);
        assert!((insets.vertical() - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_frame_edges() {
        let frame = Frame::from_vecs(DVec2::new(10.0, 20.0), DVec2::new(30.0, 40.0));
        assert!((frame.right() - 40.0).abs() < 0.001);
        assert!((frame.bottom() - 60.0).abs() < 0.001);
        assert_eq!(frame.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_arrangement_axes() {
        assert_eq!(Arrangement::HorizontalVertical.outer(), Axis::Horizontal);
        assert_eq!(Arrangement::HorizontalVertical.inner(), Axis::Vertical);
        assert_eq!(Arrangement::VerticalHorizontal.outer(), Axis::Vertical);
        assert_eq!(Arrangement::VerticalHorizontal.inner(), Axis::Horizontal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_frame_serializes() {
        let json = serde_json::to_string(&Frame::new(0.0, 8.0, 100.0, 44.0)).unwrap();
        assert_eq!(json, r#"{"x":0.0,"y":8.0,"width":100.0,"height":44.0}"#);
    }
}
