/*! Geometry types in integer screen coordinates. */

use serde::{Deserialize, Serialize};

/// Rectangle in screen coordinates, edge form (matches the window manager's
/// native representation). `right`/`bottom` are exclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
  pub left: i32,
  pub top: i32,
  pub right: i32,
  pub bottom: i32,
}

impl Rect {
  pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
    Self {
      left,
      top,
      right,
      bottom,
    }
  }

  /// Width in pixels. Negative if the rectangle is inverted.
  pub const fn width(&self) -> i32 {
    self.right - self.left
  }

  /// Height in pixels. Negative if the rectangle is inverted.
  pub const fn height(&self) -> i32 {
    self.bottom - self.top
  }

  /// True when both dimensions are strictly positive.
  ///
  /// The window manager accepts degenerate rectangles in some calls and
  /// rejects them in others; resize requests require a positive size.
  pub const fn has_positive_size(&self) -> bool {
    self.width() > 0 && self.height() > 0
  }

  /// Check if a point is contained within this rectangle.
  pub const fn contains(&self, x: i32, y: i32) -> bool {
    x >= self.left && x < self.right && y >= self.top && y < self.bottom
  }
}


#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  /// Strategy for screen coordinates, wide enough for multi-monitor layouts.
  fn coord() -> impl Strategy<Value = i32> {
    -20_000..20_000i32
  }

  proptest! {
    /// Width/height are translation-invariant.
    #[test]
    fn dimensions_ignore_translation(l in coord(), t in coord(), w in 0..5000i32, h in 0..5000i32, dx in coord(), dy in coord()) {
      let a = Rect::new(l, t, l + w, t + h);
      let b = Rect::new(l + dx, t + dy, l + w + dx, t + h + dy);
      prop_assert_eq!(a.width(), b.width());
      prop_assert_eq!(a.height(), b.height());
    }

    /// A rectangle with positive width and height reports a positive size.
    #[test]
    fn positive_size_iff_both_dimensions_positive(l in coord(), t in coord(), w in -100..100i32, h in -100..100i32) {
      let r = Rect::new(l, t, l + w, t + h);
      prop_assert_eq!(r.has_positive_size(), w > 0 && h > 0);
    }

    /// Every interior point is contained.
    #[test]
    fn interior_points_contained(l in coord(), t in coord(), w in 1..5000i32, h in 1..5000i32) {
      let r = Rect::new(l, t, l + w, t + h);
      prop_assert!(r.contains(l, t), "origin corner");
      prop_assert!(r.contains(l + w - 1, t + h - 1), "far corner, exclusive edges");
      prop_assert!(!r.contains(l + w, t), "right edge excluded");
      prop_assert!(!r.contains(l, t + h), "bottom edge excluded");
    }
  }
}
