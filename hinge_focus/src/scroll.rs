// Copyright 2026 the Hinge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal "nearest" scroll computation.

use kurbo::{Rect, Vec2};

/// Offset to add to a scroll position so that `target` becomes visible inside
/// `viewport`, moving as little as possible.
///
/// Both rectangles must be in the same coordinate space. On each axis:
/// - a target already inside the viewport needs no movement;
/// - a target sticking out past the end is aligned to the end;
/// - a target sticking out before the start, or larger than the viewport, is
///   aligned to the start.
///
/// ```rust
/// use kurbo::{Rect, Vec2};
/// use hinge_focus::scroll_into_view_nearest;
///
/// let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let below = Rect::new(0.0, 120.0, 100.0, 140.0);
/// assert_eq!(scroll_into_view_nearest(viewport, below), Vec2::new(0.0, 40.0));
/// ```
pub fn scroll_into_view_nearest(viewport: Rect, target: Rect) -> Vec2 {
    Vec2::new(
        axis_delta(viewport.x0, viewport.x1, target.x0, target.x1),
        axis_delta(viewport.y0, viewport.y1, target.y0, target.y1),
    )
}

fn axis_delta(view_start: f64, view_end: f64, start: f64, end: f64) -> f64 {
    if start >= view_start && end <= view_end {
        return 0.0;
    }
    if start < view_start || end - start > view_end - view_start {
        start - view_start
    } else {
        end - view_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_needs_no_scroll() {
        let view = Rect::new(0.0, 0.0, 100.0, 100.0);
        let target = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(scroll_into_view_nearest(view, target), Vec2::ZERO);
    }

    #[test]
    fn above_aligns_to_start() {
        let view = Rect::new(0.0, 50.0, 100.0, 150.0);
        let target = Rect::new(0.0, 20.0, 100.0, 40.0);
        assert_eq!(scroll_into_view_nearest(view, target), Vec2::new(0.0, -30.0));
    }

    #[test]
    fn oversized_aligns_to_start() {
        let view = Rect::new(0.0, 0.0, 100.0, 50.0);
        let target = Rect::new(0.0, 60.0, 100.0, 200.0);
        assert_eq!(scroll_into_view_nearest(view, target), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn both_axes() {
        let view = Rect::new(0.0, 0.0, 100.0, 100.0);
        let target = Rect::new(110.0, 120.0, 130.0, 140.0);
        assert_eq!(scroll_into_view_nearest(view, target), Vec2::new(30.0, 40.0));
    }
}
