//! Pointer geometry: turns an anchor and the live pointer position into
//! shape parameters.
//!
//! Every function here is pure. Degenerate drags (anchor == current) are
//! valid and produce zero-sized results.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default arrowhead barb length in surface units.
pub const DEFAULT_HEAD_LENGTH: f64 = 20.0;

/// Default angle between the shaft and each barb (30°).
pub const DEFAULT_HEAD_ANGLE: f64 = PI / 6.0;

/// Axis-aligned box spanned by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DragRect {
    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Circle spanned by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCircle {
    pub center: Point,
    pub radius: f64,
}

/// Shaft and barb endpoints of an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowGeometry {
    pub shaft_start: Point,
    pub shaft_end: Point,
    /// Barb on the left of the shaft direction (y grows downward).
    pub left_barb: Point,
    /// Barb on the right of the shaft direction.
    pub right_barb: Point,
}

/// Rectangle with positive extent regardless of drag direction.
pub fn rect_from_drag(anchor: Point, current: Point) -> DragRect {
    DragRect {
        x: anchor.x.min(current.x),
        y: anchor.y.min(current.y),
        width: (current.x - anchor.x).abs(),
        height: (current.y - anchor.y).abs(),
    }
}

/// Circle whose diameter is the drag vector.
///
/// The radius is half the drag length and the center sits one radius from
/// the anchor toward the pointer, i.e. on the midpoint.
pub fn circle_from_drag(anchor: Point, current: Point) -> DragCircle {
    let delta = current - anchor;
    let radius = delta.hypot() / 2.0;
    let center = if radius > 0.0 {
        anchor + delta.normalize() * radius
    } else {
        anchor
    };
    DragCircle { center, radius }
}

/// Arrow from `anchor` to `current` using the default head size.
pub fn arrow_from_drag(anchor: Point, current: Point) -> ArrowGeometry {
    arrow_geometry(anchor, current, DEFAULT_HEAD_LENGTH, DEFAULT_HEAD_ANGLE)
}

/// Arrow from `anchor` to `current`.
///
/// Each barb is the tip minus `head_length` along the shaft angle rotated by
/// `head_angle`. A zero-length shaft has angle 0 (`atan2(0, 0)`), so its barbs
/// point back along the x axis.
pub fn arrow_geometry(
    anchor: Point,
    current: Point,
    head_length: f64,
    head_angle: f64,
) -> ArrowGeometry {
    let delta = current - anchor;
    let angle = delta.y.atan2(delta.x);
    let barb = |rotation: f64| current - Vec2::from_angle(angle + rotation) * head_length;

    ArrowGeometry {
        shaft_start: anchor,
        shaft_end: current,
        left_barb: barb(head_angle),
        right_barb: barb(-head_angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rect_positive_extent_all_directions() {
        let anchor = Point::new(50.0, 50.0);
        for (dx, dy) in [(30.0, 20.0), (-30.0, 20.0), (30.0, -20.0), (-30.0, -20.0)] {
            let current = Point::new(anchor.x + dx, anchor.y + dy);
            let r = rect_from_drag(anchor, current);
            assert!(approx(r.width, f64::abs(dx)));
            assert!(approx(r.height, f64::abs(dy)));
            assert!(approx(r.x, anchor.x.min(current.x)));
            assert!(approx(r.y, anchor.y.min(current.y)));
        }
    }

    #[test]
    fn test_rect_scenario() {
        let r = rect_from_drag(Point::new(10.0, 10.0), Point::new(50.0, 30.0));
        assert_eq!(r, DragRect { x: 10.0, y: 10.0, width: 40.0, height: 20.0 });
    }

    #[test]
    fn test_rect_zero_drag() {
        let r = rect_from_drag(Point::new(5.0, 7.0), Point::new(5.0, 7.0));
        assert_eq!(r.origin(), Point::new(5.0, 7.0));
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn test_circle_scenario() {
        let c = circle_from_drag(Point::new(0.0, 0.0), Point::new(40.0, 0.0));
        assert!(approx(c.radius, 20.0));
        assert!(approx(c.center.x, 20.0));
        assert!(approx(c.center.y, 0.0));
    }

    #[test]
    fn test_circle_centered_on_midpoint() {
        let anchor = Point::new(-12.0, 7.5);
        let current = Point::new(33.0, -41.0);
        let c = circle_from_drag(anchor, current);
        let mid = anchor.midpoint(current);
        assert!(approx(c.radius, anchor.distance(current) / 2.0));
        assert!(approx(c.center.x, mid.x));
        assert!(approx(c.center.y, mid.y));
    }

    #[test]
    fn test_circle_zero_drag() {
        let c = circle_from_drag(Point::new(3.0, 4.0), Point::new(3.0, 4.0));
        assert_eq!(c.radius, 0.0);
        assert_eq!(c.center, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_arrow_horizontal() {
        let a = arrow_from_drag(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        let back = 100.0 - 20.0 * (PI / 6.0).cos();
        assert_eq!(a.shaft_start, Point::new(0.0, 0.0));
        assert_eq!(a.shaft_end, Point::new(100.0, 0.0));
        assert!(approx(a.left_barb.x, back));
        assert!(approx(a.left_barb.y, -10.0));
        assert!(approx(a.right_barb.x, back));
        assert!(approx(a.right_barb.y, 10.0));
    }

    #[test]
    fn test_barb_length_and_angle_independent_of_shaft() {
        for end in [Point::new(3.0, 4.0), Point::new(-250.0, 80.0), Point::new(0.0, -1000.0)] {
            let a = arrow_from_drag(Point::ZERO, end);
            let shaft = (end - Point::ZERO).atan2();
            for (barb, sign) in [(a.left_barb, 1.0), (a.right_barb, -1.0)] {
                let back = end - barb;
                assert!(approx(back.hypot(), DEFAULT_HEAD_LENGTH));
                let diff = back.atan2() - shaft;
                let diff = diff.sin().atan2(diff.cos());
                assert!(approx(diff, sign * DEFAULT_HEAD_ANGLE));
            }
        }
    }

    #[test]
    fn test_arrow_zero_length_uses_angle_zero() {
        let tip = Point::new(10.0, 10.0);
        let a = arrow_from_drag(tip, tip);
        let back = 10.0 - 20.0 * (PI / 6.0).cos();
        assert!(approx(a.left_barb.x, back));
        assert!(approx(a.left_barb.y, 0.0));
        assert!(approx(a.right_barb.x, back));
        assert!(approx(a.right_barb.y, 20.0));
    }
}
