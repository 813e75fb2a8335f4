//! Finite line segments
//!
//! Segments are the workhorse of the collision engine: a ball's movement for
//! one tick is a segment (its trajectory), and every rectangle is tested edge
//! by edge against it.

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rectangle::Rectangle;

/// Absolute tolerance for segment membership and axis-parallel checks
pub const LINE_EPSILON: f64 = 1e-4;

/// Number of bounce zones the paddle's top edge is split into
pub const PADDLE_ZONES: usize = 5;

/// A finite segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Slope of the supporting line; `f64::INFINITY` when the segment is
    /// vertical (including a zero-length segment)
    pub fn incline(&self) -> f64 {
        if self.start.x == self.end.x {
            return f64::INFINITY;
        }
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// y value of the supporting line at x = 0; NaN for vertical segments
    pub fn y_intercept(&self) -> f64 {
        let m = self.incline();
        if m.is_infinite() {
            return f64::NAN;
        }
        self.start.y - m * self.start.x
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    /// Whether the segment runs parallel to the y-axis (vertical)
    pub fn is_parallel_y(&self) -> bool {
        (self.start.x - self.end.x).abs() < LINE_EPSILON
    }

    /// Whether the segment runs parallel to the x-axis (horizontal)
    pub fn is_parallel_x(&self) -> bool {
        (self.start.y - self.end.y).abs() < LINE_EPSILON
    }

    /// Intersection point of two finite segments.
    ///
    /// Each supporting line is written as `a·x + b·y = c` and the 2×2 system
    /// is solved by its determinant. Parallel lines (collinear included) never
    /// intersect. The solved point is only returned if it lies on both
    /// segments.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        let a1 = self.end.y - self.start.y;
        let b1 = self.start.x - self.end.x;
        let c1 = a1 * self.start.x + b1 * self.start.y;

        let a2 = other.end.y - other.start.y;
        let b2 = other.start.x - other.end.x;
        let c2 = a2 * other.start.x + b2 * other.start.y;

        let determinant = a1 * b2 - a2 * b1;
        if determinant == 0.0 {
            return None;
        }

        let x = (b2 * c1 - b1 * c2) / determinant;
        let y = (a1 * c2 - a2 * c1) / determinant;
        let p = Point::new(x, y);

        (self.is_on_line(p) && other.is_on_line(p)).then_some(p)
    }

    pub fn is_intersecting(&self, other: &Line) -> bool {
        self.intersection_with(other).is_some()
    }

    /// Whether `p` lies on this finite segment, within [`LINE_EPSILON`]
    pub fn is_on_line(&self, p: Point) -> bool {
        let in_x = p.x >= self.min_x() - LINE_EPSILON && p.x <= self.max_x() + LINE_EPSILON;
        let in_y = p.y >= self.min_y() - LINE_EPSILON && p.y <= self.max_y() + LINE_EPSILON;

        if self.is_parallel_y() {
            return (p.x - self.start.x).abs() <= LINE_EPSILON && in_y;
        }
        if self.is_parallel_x() {
            return (p.y - self.start.y).abs() <= LINE_EPSILON && in_x;
        }

        let expected_y = self.incline() * p.x + self.y_intercept();
        (p.y - expected_y).abs() <= LINE_EPSILON && in_x && in_y
    }

    /// The intersection with `rect` nearest to this segment's start.
    ///
    /// Ties keep the first point found.
    pub fn closest_intersection_to_start_of_line(&self, rect: &Rectangle) -> Option<Point> {
        rect.intersection_points(self).into_iter().min_by(|a, b| {
            a.distance(self.start)
                .partial_cmp(&b.distance(self.start))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Split a horizontal segment into five equal, contiguous pieces from
    /// left to right. Every piece keeps the start point's y.
    pub fn divide_to_5(&self) -> [Line; PADDLE_ZONES] {
        let y = self.start.y;
        let left = self.min_x();
        let size = (self.max_x() - left) / PADDLE_ZONES as f64;

        std::array::from_fn(|i| {
            let x1 = left + size * i as f64;
            Line::from_coords(x1, y, x1 + size, y)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_incline_and_intercept() {
        let line = Line::from_coords(0.0, 1.0, 2.0, 5.0);
        assert!((line.incline() - 2.0).abs() < EPS);
        assert!((line.y_intercept() - 1.0).abs() < EPS);

        let vertical = Line::from_coords(3.0, 0.0, 3.0, 10.0);
        assert!(vertical.incline().is_infinite());
        assert!(vertical.y_intercept().is_nan());
    }

    #[test]
    fn test_degenerate_line_is_vertical() {
        let dot = Line::from_coords(4.0, 4.0, 4.0, 4.0);
        assert!(dot.incline().is_infinite());
        assert!(dot.is_parallel_y());
        assert!(dot.is_on_line(Point::new(4.0, 4.0)));
        assert!(!dot.is_on_line(Point::new(4.0, 5.0)));
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let a = Line::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Line::from_coords(0.0, 10.0, 10.0, 0.0);
        let p = a.intersection_with(&b).expect("segments cross");
        assert_eq!(p, Point::new(5.0, 5.0));
        assert!(a.is_intersecting(&b));
    }

    #[test]
    fn test_intersection_outside_segments_is_none() {
        // Supporting lines meet at (5, 5), beyond both segments.
        let a = Line::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Line::from_coords(0.0, 10.0, 2.0, 8.0);
        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_intersection_on_one_segment_only_is_none() {
        // Meets a at (5, 5) but b stops at x = 3.
        let a = Line::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Line::from_coords(0.0, 10.0, 3.0, 7.0);
        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_parallel_and_collinear_never_intersect() {
        let a = Line::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Line::from_coords(0.0, 5.0, 10.0, 5.0);
        assert!(a.intersection_with(&b).is_none());

        let overlapping = Line::from_coords(5.0, 0.0, 15.0, 0.0);
        assert!(a.intersection_with(&overlapping).is_none());
    }

    #[test]
    fn test_axis_aligned_intersection() {
        let horizontal = Line::from_coords(100.0, 100.0, 150.0, 100.0);
        let vertical = Line::from_coords(120.0, 90.0, 120.0, 110.0);
        let p = horizontal.intersection_with(&vertical).expect("cross");
        assert_eq!(p, Point::new(120.0, 100.0));
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let trajectory = Line::from_coords(100.0, 90.0, 100.0, 100.0);
        let top = Line::from_coords(100.0, 100.0, 150.0, 100.0);
        assert_eq!(
            trajectory.intersection_with(&top),
            Some(Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn test_is_on_line_general_case_respects_bounds() {
        let line = Line::from_coords(0.0, 0.0, 10.0, 5.0);
        assert!(line.is_on_line(Point::new(4.0, 2.0)));
        // On the infinite line but past the end.
        assert!(!line.is_on_line(Point::new(12.0, 6.0)));
        // Within bounds but off the line.
        assert!(!line.is_on_line(Point::new(4.0, 3.0)));
    }

    #[test]
    fn test_is_on_line_tolerance() {
        let line = Line::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(line.is_on_line(Point::new(5.0, 0.00005)));
        assert!(!line.is_on_line(Point::new(5.0, 0.001)));
        assert!(line.is_on_line(Point::new(10.00005, 0.0)));
    }

    #[test]
    fn test_divide_to_5() {
        let top = Line::from_coords(360.0, 593.0, 440.0, 593.0);
        let zones = top.divide_to_5();
        for (i, zone) in zones.iter().enumerate() {
            let expected_start = 360.0 + 16.0 * i as f64;
            assert!((zone.start().x - expected_start).abs() < EPS);
            assert!((zone.end().x - (expected_start + 16.0)).abs() < EPS);
            assert_eq!(zone.start().y, 593.0);
            assert_eq!(zone.end().y, 593.0);
        }
        assert!((zones[4].end().x - 440.0).abs() < EPS);
    }

    #[test]
    fn test_divide_to_5_reversed_line() {
        let top = Line::from_coords(440.0, 593.0, 360.0, 593.0);
        let zones = top.divide_to_5();
        assert!((zones[0].start().x - 360.0).abs() < EPS);
        assert!((zones[4].end().x - 440.0).abs() < EPS);
    }

    #[test]
    fn test_closest_intersection_to_start() {
        let rect = Rectangle::new(Point::new(100.0, 100.0), 50.0, 20.0);
        // Enters through the left edge, leaves through the right edge.
        let line = Line::from_coords(80.0, 110.0, 170.0, 110.0);
        let p = line.closest_intersection_to_start_of_line(&rect).expect("hit");
        assert_eq!(p, Point::new(100.0, 110.0));

        let reversed = Line::from_coords(170.0, 110.0, 80.0, 110.0);
        let p = reversed
            .closest_intersection_to_start_of_line(&rect)
            .expect("hit");
        assert_eq!(p, Point::new(150.0, 110.0));

        let miss = Line::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(miss.closest_intersection_to_start_of_line(&rect).is_none());
    }

    fn grid_point() -> impl Strategy<Value = Point> {
        (-500i32..500, -500i32..500).prop_map(|(x, y)| Point::new(x as f64, y as f64))
    }

    proptest! {
        #[test]
        fn prop_endpoints_are_on_line(a in grid_point(), b in grid_point()) {
            let line = Line::new(a, b);
            prop_assert!(line.is_on_line(a));
            prop_assert!(line.is_on_line(b));
        }

        #[test]
        fn prop_intersection_is_symmetric(
            a in grid_point(), b in grid_point(), c in grid_point(), d in grid_point()
        ) {
            let l1 = Line::new(a, b);
            let l2 = Line::new(c, d);
            prop_assert_eq!(
                l1.intersection_with(&l2).is_some(),
                l2.intersection_with(&l1).is_some()
            );
        }

        #[test]
        fn prop_intersection_lies_on_both(
            a in grid_point(), b in grid_point(), c in grid_point(), d in grid_point()
        ) {
            let l1 = Line::new(a, b);
            let l2 = Line::new(c, d);
            if let Some(p) = l1.intersection_with(&l2) {
                prop_assert!(p.x >= l1.min_x() - LINE_EPSILON && p.x <= l1.max_x() + LINE_EPSILON);
                prop_assert!(p.x >= l2.min_x() - LINE_EPSILON && p.x <= l2.max_x() + LINE_EPSILON);
                prop_assert!(p.y >= l1.min_y() - LINE_EPSILON && p.y <= l1.max_y() + LINE_EPSILON);
                prop_assert!(p.y >= l2.min_y() - LINE_EPSILON && p.y <= l2.max_y() + LINE_EPSILON);
            }
        }
    }
}
