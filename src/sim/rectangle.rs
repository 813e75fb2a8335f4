//! Axis-aligned rectangles
//!
//! Edges are derived from the upper-left corner on demand and never stored,
//! so relocating the corner (the paddle does this every tick) moves all four
//! edges with it.

use serde::{Deserialize, Serialize};

use super::line::Line;
use super::point::Point;

/// Which edges of a rectangle a point touches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeContact {
    /// On the top or bottom edge
    pub horizontal: bool,
    /// On the left or right edge
    pub vertical: bool,
}

impl EdgeContact {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    upper_left: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Negative sizes are clamped to zero
    pub fn new(upper_left: Point, width: f64, height: f64) -> Self {
        Self {
            upper_left,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn upper_right(&self) -> Point {
        Point::new(self.upper_left.x + self.width, self.upper_left.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.upper_left.x, self.upper_left.y + self.height)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.upper_left.x + self.width, self.upper_left.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.upper_left.x + self.width / 2.0,
            self.upper_left.y + self.height / 2.0,
        )
    }

    /// Relocate the rectangle; size stays fixed
    pub fn set_upper_left(&mut self, upper_left: Point) {
        self.upper_left = upper_left;
    }

    pub fn top_line(&self) -> Line {
        Line::new(self.upper_left, self.upper_right())
    }

    pub fn right_line(&self) -> Line {
        Line::new(self.upper_right(), self.bottom_right())
    }

    pub fn bottom_line(&self) -> Line {
        Line::new(self.bottom_left(), self.bottom_right())
    }

    pub fn left_line(&self) -> Line {
        Line::new(self.upper_left, self.bottom_left())
    }

    /// The four edges in test order: left, right, top, bottom
    pub fn edges(&self) -> [Line; 4] {
        [
            self.left_line(),
            self.right_line(),
            self.top_line(),
            self.bottom_line(),
        ]
    }

    /// Every point where `line` crosses one of the edges.
    ///
    /// A line collinear with an edge contributes nothing for that edge, so a
    /// crossing yields at most two points in practice.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        self.edges()
            .iter()
            .filter_map(|edge| edge.intersection_with(line))
            .collect()
    }

    /// Edges that `p` lies on; a corner touches both
    pub fn edge_contact(&self, p: Point) -> EdgeContact {
        EdgeContact {
            horizontal: self.top_line().is_on_line(p) || self.bottom_line().is_on_line(p),
            vertical: self.left_line().is_on_line(p) || self.right_line().is_on_line(p),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.upper_left.x
            && p.x <= self.upper_left.x + self.width
            && p.y >= self.upper_left.y
            && p.y <= self.upper_left.y + self.height
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[upper_left={}, width={}, height={}]",
            self.upper_left, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), 50.0, 20.0)
    }

    #[test]
    fn test_corners() {
        let r = block();
        assert_eq!(r.upper_right(), Point::new(150.0, 100.0));
        assert_eq!(r.bottom_left(), Point::new(100.0, 120.0));
        assert_eq!(r.bottom_right(), Point::new(150.0, 120.0));
        assert_eq!(r.center(), Point::new(125.0, 110.0));
    }

    #[test]
    fn test_relocation_moves_edges() {
        let mut r = block();
        r.set_upper_left(Point::new(0.0, 0.0));
        assert_eq!(r.top_line().end(), Point::new(50.0, 0.0));
        assert_eq!(r.bottom_line().start(), Point::new(0.0, 20.0));
        assert_eq!(r.width(), 50.0);
        assert_eq!(r.height(), 20.0);
    }

    #[test]
    fn test_no_intersection_when_apart() {
        let line = Line::from_coords(0.0, 0.0, 50.0, 50.0);
        assert!(block().intersection_points(&line).is_empty());
    }

    #[test]
    fn test_single_edge_crossing() {
        // Starts inside, leaves through the top edge.
        let line = Line::from_coords(110.0, 110.0, 130.0, 90.0);
        let points = block().intersection_points(&line);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 120.0).abs() < 1e-4);
        assert!((points[0].y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_crossing_through_yields_two_points() {
        let line = Line::from_coords(125.0, 50.0, 125.0, 150.0);
        let points = block().intersection_points(&line);
        assert_eq!(points.len(), 2);
        assert!(points.contains(&Point::new(125.0, 100.0)));
        assert!(points.contains(&Point::new(125.0, 120.0)));
    }

    #[test]
    fn test_collinear_edge_is_ignored() {
        let line = Line::from_coords(90.0, 100.0, 160.0, 100.0);
        let points = block().intersection_points(&line);
        // Top edge is collinear; only left and right edges report.
        assert_eq!(points.len(), 2);
        assert!(points.contains(&Point::new(100.0, 100.0)));
        assert!(points.contains(&Point::new(150.0, 100.0)));
    }

    #[test]
    fn test_edge_contact() {
        let r = block();
        assert_eq!(
            r.edge_contact(Point::new(120.0, 100.0)),
            EdgeContact { horizontal: true, vertical: false }
        );
        assert_eq!(
            r.edge_contact(Point::new(150.0, 110.0)),
            EdgeContact { horizontal: false, vertical: true }
        );
        assert_eq!(
            r.edge_contact(Point::new(100.0, 120.0)),
            EdgeContact { horizontal: true, vertical: true }
        );
        assert!(!r.edge_contact(Point::new(125.0, 110.0)).any());
    }

    #[test]
    fn test_zero_size_rectangle_is_tolerated() {
        let r = Rectangle::new(Point::new(10.0, 10.0), 0.0, 0.0);
        let line = Line::from_coords(0.0, 0.0, 20.0, 20.0);
        // Degenerate edges are points; nothing panics.
        let _ = r.intersection_points(&line);
        let negative = Rectangle::new(Point::new(0.0, 0.0), -5.0, 3.0);
        assert_eq!(negative.width(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_segment_left_of_rectangle_never_hits(
            x1 in -500i32..99, y1 in -500i32..500, x2 in -500i32..99, y2 in -500i32..500
        ) {
            let line = Line::from_coords(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
            prop_assert!(block().intersection_points(&line).is_empty());
        }
    }
}
