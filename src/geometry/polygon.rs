use crate::geometry::{Point2D, Rect};

/// A closed contour approximated by straight edges.
///
/// Closure is implied: the edge from the last point back to the first is part
/// of the polygon whether or not the two points coincide. Always holds at
/// least one point and is never modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2D>,
    bounding_box: Option<Rect>,
}

impl Polygon {
    /// Returns `None` when `points` is empty.
    pub fn new(points: Vec<Point2D>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let bounding_box = Rect::from_points(&points);
        Some(Polygon {
            points,
            bounding_box,
        })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `None` when no coordinate is comparable.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box
    }

    /// Iterates the closed edge list as `(previous, current)` pairs, starting
    /// with the closing edge `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let j = if i == 0 { n - 1 } else { i - 1 };
            (self.points[j], self.points[i])
        })
    }
}
