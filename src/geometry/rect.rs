use crate::geometry::Point2D;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Option<Self> {
        if left <= right && top <= bottom {
            Some(Rect {
                left,
                top,
                right,
                bottom,
            })
        } else {
            None
        }
    }

    /// Smallest rect covering every point. `None` for an empty slice.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut left = first.x;
        let mut top = first.y;
        let mut right = first.x;
        let mut bottom = first.y;
        for p in rest {
            left = left.min(p.x);
            top = top.min(p.y);
            right = right.max(p.x);
            bottom = bottom.max(p.y);
        }
        Rect::from_ltrb(left, top, right, bottom)
    }

    /// Closed containment test; points on an edge count as inside.
    pub fn contains(&self, p: Point2D) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }
}
