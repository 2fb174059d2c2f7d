use crate::geometry::{Point2D, Polygon};

/// Signed area via the shoelace formula. The sign follows the winding of
/// `points`; fewer than 3 points give 0.
pub fn signed_area(points: &[Point2D]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            points[i].x * points[j].y - points[j].x * points[i].y
        })
        .sum::<f64>()
        * 0.5
}

/// Enclosed area regardless of winding.
pub fn unsigned_area(polygon: &Polygon) -> f64 {
    signed_area(polygon.points()).abs()
}
