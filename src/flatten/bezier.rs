use crate::geometry::Point2D;

/// Evaluates a cubic Bézier at `t` in Bernstein form.
pub fn cubic_point(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

/// Evaluates a quadratic Bézier at `t` in Bernstein form.
pub fn quadratic_point(p0: Point2D, p1: Point2D, p2: Point2D, t: f64) -> Point2D {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

/// Parameter values `1/n, 2/n, ..., n/n`. The curve start is skipped since
/// the pen already sits there.
pub fn sample_params(samples: usize) -> impl Iterator<Item = f64> {
    (1..=samples).map(move |i| i as f64 / samples as f64)
}
