use crate::geometry::{Point2D, Polygon};
use std::borrow::Borrow;

/// Crossing-number test: casts a ray toward +x and counts edge crossings.
///
/// Edges are half-open in y, so a ray through a vertex is counted once.
pub fn point_in_polygon(point: Point2D, polygon: &Polygon) -> bool {
    // A point outside the bounding box cannot have an odd crossing count.
    if let Some(bb) = polygon.bounding_box() {
        if !bb.contains(point) {
            return false;
        }
    }

    let Point2D { x, y } = point;
    polygon.edges().fold(false, |inside, (pj, pi)| {
        let crosses =
            (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x;
        inside ^ crosses
    })
}

/// Whether `inner` sits inside `outer`.
///
/// Tests the first two points of `inner` when it has more than 3 points,
/// otherwise only the first. This is a heuristic: concave shapes can fool it.
pub fn nested_inside(outer: &Polygon, inner: &Polygon) -> bool {
    let tested = if inner.len() > 3 { 2 } else { 1 };
    inner.points()[..tested]
        .iter()
        .all(|&p| point_in_polygon(p, outer))
}

/// Pairwise "contains" relation over a contour set, one flag per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainmentMatrix {
    len: usize,
    flags: Vec<bool>,
}

impl ContainmentMatrix {
    /// Tests every ordered pair `(outer, inner)` with `outer != inner`.
    pub fn build<P: Borrow<Polygon>>(polygons: &[P]) -> Self {
        let len = polygons.len();
        let mut flags = vec![false; len * len];
        for (i, outer) in polygons.iter().enumerate() {
            for (j, inner) in polygons.iter().enumerate() {
                if i != j {
                    flags[i * len + j] = nested_inside(outer.borrow(), inner.borrow());
                }
            }
        }
        ContainmentMatrix { len, flags }
    }

    /// Builds a matrix from explicit `(outer, inner)` edges.
    pub fn from_edges(len: usize, edges: &[(usize, usize)]) -> Self {
        let mut flags = vec![false; len * len];
        for &(outer, inner) in edges {
            if outer != inner && outer < len && inner < len {
                flags[outer * len + inner] = true;
            }
        }
        ContainmentMatrix { len, flags }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, outer: usize, inner: usize) -> bool {
        self.flags[outer * self.len + inner]
    }

    /// Indices of every contour that contains `inner`.
    pub fn containers_of(&self, inner: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&outer| self.contains(outer, inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cy: f64, side: f64) -> Polygon {
        let h = side / 2.0;
        Polygon::new(vec![
            Point2D::new(cx - h, cy - h),
            Point2D::new(cx + h, cy - h),
            Point2D::new(cx + h, cy + h),
            Point2D::new(cx - h, cy + h),
            Point2D::new(cx - h, cy - h),
        ])
        .unwrap()
    }

    #[test]
    fn point_inside_and_outside() {
        let sq = square(0.0, 0.0, 10.0);
        assert!(point_in_polygon(Point2D::new(0.0, 0.0), &sq));
        assert!(point_in_polygon(Point2D::new(4.9, -4.9), &sq));
        assert!(!point_in_polygon(Point2D::new(6.0, 0.0), &sq));
        assert!(!point_in_polygon(Point2D::new(-20.0, 0.0), &sq));
    }

    #[test]
    fn point_in_concave_notch() {
        // U shape opening upward: the notch is outside.
        let u = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(30.0, 0.0),
            Point2D::new(30.0, 30.0),
            Point2D::new(20.0, 30.0),
            Point2D::new(20.0, 10.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(10.0, 30.0),
            Point2D::new(0.0, 30.0),
        ])
        .unwrap();
        assert!(!point_in_polygon(Point2D::new(15.0, 20.0), &u));
        assert!(point_in_polygon(Point2D::new(5.0, 20.0), &u));
        assert!(point_in_polygon(Point2D::new(15.0, 5.0), &u));
    }

    #[test]
    fn concentric_squares_nest_one_way() {
        let outer = square(0.0, 0.0, 20.0);
        let inner = square(0.0, 0.0, 10.0);
        assert!(nested_inside(&outer, &inner));
        assert!(!nested_inside(&inner, &outer));
    }

    #[test]
    fn only_first_point_tested_for_small_polygons() {
        let outer = square(0.0, 0.0, 10.0);
        // Triangle with the first point inside and the rest far outside.
        let tri = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(100.0, 100.0),
        ])
        .unwrap();
        assert!(nested_inside(&outer, &tri));
    }

    #[test]
    fn second_point_must_also_be_inside() {
        let outer = square(0.0, 0.0, 10.0);
        let straddling = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(50.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(!nested_inside(&outer, &straddling));
    }

    #[test]
    fn matrix_of_disjoint_shapes_is_empty() {
        let polys = [square(0.0, 0.0, 5.0), square(20.0, 0.0, 5.0), square(40.0, 0.0, 5.0)];
        let m = ContainmentMatrix::build(&polys);
        assert_eq!(m.len(), 3);
        for inner in 0..3 {
            assert_eq!(m.containers_of(inner).count(), 0);
        }
    }

    #[test]
    fn matrix_of_concentric_squares() {
        let polys = [square(0.0, 0.0, 10.0), square(0.0, 0.0, 30.0), square(0.0, 0.0, 20.0)];
        let m = ContainmentMatrix::build(&polys);
        assert_eq!(m.containers_of(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(m.containers_of(1).count(), 0);
        assert_eq!(m.containers_of(2).collect::<Vec<_>>(), vec![1]);
        assert!(!m.contains(0, 0));
    }

    #[test]
    fn from_edges_ignores_self_and_out_of_range() {
        let m = ContainmentMatrix::from_edges(2, &[(0, 1), (1, 1), (0, 7)]);
        assert!(m.contains(0, 1));
        assert!(!m.contains(1, 1));
        assert!(!m.contains(1, 0));
    }
}
