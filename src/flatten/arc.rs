//! Elliptical arcs in SVG endpoint form.

use crate::geometry::Point2D;
use std::f64::consts::TAU;

/// An elliptical arc in center form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CenterArc {
    pub center: Point2D,
    pub rx: f64,
    pub ry: f64,
    /// x axis rotation, in radians.
    pub phi: f64,
    pub start_angle: f64,
    /// Signed; positive runs toward increasing angles.
    pub sweep_angle: f64,
}

impl CenterArc {
    /// Converts endpoint parameters to center form.
    ///
    /// Radii that cannot span the two endpoints are scaled up uniformly until
    /// they can. Returns `None` when the arc degenerates: coincident endpoints
    /// or a zero radius.
    pub fn from_endpoints(
        from: Point2D,
        to: Point2D,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if from == to || rx == 0.0 || ry == 0.0 {
            return None;
        }

        let phi = x_axis_rotation.to_radians();
        let (sin, cos) = phi.sin_cos();

        let dx2 = (from.x - to.x) / 2.0;
        let dy2 = (from.y - to.y) / 2.0;
        let x1p = cos * dx2 + sin * dy2;
        let y1p = -sin * dx2 + cos * dy2;
        let x1p_sq = x1p * x1p;
        let y1p_sq = y1p * y1p;

        let radii_check = x1p_sq / (rx * rx) + y1p_sq / (ry * ry);
        if radii_check > 1.0 {
            let scale = radii_check.sqrt();
            rx *= scale;
            ry *= scale;
        }
        let rx_sq = rx * rx;
        let ry_sq = ry * ry;

        let sign = if large_arc != sweep { 1.0 } else { -1.0 };
        let sq = ((rx_sq * ry_sq - rx_sq * y1p_sq - ry_sq * x1p_sq)
            / (rx_sq * y1p_sq + ry_sq * x1p_sq))
            .max(0.0);
        let coef = sign * sq.sqrt();
        let cxp = coef * (rx * y1p / ry);
        let cyp = coef * (-ry * x1p / rx);

        let center = Point2D::new(
            cos * cxp - sin * cyp + (from.x + to.x) / 2.0,
            sin * cxp + cos * cyp + (from.y + to.y) / 2.0,
        );

        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;

        let start_angle = angle_between(1.0, 0.0, ux, uy);
        let mut sweep_angle = angle_between(ux, uy, vx, vy);
        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        } else if sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }

        Some(CenterArc {
            center,
            rx,
            ry,
            phi,
            start_angle,
            sweep_angle,
        })
    }

    /// Point at `theta` on the rotated ellipse.
    pub fn point_at(&self, theta: f64) -> Point2D {
        let (sin, cos) = self.phi.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        Point2D::new(
            cos * self.rx * cos_t - sin * self.ry * sin_t + self.center.x,
            sin * self.rx * cos_t + cos * self.ry * sin_t + self.center.y,
        )
    }

    /// `samples + 1` evenly spaced points from the start angle to the end of
    /// the sweep, both ends included.
    pub fn sample(&self, samples: usize) -> impl Iterator<Item = Point2D> + '_ {
        (0..=samples).map(move |i| {
            let t = i as f64 / samples as f64;
            self.point_at(self.start_angle + t * self.sweep_angle)
        })
    }
}

/// Signed angle from `u` to `v`, in `[-PI, PI]`.
fn angle_between(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
    let angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 { -angle } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn close(a: Point2D, b: Point2D) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn angle_between_axes() {
        assert!((angle_between(1.0, 0.0, 0.0, 1.0) - FRAC_PI_2).abs() < EPS);
        assert!((angle_between(1.0, 0.0, 0.0, -1.0) + FRAC_PI_2).abs() < EPS);
        assert!((angle_between(1.0, 0.0, -1.0, 0.0) - PI).abs() < EPS);
    }

    #[test]
    fn half_circle_center() {
        let arc = CenterArc::from_endpoints(
            Point2D::new(10.0, 0.0),
            Point2D::new(-10.0, 0.0),
            10.0,
            10.0,
            0.0,
            false,
            true,
        )
        .unwrap();
        assert!(close(arc.center, Point2D::ORIGIN));
        assert!(arc.start_angle.abs() < EPS);
        assert!((arc.sweep_angle - PI).abs() < EPS);
        assert!(close(arc.point_at(FRAC_PI_2), Point2D::new(0.0, 10.0)));
    }

    #[test]
    fn sweep_flag_sets_direction() {
        let from = Point2D::new(0.0, 0.0);
        let to = Point2D::new(10.0, 10.0);
        for large_arc in [false, true] {
            let pos = CenterArc::from_endpoints(from, to, 10.0, 10.0, 0.0, large_arc, true).unwrap();
            let neg = CenterArc::from_endpoints(from, to, 10.0, 10.0, 0.0, large_arc, false).unwrap();
            assert!(pos.sweep_angle > 0.0);
            assert!(neg.sweep_angle < 0.0);
        }
    }

    #[test]
    fn large_arc_picks_longer_sweep() {
        let from = Point2D::new(0.0, 0.0);
        let to = Point2D::new(10.0, 10.0);
        let small = CenterArc::from_endpoints(from, to, 10.0, 10.0, 0.0, false, true).unwrap();
        let large = CenterArc::from_endpoints(from, to, 10.0, 10.0, 0.0, true, true).unwrap();
        assert!((small.sweep_angle - FRAC_PI_2).abs() < EPS);
        assert!((large.sweep_angle - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn undersized_radii_are_scaled() {
        let arc = CenterArc::from_endpoints(
            Point2D::new(0.0, 0.0),
            Point2D::new(20.0, 0.0),
            1.0,
            1.0,
            0.0,
            false,
            true,
        )
        .unwrap();
        assert!((arc.rx - 10.0).abs() < EPS);
        assert!((arc.ry - 10.0).abs() < EPS);
        assert!(close(arc.center, Point2D::new(10.0, 0.0)));
    }

    #[test]
    fn samples_span_both_endpoints() {
        let from = Point2D::new(3.0, 1.0);
        let to = Point2D::new(-4.0, 6.0);
        let arc = CenterArc::from_endpoints(from, to, 8.0, 5.0, 25.0, true, false).unwrap();
        let pts: Vec<Point2D> = arc.sample(20).collect();
        assert_eq!(pts.len(), 21);
        assert!((pts[0].x - from.x).abs() < 1e-6 && (pts[0].y - from.y).abs() < 1e-6);
        assert!((pts[20].x - to.x).abs() < 1e-6 && (pts[20].y - to.y).abs() < 1e-6);
    }

    #[test]
    fn degenerate_arcs() {
        let p = Point2D::new(1.0, 1.0);
        assert!(CenterArc::from_endpoints(p, p, 5.0, 5.0, 0.0, false, true).is_none());
        assert!(
            CenterArc::from_endpoints(p, Point2D::ORIGIN, 0.0, 5.0, 0.0, false, true).is_none()
        );
    }
}
