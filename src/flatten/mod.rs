//! Curve flattening: path commands in, sampled contour points out.

pub mod arc;
pub mod bezier;

use crate::geometry::Point2D;
use crate::path::PathCommand;
use arc::CenterArc;
use bezier::{cubic_point, quadratic_point, sample_params};

/// Pen position threaded through the command sequence.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PenState {
    pub current: Point2D,
    /// Where the current subpath began; `ClosePath` returns here.
    pub start: Point2D,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub points: Vec<Point2D>,
    /// Command letters that were skipped, in order.
    pub skipped: Vec<char>,
}

/// Flattens a command sequence with `samples` points per curve.
pub fn flatten(commands: &[PathCommand], samples: usize) -> Flattened {
    let samples = samples.max(1);
    let mut out = Flattened::default();
    commands.iter().fold(PenState::default(), |pen, command| {
        pen.apply(command, samples, &mut out)
    });
    out
}

impl PenState {
    /// Appends the points one command contributes and returns the next pen.
    pub fn apply(self, command: &PathCommand, samples: usize, out: &mut Flattened) -> PenState {
        let points = &mut out.points;
        match *command {
            PathCommand::MoveTo(to) => {
                points.push(to);
                PenState {
                    current: to,
                    start: to,
                }
            }
            PathCommand::LineTo(to) => self.line_to(to, points),
            PathCommand::HorizontalLineTo(x) => {
                self.line_to(Point2D::new(x, self.current.y), points)
            }
            PathCommand::VerticalLineTo(y) => {
                self.line_to(Point2D::new(self.current.x, y), points)
            }
            PathCommand::ClosePath => self.line_to(self.start, points),
            PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => {
                let from = self.current;
                points.extend(sample_params(samples).map(|t| cubic_point(from, ctrl1, ctrl2, to, t)));
                self.moved_to(to)
            }
            PathCommand::QuadraticCurveTo { ctrl, to } => {
                let from = self.current;
                points.extend(sample_params(samples).map(|t| quadratic_point(from, ctrl, to, t)));
                self.moved_to(to)
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => {
                match CenterArc::from_endpoints(
                    self.current,
                    to,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                ) {
                    Some(arc) => points.extend(arc.sample(samples)),
                    // A zero radius draws a straight line.
                    None if self.current != to => points.push(to),
                    None => {}
                }
                // Land exactly on the declared end point, not the last sample.
                self.moved_to(to)
            }
            PathCommand::Unsupported { code, to } => {
                log::warn!("skipping unsupported path command '{code}'");
                out.skipped.push(code);
                self.moved_to(to)
            }
        }
    }

    fn line_to(self, to: Point2D, points: &mut Vec<Point2D>) -> PenState {
        points.push(to);
        self.moved_to(to)
    }

    fn moved_to(self, to: Point2D) -> PenState {
        PenState {
            current: to,
            ..self
        }
    }
}
