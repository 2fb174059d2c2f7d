use crate::geometry::Point2D;
use svgtypes::{PathParser, PathSegment};

/// One drawing command in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2D),
    LineTo(Point2D),
    HorizontalLineTo(f64),
    VerticalLineTo(f64),
    ClosePath,
    CubicCurveTo {
        ctrl1: Point2D,
        ctrl2: Point2D,
        to: Point2D,
    },
    QuadraticCurveTo {
        ctrl: Point2D,
        to: Point2D,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        /// Rotation of the ellipse's x axis, in degrees.
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2D,
    },
    /// A command outside the engine's command set, kept so the flattener can
    /// report it. `to` is where the skipped command leaves the pen.
    Unsupported { code: char, to: Point2D },
}

impl PathCommand {
    /// The absolute-form letter of the command.
    pub fn code(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::HorizontalLineTo(_) => 'H',
            PathCommand::VerticalLineTo(_) => 'V',
            PathCommand::ClosePath => 'Z',
            PathCommand::CubicCurveTo { .. } => 'C',
            PathCommand::QuadraticCurveTo { .. } => 'Q',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::Unsupported { code, .. } => *code,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPath {
    pub commands: Vec<PathCommand>,
    /// Set when the path data stopped parsing early. Commands before the
    /// error are still in `commands`.
    pub error: Option<String>,
}

/// Tokenizes path data into absolute commands.
///
/// Relative commands are resolved against the tokenizer's own pen. Smooth
/// curves (`S`, `T`) come out as [`PathCommand::Unsupported`].
pub fn parse_path_data(d: &str) -> ParsedPath {
    let mut parsed = ParsedPath::default();
    let mut pen = Point2D::ORIGIN;
    let mut subpath_start = Point2D::ORIGIN;

    for segment in PathParser::from(d) {
        let segment = match segment {
            Ok(segment) => segment,
            Err(err) => {
                parsed.error = Some(err.to_string());
                break;
            }
        };

        let origin = pen;
        let resolve = move |abs: bool, x: f64, y: f64| {
            if abs {
                Point2D::new(x, y)
            } else {
                Point2D::new(origin.x + x, origin.y + y)
            }
        };

        let command = match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let to = resolve(abs, x, y);
                subpath_start = to;
                PathCommand::MoveTo(to)
            }
            PathSegment::LineTo { abs, x, y } => PathCommand::LineTo(resolve(abs, x, y)),
            PathSegment::HorizontalLineTo { abs, x } => {
                PathCommand::HorizontalLineTo(if abs { x } else { pen.x + x })
            }
            PathSegment::VerticalLineTo { abs, y } => {
                PathCommand::VerticalLineTo(if abs { y } else { pen.y + y })
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => PathCommand::CubicCurveTo {
                ctrl1: resolve(abs, x1, y1),
                ctrl2: resolve(abs, x2, y2),
                to: resolve(abs, x, y),
            },
            PathSegment::Quadratic { abs, x1, y1, x, y } => PathCommand::QuadraticCurveTo {
                ctrl: resolve(abs, x1, y1),
                to: resolve(abs, x, y),
            },
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to: resolve(abs, x, y),
            },
            PathSegment::ClosePath { .. } => PathCommand::ClosePath,
            PathSegment::SmoothCurveTo { abs, x, y, .. } => PathCommand::Unsupported {
                code: 'S',
                to: resolve(abs, x, y),
            },
            PathSegment::SmoothQuadratic { abs, x, y } => PathCommand::Unsupported {
                code: 'T',
                to: resolve(abs, x, y),
            },
        };

        pen = match &command {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo(to)
            | PathCommand::CubicCurveTo { to, .. }
            | PathCommand::QuadraticCurveTo { to, .. }
            | PathCommand::ArcTo { to, .. }
            | PathCommand::Unsupported { to, .. } => *to,
            PathCommand::HorizontalLineTo(x) => Point2D::new(*x, pen.y),
            PathCommand::VerticalLineTo(y) => Point2D::new(pen.x, *y),
            PathCommand::ClosePath => subpath_start,
        };
        parsed.commands.push(command);
    }

    parsed
}
