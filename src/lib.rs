//! Net enclosed area of nested SVG contours.
//!
//! Each leaf path is flattened to a polygon, measured with the shoelace
//! formula, and placed in a nesting hierarchy by point-in-polygon tests.
//! Areas then combine under the even-odd rule: contours at even depth add,
//! contours at odd depth subtract.

pub mod area;
pub mod config;
pub mod containment;
pub mod contour;
pub mod document;
pub mod error;
pub mod flatten;
pub mod geometry;
pub mod nesting;
pub mod path;
pub mod volume;
pub mod worker;

pub use config::{CURVE_SAMPLES, EngineConfig};
pub use contour::{Analysis, Contour, ContourReport, ContourSet, analyze_svg, analyze_tree};
pub use error::{DocumentError, Warning};
pub use nesting::FillClass;
pub use volume::volume_estimate;
pub use worker::{AnalysisWorker, WorkerEvent};
