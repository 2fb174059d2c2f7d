//! Contours and the two-pass analysis that turns them into one net area.

use crate::area::unsigned_area;
use crate::config::EngineConfig;
use crate::containment::ContainmentMatrix;
use crate::document::{Element, parse_document};
use crate::error::{DocumentError, Warning};
use crate::flatten::flatten;
use crate::geometry::Polygon;
use crate::nesting::{FillClass, nesting_depths, net_area};
use crate::path::parse_path_data;

/// One closed shape taken from a leaf element.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Position of the source element among the document's leaves.
    pub element: usize,
    pub source: String,
    pub polygon: Polygon,
    pub area: f64,
    pub depth: usize,
}

impl Contour {
    /// Flattens `source` and computes its unsigned area. Depth starts at 0.
    pub fn from_path_data(
        element: usize,
        source: &str,
        config: &EngineConfig,
        warnings: &mut Vec<Warning>,
    ) -> Option<Self> {
        let parsed = parse_path_data(source);
        if let Some(message) = parsed.error {
            log::warn!("element {element}: malformed path data: {message}");
            warnings.push(Warning::MalformedPathData { element, message });
        }

        let flat = flatten(&parsed.commands, config.curve_samples);
        warnings.extend(
            flat.skipped
                .iter()
                .map(|&code| Warning::UnsupportedCommand { element, code }),
        );

        let Some(polygon) = Polygon::new(flat.points) else {
            log::warn!("element {element}: path data has no points");
            warnings.push(Warning::EmptyContour { element });
            return None;
        };
        let area = unsigned_area(&polygon);
        log::debug!(
            "element {element}: {} points, area {area:.3}",
            polygon.len()
        );

        Some(Contour {
            element,
            source: source.to_string(),
            polygon,
            area,
            depth: 0,
        })
    }

    pub fn fill(&self) -> FillClass {
        FillClass::from_depth(self.depth)
    }
}

/// All contours of one document. Owns its contours; replaced wholesale when
/// a new document arrives.
#[derive(Debug, Clone, Default)]
pub struct ContourSet {
    contours: Vec<Contour>,
    warnings: Vec<Warning>,
}

impl ContourSet {
    /// First pass: one contour per leaf carrying path data.
    pub fn from_leaves(leaves: &[&Element], config: &EngineConfig) -> Self {
        let mut set = ContourSet::default();
        for (element, leaf) in leaves.iter().enumerate() {
            let Some(source) = leaf.path_data.as_deref() else {
                log::debug!("element {element}: <{}> has no path data", leaf.name);
                set.warnings.push(Warning::MissingPathData {
                    element,
                    name: leaf.name.clone(),
                });
                continue;
            };
            if let Some(contour) =
                Contour::from_path_data(element, source, config, &mut set.warnings)
            {
                set.contours.push(contour);
            }
        }
        set
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn containment(&self) -> ContainmentMatrix {
        let polygons: Vec<&Polygon> = self.contours.iter().map(|c| &c.polygon).collect();
        ContainmentMatrix::build(&polygons)
    }

    /// Second pass: nesting depths, then the even-odd net area.
    pub fn analyze(mut self) -> Analysis {
        let depths = nesting_depths(&self.containment());
        for (contour, depth) in self.contours.iter_mut().zip(&depths) {
            contour.depth = *depth;
        }
        let areas: Vec<f64> = self.contours.iter().map(|c| c.area).collect();
        // Normalizes an empty sum's -0.0.
        let net_area = net_area(&areas, &depths) + 0.0;

        let mut contours: Vec<ContourReport> = self
            .contours
            .into_iter()
            .map(|c| ContourReport {
                fill: c.fill(),
                element: c.element,
                source: c.source,
                depth: c.depth,
                area: c.area,
            })
            .collect();
        contours.sort_by_key(|c| c.depth);

        log::info!(
            "{} contours, {} warnings, net area {net_area:.3}",
            contours.len(),
            self.warnings.len()
        );

        Analysis {
            net_area,
            contours,
            warnings: self.warnings,
        }
    }
}

/// Per-contour output for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourReport {
    pub element: usize,
    pub source: String,
    pub depth: usize,
    pub fill: FillClass,
    pub area: f64,
}

/// The result of one analysis, published as a whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    pub net_area: f64,
    /// Ascending depth; document order within a depth.
    pub contours: Vec<ContourReport>,
    pub warnings: Vec<Warning>,
}

/// Runs the whole pipeline on an element tree.
pub fn analyze_tree(root: &Element, config: &EngineConfig) -> Analysis {
    ContourSet::from_leaves(&root.leaves(), config).analyze()
}

/// Runs the whole pipeline on SVG text.
pub fn analyze_svg(text: &str, config: &EngineConfig) -> Result<Analysis, DocumentError> {
    let root = parse_document(text)?;
    Ok(analyze_tree(&root, config))
}
