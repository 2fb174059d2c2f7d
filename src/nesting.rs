use crate::containment::ContainmentMatrix;

/// How a contour renders, decided by nesting parity alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillClass {
    Solid,
    Hole,
}

impl FillClass {
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            FillClass::Solid
        } else {
            FillClass::Hole
        }
    }

    /// +1 for solids, -1 for holes.
    pub fn sign(self) -> f64 {
        match self {
            FillClass::Solid => 1.0,
            FillClass::Hole => -1.0,
        }
    }
}

/// Number of other contours containing each contour.
pub fn nesting_depths(matrix: &ContainmentMatrix) -> Vec<usize> {
    (0..matrix.len())
        .map(|inner| matrix.containers_of(inner).count())
        .collect()
}

/// Even-odd sum of unsigned areas. Pairs beyond the shorter slice are
/// ignored; an empty set gives 0.
pub fn net_area(areas: &[f64], depths: &[usize]) -> f64 {
    areas
        .iter()
        .zip(depths)
        .map(|(&area, &depth)| area * FillClass::from_depth(depth).sign())
        .sum()
}
