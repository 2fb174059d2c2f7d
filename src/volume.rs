/// Volume shown for a net area extruded by `depth`:
/// `net_area * (depth / 10) / 100`.
///
/// With the area in mm² and the depth in mm, `area / 100` is cm² and
/// `depth / 10` is cm, so the result is in cm³.
pub fn volume_estimate(net_area: f64, depth: f64) -> f64 {
    net_area * (depth / 10.0) / 100.0
}
