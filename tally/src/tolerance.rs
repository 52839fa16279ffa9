/// Relative-error comparison: `|want - have| / |want| <= tolerance`.
///
/// A zero `want` has no relative scale, so it only matches a zero `have`,
/// whatever the tolerance. NaN on either side never matches.
pub fn matches(want: f64, have: f64, tolerance: f64) -> bool {
    if want.is_nan() || have.is_nan() {
        return false;
    }
    if want == 0.0 {
        return have == 0.0;
    }
    (want - have).abs() / want.abs() <= tolerance
}

/// Exact comparison used by the counter and gauge checks.
#[allow(clippy::float_cmp)]
pub fn exact(want: f64, have: f64) -> bool {
    want == have
}
