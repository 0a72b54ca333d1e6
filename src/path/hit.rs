//! Point-level hit testing.

use crate::types::Point;

/// Indices of `points` that fall inside the square erase region centered at
/// `(x, y)` with the given `radius`.
///
/// The test is a closed interval on both axes: a sample exactly on the
/// region's edge counts as hit. (The spatial index's box pre-filter is
/// intentionally stricter; this is the precise test that refines it.)
/// Indices come back in ascending order with gaps preserved.
pub fn hit_indices(points: &[Point], x: f64, y: f64, radius: f64) -> Vec<usize> {
    let x_lower = x - radius;
    let x_upper = x + radius;
    let y_lower = y - radius;
    let y_upper = y + radius;

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            x_lower <= p.x && p.x <= x_upper && y_lower <= p.y && p.y <= y_upper
        })
        .map(|(i, _)| i)
        .collect()
}
