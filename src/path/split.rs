//! Partitioning a point sequence around erased samples.

use crate::types::Point;

/// Split `points` around the erased `hit_indices`, returning the surviving
/// contiguous fragments.
///
/// Produces the prefix before the first hit, the run strictly between each
/// adjacent pair of hits whose index gap exceeds one, and the suffix after
/// the last hit. Fragments of a single point cannot form a visible stroke
/// and are discarded. An empty `hit_indices` returns the whole sequence as
/// its only fragment; callers that need "no hit" to mean "do nothing" must
/// check the hit set before calling.
///
/// `hit_indices` must be ascending and in range, as produced by
/// [`super::hit_indices`].
pub fn split(points: &[Point], hit_indices: &[usize]) -> Vec<Vec<Point>> {
    let (Some(&first), Some(&last)) = (hit_indices.first(), hit_indices.last()) else {
        return vec![points.to_vec()];
    };

    let mut fragments = Vec::new();
    let mut keep = |slice: &[Point]| {
        if slice.len() > 1 {
            fragments.push(slice.to_vec());
        }
    };

    keep(&points[..first]);
    for pair in hit_indices.windows(2) {
        if pair[1] - pair[0] > 1 {
            keep(&points[pair[0] + 1..pair[1]]);
        }
    }
    keep(&points[last + 1..]);

    fragments
}
