//! Spatial Index Module
//!
//! R-tree based candidate lookup for erase queries. This narrows an erase
//! query from every stroke on the canvas to the strokes whose cached
//! bounding box overlaps the query square; precise per-point hit testing
//! refines the candidates afterwards, so false positives here are expected.

use crate::surface::BoundingBox;
use crate::types::StrokeId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing one stroke's cached bounding box.
#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    stroke_id: StrokeId,
    bbox: BoundingBox,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min_x, self.bbox.min_y],
            [self.bbox.max_x, self.bbox.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.stroke_id == other.stroke_id
    }
}

/// Spatial index over cached stroke bounding boxes.
///
/// Entries appear when a stroke's box is first cached and leave whenever the
/// stroke's geometry changes or the stroke is removed; strokes not present
/// here need their box (re)computed before they can be queried.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<StrokeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stroke_id: StrokeId, bbox: BoundingBox) {
        if let Some(old_entry) = self.entries.remove(&stroke_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry { stroke_id, bbox };
        self.tree.insert(entry);
        self.entries.insert(stroke_id, entry);
    }

    pub fn remove(&mut self, stroke_id: StrokeId) -> bool {
        if let Some(entry) = self.entries.remove(&stroke_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, stroke_id: StrokeId) -> bool {
        self.entries.contains_key(&stroke_id)
    }

    /// Candidate strokes for the square region centered at `(x, y)` with
    /// the given `radius`.
    ///
    /// The R-tree envelope query is inclusive, so a strict post-filter
    /// applies the open-interval overlap rule: boxes that only touch the
    /// region's edge are not candidates.
    pub fn query_region(&self, x: f64, y: f64, radius: f64) -> Vec<StrokeId> {
        let envelope = AABB::from_corners([x - radius, y - radius], [x + radius, y + radius]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| {
                entry
                    .bbox
                    .intersects_region(x - radius, y - radius, x + radius, y + radius)
            })
            .map(|entry| entry.stroke_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
