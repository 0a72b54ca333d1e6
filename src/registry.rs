//! Stroke registry.
//!
//! The core's own record of every live stroke: its point sequence, its
//! surface element handle, its style, and the cached bounding box. The cache
//! lives here, next to the geometry that defines it, and every geometry
//! mutation goes through a method that clears it — a stale box would make
//! hit tests lie.

use crate::surface::{BoundingBox, ElementId};
use crate::types::{Point, StrokeId, StyleMap};
use std::collections::HashMap;

/// One live stroke.
#[derive(Clone, Debug)]
pub struct StrokeRecord {
    pub id: StrokeId,
    pub element: ElementId,
    points: Vec<Point>,
    pub style: StyleMap,
    bbox: Option<BoundingBox>,
}

impl StrokeRecord {
    pub fn new(id: StrokeId, element: ElementId, style: StyleMap) -> Self {
        Self {
            id,
            element,
            points: Vec::new(),
            style,
            bbox: None,
        }
    }

    /// Create a record that already carries geometry (pixel-erase
    /// replacements, pressure segments). The box cache starts empty.
    pub fn with_points(
        id: StrokeId,
        element: ElementId,
        style: StyleMap,
        points: Vec<Point>,
    ) -> Self {
        Self {
            id,
            element,
            points,
            style,
            bbox: None,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn cached_bbox(&self) -> Option<BoundingBox> {
        self.bbox
    }
}

/// Arena of stroke records keyed by stroke id.
#[derive(Default)]
pub struct StrokeRegistry {
    records: HashMap<StrokeId, StrokeRecord>,
}

impl StrokeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: StrokeRecord) {
        self.records.insert(record.id, record);
    }

    pub fn remove(&mut self, id: StrokeId) -> Option<StrokeRecord> {
        self.records.remove(&id)
    }

    pub fn get(&self, id: StrokeId) -> Option<&StrokeRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.records.contains_key(&id)
    }

    /// Append a point to a stroke, invalidating its cached box.
    pub fn append_point(&mut self, id: StrokeId, point: Point) -> Option<&[Point]> {
        let record = self.records.get_mut(&id)?;
        record.points.push(point);
        record.bbox = None;
        Some(&record.points)
    }

    /// Replace a stroke's geometry wholesale, invalidating its cached box.
    pub fn set_points(&mut self, id: StrokeId, points: Vec<Point>) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.points = points;
                record.bbox = None;
                true
            }
            None => false,
        }
    }

    /// Fill the cached box for a stroke (first spatial query after a
    /// geometry change).
    pub fn cache_bbox(&mut self, id: StrokeId, bbox: BoundingBox) {
        if let Some(record) = self.records.get_mut(&id) {
            record.bbox = Some(bbox);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrokeRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> Vec<StrokeId> {
        self.records.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
