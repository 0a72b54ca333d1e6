//! The rendering surface collaborator.
//!
//! The core never draws. It creates, styles, and updates opaque elements
//! through [`DrawingSurface`] and lets the embedder decide what an element
//! is (an SVG path node, a display-list entry, a test recording).

use crate::types::{Point, StyleMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to an element owned by the rendering surface.
///
/// The core holds handles only while the corresponding stroke exists;
/// removal drops every reference to the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Axis-aligned bounding box in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// The tight box around a point sequence; `None` for an empty sequence.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Overlap test against the square region `[x1, x2] x [y1, y2]`.
    ///
    /// Strict inequalities on all four sides: boxes that merely touch an
    /// edge do not overlap. This is the coarse pre-filter; precise hits are
    /// refined per sample point afterwards.
    pub fn intersects_region(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        self.min_x < x2 && x1 < self.max_x && self.min_y < y2 && y1 < self.max_y
    }
}

/// What the core requires of the rendering surface.
///
/// All calls are synchronous and infallible; a surface that can fail should
/// fail at its own boundary, not inside the event path.
pub trait DrawingSurface {
    /// Create a fresh, empty element and return its handle.
    fn create_stroke_element(&mut self) -> ElementId;

    /// Remove an element. Removing an already-removed handle is a no-op.
    fn remove_stroke_element(&mut self, element: ElementId);

    /// Replace the element's path data with `path`.
    fn set_path_data(&mut self, element: ElementId, path: &str);

    /// The element's current bounding box, in surface coordinates.
    fn bounding_box(&self, element: ElementId) -> BoundingBox;

    /// Apply presentation attributes to the element.
    fn set_style(&mut self, element: ElementId, style: &StyleMap);
}
