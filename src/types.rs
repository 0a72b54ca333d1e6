//! Core types for the sketch system.
//!
//! Defines the fundamental data structures shared across the crate: points,
//! stroke identity, pointer event descriptions, and style maps.

use crate::error::SketchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D coordinate on the drawing surface. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between `self` and `other` at parameter `t`.
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Stroke Identity
// ============================================================================

/// Stable identifier for a stroke in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Platform pointer id; one live id per finger/pen/mouse.
pub type PointerId = u32;

/// The kind of device a pointer event originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Mouse,
    Pen,
    Touch,
}

/// Pointer button codes, following the W3C pointer events table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Mouse left, pen tip, touch contact
    Primary,
    /// Mouse middle
    Middle,
    /// Mouse right, pen barrel
    Secondary,
    /// Mouse back
    Back,
    /// Mouse forward
    Forward,
    /// Pen eraser (no mouse equivalent)
    Eraser,
}

impl PointerButton {
    /// Map a raw button code to a known button, if any.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            5 => Some(Self::Eraser),
            _ => None,
        }
    }
}

/// One high-frequency input sample within a pointer-move dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    /// Reported contact pressure in `[0, 1]`, if the device supplies one.
    pub pressure: Option<f64>,
}

/// A normalized pointer event, as delivered by the embedding input source.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub device: DeviceKind,
    /// The button that produced this event; `None` for unrecognized codes.
    pub button: Option<PointerButton>,
    pub position: Point,
    pub pressure: Option<f64>,
    /// Coalesced sub-samples for this dispatch tick, oldest first.
    /// Empty means the event's own position is the only sample.
    pub coalesced: Vec<PointerSample>,
}

impl PointerEvent {
    pub fn new(
        pointer_id: PointerId,
        device: DeviceKind,
        button: Option<PointerButton>,
        position: impl Into<Point>,
    ) -> Self {
        Self {
            pointer_id,
            device,
            button,
            position: position.into(),
            pressure: None,
            coalesced: Vec::new(),
        }
    }

    /// Mouse event shorthand (no pressure).
    pub fn mouse(pointer_id: PointerId, button: PointerButton, x: f64, y: f64) -> Self {
        Self::new(pointer_id, DeviceKind::Mouse, Some(button), (x, y))
    }

    /// Pen event shorthand with a reported pressure.
    pub fn pen(pointer_id: PointerId, button: PointerButton, x: f64, y: f64, pressure: f64) -> Self {
        let mut ev = Self::new(pointer_id, DeviceKind::Pen, Some(button), (x, y));
        ev.pressure = Some(pressure);
        ev
    }

    /// Touch contact shorthand (primary contact, no pressure).
    pub fn touch(pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self::new(pointer_id, DeviceKind::Touch, Some(PointerButton::Primary), (x, y))
    }

    pub fn with_coalesced(mut self, samples: Vec<PointerSample>) -> Self {
        self.coalesced = samples;
        self
    }

    /// The samples to replay for this event, in original temporal order.
    pub fn samples(&self) -> Vec<PointerSample> {
        if self.coalesced.is_empty() {
            vec![PointerSample {
                position: self.position,
                pressure: self.pressure,
            }]
        } else {
            self.coalesced.clone()
        }
    }
}

// ============================================================================
// Eraser Mode
// ============================================================================

/// How the eraser affects strokes it touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EraserMode {
    /// Remove a whole stroke once any of its sample points is hit
    #[default]
    Object,
    /// Split a stroke at the erased region, keeping the remaining fragments
    Pixel,
}

impl FromStr for EraserMode {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(Self::Object),
            "pixel" => Ok(Self::Pixel),
            other => Err(SketchError::InvalidEraserMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for EraserMode {
    type Error = SketchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EraserMode> for String {
    fn from(mode: EraserMode) -> String {
        match mode {
            EraserMode::Object => "object".to_string(),
            EraserMode::Pixel => "pixel".to_string(),
        }
    }
}

// ============================================================================
// Styles
// ============================================================================

/// Presentation attributes applied to surface elements, keyed by attribute
/// name. Ordered so encoded output is deterministic.
pub type StyleMap = BTreeMap<String, String>;
