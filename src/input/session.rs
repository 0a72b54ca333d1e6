//! Pointer sessions and their action variants.
//!
//! A session tracks one pointer from down to up/cancel. Its lifecycle is
//! `started -> moving (self-loop) -> stopped`; the action variant chosen at
//! start never changes for the life of the session.

use crate::surface::ElementId;
use crate::types::{DeviceKind, Point, PointerButton, PointerId, StrokeId};

/// What a session does with its pointer's samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Drawing,
    Erasing,
}

impl SessionKind {
    /// The fixed button classification table: primary contact draws,
    /// secondary button and the pen's eraser end erase, everything else
    /// starts no session.
    pub fn classify(button: PointerButton) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(Self::Drawing),
            PointerButton::Secondary | PointerButton::Eraser => Some(Self::Erasing),
            PointerButton::Middle | PointerButton::Back | PointerButton::Forward => None,
        }
    }
}

/// State for a plain (uniform-width) drawing session.
///
/// The coordinate buffer lives in the stroke registry record this session
/// owns; no other session appends to it.
#[derive(Clone, Copy, Debug)]
pub struct DrawingAction {
    pub stroke: StrokeId,
    pub element: ElementId,
}

/// State for a pressure-aware drawing session.
///
/// Each move emits an independent 2-point segment element so stroke width
/// can vary along the stroke's length; the samples buffer holds the raw
/// `(position, pressure)` history private to this session.
#[derive(Clone, Debug, Default)]
pub struct PressureDrawingAction {
    pub(crate) samples: Vec<(Point, f64)>,
    pub(crate) segments: Vec<(StrokeId, ElementId)>,
}

impl PressureDrawingAction {
    /// The most recently created segment element, if any move happened yet.
    pub fn last_segment(&self) -> Option<ElementId> {
        self.segments.last().map(|&(_, element)| element)
    }
}

/// State for an erasing session: the visual cursor element.
#[derive(Clone, Copy, Debug)]
pub struct ErasingAction {
    pub cursor: ElementId,
}

/// The action variant selected once at session start.
#[derive(Clone, Debug)]
pub enum Action {
    Drawing(DrawingAction),
    PressureDrawing(PressureDrawingAction),
    Erasing(ErasingAction),
}

/// The live state for one pointer, from down to up/cancel.
#[derive(Clone, Debug)]
pub struct PointerSession {
    pub pointer_id: PointerId,
    pub device: DeviceKind,
    pub button: PointerButton,
    pub kind: SessionKind,
    pub action: Action,
}
