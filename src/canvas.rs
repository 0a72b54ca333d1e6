//! The sketch canvas: pointer session management and the erase API.
//!
//! [`SketchCanvas`] owns the rendering surface handle, the stroke registry,
//! the spatial index, and one session per live pointer id. All event
//! handling is synchronous and non-reentrant; concurrent pointers interleave
//! at event granularity against the shared stroke collection.

use crate::config::SketchOptions;
use crate::input::{Action, PointerSession, SessionKind};
use crate::path;
use crate::registry::StrokeRegistry;
use crate::spatial_index::SpatialIndex;
use crate::surface::{DrawingSurface, ElementId};
use crate::types::{Point, PointerEvent, PointerId, StrokeId};
use std::collections::HashMap;
use tracing::debug;

/// Callback fired on drawing moves and ups. The handle is `None` when the
/// session's stroke no longer exists (discarded or erased mid-draw).
pub type DrawCallback = Box<dyn FnMut(Option<ElementId>, &PointerEvent)>;

/// Callback fired on erasing moves with the affected element handles:
/// removed elements in object mode, created fragments in pixel mode.
pub type EraseCallback = Box<dyn FnMut(&[ElementId], &PointerEvent)>;

/// Callback fired when an erasing session ends.
pub type EraseUpCallback = Box<dyn FnMut(&PointerEvent)>;

/// The kind of pointer event being dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A drawing surface plus the pointer state machine that sketches on it.
pub struct SketchCanvas<S: DrawingSurface> {
    pub(crate) surface: S,
    pub(crate) registry: StrokeRegistry,
    pub(crate) index: SpatialIndex,
    pub(crate) options: SketchOptions,
    sessions: HashMap<PointerId, PointerSession>,
    on_draw_move: Option<DrawCallback>,
    on_draw_up: Option<DrawCallback>,
    on_erase_move: Option<EraseCallback>,
    on_erase_up: Option<EraseUpCallback>,
}

impl<S: DrawingSurface> SketchCanvas<S> {
    pub fn new(surface: S, options: SketchOptions) -> Self {
        Self {
            surface,
            registry: StrokeRegistry::new(),
            index: SpatialIndex::new(),
            options,
            sessions: HashMap::new(),
            on_draw_move: None,
            on_draw_up: None,
            on_erase_move: None,
            on_erase_up: None,
        }
    }

    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, SketchOptions::default())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &SketchOptions {
        &self.options
    }

    pub fn stroke_count(&self) -> usize {
        self.registry.len()
    }

    pub fn stroke_ids(&self) -> Vec<StrokeId> {
        self.registry.ids()
    }

    /// The recorded point sequence for a stroke, if it still exists.
    pub fn stroke_points(&self, id: StrokeId) -> Option<Vec<Point>> {
        self.registry.get(id).map(|r| r.points().to_vec())
    }

    /// The surface element backing a stroke, if it still exists.
    pub fn stroke_element(&self, id: StrokeId) -> Option<ElementId> {
        self.registry.get(id).map(|r| r.element)
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }

    // ========================================================================
    // Callbacks
    // ========================================================================

    pub fn set_on_draw_move(&mut self, callback: DrawCallback) {
        self.on_draw_move = Some(callback);
    }

    pub fn set_on_draw_up(&mut self, callback: DrawCallback) {
        self.on_draw_up = Some(callback);
    }

    pub fn set_on_erase_move(&mut self, callback: EraseCallback) {
        self.on_erase_move = Some(callback);
    }

    pub fn set_on_erase_up(&mut self, callback: EraseUpCallback) {
        self.on_erase_up = Some(callback);
    }

    // ========================================================================
    // Event Dispatch
    // ========================================================================

    /// Route an event to its handler.
    pub fn handle_event(&mut self, kind: PointerEventKind, event: &PointerEvent) {
        match kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up => self.pointer_up(event),
            PointerEventKind::Cancel => self.pointer_cancel(event),
        }
    }

    /// Event coordinates divided by the configured parent scale.
    fn map_position(&self, position: Point) -> Point {
        Point::new(
            position.x / self.options.parent_scale,
            position.y / self.options.parent_scale,
        )
    }

    /// Classify the pointer and open a session for it.
    ///
    /// A second down for an id that is already live is a protocol violation;
    /// the prior session is overwritten, never merged.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        let Some(button) = event.button else {
            debug!(pointer_id = event.pointer_id, "down with unrecognized button, ignored");
            return;
        };
        let Some(kind) = SessionKind::classify(button) else {
            debug!(pointer_id = event.pointer_id, ?button, "button starts no session");
            return;
        };

        if let Some(stale) = self.sessions.remove(&event.pointer_id) {
            debug!(pointer_id = event.pointer_id, "down for a live pointer id, overwriting session");
            self.discard_action(&stale.action);
        }

        let position = self.map_position(event.position);
        let action = match kind {
            SessionKind::Drawing => {
                if event.pressure.is_some() {
                    Action::PressureDrawing(self.start_pressure_drawing(position, event.pressure))
                } else {
                    Action::Drawing(self.start_drawing(position))
                }
            }
            SessionKind::Erasing => Action::Erasing(self.start_erasing(position)),
        };

        self.sessions.insert(
            event.pointer_id,
            PointerSession {
                pointer_id: event.pointer_id,
                device: event.device,
                button,
                kind,
                action,
            },
        );
    }

    /// Replay the event's samples (coalesced batch or the single position)
    /// through the session owning this pointer id, in original order.
    ///
    /// A move with no prior down is dropped by design, not an error.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let Some(mut session) = self.sessions.remove(&event.pointer_id) else {
            debug!(pointer_id = event.pointer_id, "move with no session, dropped");
            return;
        };

        let mut drawn: Option<ElementId> = None;
        let mut affected: Vec<ElementId> = Vec::new();

        for sample in event.samples() {
            let position = self.map_position(sample.position);
            match &mut session.action {
                Action::Drawing(action) => {
                    drawn = self.move_drawing(action, position);
                }
                Action::PressureDrawing(action) => {
                    drawn = self.move_pressure_drawing(action, position, sample.pressure);
                }
                Action::Erasing(action) => {
                    affected.extend(self.move_erasing(action, position));
                }
            }
        }

        match session.kind {
            SessionKind::Drawing => {
                if let Some(callback) = self.on_draw_move.as_mut() {
                    callback(drawn, event);
                }
            }
            SessionKind::Erasing => {
                if let Some(callback) = self.on_erase_move.as_mut() {
                    callback(&affected, event);
                }
            }
        }

        self.sessions.insert(event.pointer_id, session);
    }

    /// Finalize and tear down the session for this pointer id.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let Some(session) = self.sessions.remove(&event.pointer_id) else {
            debug!(pointer_id = event.pointer_id, "up with no session, dropped");
            return;
        };

        match session.action {
            Action::Drawing(action) => {
                let element = self.stop_drawing(&action);
                if let Some(callback) = self.on_draw_up.as_mut() {
                    callback(element, event);
                }
            }
            Action::PressureDrawing(action) => {
                let element = self.stop_pressure_drawing(&action);
                if let Some(callback) = self.on_draw_up.as_mut() {
                    callback(element, event);
                }
            }
            Action::Erasing(action) => {
                self.stop_erasing(&action);
                if let Some(callback) = self.on_erase_up.as_mut() {
                    callback(event);
                }
            }
        }
    }

    /// Same teardown as up, except an in-progress drawing stroke is
    /// discarded rather than finalized.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) {
        let Some(session) = self.sessions.remove(&event.pointer_id) else {
            debug!(pointer_id = event.pointer_id, "cancel with no session, dropped");
            return;
        };

        self.discard_action(&session.action);
        match session.kind {
            SessionKind::Drawing => {
                if let Some(callback) = self.on_draw_up.as_mut() {
                    callback(None, event);
                }
            }
            SessionKind::Erasing => {
                if let Some(callback) = self.on_erase_up.as_mut() {
                    callback(event);
                }
            }
        }
    }

    /// Drop a session's in-progress work: strokes are discarded, the eraser
    /// cursor is torn down. Shared by cancel and by session overwrite.
    fn discard_action(&mut self, action: &Action) {
        match action {
            Action::Drawing(action) => self.discard_drawing(action),
            Action::PressureDrawing(action) => self.discard_pressure_drawing(action),
            Action::Erasing(action) => self.stop_erasing(action),
        }
    }

    // ========================================================================
    // Erasing
    // ========================================================================

    /// Remove a stroke from every structure that knows about it.
    pub(crate) fn remove_stroke(&mut self, id: StrokeId, element: ElementId) {
        self.registry.remove(id);
        self.index.remove(id);
        self.surface.remove_stroke_element(element);
    }

    /// Fill the box cache (and index entry) for every stroke whose geometry
    /// changed since the last spatial query, using the surface as the box
    /// provider.
    fn refresh_bbox_caches(&mut self) {
        let stale: Vec<(StrokeId, ElementId)> = self
            .registry
            .iter()
            .filter(|record| record.cached_bbox().is_none())
            .map(|record| (record.id, record.element))
            .collect();

        for (id, element) in stale {
            let bbox = self.surface.bounding_box(element);
            self.registry.cache_bbox(id, bbox);
            self.index.insert(id, bbox);
        }
    }

    /// Strokes whose cached bounding box overlaps the query square. A
    /// coarse pre-filter only; refine with per-point hit testing.
    pub fn strokes_in_range(&mut self, x: f64, y: f64, radius: f64) -> Vec<StrokeId> {
        self.refresh_bbox_caches();
        self.index.query_region(x, y, radius)
    }

    /// Object erase: remove every stroke with at least one sample point in
    /// the square region. Returns the removed stroke ids.
    pub fn remove_strokes_in_range(&mut self, x: f64, y: f64, radius: f64) -> Vec<StrokeId> {
        self.remove_strokes_in_range_impl(x, y, radius)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn remove_strokes_in_range_impl(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Vec<(StrokeId, ElementId)> {
        let mut removed = Vec::new();
        for id in self.strokes_in_range(x, y, radius) {
            let Some(record) = self.registry.get(id) else { continue };
            if path::hit_indices(record.points(), x, y, radius).is_empty() {
                continue;
            }
            let element = record.element;
            self.remove_stroke(id, element);
            removed.push((id, element));
        }
        removed
    }

    /// Pixel erase: split every hit stroke at the erased region, replacing
    /// it with the surviving fragments. Each replacement copies the
    /// original's style and starts with a fresh box cache. Returns the
    /// newly created element handles.
    pub fn erase_strokes_in_range(&mut self, x: f64, y: f64, radius: f64) -> Vec<ElementId> {
        let mut created = Vec::new();
        for id in self.strokes_in_range(x, y, radius) {
            let Some(record) = self.registry.get(id) else { continue };
            let hits = path::hit_indices(record.points(), x, y, radius);
            if hits.is_empty() {
                continue;
            }

            let element = record.element;
            let style = record.style.clone();
            let fragments = path::split(record.points(), &hits);
            self.remove_stroke(id, element);

            for fragment in fragments {
                let new_element = self.surface.create_stroke_element();
                self.surface.set_style(new_element, &style);
                self.surface
                    .set_path_data(new_element, &(self.options.encoder)(&fragment));
                self.registry.insert(crate::registry::StrokeRecord::with_points(
                    StrokeId::new(),
                    new_element,
                    style.clone(),
                    fragment,
                ));
                created.push(new_element);
            }
        }
        created
    }
}
