//! Drawing behavior - plain and pressure-aware stroke building.

use crate::canvas::SketchCanvas;
use crate::constants::{PRESSURE_FALLBACK, PRESSURE_PRECISION};
use crate::input::session::{DrawingAction, PressureDrawingAction};
use crate::path;
use crate::registry::StrokeRecord;
use crate::surface::{DrawingSurface, ElementId};
use crate::types::{Point, StrokeId};

/// Snap a reported pressure to the configured precision, falling back for
/// devices that report none.
fn quantize_pressure(pressure: Option<f64>) -> f64 {
    let scale = 10f64.powi(PRESSURE_PRECISION);
    (pressure.unwrap_or(PRESSURE_FALLBACK).clamp(0.0, 1.0) * scale).round() / scale
}

impl<S: DrawingSurface> SketchCanvas<S> {
    /// Open a new stroke at `position`: element, style, registry record,
    /// and the first coordinate land together before any other event can
    /// observe the stroke.
    pub(crate) fn start_drawing(&mut self, position: Point) -> DrawingAction {
        let style = self.options.effective_stroke_style();
        let element = self.surface.create_stroke_element();
        self.surface.set_style(element, &style);
        self.surface
            .set_path_data(element, &(self.options.encoder)(&[position]));

        let stroke = StrokeId::new();
        self.registry
            .insert(StrokeRecord::with_points(stroke, element, style, vec![position]));

        DrawingAction { stroke, element }
    }

    /// Append `position` and re-encode the whole buffer onto the element.
    ///
    /// Returns `None` when the stroke no longer exists - an eraser session
    /// can legally consume a stroke mid-draw, after which this session's
    /// samples are dropped.
    pub(crate) fn move_drawing(
        &mut self,
        action: &DrawingAction,
        position: Point,
    ) -> Option<ElementId> {
        let encoded = {
            let points = self.registry.append_point(action.stroke, position)?;
            (self.options.encoder)(points)
        };
        self.index.remove(action.stroke);
        self.surface.set_path_data(action.element, &encoded);
        Some(action.element)
    }

    /// Finalize a drawing session: resample the buffer to the configured
    /// sample spacing, or drop the stroke entirely if it never grew past a
    /// single point.
    pub(crate) fn stop_drawing(&mut self, action: &DrawingAction) -> Option<ElementId> {
        let points = self.registry.get(action.stroke)?.points().to_vec();

        if points.len() < 2 {
            self.remove_stroke(action.stroke, action.element);
            return None;
        }

        let resampled = path::resample(&points, self.options.stroke.min_sample_distance);
        let encoded = (self.options.encoder)(&resampled);
        self.registry.set_points(action.stroke, resampled);
        self.index.remove(action.stroke);
        self.surface.set_path_data(action.element, &encoded);
        Some(action.element)
    }

    /// Cancel path: the in-progress stroke is discarded, not finalized.
    pub(crate) fn discard_drawing(&mut self, action: &DrawingAction) {
        if self.registry.contains(action.stroke) {
            self.remove_stroke(action.stroke, action.element);
        }
    }

    /// Open a pressure-aware session at `position`. No element is created
    /// yet; segments appear as soon as the pointer moves.
    pub(crate) fn start_pressure_drawing(
        &mut self,
        position: Point,
        pressure: Option<f64>,
    ) -> PressureDrawingAction {
        let mut action = PressureDrawingAction::default();
        action.samples.push((position, quantize_pressure(pressure)));
        action
    }

    /// Emit one 2-point segment from the previous sample to `position`,
    /// with a stroke width derived from the sample's pressure.
    pub(crate) fn move_pressure_drawing(
        &mut self,
        action: &mut PressureDrawingAction,
        position: Point,
        pressure: Option<f64>,
    ) -> Option<ElementId> {
        let pressure = quantize_pressure(pressure);
        let &(previous, _) = action.samples.last()?;

        let mut style = self.options.effective_stroke_style();
        style.insert(
            "stroke-width".to_string(),
            format!("{:.3}px", self.options.width_for_pressure(pressure)),
        );

        let points = vec![previous, position];
        let element = self.surface.create_stroke_element();
        self.surface.set_style(element, &style);
        self.surface
            .set_path_data(element, &(self.options.encoder)(&points));

        let stroke = StrokeId::new();
        self.registry
            .insert(StrokeRecord::with_points(stroke, element, style, points));

        action.samples.push((position, pressure));
        action.segments.push((stroke, element));
        Some(element)
    }

    /// Finalize a pressure session. Segments are already on the surface;
    /// a session that never moved simply evaporates.
    pub(crate) fn stop_pressure_drawing(
        &mut self,
        action: &PressureDrawingAction,
    ) -> Option<ElementId> {
        action.last_segment()
    }

    /// Cancel path: every segment this session produced is discarded.
    pub(crate) fn discard_pressure_drawing(&mut self, action: &PressureDrawingAction) {
        for &(stroke, element) in &action.segments {
            if self.registry.contains(stroke) {
                self.remove_stroke(stroke, element);
            }
        }
    }
}
