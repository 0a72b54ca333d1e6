//! Erasing behavior - cursor handling and the object/pixel erase paths.

use crate::canvas::SketchCanvas;
use crate::input::session::ErasingAction;
use crate::path;
use crate::surface::{DrawingSurface, ElementId};
use crate::types::{EraserMode, Point};

/// A closed square outline centered at `center`, used as the eraser cursor.
fn cursor_path(center: Point, size: f64) -> String {
    let half = size / 2.0;
    path::encode(&[
        Point::new(center.x - half, center.y - half),
        Point::new(center.x + half, center.y - half),
        Point::new(center.x + half, center.y + half),
        Point::new(center.x - half, center.y + half),
        Point::new(center.x - half, center.y - half),
    ])
}

impl<S: DrawingSurface> SketchCanvas<S> {
    /// Materialize the eraser cursor centered at `position`.
    ///
    /// The cursor is a surface element only - it never enters the stroke
    /// registry, so it cannot erase itself or be hit-tested.
    pub(crate) fn start_erasing(&mut self, position: Point) -> ErasingAction {
        let cursor = self.surface.create_stroke_element();
        self.surface
            .set_style(cursor, &self.options.effective_eraser_style());
        self.surface
            .set_path_data(cursor, &cursor_path(position, self.options.eraser.size));
        ErasingAction { cursor }
    }

    /// Re-center the cursor, then erase in the configured mode. Returns the
    /// affected element handles: removed elements in object mode, newly
    /// created fragment elements in pixel mode.
    pub(crate) fn move_erasing(
        &mut self,
        action: &ErasingAction,
        position: Point,
    ) -> Vec<ElementId> {
        self.surface
            .set_path_data(action.cursor, &cursor_path(position, self.options.eraser.size));

        let radius = self.options.eraser.radius();
        match self.options.eraser.mode {
            EraserMode::Object => self
                .remove_strokes_in_range_impl(position.x, position.y, radius)
                .into_iter()
                .map(|(_, element)| element)
                .collect(),
            EraserMode::Pixel => {
                self.erase_strokes_in_range(position.x, position.y, radius)
            }
        }
    }

    /// Tear down the cursor. Up and cancel share this path.
    pub(crate) fn stop_erasing(&mut self, action: &ErasingAction) {
        self.surface.remove_stroke_element(action.cursor);
    }
}
