//! `pensketch` - pointer input to vector stroke geometry.
//!
//! Turns a stream of pointer (mouse/pen/touch) events into vector strokes on
//! a drawing surface, and erases previously drawn strokes either wholesale
//! (object erase) or by splitting them at the erased region (pixel erase).
//!
//! The crate owns the per-pointer session state machine and the path
//! geometry engine (encoding, resampling, hit testing, splitting). It does
//! not render: the embedder supplies a [`surface::DrawingSurface`] and feeds
//! normalized pointer events into [`canvas::SketchCanvas`].
//!
//! ```no_run
//! use pensketch::{PointerButton, PointerEvent, SketchCanvas, SketchOptions};
//! # struct MySurface;
//! # impl pensketch::DrawingSurface for MySurface {
//! #     fn create_stroke_element(&mut self) -> pensketch::ElementId { pensketch::ElementId(0) }
//! #     fn remove_stroke_element(&mut self, _: pensketch::ElementId) {}
//! #     fn set_path_data(&mut self, _: pensketch::ElementId, _: &str) {}
//! #     fn bounding_box(&self, _: pensketch::ElementId) -> pensketch::BoundingBox {
//! #         pensketch::BoundingBox::new(0.0, 0.0, 0.0, 0.0)
//! #     }
//! #     fn set_style(&mut self, _: pensketch::ElementId, _: &pensketch::StyleMap) {}
//! # }
//! let mut canvas = SketchCanvas::new(MySurface, SketchOptions::default());
//! canvas.pointer_down(&PointerEvent::mouse(1, PointerButton::Primary, 10.0, 10.0));
//! canvas.pointer_move(&PointerEvent::mouse(1, PointerButton::Primary, 20.0, 15.0));
//! canvas.pointer_up(&PointerEvent::mouse(1, PointerButton::Primary, 20.0, 15.0));
//! assert_eq!(canvas.stroke_count(), 1);
//! ```

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod path;
pub mod registry;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use canvas::{DrawCallback, EraseCallback, EraseUpCallback, PointerEventKind, SketchCanvas};
pub use config::{EraserOptions, SketchOptions, StrokeEncoder, StrokeOptions};
pub use error::{SketchError, SketchResult};
pub use surface::{BoundingBox, DrawingSurface, ElementId};
pub use types::{
    DeviceKind, EraserMode, Point, PointerButton, PointerEvent, PointerId, PointerSample,
    StrokeId, StyleMap,
};
