//! Pointer input handling.
//!
//! One [`PointerSession`] exists per live pointer id, created on
//! pointer-down and destroyed on pointer-up/cancel. The session's button
//! classification picks an action variant once at start; the variant then
//! receives every subsequent sample for that pointer.
//!
//! ## Modules
//!
//! - `session` - session record, button classification, action variants
//! - `draw` - drawing and pressure-drawing behavior
//! - `erase` - eraser cursor and object/pixel erase behavior

mod draw;
mod erase;
mod session;

pub use session::{Action, DrawingAction, ErasingAction, PointerSession, PressureDrawingAction, SessionKind};
