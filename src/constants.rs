//! Crate-wide defaults.
//!
//! Centralizes the stroke/eraser parameter defaults and the default style
//! maps so the option structs stay self-documenting.

use crate::types::StyleMap;
use once_cell::sync::Lazy;

// ============================================================================
// Stroke Sampling
// ============================================================================

/// Minimum distance between recorded samples; longer gaps get interpolated
pub const MIN_SAMPLE_DISTANCE: f64 = 2.0;

/// Max time between events, in milliseconds.
///
/// Carried for configuration compatibility; temporal resampling is not
/// performed (spacing-based resampling is the sole mechanism).
pub const MAX_TIME_DELTA: f64 = 5.0;

// ============================================================================
// Pressure
// ============================================================================

/// Pressure reported for devices that don't supply one
pub const PRESSURE_FALLBACK: f64 = 0.5;

/// Pressure quantization step count per unit; 3 decimal digits resolves
/// ~1000 distinguishable levels
pub const PRESSURE_PRECISION: i32 = 3;

/// Narrowest pressure-derived segment width
pub const MIN_STROKE_WIDTH: f64 = 0.5;

/// Widest pressure-derived segment width
pub const MAX_STROKE_WIDTH: f64 = 2.0;

// ============================================================================
// Eraser
// ============================================================================

/// Side length of the square eraser cursor
pub const ERASER_SIZE: f64 = 20.0;

// ============================================================================
// Coordinate Mapping
// ============================================================================

/// Default scale applied by a parent container (1.0 = none)
pub const PARENT_SCALE: f64 = 1.0;

// ============================================================================
// Default Styles
// ============================================================================

/// Presentation attributes applied to every new stroke element
pub static DEFAULT_STROKE_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([
        ("stroke".into(), "black".into()),
        ("stroke-width".into(), "1px".into()),
        ("stroke-linecap".into(), "round".into()),
        ("stroke-linejoin".into(), "round".into()),
        ("fill".into(), "none".into()),
    ])
});

/// Presentation attributes applied to the eraser cursor element
pub static DEFAULT_ERASER_STYLE: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from([
        ("pointer-events".into(), "none".into()),
        ("z-index".into(), "999".into()),
        ("fill".into(), "rgba(0,0,0, 0.5)".into()),
    ])
});
