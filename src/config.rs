//! Configuration for strokes and erasing.
//!
//! Options are merged over crate defaults: an embedder constructs
//! [`SketchOptions`] (usually via `Default` plus field updates, or by
//! deserializing persisted settings) and hands it to the canvas once at
//! construction time.

use crate::constants::{
    DEFAULT_ERASER_STYLE, DEFAULT_STROKE_STYLE, ERASER_SIZE, MAX_STROKE_WIDTH, MAX_TIME_DELTA,
    MIN_SAMPLE_DISTANCE, MIN_STROKE_WIDTH, PARENT_SCALE,
};
use crate::types::{EraserMode, Point, StyleMap};
use serde::{Deserialize, Serialize};

/// Converts a stroke's point sequence to element path data.
pub type StrokeEncoder = fn(&[Point]) -> String;

fn default_encoder() -> StrokeEncoder {
    crate::path::encode
}

/// Stroke sampling and width parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Minimum distance between samples; longer gaps are interpolated when a
    /// stroke is finalized.
    pub min_sample_distance: f64,
    /// Max time between events in milliseconds. Accepted for configuration
    /// compatibility; resampling is spacing-based only and this value is
    /// never consulted.
    pub max_time_delta: f64,
    /// Segment width at zero pressure.
    pub min_width: f64,
    /// Segment width at full pressure.
    pub max_width: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            min_sample_distance: MIN_SAMPLE_DISTANCE,
            max_time_delta: MAX_TIME_DELTA,
            min_width: MIN_STROKE_WIDTH,
            max_width: MAX_STROKE_WIDTH,
        }
    }
}

/// Eraser behavior parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserOptions {
    pub mode: EraserMode,
    /// Side length of the square eraser cursor. The effective erase radius
    /// is half of this.
    pub size: f64,
}

impl EraserOptions {
    /// Half the cursor size: the radius used for hit queries.
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }
}

impl Default for EraserOptions {
    fn default() -> Self {
        Self {
            mode: EraserMode::default(),
            size: ERASER_SIZE,
        }
    }
}

/// Top-level canvas configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    pub stroke: StrokeOptions,
    pub eraser: EraserOptions,
    /// Extra style entries layered over the default stroke style.
    pub stroke_style: StyleMap,
    /// Extra style entries layered over the default eraser cursor style.
    pub eraser_style: StyleMap,
    /// Scale applied by a parent container; incoming event coordinates are
    /// divided by this.
    pub parent_scale: f64,
    /// Encoder used for every stroke element's path data. Not persisted;
    /// deserialized configurations get the built-in encoder.
    #[serde(skip, default = "default_encoder")]
    pub encoder: StrokeEncoder,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            stroke: StrokeOptions::default(),
            eraser: EraserOptions::default(),
            stroke_style: StyleMap::new(),
            eraser_style: StyleMap::new(),
            parent_scale: PARENT_SCALE,
            encoder: default_encoder(),
        }
    }
}

impl SketchOptions {
    /// The effective stroke style: defaults overlaid with the user's
    /// entries. `fill` is always forced to `none` so open paths don't get
    /// filled as polygons.
    pub fn effective_stroke_style(&self) -> StyleMap {
        let mut style = DEFAULT_STROKE_STYLE.clone();
        style.extend(self.stroke_style.clone());
        style.insert("fill".to_string(), "none".to_string());
        style
    }

    /// The effective eraser cursor style: defaults overlaid with the
    /// user's entries.
    pub fn effective_eraser_style(&self) -> StyleMap {
        let mut style = DEFAULT_ERASER_STYLE.clone();
        style.extend(self.eraser_style.clone());
        style
    }

    /// Width of a pressure-tagged segment for a pressure in `[0, 1]`.
    pub fn width_for_pressure(&self, pressure: f64) -> f64 {
        let p = pressure.clamp(0.0, 1.0);
        self.stroke.min_width + (self.stroke.max_width - self.stroke.min_width) * p
    }
}
