//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests exercised through the public API
//! - integration: Multi-component workflow tests driven by pointer events

mod unit;
