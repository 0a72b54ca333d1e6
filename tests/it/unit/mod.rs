//! Single-component tests exercised through the public API.

mod geometry_property_tests;
