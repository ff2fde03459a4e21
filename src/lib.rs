//! testcard - calibration test cards
//!
//! Renders the rainbow and copper-bar cards to PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
