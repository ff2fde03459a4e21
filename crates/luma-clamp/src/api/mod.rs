//! Public API for the luma-clamp crate.
//!
//! This module provides the [`ColorClamper`] builder, the single entry point
//! bundling weights, gamma and dither pattern.

mod builder;

pub use builder::ColorClamper;
