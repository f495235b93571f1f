//! Spatial data structures for pixel storage
//!
//! This module contains the fixed-dimension RGB pixel grid that underlies
//! every read and write performed by the compositing algorithm.

/// Pixel grid storage with bounds-checked access
pub mod grid;

pub use grid::{Pixel, PixelGrid};
