//! Core compositing algorithm
//!
//! This module contains the compositing pipeline, leaves first:
//! - Luminosity calculation and fill specification lookup
//! - Directional luminosity-trend probing
//! - Worklist-driven neighborhood filling
//! - Top-level per-pixel orchestration

/// Top-level compositing orchestration
pub mod compositor;
/// Worklist-driven rectangular fill with bounded propagation
pub mod filler;
/// Perceptual luminosity and fill specification lookup
pub mod luminosity;
/// Directional luminosity-trend probing
pub mod probe;

pub use compositor::composite;
