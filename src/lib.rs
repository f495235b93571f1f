//! Mask-guided pixel compositing driven by perceptual luminosity
//!
//! The system fills marker-colored "destination" pixels of a source image
//! using a second image (the mask) as both the literal fill palette and a
//! luminosity signal, optionally propagating fill decisions into neighboring
//! pixels along directions where the mask's luminosity trends monotonically.

#![forbid(unsafe_code)]

/// Core compositing algorithm: classification, probing, filling, orchestration
pub mod algorithm;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Pixel grid storage and bounds-checked sampling
pub mod spatial;

pub use io::error::{CompositeError, Result};
pub use spatial::PixelGrid;
