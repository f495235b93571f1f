//! Input/output operations and error handling
//!
//! Everything outside the core algorithm lives here: the crate error type,
//! tuning constants, PNG decode/encode at the grid boundary, the CLI, and
//! batch progress reporting.

/// Command-line interface for single-file and batch compositing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for compositing operations
pub mod error;
/// PNG decode/encode at the pixel grid boundary
pub mod image;
/// Batch progress tracking
pub mod progress;
