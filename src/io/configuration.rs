//! Algorithm constants and runtime configuration defaults

// Luminosity bucketing
/// Width of one luminosity band (256 split into 8 bands)
pub const LUMA_BAND_WIDTH: f64 = 256.0 / 8.0;

/// Mask luminosity above which a hole pixel is too bright to need filling
pub const BRIGHT_SKIP_THRESHOLD: f64 = LUMA_BAND_WIDTH * 7.0;

// Probing and propagation
/// Number of samples in a directional probe run
pub const PROBE_RUN_LENGTH: usize = 4;

/// Cells stepped per qualifying direction when launching fills, and the
/// throttle window length for alternating probe/rest runs
pub const PAINT_LIMIT: usize = 2;

/// Cells stepped per qualifying direction while a fill propagates
pub const FOLLOW_STEP_LIMIT: usize = 1;

// Defaults for configurable parameters
/// Marker color identifying destination pixels
pub const DEFAULT_MARKER: [u8; 3] = [255, 255, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_filled";
/// Suffix identifying a companion mask file in batch mode
pub const MASK_SUFFIX: &str = "_mask";
/// Suffix added to exported luminosity maps
pub const LUMA_MAP_SUFFIX: &str = "_luma";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
