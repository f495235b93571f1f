//! Perceptual luminosity and the luminosity-bucket fill table
//!
//! Luminosity uses the ITU-R BT.709 weights. The classifier buckets a mask
//! pixel into one of six bands of width 256/8 and returns the hand-tuned
//! fill specification for that band. Pixels brighter than the sixth band
//! yield a zero-effect specification that never paints; this asymmetry is
//! intentional bucket behavior.

use crate::io::configuration::LUMA_BAND_WIDTH;
use crate::spatial::Pixel;

/// Descriptive axis tag carried by a fill specification
///
/// The tag records which axis the bucket was tuned for. It does not alter
/// paint geometry; the rectangle extents do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal bucket
    X,
    /// Vertical bucket
    Y,
    /// Both axes
    Xy,
}

/// Paint geometry, color, and propagation budget for a luminosity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSpec {
    /// Half-extent of the paint rectangle along x
    pub range_x: i64,
    /// Half-extent of the paint rectangle along y
    pub range_y: i64,
    /// Fill color; echoes the sampled mask pixel
    pub color: Pixel,
    /// Descriptive axis tag
    pub axis: Axis,
    /// Maximum additional propagation hops attributable to this bucket
    pub follow_limit: u32,
}

impl FillSpec {
    /// Whether this specification paints nothing and propagates nowhere
    pub const fn is_zero_effect(&self) -> bool {
        self.range_x == 0 && self.range_y == 0 && self.follow_limit == 0
    }
}

/// BT.709 perceptual luminosity of an RGB pixel
pub fn luminosity(pixel: Pixel) -> f64 {
    0.2126 * f64::from(pixel[0]) + 0.7152 * f64::from(pixel[1]) + 0.0722 * f64::from(pixel[2])
}

/// Bucket a mask pixel's luminosity into a fill specification
///
/// Bands are compared in ascending order against multiples of the band
/// width (32); the first matching band wins. Band 6 deliberately leaves the
/// follow budget at zero, and anything brighter than band 6 returns the
/// zero-effect default.
pub fn classify(pixel: Pixel) -> FillSpec {
    let luma = luminosity(pixel);

    let mut spec = FillSpec {
        range_x: 0,
        range_y: 0,
        color: pixel,
        axis: Axis::X,
        follow_limit: 0,
    };

    if luma <= LUMA_BAND_WIDTH {
        spec.range_x = 1;
        spec.range_y = 1;
        spec.axis = Axis::X;
        spec.follow_limit = 1;
    } else if luma <= LUMA_BAND_WIDTH * 2.0 {
        spec.range_x = 1;
        spec.range_y = 1;
        spec.axis = Axis::Xy;
        spec.follow_limit = 2;
    } else if luma <= LUMA_BAND_WIDTH * 5.0 {
        // Bands 3 through 5 share one tuning
        spec.range_x = 1;
        spec.range_y = 1;
        spec.axis = Axis::X;
        spec.follow_limit = 2;
    } else if luma <= LUMA_BAND_WIDTH * 6.0 {
        // Band 6 paints but never propagates: the follow budget stays unset
        spec.range_x = 1;
        spec.range_y = 1;
        spec.axis = Axis::X;
    }

    spec
}
