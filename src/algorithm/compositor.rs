//! Top-level compositing orchestration
//!
//! Walks the source/mask grid in row-major order and decides, per pixel,
//! whether to copy the mask pixel, leave the output alone, or launch a
//! luminosity-following fill. All gating reads ("is this the marker
//! pixel?") go to the untouched source snapshot; the output buffer starts
//! as a copy of the source and is the only thing mutated, so partial fills
//! written during the pass never influence later decisions.

use crate::algorithm::filler::fill;
use crate::algorithm::luminosity::{classify, luminosity};
use crate::algorithm::probe::find_paths;
use crate::io::configuration::{BRIGHT_SKIP_THRESHOLD, PAINT_LIMIT};
use crate::io::error::{CompositeError, Result};
use crate::spatial::{Pixel, PixelGrid};

/// Alternating gate for the luminosity-following branch
///
/// Counts processed pixels and flips a `painted` flag every `PAINT_LIMIT`
/// increments, so runs of hole pixels alternate between probing and
/// resting. The copy branch advances the same counter while resting
/// without any externally visible effect on copies.
#[derive(Debug, Default)]
struct PaintThrottle {
    painted: bool,
    paint_num: usize,
}

impl PaintThrottle {
    const fn is_resting(&self) -> bool {
        self.painted
    }

    /// Counter tick from the copy branch; only advances while resting
    fn tick_copy(&mut self) {
        if self.painted {
            self.paint_num += 1;
        }
        if self.paint_num >= PAINT_LIMIT {
            self.painted = false;
            self.paint_num = 0;
        }
    }

    /// Counter tick from the fill branch; a full window starts a rest
    fn tick_fill(&mut self) {
        self.paint_num += 1;
        if self.paint_num >= PAINT_LIMIT {
            self.painted = true;
            self.paint_num = 0;
        }
    }
}

/// Fill marker-colored pixels of the source from the mask
///
/// Non-marker source pixels are overwritten with the mask pixel at the same
/// coordinate. Marker pixels are left untouched unless `follow_luminosity`
/// is set, in which case the mask's luminosity decides whether and how far
/// to paint: pixels brighter than the skip threshold are never filled, and
/// qualifying directional trends launch bounded fills whose budget comes
/// from the luminosity bucket of each stepped-to mask pixel.
///
/// # Errors
///
/// Returns [`CompositeError::DimensionMismatch`] when the source and mask
/// differ in width or height; no pixel is touched in that case.
pub fn composite(
    source: &PixelGrid,
    mask: &PixelGrid,
    marker: Pixel,
    follow_luminosity: bool,
) -> Result<PixelGrid> {
    if source.dimensions() != mask.dimensions() {
        return Err(CompositeError::DimensionMismatch {
            source_dims: source.dimensions(),
            mask_dims: mask.dimensions(),
        });
    }

    let (width, height) = mask.dimensions();
    let mut output = source.clone();
    let mut throttle = PaintThrottle::default();

    for row in 0..height as i64 {
        for col in 0..width as i64 {
            let Some(mask_pixel) = mask.get(col, row) else {
                continue;
            };

            // Gating read against the untouched snapshot, never the output
            if source.get(col, row) != Some(marker) {
                output.put(col, row, mask_pixel);
                throttle.tick_copy();
                continue;
            }

            if !follow_luminosity {
                continue;
            }

            if luminosity(mask_pixel) > BRIGHT_SKIP_THRESHOLD {
                continue;
            }

            if !throttle.is_resting() {
                follow_at(col, row, &mut output, mask);
                throttle.tick_fill();
            }
        }
    }

    Ok(output)
}

// Launch fills along every qualifying trend around a hole pixel
fn follow_at(col: i64, row: i64, output: &mut PixelGrid, mask: &PixelGrid) {
    for direction in find_paths(col, row, mask) {
        for (x, y) in direction.step_cells(col, row, PAINT_LIMIT as i64) {
            // An out-of-range step abandons the rest of this direction
            let Some(stepped) = mask.get(x, y) else {
                break;
            };
            let spec = classify(stepped);
            fill(y, x, spec, output, mask, spec.follow_limit);
        }
    }
}
