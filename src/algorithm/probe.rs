//! Directional luminosity-trend probing
//!
//! From a point, the probe samples a four-pixel run in each of the four
//! canonical directions of the mask and tests the run's luminosity sequence
//! against a monotonic predicate. Forward runs must be non-increasing and
//! backward runs non-decreasing. Direction names describe the sampling
//! offsets, not any display geometry.
//!
//! A run truncated by an out-of-range read is treated as empty, and the
//! predicates return false on empty input, so probing near an edge simply
//! disqualifies the directions that would leave the grid.

use crate::algorithm::luminosity::luminosity;
use crate::io::configuration::PROBE_RUN_LENGTH;
use crate::spatial::PixelGrid;

/// A canonical probing direction, named by its sampling offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Samples at increasing x from the probed cell
    ForwardX,
    /// Samples at decreasing x before the probed cell
    BackwardX,
    /// Samples at decreasing y before the probed cell
    BackwardY,
    /// Samples at increasing y from the probed cell
    ForwardY,
}

/// Fixed direction table; probing reports qualifying entries in this order
pub const DIRECTIONS: [Direction; 4] = [
    Direction::ForwardX,
    Direction::BackwardX,
    Direction::BackwardY,
    Direction::ForwardY,
];

impl Direction {
    /// Cells visited when stepping `limit` cells along this direction
    ///
    /// Forward directions begin at the stepped-from cell itself and backward
    /// directions end one cell before it.
    pub fn step_cells(self, x: i64, y: i64, limit: i64) -> Vec<(i64, i64)> {
        match self {
            Self::ForwardX => (0..limit).map(|i| (x + i, y)).collect(),
            Self::BackwardX => (0..limit).map(|i| (x - limit + i, y)).collect(),
            Self::BackwardY => (0..limit).map(|i| (x, y - limit + i)).collect(),
            Self::ForwardY => (0..limit).map(|i| (x, y + i)).collect(),
        }
    }

    /// Cells sampled for this direction's probe run
    fn run_cells(self, x: i64, y: i64) -> Vec<(i64, i64)> {
        let length = PROBE_RUN_LENGTH as i64;
        match self {
            Self::ForwardX | Self::ForwardY => self.step_cells(x, y, length),
            Self::BackwardX => (0..length).map(|i| (x - length + i, y)).collect(),
            Self::BackwardY => (0..length).map(|i| (x, y - length + i)).collect(),
        }
    }

    fn qualifies(self, run: &[f64]) -> bool {
        match self {
            Self::ForwardX | Self::ForwardY => non_increasing_run(run),
            Self::BackwardX | Self::BackwardY => non_decreasing_run(run),
        }
    }
}

/// True iff the sequence is non-increasing elementwise and not all equal
///
/// Comparison starts from a sentinel above the valid luminosity range, so
/// the first element always passes. Empty sequences fail.
pub fn non_increasing_run(sequence: &[f64]) -> bool {
    monotone_run(sequence, 256.0, false)
}

/// True iff the sequence is non-decreasing elementwise and not all equal
///
/// Comparison starts from a zero sentinel. Empty sequences fail.
pub fn non_decreasing_run(sequence: &[f64]) -> bool {
    monotone_run(sequence, 0.0, true)
}

fn monotone_run(sequence: &[f64], sentinel: f64, ascending: bool) -> bool {
    if sequence.is_empty() {
        return false;
    }

    let mut previous = sentinel;
    let mut all_equal = true;

    for (index, &value) in sequence.iter().enumerate() {
        let ordered = if ascending {
            value >= previous
        } else {
            value <= previous
        };
        if !ordered {
            return false;
        }
        if index > 0 && (value - previous).abs() > f64::EPSILON {
            all_equal = false;
        }
        previous = value;
    }

    // A flat run carries no trend signal
    !all_equal
}

/// Sample a direction's probe run from the mask as a luminosity sequence
///
/// Returns an empty sequence when any sample falls out of range.
fn sample_run(mask: &PixelGrid, direction: Direction, x: i64, y: i64) -> Vec<f64> {
    let mut run = Vec::with_capacity(PROBE_RUN_LENGTH);
    for (cx, cy) in direction.run_cells(x, y) {
        match mask.get(cx, cy) {
            Some(pixel) => run.push(luminosity(pixel)),
            None => return Vec::new(),
        }
    }
    run
}

/// Report the directions whose probe run exhibits a qualifying trend
pub fn find_paths(x: i64, y: i64, mask: &PixelGrid) -> Vec<Direction> {
    DIRECTIONS
        .into_iter()
        .filter(|direction| {
            let run = sample_run(mask, *direction, x, y);
            direction.qualifies(&run)
        })
        .collect()
}
