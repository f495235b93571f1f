//! Worklist-driven rectangular fill with bounded propagation
//!
//! Paints a small rectangle around a cell and follows qualifying luminosity
//! trends into adjacent cells, reclassifying the mask pixel at each hop.
//! Pending cells live on an explicit stack with a per-task depth, so the
//! hop bound is independently testable and no call-stack limit applies.
//!
//! The paint rectangle's row loop uses the X half-extent on both ends while
//! the column loop mixes the X and Y half-extents. Downstream visual output
//! depends on this asymmetry; do not "fix" it.

use crate::algorithm::luminosity::{FillSpec, classify};
use crate::algorithm::probe::find_paths;
use crate::io::configuration::FOLLOW_STEP_LIMIT;
use crate::spatial::PixelGrid;

/// A pending fill at one cell of the output buffer
#[derive(Debug, Clone, Copy)]
struct FillTask {
    row: i64,
    col: i64,
    spec: FillSpec,
    follow_limit: u32,
    depth: u32,
}

/// Paint a bounded neighborhood of (row, col) and propagate along
/// qualifying luminosity trends in the mask
///
/// `follow_limit` caps the number of propagation hops; a task whose depth
/// has reached its budget neither paints nor propagates, so a zero budget
/// leaves the buffer untouched. Out-of-bounds writes are dropped and
/// out-of-range mask reads skip the affected direction.
pub fn fill(
    row: i64,
    col: i64,
    spec: FillSpec,
    output: &mut PixelGrid,
    mask: &PixelGrid,
    follow_limit: u32,
) {
    let mut stack = vec![FillTask {
        row,
        col,
        spec,
        follow_limit,
        depth: 0,
    }];

    while let Some(task) = stack.pop() {
        if task.depth >= task.follow_limit {
            continue;
        }

        paint_rectangle(output, &task);

        // The follow budget shrinks by one per hop while depth grows, so
        // every pushed task is strictly closer to its terminal condition
        let next_limit = task.follow_limit.saturating_sub(1);
        let mut pending = Vec::new();
        for direction in find_paths(task.col, task.row, mask) {
            for (x, y) in direction.step_cells(task.col, task.row, FOLLOW_STEP_LIMIT as i64) {
                let Some(pixel) = mask.get(x, y) else {
                    break;
                };
                pending.push(FillTask {
                    row: y,
                    col: x,
                    spec: classify(pixel),
                    follow_limit: next_limit,
                    depth: task.depth + 1,
                });
            }
        }

        // Reversed push keeps the pop order depth-first in direction order
        stack.extend(pending.into_iter().rev());
    }
}

// Row bounds deliberately use range_x on both ends
fn paint_rectangle(output: &mut PixelGrid, task: &FillTask) {
    for i in (task.row - task.spec.range_x)..(task.row + task.spec.range_x) {
        for j in (task.col - task.spec.range_x)..(task.col + task.spec.range_y) {
            output.put(j, i, task.spec.color);
        }
    }
}
