//! Vertical partitioning of the scan area.
//!
//! The boundary's x-extent is split into evenly spaced breakpoints, and each
//! interior breakpoint is snapped onto the cell grid anchored at `min_x`, so
//! that partition strips never cut a cell column in two. Snapping can make
//! neighbouring breakpoints collide; collided breakpoints are dropped, which
//! yields fewer, wider partitions rather than an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strictly increasing x-coordinates `[min_x, x1, ..., max_x]` bounding each strip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionLines {
    lines: Vec<f64>,
}

impl PartitionLines {
    /// Computes grid-aligned partition lines across `[min_x, max_x]`.
    ///
    /// Interior breakpoints are snapped to `min_x + k * cell_size`, with `k`
    /// rounded half-to-even. A snapped line is kept only if it lies strictly
    /// between the previously kept line and `max_x`. The first line is always
    /// `min_x` and the last is always `max_x`.
    ///
    /// Expects `min_x < max_x`, a positive `cell_size` and a non-zero
    /// `partition_count`; callers validate these beforehand.
    pub fn compute(min_x: f64, max_x: f64, cell_size: f64, partition_count: usize) -> Self {
        let count = partition_count.max(1);
        let width = max_x - min_x;
        let grid_steps = (width / cell_size).ceil() as usize;

        let mut lines = Vec::with_capacity(count.min(grid_steps).saturating_add(1));
        lines.push(min_x);

        if count >= grid_steps.saturating_mul(DENSE_BREAKPOINTS_PER_CELL) {
            push_grid_lines(&mut lines, min_x, max_x, cell_size, grid_steps);
        } else {
            push_snapped_breakpoints(&mut lines, min_x, max_x, cell_size, count);
        }

        lines.push(max_x);

        let produced = lines.len() - 1;
        if produced < count {
            log::warn!(
                "Snapping to cell size {} merged partitions: requested {}, produced {}",
                cell_size,
                count,
                produced
            );
        }

        Self { lines }
    }

    /// The line coordinates, including both outer edges.
    pub fn lines(&self) -> &[f64] {
        &self.lines
    }

    /// Number of strips (one less than the number of lines).
    pub fn partition_count(&self) -> usize {
        self.lines.len() - 1
    }

    /// Iterates over `(strip_min_x, strip_max_x)` pairs, left to right.
    pub fn strips(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lines.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Breakpoints per cell at or above which every interior grid line is hit.
///
/// With breakpoints at most an eighth of a cell apart, each grid line strictly
/// inside the extent has a breakpoint well within half a cell of it, so the
/// snapped lines are exactly the interior grid lines.
const DENSE_BREAKPOINTS_PER_CELL: usize = 8;

/// Snaps each interior breakpoint onto the grid, keeping strictly increasing lines below `max_x`.
fn push_snapped_breakpoints(
    lines: &mut Vec<f64>,
    min_x: f64,
    max_x: f64,
    cell_size: f64,
    count: usize,
) {
    let width = max_x - min_x;
    for i in 1..count {
        let breakpoint = min_x + width * (i as f64) / (count as f64);
        let steps = ((breakpoint - min_x) / cell_size).round_ties_even();
        let snapped = min_x + steps * cell_size;

        let last = lines[lines.len() - 1];
        if snapped > last && snapped < max_x {
            lines.push(snapped);
        }
    }
}

/// Pushes every grid line strictly between `min_x` and `max_x`.
fn push_grid_lines(lines: &mut Vec<f64>, min_x: f64, max_x: f64, cell_size: f64, grid_steps: usize) {
    for k in 1..grid_steps {
        let line = min_x + k as f64 * cell_size;
        if line < max_x {
            lines.push(line);
        }
    }
}
