//! Result types for coverage planning.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of planning a single partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionResult {
    /// Zero-based partition index, left to right.
    pub index: usize,

    /// X-range `(min_x, max_x)` of the strip this partition covers.
    pub strip: (f64, f64),

    /// Centroids of the valid cells, in grid order.
    pub cells: Vec<(f64, f64)>,

    /// Total travel distance along `path`.
    pub distance: f64,

    /// Travel time in seconds (`distance / speed`).
    pub time: f64,

    /// Start position followed by the visited cell centroids.
    pub path: Vec<(f64, f64)>,
}

impl PartitionResult {
    /// Cell centroids in visiting order, without the leading start entries.
    ///
    /// Empty when the partition had no valid cells.
    pub fn visited_cells(&self) -> &[(f64, f64)] {
        if self.cells.is_empty() {
            return &[];
        }
        // path = [start, start, cells...]
        self.path.get(2..).unwrap_or(&[])
    }

    /// Returns true if the partition had no valid cells (path is only the start).
    pub fn is_degenerate(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for PartitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Partition {} - Time required: {:.2} seconds, Distance covered: {:.2} units",
            self.index + 1,
            self.time,
            self.distance
        )
    }
}

/// Result of planning every partition of a field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoveragePlan {
    /// One result per partition, in partition order.
    pub partitions: Vec<PartitionResult>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl CoveragePlan {
    /// Creates a plan from per-partition results.
    pub fn new(partitions: Vec<PartitionResult>) -> Self {
        Self {
            partitions,
            computation_time_ms: 0,
        }
    }

    /// Per-partition travel distances.
    pub fn distances(&self) -> Vec<f64> {
        self.partitions.iter().map(|p| p.distance).collect()
    }

    /// Per-partition travel times.
    pub fn times(&self) -> Vec<f64> {
        self.partitions.iter().map(|p| p.time).collect()
    }

    /// Per-partition paths.
    pub fn paths(&self) -> Vec<&[(f64, f64)]> {
        self.partitions.iter().map(|p| p.path.as_slice()).collect()
    }

    /// Sum of all partition distances.
    pub fn total_distance(&self) -> f64 {
        self.partitions.iter().map(|p| p.distance).sum()
    }

    /// Sum of all partition times.
    pub fn total_time(&self) -> f64 {
        self.partitions.iter().map(|p| p.time).sum()
    }

    /// Number of valid cells across all partitions.
    pub fn total_cells(&self) -> usize {
        self.partitions.iter().map(|p| p.cells.len()).sum()
    }

    /// Number of partitions actually planned.
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Returns true if no partition has any valid cell.
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(PartitionResult::is_degenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(index: usize, cells: Vec<(f64, f64)>, distance: f64) -> PartitionResult {
        let start = (0.0, 0.0);
        let mut path = vec![start];
        if !cells.is_empty() {
            path.push(start);
            path.extend(cells.iter().copied());
        }
        PartitionResult {
            index,
            strip: (index as f64 * 10.0, (index + 1) as f64 * 10.0),
            cells,
            distance,
            time: distance / 4.0,
            path,
        }
    }

    #[test]
    fn test_display() {
        let result = sample(0, vec![(1.0, 1.0)], 12.3456);
        assert_eq!(
            result.to_string(),
            "Partition 1 - Time required: 3.09 seconds, Distance covered: 12.35 units"
        );
    }

    #[test]
    fn test_visited_cells() {
        let result = sample(0, vec![(1.0, 1.0), (3.0, 1.0)], 4.0);
        assert_eq!(result.visited_cells(), &[(1.0, 1.0), (3.0, 1.0)]);
        assert!(!result.is_degenerate());

        let empty = sample(1, Vec::new(), 0.0);
        assert!(empty.visited_cells().is_empty());
        assert!(empty.is_degenerate());
        assert_eq!(empty.path, vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_visited_cells_with_short_path() {
        // Fields are public, so cells and path may disagree
        let mut result = sample(0, vec![(1.0, 1.0)], 2.0);
        result.path.truncate(1);
        assert!(result.visited_cells().is_empty());

        result.path.clear();
        assert!(result.visited_cells().is_empty());
    }

    #[test]
    fn test_totals() {
        let plan = CoveragePlan::new(vec![
            sample(0, vec![(1.0, 1.0)], 8.0),
            sample(1, Vec::new(), 0.0),
            sample(2, vec![(21.0, 1.0), (23.0, 1.0)], 4.0),
        ]);

        assert_eq!(plan.partition_count(), 3);
        assert_eq!(plan.distances(), vec![8.0, 0.0, 4.0]);
        assert_eq!(plan.times(), vec![2.0, 0.0, 1.0]);
        assert_eq!(plan.paths()[1], &[(0.0, 0.0)]);
        assert_relative_eq!(plan.total_distance(), 12.0);
        assert_relative_eq!(plan.total_time(), 3.0);
        assert_eq!(plan.total_cells(), 3);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_empty_plan() {
        let plan = CoveragePlan::new(vec![sample(0, Vec::new(), 0.0)]);
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance(), 0.0);
        assert_eq!(plan.total_cells(), 0);
    }
}
