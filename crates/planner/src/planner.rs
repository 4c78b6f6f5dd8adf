//! Coverage planning over a partitioned field.
//!
//! Combines partition-line computation, region algebra, grid rasterization
//! and nearest-neighbor sequencing into one plan per field.

use std::time::Instant;

use rayon::prelude::*;

use u_coverage_core::Result;
use u_coverage_d2::{Boundary2D, ExclusionZones, Polygon2D, Region};

use crate::config::CoverageConfig;
use crate::grid::cell_centroids;
use crate::partition::PartitionLines;
use crate::result::{CoveragePlan, PartitionResult};
use crate::sequence::nearest_neighbor_path;

/// Plans grid coverage paths for a bounded field with no-go zones.
///
/// Boundary, exclusion union and partition lines are fixed at construction;
/// every call to [`plan`](Self::plan) returns a fresh [`CoveragePlan`].
///
/// # Example
///
/// ```rust
/// use u_coverage_planner::{CoverageConfig, CoveragePlanner, Polygon2D};
///
/// let config = CoverageConfig::new()
///     .with_cell_size(5.0)
///     .with_start_position(0.0, 0.0);
/// let planner = CoveragePlanner::new(
///     Polygon2D::rectangle(0.0, 0.0, 10.0, 10.0),
///     Vec::<Polygon2D>::new(),
///     config,
/// )
/// .unwrap();
///
/// let plan = planner.plan();
/// assert_eq!(plan.partition_count(), 1);
/// assert_eq!(plan.total_cells(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CoveragePlanner {
    config: CoverageConfig,
    boundary: Boundary2D,
    exclusions: ExclusionZones,
    lines: PartitionLines,
    traversable: Region,
}

impl CoveragePlanner {
    /// Creates a planner for `boundary` with the given no-go polygons.
    ///
    /// # Errors
    ///
    /// Validation runs in order and stops at the first failure:
    /// [`Error::InvalidConfig`](u_coverage_core::Error::InvalidConfig) for bad
    /// parameters, [`Error::InvalidBoundary`](u_coverage_core::Error::InvalidBoundary)
    /// for a degenerate or self-intersecting boundary, and
    /// [`Error::InvalidGeometry`](u_coverage_core::Error::InvalidGeometry) for a
    /// malformed exclusion polygon.
    pub fn new<B, Z, P>(boundary: B, exclusions: Z, config: CoverageConfig) -> Result<Self>
    where
        B: Into<Polygon2D>,
        Z: IntoIterator<Item = P>,
        P: Into<Polygon2D>,
    {
        config.validate()?;
        let boundary = Boundary2D::new(boundary)?;
        let exclusions = ExclusionZones::new(exclusions)?;

        let aabb = boundary.aabb();
        let lines = PartitionLines::compute(
            aabb.min_x,
            aabb.max_x,
            config.cell_size,
            config.partition_count,
        );
        let traversable = boundary.region().difference(exclusions.region());

        log::debug!(
            "Coverage planner: boundary area {:.2}, {} exclusion zones, partition lines {:?}",
            boundary.area(),
            exclusions.len(),
            lines.lines()
        );

        Ok(Self {
            config,
            boundary,
            exclusions,
            lines,
            traversable,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Returns the validated boundary.
    pub fn boundary(&self) -> &Boundary2D {
        &self.boundary
    }

    /// Returns the exclusion zones.
    pub fn exclusion_zones(&self) -> &ExclusionZones {
        &self.exclusions
    }

    /// Returns the grid-aligned partition lines.
    pub fn partition_lines(&self) -> &PartitionLines {
        &self.lines
    }

    /// Returns the boundary minus every exclusion zone.
    pub fn traversable_region(&self) -> &Region {
        &self.traversable
    }

    /// Valid area of one strip: the traversable region clipped to
    /// `[min_x, max_x]` over the boundary's full height.
    pub fn valid_area(&self, min_x: f64, max_x: f64) -> Region {
        self.traversable
            .intersection(&self.boundary.strip(min_x, max_x))
    }

    /// Plans every partition, left to right.
    ///
    /// Partitions with no valid cell get distance 0 and a path holding only
    /// the start position.
    pub fn plan(&self) -> CoveragePlan {
        let start = Instant::now();

        let strips: Vec<(usize, (f64, f64))> = self.lines.strips().enumerate().collect();
        let partitions: Vec<PartitionResult> = if self.config.parallel {
            strips
                .par_iter()
                .map(|&(index, strip)| self.plan_partition(index, strip))
                .collect()
        } else {
            strips
                .iter()
                .map(|&(index, strip)| self.plan_partition(index, strip))
                .collect()
        };

        let mut plan = CoveragePlan::new(partitions);
        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Coverage plan: {} partitions, {} cells, distance {:.2}, time {:.2}s ({}ms)",
            plan.partition_count(),
            plan.total_cells(),
            plan.total_distance(),
            plan.total_time(),
            plan.computation_time_ms
        );

        plan
    }

    fn plan_partition(&self, index: usize, (min_x, max_x): (f64, f64)) -> PartitionResult {
        let area = self.valid_area(min_x, max_x);
        let cells = cell_centroids(&area, self.config.cell_size);
        let sequence = nearest_neighbor_path(&cells, self.config.start_position);
        let time = sequence.distance / self.config.speed;

        log::debug!(
            "Partition {} [{}, {}]: {} cells, distance {:.2}",
            index,
            min_x,
            max_x,
            cells.len(),
            sequence.distance
        );

        PartitionResult {
            index,
            strip: (min_x, max_x),
            cells,
            distance: sequence.distance,
            time,
            path: sequence.path,
        }
    }
}
