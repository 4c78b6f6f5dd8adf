//! Partitioned grid coverage path planning.
//!
//! Given a field boundary, a set of no-go polygons and a start position,
//! this crate splits the field into vertical strips and computes, for each
//! strip, a visiting order over the grid cells that lie inside the
//! traversable area.
//!
//! # Algorithm
//!
//! 1. **Partitioning**: split the boundary's x-extent into evenly spaced
//!    strips, snapping interior lines onto the cell grid
//! 2. **Valid area**: boundary minus the union of no-go zones, clipped to
//!    each strip over the boundary's full height
//! 3. **Rasterization**: keep every cell whose centroid lies strictly inside
//!    the valid area
//! 4. **Sequencing**: greedy nearest-neighbor ordering from the start
//!    position, with no return leg
//!
//! Partitions are independent and may be planned on the rayon thread pool
//! (see [`CoverageConfig::parallel`]); results are always in partition order.
//!
//! # Example
//!
//! ```rust
//! use u_coverage_planner::{CoverageConfig, CoveragePlanner, Polygon2D};
//!
//! let config = CoverageConfig::new()
//!     .with_cell_size(10.0)
//!     .with_partition_count(3);
//! let zones = vec![Polygon2D::rectangle(12.0, 12.0, 18.0, 18.0)];
//! let planner =
//!     CoveragePlanner::new(Polygon2D::rectangle(0.0, 0.0, 30.0, 30.0), zones, config).unwrap();
//!
//! assert_eq!(planner.partition_lines().lines(), &[0.0, 10.0, 20.0, 30.0]);
//!
//! for partition in &planner.plan().partitions {
//!     println!("{}", partition);
//! }
//! ```

pub mod config;
pub mod grid;
pub mod partition;
pub mod planner;
pub mod result;
pub mod sequence;

pub use config::CoverageConfig;
pub use grid::cell_centroids;
pub use partition::PartitionLines;
pub use planner::CoveragePlanner;
pub use result::{CoveragePlan, PartitionResult};
pub use sequence::{nearest_neighbor_path, path_length, SequenceResult};

// Re-export geometry types
pub use u_coverage_d2::{Boundary2D, ExclusionZones, Polygon2D, Region};
pub use u_coverage_core::{Error, Region2D, Result, AABB2D};
