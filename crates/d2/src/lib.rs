//! # U-Coverage 2D
//!
//! Concrete 2D geometry for the U-Coverage planning engine.
//!
//! ## Features
//!
//! - Polygon input type accepting open or closed rings
//! - Validated scan boundaries (finite, non-degenerate, simple)
//! - Exclusion zones unioned once at construction
//! - Region boolean algebra (union, difference, intersection) via `i_overlay`
//! - Strict point containment and bounds via `geo`
//! - R*-tree nearest-point index with deterministic tie-breaking
//!
//! ## Quick Start
//!
//! ```rust
//! use u_coverage_d2::{Boundary2D, ExclusionZones, Polygon2D, Region2D};
//!
//! let boundary = Boundary2D::rectangle(10.0, 10.0).unwrap();
//! let zones = ExclusionZones::new(vec![Polygon2D::rectangle(4.0, 4.0, 6.0, 6.0)]).unwrap();
//!
//! let traversable = boundary.region().difference(zones.region());
//! let left_half = traversable.intersection(&boundary.strip(0.0, 5.0));
//!
//! assert!(left_half.contains_point((1.0, 1.0)));
//! assert!(!left_half.contains_point((4.5, 5.0)));
//! ```

pub mod boundary;
pub mod exclusion;
pub mod geometry;
pub mod region;
pub mod spatial_index;

pub use boundary::Boundary2D;
pub use exclusion::ExclusionZones;
pub use geometry::Polygon2D;
pub use region::Region;
pub use spatial_index::{IndexedPoint, NearestPoint, PointIndex};

// Re-export core types
pub use u_coverage_core::{Error, Region2D, Result, AABB2D};
