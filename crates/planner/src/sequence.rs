//! Visiting order for the cells of one partition.
//!
//! # Algorithm
//!
//! **Nearest Neighbor (NN)**: greedy construction that always moves to the
//! closest unvisited point. There is no improvement pass and no return leg;
//! the result is a myopic open path, not an optimal tour.
//!
//! The working set is seeded with the visit points in input order followed
//! by the start position itself. Because the start is in the set, the first
//! extraction is always a zero-length hop onto the start, so every non-empty
//! path begins with the start position twice. Ties on distance go to the
//! point that comes first in the working set.
//!
//! Nearest queries run against an R*-tree that shrinks as points are
//! visited, giving O(n log n) expected behaviour instead of the O(n^2) of a
//! linear scan.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_coverage_d2::PointIndex;

/// Result of sequencing one point set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SequenceResult {
    /// Total travel distance along `path`.
    pub distance: f64,
    /// Start position followed by the points in visiting order.
    pub path: Vec<(f64, f64)>,
}

/// Orders `points` greedily by nearest neighbor, starting from `start`.
///
/// An empty point set yields a zero-distance path holding only `start`.
/// Otherwise the path has `points.len() + 2` entries: `start`, the
/// zero-length self hop back onto `start`, then every point once.
pub fn nearest_neighbor_path(points: &[(f64, f64)], start: (f64, f64)) -> SequenceResult {
    if points.is_empty() {
        return SequenceResult {
            distance: 0.0,
            path: vec![start],
        };
    }

    let mut working = Vec::with_capacity(points.len() + 1);
    working.extend_from_slice(points);
    working.push(start);

    let mut index = PointIndex::new(&working);
    let mut path = Vec::with_capacity(working.len() + 1);
    path.push(start);

    let mut current = start;
    let mut total = 0.0;

    while let Some(next) = index.pop_nearest(current) {
        total += next.distance;
        path.push(next.point);
        current = next.point;
    }

    SequenceResult {
        distance: total,
        path,
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Sum of consecutive segment lengths along a path.
pub fn path_length(path: &[(f64, f64)]) -> f64 {
    path.windows(2).map(|w| point_distance(w[0], w[1])).sum()
}
