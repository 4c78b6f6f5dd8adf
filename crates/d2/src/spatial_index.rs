//! Nearest-point queries over a shrinking point set using an R*-tree.
//!
//! Points keep the position they had in the input slice. When several points
//! are equally close to a query, the one with the lowest position wins, so
//! the answer never depends on how the tree happens to be laid out.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A point stored in the index together with its input position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint {
    /// Position of the point in the input slice.
    pub index: usize,
    /// Coordinates.
    pub point: [f64; 2],
}

impl IndexedPoint {
    /// Creates a new indexed point.
    pub fn new(index: usize, (x, y): (f64, f64)) -> Self {
        Self {
            index,
            point: [x, y],
        }
    }

    /// Coordinates as a tuple.
    pub fn coords(&self) -> (f64, f64) {
        (self.point[0], self.point[1])
    }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, query: &[f64; 2]) -> f64 {
        squared_distance(self.point, *query)
    }
}

/// Result of a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Position of the point in the input slice.
    pub index: usize,
    /// Coordinates of the point.
    pub point: (f64, f64),
    /// Euclidean distance from the query.
    pub distance: f64,
}

/// R*-tree index over a finite point set supporting removal.
#[derive(Debug, Clone)]
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl PointIndex {
    /// Builds an index over `points`; each point is keyed by its slice position.
    pub fn new(points: &[(f64, f64)]) -> Self {
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| IndexedPoint::new(i, p))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Number of points still in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if every point has been removed.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds the remaining point nearest to `query`.
    ///
    /// Ties on distance are broken by the lowest input position.
    pub fn nearest(&self, query: (f64, f64)) -> Option<NearestPoint> {
        let q = [query.0, query.1];
        let mut candidates = self.tree.nearest_neighbor_iter(&q);

        let first = candidates.next()?;
        let best_d2 = squared_distance(first.point, q);
        let mut best = first;

        for candidate in candidates {
            let d2 = squared_distance(candidate.point, q);
            if d2 > best_d2 {
                break;
            }
            if d2 == best_d2 && candidate.index < best.index {
                best = candidate;
            }
        }

        Some(NearestPoint {
            index: best.index,
            point: best.coords(),
            distance: best_d2.sqrt(),
        })
    }

    /// Removes and returns the remaining point nearest to `query`.
    pub fn pop_nearest(&mut self, query: (f64, f64)) -> Option<NearestPoint> {
        let nearest = self.nearest(query)?;
        self.tree
            .remove(&IndexedPoint::new(nearest.index, nearest.point));
        Some(nearest)
    }
}

#[inline]
fn squared_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_index() {
        let mut index = PointIndex::new(&[]);
        assert!(index.is_empty());
        assert!(index.nearest((0.0, 0.0)).is_none());
        assert!(index.pop_nearest((0.0, 0.0)).is_none());
    }

    #[test]
    fn test_nearest() {
        let index = PointIndex::new(&[(10.0, 0.0), (3.0, 4.0), (-7.0, 0.0)]);
        let nearest = index.nearest((0.0, 0.0)).expect("non-empty");
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.point, (3.0, 4.0));
        assert_relative_eq!(nearest.distance, 5.0);
    }

    #[test]
    fn test_tie_breaks_by_lowest_index() {
        // Four points equidistant from the origin
        let points = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0)];
        let mut index = PointIndex::new(&points);

        let order: Vec<usize> = std::iter::from_fn(|| index.pop_nearest((0.0, 0.0)))
            .map(|n| n.index)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_points() {
        let points = [(1.0, 1.0), (5.0, 5.0), (1.0, 1.0)];
        let mut index = PointIndex::new(&points);

        let first = index.pop_nearest((0.0, 0.0)).expect("non-empty");
        let second = index.pop_nearest((0.0, 0.0)).expect("non-empty");
        assert_eq!(first.index, 0);
        assert_eq!(second.index, 2);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_pop_shrinks_index() {
        let points: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, (i % 7) as f64)).collect();
        let mut index = PointIndex::new(&points);

        let mut seen = Vec::new();
        let mut query = (0.0, 0.0);
        while let Some(n) = index.pop_nearest(query) {
            seen.push(n.index);
            query = n.point;
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
        assert!(index.is_empty());
    }

    #[test]
    fn test_matches_linear_scan() {
        let points: Vec<(f64, f64)> = (0..40)
            .map(|i| (((i * 37) % 11) as f64 * 0.5, ((i * 13) % 9) as f64 * 0.5))
            .collect();
        let mut index = PointIndex::new(&points);
        let mut remaining: Vec<usize> = (0..points.len()).collect();

        let mut query = (2.0, 2.0);
        while !remaining.is_empty() {
            let mut best = remaining[0];
            let mut best_d2 = squared_distance([points[best].0, points[best].1], [query.0, query.1]);
            for &i in &remaining[1..] {
                let d2 = squared_distance([points[i].0, points[i].1], [query.0, query.1]);
                if d2 < best_d2 {
                    best = i;
                    best_d2 = d2;
                }
            }

            let popped = index.pop_nearest(query).expect("index not yet empty");
            assert_eq!(popped.index, best);

            remaining.retain(|&i| i != best);
            query = popped.point;
        }
    }
}
