//! Rasterization of a region into coverage cells.

use u_coverage_core::Region2D;

/// Returns the centroids of all grid cells whose centroid lies strictly
/// inside `region`.
///
/// The grid is anchored at the region's bounding-box minimum. Cell anchors
/// are `min + i * cell_size` for every `i` with the anchor below the box's
/// maximum, computed from the step count rather than by accumulation so
/// long rows do not drift. Output is ordered by ascending x, then ascending y.
///
/// Containment is tested at the centroid only: a cell whose centroid is
/// inside counts even if part of its square pokes out, and slivers of the
/// region narrower than a cell may get no cell at all.
pub fn cell_centroids<R: Region2D + ?Sized>(region: &R, cell_size: f64) -> Vec<(f64, f64)> {
    let Some(bounds) = region.bounds() else {
        return Vec::new();
    };
    if cell_size.is_nan() || cell_size <= 0.0 {
        return Vec::new();
    }

    let cols = step_count(bounds.width(), cell_size);
    let rows = step_count(bounds.height(), cell_size);
    let half = cell_size / 2.0;

    let mut centroids = Vec::new();
    for i in 0..cols {
        let x = bounds.min_x + i as f64 * cell_size;
        for j in 0..rows {
            let y = bounds.min_y + j as f64 * cell_size;
            let centroid = (x + half, y + half);
            if region.contains_point(centroid) {
                centroids.push(centroid);
            }
        }
    }

    log::trace!(
        "Grid {}x{} over [{}, {}]x[{}, {}]: {} valid cells",
        cols,
        rows,
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y,
        centroids.len()
    );

    centroids
}

/// Number of anchors `0, step, 2*step, ...` strictly below `extent`.
fn step_count(extent: f64, step: f64) -> usize {
    if extent.is_nan() || extent <= 0.0 {
        return 0;
    }
    (extent / step).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_coverage_core::AABB2D;
    use u_coverage_d2::{Boundary2D, ExclusionZones, Polygon2D, Region};

    /// Axis-aligned rectangle with strict containment.
    struct Rect(AABB2D);

    impl Region2D for Rect {
        fn bounds(&self) -> Option<AABB2D> {
            Some(self.0)
        }

        fn contains_point(&self, (x, y): (f64, f64)) -> bool {
            x > self.0.min_x && x < self.0.max_x && y > self.0.min_y && y < self.0.max_y
        }
    }

    #[test]
    fn test_square_grid() {
        let region = Rect(AABB2D::new(0.0, 0.0, 10.0, 10.0));
        let cells = cell_centroids(&region, 5.0);
        assert_eq!(
            cells,
            vec![(2.5, 2.5), (2.5, 7.5), (7.5, 2.5), (7.5, 7.5)]
        );
    }

    #[test]
    fn test_partial_last_column() {
        // Width 5 with cell 2: anchors 0, 2, 4; last centroid x = 5 lies on the edge
        let region = Rect(AABB2D::new(0.0, 0.0, 5.0, 2.0));
        let cells = cell_centroids(&region, 2.0);
        assert_eq!(cells, vec![(1.0, 1.0), (3.0, 1.0)]);
    }

    #[test]
    fn test_partial_cell_included_when_centroid_inside() {
        // Width 5.5: third column centroid at x = 5 is inside even though the cell spills out
        let region = Rect(AABB2D::new(0.0, 0.0, 5.5, 2.0));
        let cells = cell_centroids(&region, 2.0);
        assert_eq!(cells, vec![(1.0, 1.0), (3.0, 1.0), (5.0, 1.0)]);
    }

    #[test]
    fn test_empty_region() {
        let region = Region::empty();
        assert!(cell_centroids(&region, 1.0).is_empty());
    }

    #[test]
    fn test_non_positive_cell_size() {
        let region = Rect(AABB2D::new(0.0, 0.0, 10.0, 10.0));
        for cell_size in [0.0, -1.0, f64::NAN] {
            assert!(cell_centroids(&region, cell_size).is_empty());
        }
    }

    #[test]
    fn test_cells_larger_than_region() {
        // Single centroid at (5, 5) falls outside a 1x1 region
        let region = Rect(AABB2D::new(0.0, 0.0, 1.0, 1.0));
        assert!(cell_centroids(&region, 10.0).is_empty());
    }

    #[test]
    fn test_ordering_is_column_major() {
        let region = Rect(AABB2D::new(0.0, 0.0, 3.0, 3.0));
        let cells = cell_centroids(&region, 1.0);
        assert_eq!(cells.len(), 9);
        for w in cells.windows(2) {
            let (a, b) = (w[0], w[1]);
            assert!(a.0 < b.0 || (a.0 == b.0 && a.1 < b.1));
        }
    }

    #[test]
    fn test_cells_avoid_exclusion() {
        let boundary = Boundary2D::rectangle(10.0, 10.0).expect("valid boundary");
        let zones = ExclusionZones::new(vec![Polygon2D::rectangle(4.0, 4.0, 6.0, 6.0)])
            .expect("valid zone");
        let region = boundary.region().difference(zones.region());

        let cells = cell_centroids(&region, 1.0);
        // 100 cells minus the 4 whose centroids fall in the zone
        assert_eq!(cells.len(), 96);
        for &c in &cells {
            assert!(boundary.contains_point(c));
            assert!(!zones.region().contains_point(c));
        }
    }

    #[test]
    fn test_non_convex_region() {
        // L-shape: 4x4 square minus its upper-right 2x2 quadrant
        let region = Region::from_polygon(&Polygon2D::new(vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]));
        let cells = cell_centroids(&region, 1.0);
        assert_eq!(cells.len(), 12);
        assert!(!cells.contains(&(3.5, 3.5)));
        assert!(cells.contains(&(3.5, 1.5)));
    }
}
