//! 2D polygon input type.

use geo::{Coord, LineString, Polygon as GeoPolygon};
use u_coverage_core::robust::{is_simple_polygon, normalize_ring, signed_area_robust};
use u_coverage_core::AABB2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simple polygon given by its outer ring.
///
/// Vertices may be supplied open or closed; the stored ring is always open
/// (no repeated closing vertex) and free of consecutive duplicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon2D {
    vertices: Vec<(f64, f64)>,
}

impl Polygon2D {
    /// Creates a polygon from a list of (x, y) vertices.
    pub fn new(vertices: Vec<(f64, f64)>) -> Self {
        Self {
            vertices: normalize_ring(&vertices),
        }
    }

    /// Creates an axis-aligned rectangle from its corners.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ])
    }

    /// Returns the ring vertices.
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Returns the number of distinct ring vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box, or `None` for an empty ring.
    pub fn aabb(&self) -> Option<AABB2D> {
        AABB2D::from_points(&self.vertices)
    }

    /// Enclosed area (always non-negative).
    pub fn area(&self) -> f64 {
        signed_area_robust(&self.vertices).abs()
    }

    /// Returns true if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|&(x, y)| x.is_finite() && y.is_finite())
    }

    /// Returns true if the ring is a simple polygon with non-zero area.
    pub fn is_simple(&self) -> bool {
        is_simple_polygon(&self.vertices)
    }

    /// Converts to a geo crate Polygon.
    pub fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let exterior = LineString::from(
            self.vertices
                .iter()
                .map(|&(x, y)| Coord { x, y })
                .collect::<Vec<_>>(),
        );
        GeoPolygon::new(exterior, Vec::new())
    }
}

impl From<Vec<(f64, f64)>> for Polygon2D {
    fn from(vertices: Vec<(f64, f64)>) -> Self {
        Self::new(vertices)
    }
}
