//! Scan area boundary.

use u_coverage_core::{Error, Region2D, Result, AABB2D};

use crate::geometry::Polygon2D;
use crate::region::Region;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed, simple polygon enclosing the whole scan area.
///
/// A boundary can only be built from a valid polygon, so its bounding box
/// always exists and has positive width and height.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Polygon2D", into = "Polygon2D")
)]
pub struct Boundary2D {
    /// Boundary shape.
    polygon: Polygon2D,

    /// Bounding box, computed once.
    aabb: AABB2D,

    /// Area-only view used for boolean operations.
    region: Region,
}

impl Boundary2D {
    /// Creates a boundary from polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoundary`] if the polygon has non-finite
    /// coordinates, fewer than three distinct vertices, zero area, or
    /// self-intersecting edges.
    pub fn new(polygon: impl Into<Polygon2D>) -> Result<Self> {
        let polygon = polygon.into();

        if !polygon.is_finite() {
            return Err(Error::InvalidBoundary(
                "Boundary coordinates must be finite".into(),
            ));
        }
        if polygon.len() < 3 {
            return Err(Error::InvalidBoundary(format!(
                "Boundary must have at least 3 distinct vertices, got {}",
                polygon.len()
            )));
        }
        if polygon.area() <= 0.0 {
            return Err(Error::InvalidBoundary("Boundary encloses no area".into()));
        }
        if !polygon.is_simple() {
            return Err(Error::InvalidBoundary(
                "Boundary must not self-intersect".into(),
            ));
        }

        let aabb = polygon
            .aabb()
            .ok_or_else(|| Error::InvalidBoundary("Boundary is empty".into()))?;
        let region = Region::from_polygon(&polygon);

        Ok(Self {
            polygon,
            aabb,
            region,
        })
    }

    /// Creates a rectangular boundary.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Self::new(Polygon2D::rectangle(0.0, 0.0, width, height))
    }

    /// Returns the boundary polygon.
    pub fn polygon(&self) -> &Polygon2D {
        &self.polygon
    }

    /// Returns the bounding box.
    pub fn aabb(&self) -> AABB2D {
        self.aabb
    }

    /// Returns the boundary as a region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    /// Vertical strip `[min_x, max_x]` spanning the boundary's full height.
    pub fn strip(&self, min_x: f64, max_x: f64) -> Region {
        Region::rectangle(AABB2D::new(
            min_x,
            self.aabb.min_y,
            max_x,
            self.aabb.max_y,
        ))
    }

    /// Returns true if the point lies strictly inside the boundary.
    pub fn contains_point(&self, point: (f64, f64)) -> bool {
        self.region.contains_point(point)
    }
}

impl TryFrom<Polygon2D> for Boundary2D {
    type Error = Error;

    fn try_from(polygon: Polygon2D) -> Result<Self> {
        Self::new(polygon)
    }
}

impl From<Boundary2D> for Polygon2D {
    fn from(boundary: Boundary2D) -> Self {
        boundary.polygon
    }
}
