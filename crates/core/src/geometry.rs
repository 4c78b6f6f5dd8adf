//! Core geometry traits and types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl AABB2D {
    /// Creates a bounding box from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the bounding box of a point set, or `None` if it is empty.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x0, y0), rest) = points.split_first()?;
        let mut aabb = Self::new(x0, y0, x0, y0);
        for &(x, y) in rest {
            aabb.min_x = aabb.min_x.min(x);
            aabb.min_y = aabb.min_y.min(y);
            aabb.max_x = aabb.max_x.max(x);
            aabb.max_y = aabb.max_y.max(y);
        }
        Some(aabb)
    }

    /// Width along the x axis.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along the y axis.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A planar area that can answer containment queries.
///
/// Grid construction only needs these two capabilities, so it is written
/// against this trait rather than a concrete polygon type.
pub trait Region2D {
    /// Bounding box of the region, or `None` if the region is empty.
    fn bounds(&self) -> Option<AABB2D>;

    /// Returns true if the point lies strictly inside the region.
    ///
    /// Points on the region's boundary are not contained.
    fn contains_point(&self, point: (f64, f64)) -> bool;

    /// Returns true if the region covers no area.
    fn is_empty(&self) -> bool {
        self.bounds().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_from_points() {
        let aabb = AABB2D::from_points(&[(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)])
            .expect("non-empty point set");
        assert_relative_eq!(aabb.min_x, -2.0);
        assert_relative_eq!(aabb.min_y, -1.0);
        assert_relative_eq!(aabb.max_x, 4.0);
        assert_relative_eq!(aabb.max_y, 5.0);
        assert_relative_eq!(aabb.width(), 6.0);
        assert_relative_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn test_aabb_empty() {
        assert!(AABB2D::from_points(&[]).is_none());
    }

    struct Disk {
        radius: f64,
    }

    impl Region2D for Disk {
        fn bounds(&self) -> Option<AABB2D> {
            (self.radius > 0.0)
                .then(|| AABB2D::new(-self.radius, -self.radius, self.radius, self.radius))
        }

        fn contains_point(&self, (x, y): (f64, f64)) -> bool {
            x * x + y * y < self.radius * self.radius
        }
    }

    #[test]
    fn test_region_default_is_empty() {
        assert!(Disk { radius: 0.0 }.is_empty());
        assert!(!Disk { radius: 1.0 }.is_empty());
    }
}
