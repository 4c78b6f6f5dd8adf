//! No-go zones.

use u_coverage_core::{Error, Result};

use crate::geometry::Polygon2D;
use crate::region::Region;

/// Static exclusion zones and their precomputed union.
///
/// Zones may overlap each other and may extend past the scan boundary. The
/// union is computed once at construction.
#[derive(Debug, Clone, Default)]
pub struct ExclusionZones {
    zones: Vec<Polygon2D>,
    union: Region,
}

impl ExclusionZones {
    /// Validates the zones and unions them into one region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if a zone has non-finite coordinates
    /// or fewer than three distinct vertices.
    pub fn new<P>(zones: impl IntoIterator<Item = P>) -> Result<Self>
    where
        P: Into<Polygon2D>,
    {
        let zones: Vec<Polygon2D> = zones.into_iter().map(Into::into).collect();

        for (i, zone) in zones.iter().enumerate() {
            if !zone.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "Exclusion zone {} has non-finite coordinates",
                    i
                )));
            }
            if zone.len() < 3 {
                return Err(Error::InvalidGeometry(format!(
                    "Exclusion zone {} must have at least 3 distinct vertices, got {}",
                    i,
                    zone.len()
                )));
            }
        }

        let union = Region::union_all(&zones);
        log::debug!(
            "Unioned {} exclusion zones into {} polygons",
            zones.len(),
            union.polygon_count()
        );

        Ok(Self { zones, union })
    }

    /// The individual zones, as supplied.
    pub fn zones(&self) -> &[Polygon2D] {
        &self.zones
    }

    /// The union of all zones.
    pub fn region(&self) -> &Region {
        &self.union
    }

    /// Number of zones supplied.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if no zones were supplied.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_coverage_core::Region2D;

    #[test]
    fn test_no_zones() {
        let zones = ExclusionZones::new(Vec::<Polygon2D>::new()).expect("empty is valid");
        assert!(zones.is_empty());
        assert!(zones.region().is_empty());
    }

    #[test]
    fn test_overlapping_zones_are_unioned() {
        let zones = ExclusionZones::new(vec![
            Polygon2D::rectangle(0.0, 0.0, 4.0, 4.0),
            Polygon2D::rectangle(2.0, 2.0, 6.0, 6.0),
        ])
        .expect("valid zones");

        assert_eq!(zones.len(), 2);
        assert_eq!(zones.region().polygon_count(), 1);
        assert_relative_eq!(zones.region().area(), 28.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zone_from_vertices() {
        let zones = ExclusionZones::new(vec![vec![(40.0, 29.0), (46.0, 29.0), (43.0, 11.0), (37.0, 11.0)]])
            .expect("valid zone");
        assert!(zones.region().contains_point((42.0, 20.0)));
        assert!(!zones.region().contains_point((50.0, 20.0)));
    }

    #[test]
    fn test_invalid_zone() {
        let result = ExclusionZones::new(vec![vec![(0.0, 0.0), (1.0, 1.0)]]);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));

        let result = ExclusionZones::new(vec![vec![(0.0, 0.0), (f64::NAN, 1.0), (2.0, 0.0)]]);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }
}
