//! Planar regions with boolean algebra.
//!
//! A [`Region`] is a set of polygons with holes. Boolean operations are
//! delegated to `i_overlay`, while containment, bounds and area queries go
//! through the `geo` crate.
//!
//! Overlay contours follow the non-zero fill rule: outer rings are wound
//! counter-clockwise and holes clockwise, so the flattened contour list of any
//! region can be fed straight back into another overlay.

use geo::algorithm::orient::{Direction, Orient};
use geo::{Area, BoundingRect, Contains, Coord, LineString, MultiPolygon, Point, Polygon};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use u_coverage_core::{Region2D, AABB2D};

use crate::geometry::Polygon2D;

/// A possibly empty, possibly disconnected planar area.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    polygons: MultiPolygon<f64>,
}

impl Region {
    /// Creates an empty region.
    pub fn empty() -> Self {
        Self {
            polygons: MultiPolygon::new(Vec::new()),
        }
    }

    /// Creates a region covering a single polygon.
    ///
    /// Polygons with fewer than three vertices produce an empty region.
    pub fn from_polygon(polygon: &Polygon2D) -> Self {
        if polygon.len() < 3 {
            return Self::empty();
        }
        Self {
            polygons: MultiPolygon::new(vec![polygon.to_geo_polygon()])
                .orient(Direction::Default),
        }
    }

    /// Creates an axis-aligned rectangular region.
    pub fn rectangle(aabb: AABB2D) -> Self {
        if aabb.width() <= 0.0 || aabb.height() <= 0.0 {
            return Self::empty();
        }
        Self::from_polygon(&Polygon2D::rectangle(
            aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y,
        ))
    }

    /// Unions any number of polygons into one region.
    pub fn union_all<'a>(polygons: impl IntoIterator<Item = &'a Polygon2D>) -> Self {
        polygons
            .into_iter()
            .fold(Self::empty(), |acc, polygon| {
                acc.union(&Self::from_polygon(polygon))
            })
    }

    /// Area covered by either region.
    pub fn union(&self, other: &Region) -> Region {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Union)
    }

    /// Area covered by `self` but not by `other`.
    pub fn difference(&self, other: &Region) -> Region {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Difference)
    }

    /// Area covered by both regions.
    pub fn intersection(&self, other: &Region) -> Region {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        self.overlay(other, OverlayRule::Intersect)
    }

    /// Total enclosed area.
    pub fn area(&self) -> f64 {
        self.polygons.unsigned_area()
    }

    /// Number of disjoint polygons in the region.
    pub fn polygon_count(&self) -> usize {
        self.polygons.0.len()
    }

    fn overlay(&self, other: &Region, rule: OverlayRule) -> Region {
        let subject = self.contours();
        let clip = other.contours();
        let shapes = subject.overlay(&clip, rule, FillRule::NonZero);
        Self::from_shapes(shapes)
    }

    /// Flattens the region into open overlay contours.
    fn contours(&self) -> Vec<Vec<[f64; 2]>> {
        let mut contours = Vec::new();
        for polygon in &self.polygons {
            contours.push(ring_to_contour(polygon.exterior()));
            for hole in polygon.interiors() {
                contours.push(ring_to_contour(hole));
            }
        }
        contours.retain(|c| c.len() >= 3);
        contours
    }

    /// Builds a region from overlay output (first contour outer, rest holes).
    fn from_shapes(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Region {
        let polygons: Vec<Polygon<f64>> = shapes
            .into_iter()
            .filter_map(|shape| {
                let mut rings = shape
                    .into_iter()
                    .filter(|contour| contour.len() >= 3)
                    .map(contour_to_ring);
                let exterior = rings.next()?;
                Some(Polygon::new(exterior, rings.collect()))
            })
            .collect();

        Region {
            polygons: MultiPolygon::new(polygons).orient(Direction::Default),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&Polygon2D> for Region {
    fn from(polygon: &Polygon2D) -> Self {
        Self::from_polygon(polygon)
    }
}

impl Region2D for Region {
    fn bounds(&self) -> Option<AABB2D> {
        self.polygons
            .bounding_rect()
            .map(|rect| AABB2D::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    fn contains_point(&self, (x, y): (f64, f64)) -> bool {
        self.polygons.contains(&Point::new(x, y))
    }

    fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }
}

fn ring_to_contour(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    let mut contour: Vec<[f64; 2]> = ring.coords().map(|c| [c.x, c.y]).collect();
    if contour.len() > 1 && contour.first() == contour.last() {
        contour.pop();
    }
    contour
}

fn contour_to_ring(contour: Vec<[f64; 2]>) -> LineString<f64> {
    LineString::from(
        contour
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect::<Vec<_>>(),
    )
}
