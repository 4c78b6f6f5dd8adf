//! Robust geometric predicates for validating input polygons.
//!
//! Boundary and exclusion polygons come from users, so their validation must not
//! be fooled by nearly-collinear vertices. Orientation tests here use Shewchuk's
//! adaptive precision arithmetic through the `robust` crate.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//!
//! ## Example
//!
//! ```rust
//! use u_coverage_core::robust::{is_simple_polygon, orient2d, Orientation};
//!
//! assert_eq!(orient2d((0.0, 0.0), (1.0, 0.0), (0.5, 1.0)), Orientation::CounterClockwise);
//!
//! let bowtie = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
//! assert!(!is_simple_polygon(&bowtie));
//! ```

use robust::{orient2d as robust_orient2d, Coord};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are arranged counter-clockwise (left turn).
    CounterClockwise,
    /// Points are arranged clockwise (right turn).
    Clockwise,
    /// Points are collinear.
    Collinear,
}

impl Orientation {
    /// Returns true if the orientation is counter-clockwise.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Returns true if the points are collinear.
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Determines the orientation of `pc` relative to the directed line `pa -> pb`.
#[inline]
pub fn orient2d(pa: (f64, f64), pb: (f64, f64), pc: (f64, f64)) -> Orientation {
    let det = robust_orient2d(
        Coord { x: pa.0, y: pa.1 },
        Coord { x: pb.0, y: pb.1 },
        Coord { x: pc.0, y: pc.1 },
    );

    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Signed area of a ring (positive when counter-clockwise).
///
/// The ring is treated as implicitly closed. Uses Kahan summation.
pub fn signed_area_robust(ring: &[(f64, f64)]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut c = 0.0;

    for i in 0..n {
        let j = (i + 1) % n;
        let term = ring[i].0 * ring[j].1 - ring[j].0 * ring[i].1;

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

/// Strips an explicit closing vertex and consecutive duplicate vertices.
///
/// Rings may be given either open or closed (first vertex repeated at the end);
/// both forms normalize to the same open ring.
pub fn normalize_ring(ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = Vec::with_capacity(ring.len());
    for &p in ring {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Returns true if `q` lies on segment `p-r`, given the three are collinear.
#[inline]
fn on_segment(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> bool {
    q.0 >= p.0.min(r.0) && q.0 <= p.0.max(r.0) && q.1 >= p.1.min(r.1) && q.1 <= p.1.max(r.1)
}

/// Returns true if closed segments `a1-a2` and `b1-b2` share at least one point.
pub fn segments_intersect(
    a1: (f64, f64),
    a2: (f64, f64),
    b1: (f64, f64),
    b2: (f64, f64),
) -> bool {
    let o1 = orient2d(a1, a2, b1);
    let o2 = orient2d(a1, a2, b2);
    let o3 = orient2d(b1, b2, a1);
    let o4 = orient2d(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1.is_collinear() && on_segment(a1, b1, a2))
        || (o2.is_collinear() && on_segment(a1, b2, a2))
        || (o3.is_collinear() && on_segment(b1, a1, b2))
        || (o4.is_collinear() && on_segment(b1, a2, b2))
}

/// Returns true if adjacent segments `a-b` and `b-c` fold back onto each other.
#[inline]
fn is_spike(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    orient2d(a, b, c).is_collinear() && ((a.0 - b.0) * (c.0 - b.0) + (a.1 - b.1) * (c.1 - b.1)) > 0.0
}

/// Checks that a ring is a simple polygon.
///
/// A simple ring has at least three distinct vertices, non-zero area, no two
/// non-adjacent edges touching, and no adjacent edges doubling back on each
/// other. The check is O(n^2) in the vertex count, which is fine for
/// hand-authored survey boundaries.
pub fn is_simple_polygon(ring: &[(f64, f64)]) -> bool {
    let ring = normalize_ring(ring);
    let n = ring.len();
    if n < 3 || signed_area_robust(&ring) == 0.0 {
        return false;
    }

    for i in 0..n {
        let a1 = ring[i];
        let a2 = ring[(i + 1) % n];

        if is_spike(a1, a2, ring[(i + 2) % n]) {
            return false;
        }

        for j in (i + 2)..n {
            // First and last edge share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b1 = ring[j];
            let b2 = ring[(j + 1) % n];
            if segments_intersect(a1, a2, b1, b2) {
                return false;
            }
        }
    }

    true
}
