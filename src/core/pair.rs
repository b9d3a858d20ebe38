//! # Circle Pair
//!
//! Two circles considered jointly: distance, overlap area, classification.
//!
//! A pair is immutable once constructed. Distance and the two disc areas
//! are computed eagerly at construction; overlap and classification are
//! O(1) closed-form computations done on demand.
//!
//! Classification compares floats with `==`. That is deliberate: the
//! contract distinguishes e.g. exact tangency (zero-area intersection)
//! from partial overlap, and a tolerance would move documented outcomes.
//! Inputs that carry rounding error of their own can land on either side
//! of a boundary.

use super::circle::Circle;
use super::error::{PairError, PairResult};
use super::kind::PairKind;

/// A pair of circles with their derived quantities
///
/// # Example
/// ```
/// use circle_pair::{CirclePair, PairKind};
///
/// let pair = CirclePair::from_values(&[2.0, 2.0, 5.0, 1.0, 2.0, 1.0]).unwrap();
/// assert_eq!(pair.distance(), 1.0);
/// assert_eq!(pair.classify(), PairKind::DisjointInside);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePair {
    a: Circle,
    b: Circle,
    distance: f64,
    area_a: f64,
    area_b: f64,
}

impl CirclePair {
    /// Pair up two already-validated circles
    pub fn new(a: Circle, b: Circle) -> Self {
        Self {
            a,
            b,
            distance: a.distance_to(&b),
            area_a: a.area(),
            area_b: b.area(),
        }
    }

    /// Build a pair from an ordered slice `[Ax, Ay, Ar, Bx, By, Br]`
    ///
    /// Fails with [`PairError::ArgumentCount`] unless exactly six values
    /// are supplied, and with [`PairError::InvalidRadius`] if either
    /// radius is not positive.
    pub fn from_values(values: &[f64]) -> PairResult<Self> {
        let [ax, ay, ar, bx, by, br] = <[f64; 6]>::try_from(values)
            .map_err(|_| PairError::ArgumentCount { got: values.len() })?;
        Ok(Self::new(Circle::new(ax, ay, ar)?, Circle::new(bx, by, br)?))
    }

    /// Circle A
    pub fn circle_a(&self) -> &Circle {
        &self.a
    }

    /// Circle B
    pub fn circle_b(&self) -> &Circle {
        &self.b
    }

    /// Euclidean distance between the two centers
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Area of circle A, π·r²
    pub fn area_a(&self) -> f64 {
        self.area_a
    }

    /// Area of circle B, π·r²
    pub fn area_b(&self) -> f64 {
        self.area_b
    }

    /// Area of the intersection of the two discs
    ///
    /// Zero when the circles are separate or touch at a single point.
    /// The branch is picked by comparing `distance` against `|Ar − Br|`
    /// and `Ar + Br` up front, so the lens formula only ever runs on a
    /// genuine two-point intersection. Always finite and ≥ 0.
    pub fn overlap_area(&self) -> f64 {
        let ra = self.a.radius();
        let rb = self.b.radius();
        let d = self.distance;

        // Same center: the smaller disc is the whole intersection.
        // Classification resolves same-center pairs before asking for
        // overlap; this branch serves direct callers.
        if d == 0.0 {
            return self.area_a.min(self.area_b);
        }

        // One circle nested in the other, internal tangency included.
        // Reuses the stored areas so the result compares equal (`==`) to
        // the smaller circle's area during classification.
        if d <= (ra - rb).abs() {
            return self.area_a.min(self.area_b);
        }

        // Separate, external tangency included: a single-point
        // intersection has zero area.
        if d >= ra + rb {
            return 0.0;
        }

        // Two intersection points: circular-lens area.
        // Clamps keep boundary rounding inside the acos/sqrt domains.
        let d2 = d * d;
        let a = ra * ra
            * ((d2 + ra * ra - rb * rb) / (2.0 * d * ra))
                .clamp(-1.0, 1.0)
                .acos();
        let b = rb * rb
            * ((d2 + rb * rb - ra * ra) / (2.0 * d * rb))
                .clamp(-1.0, 1.0)
                .acos();
        let c = 0.5
            * ((-d + ra + rb) * (d + ra - rb) * (d - ra + rb) * (d + ra + rb))
                .max(0.0)
                .sqrt();

        (a + b - c).max(0.0)
    }

    /// Classify the relationship between the two circles
    ///
    /// Decision order:
    /// 1. centers exactly equal → `Identical` (equal radii) or `Concentric`;
    /// 2. otherwise, by overlap area: nonzero and equal to a full disc
    ///    area → `DisjointInside`; nonzero otherwise → `DisjointOutside`;
    ///    zero → `Nonoverlapping` (tangency included).
    ///
    /// # Example
    /// ```
    /// use circle_pair::{CirclePair, PairKind};
    ///
    /// // Two unit circles touching at exactly one point do not overlap.
    /// let pair = CirclePair::from_values(&[0.0, 0.0, 1.0, 2.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(pair.classify(), PairKind::Nonoverlapping);
    /// ```
    pub fn classify(&self) -> PairKind {
        if self.a.same_center(&self.b) {
            if self.a.radius() == self.b.radius() {
                PairKind::Identical
            } else {
                PairKind::Concentric
            }
        } else {
            let overlap = self.overlap_area();
            if overlap != 0.0 {
                if overlap == self.area_a || overlap == self.area_b {
                    PairKind::DisjointInside
                } else {
                    PairKind::DisjointOutside
                }
            } else {
                PairKind::Nonoverlapping
            }
        }
    }
}

impl std::fmt::Display for CirclePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CirclePair A x,y={},{} r={} B x,y={},{} r={} distance={}",
            self.a.x(),
            self.a.y(),
            self.a.radius(),
            self.b.x(),
            self.b.y(),
            self.b.radius(),
            self.distance
        )
    }
}
