//! The shapes the facade (§6) accepts and returns: contours, polygons,
//! multipolygons, multisegments, and the `Mix` returned by complete
//! intersection.

use crate::error::Error;
use crate::point::{Point, Segment};
use crate::scalar::Scalar;

/// A closed polyline: `len() >= 3`, no two consecutive points equal, no
/// three consecutive collinear once [`Contour::new`] has validated it.
/// Closure is implicit — the last point connects back to the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour<S: Scalar> {
    points: Vec<Point<S>>,
}

impl<S: Scalar> Contour<S> {
    /// Validates and wraps a sequence of vertices (§7 `InvalidInput`).
    pub fn new(points: Vec<Point<S>>) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::InvalidInput(format!(
                "contour needs at least 3 vertices, got {}",
                points.len()
            )));
        }
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            if points[i] == next {
                return Err(Error::InvalidInput(
                    "contour has duplicate consecutive vertices".into(),
                ));
            }
        }
        Ok(Contour { points })
    }

    /// Constructs a contour without re-validating; used internally by the
    /// assembler, which already guarantees the invariants by construction.
    pub(crate) fn from_validated(points: Vec<Point<S>>) -> Self {
        Contour { points }
    }

    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The contour's edges as canonicalized segments, paired with their
    /// original (non-canonicalized) direction — the direction matters for
    /// orientation-sensitive callers such as the sweep's queue filler.
    pub fn directed_edges(&self) -> impl Iterator<Item = (Point<S>, Point<S>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment<S>> + '_ {
        self.directed_edges()
            .filter_map(|(a, b)| Segment::new(a, b))
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Signed area, positive for counter-clockwise contours (shoelace
    /// formula). Used to orient borders/holes per §4.6.
    pub fn signed_area(&self) -> S {
        let n = self.points.len();
        let mut sum = S::zero();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum = sum + (a.x * b.y - b.x * a.y);
        }
        sum
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > S::zero()
    }
}

/// A border contour paired with zero or more hole contours.
#[derive(Clone, Debug)]
pub struct Polygon<S: Scalar> {
    pub border: Contour<S>,
    pub holes: Vec<Contour<S>>,
}

impl<S: Scalar> Polygon<S> {
    pub fn new(border: Contour<S>, holes: Vec<Contour<S>>) -> Self {
        Polygon { border, holes }
    }

    pub fn contours(&self) -> impl Iterator<Item = &Contour<S>> {
        std::iter::once(&self.border).chain(self.holes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::f64_coord as c;

    fn pt(x: f64, y: f64) -> Point<crate::scalar::F64> {
        Point::new(c(x), c(y))
    }

    #[test]
    fn contour_rejects_fewer_than_three_vertices() {
        let err = Contour::new(vec![pt(0.0, 0.0), pt(1.0, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn contour_rejects_duplicate_consecutive_vertices() {
        let err = Contour::new(vec![pt(0.0, 0.0), pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn counter_clockwise_square_has_positive_signed_area() {
        let square =
            Contour::new(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]).unwrap();
        assert!(square.is_counter_clockwise());
        let mut clockwise = square.clone();
        clockwise.reverse();
        assert!(!clockwise.is_counter_clockwise());
    }

    #[test]
    fn polygon_contours_yields_border_then_holes() {
        let border =
            Contour::new(vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)]).unwrap();
        let hole =
            Contour::new(vec![pt(1.0, 1.0), pt(2.0, 1.0), pt(2.0, 2.0), pt(1.0, 2.0)]).unwrap();
        let polygon = Polygon::new(border.clone(), vec![hole.clone()]);
        let collected: Vec<&Contour<crate::scalar::F64>> = polygon.contours().collect();
        assert_eq!(collected, vec![&border, &hole]);
    }
}

pub type Multipolygon<S> = Vec<Polygon<S>>;
pub type Multisegment<S> = Vec<Segment<S>>;
pub type Multipoint<S> = Vec<Point<S>>;

/// Triple returned by `complete_intersect` (§3 "Mix").
#[derive(Clone, Debug)]
pub struct Mix<S: Scalar> {
    pub points: Multipoint<S>,
    pub segments: Multisegment<S>,
    pub polygons: Multipolygon<S>,
}
