//! The geometry oracle (§6 "Collaborator interfaces"): orientation of three
//! points and the relationship between two segments. Exact over `Scalar`
//! values that are themselves exact (e.g. `Ratio<i64>`); subject to ordinary
//! floating-point rounding over `OrderedFloat<f64>`, same as the teacher's
//! `calculate_signed_area3`/`calculate_sign` pair.

use crate::error::Error;
use crate::point::{Point, Segment};
use crate::scalar::Scalar;

/// Turn direction of the path `p -> q -> r`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Exact sign of the signed area of triangle `(p, q, r)`, generalizing the
/// teacher's `calculate_signed_area3` (which only ever compared the sign
/// against zero, never used the magnitude).
pub fn orientation<S: Scalar>(p: Point<S>, q: Point<S>, r: Point<S>) -> Orientation {
    let det = (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
    let zero = S::zero();
    if det == zero {
        Orientation::Collinear
    } else if det > zero {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

impl Orientation {
    pub fn reverse(self) -> Orientation {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Classification of how two segments relate to one another (§6).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentsRelationship {
    None,
    Touch,
    Cross,
    Overlap,
}

/// `r` is known collinear with `p`-`q`; is it within the closed segment?
fn on_segment<S: Scalar>(p: Point<S>, q: Point<S>, r: Point<S>) -> bool {
    let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
    lo <= r && r <= hi
}

/// Is `point` on the closed segment `seg` (boundary inclusive)?
pub fn point_on_segment<S: Scalar>(point: Point<S>, seg: Segment<S>) -> bool {
    orientation(seg.start, seg.end, point) == Orientation::Collinear
        && on_segment(seg.start, seg.end, point)
}

/// Classifies the relationship between two segments (§6 `segments_relationship`).
pub fn segments_relationship<S: Scalar>(
    s1: Segment<S>,
    s2: Segment<S>,
) -> SegmentsRelationship {
    let (p1, q1) = (s1.start, s1.end);
    let (p2, q2) = (s2.start, s2.end);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 == Orientation::Collinear
        && o2 == Orientation::Collinear
        && o3 == Orientation::Collinear
        && o4 == Orientation::Collinear
    {
        return classify_collinear(s1, s2);
    }

    if o1 != o2 && o3 != o4 {
        if o1 == Orientation::Collinear
            || o2 == Orientation::Collinear
            || o3 == Orientation::Collinear
            || o4 == Orientation::Collinear
        {
            return SegmentsRelationship::Touch;
        }
        return SegmentsRelationship::Cross;
    }

    if o1 == Orientation::Collinear && on_segment(p1, q1, p2) {
        return SegmentsRelationship::Touch;
    }
    if o2 == Orientation::Collinear && on_segment(p1, q1, q2) {
        return SegmentsRelationship::Touch;
    }
    if o3 == Orientation::Collinear && on_segment(p2, q2, p1) {
        return SegmentsRelationship::Touch;
    }
    if o4 == Orientation::Collinear && on_segment(p2, q2, q1) {
        return SegmentsRelationship::Touch;
    }

    SegmentsRelationship::None
}

/// Both segments are collinear; classify their 1-D overlap along the shared
/// line. Lexicographic point order coincides with order-along-the-line for
/// any set of collinear points, vertical lines included, so ordinary `Point`
/// comparisons suffice.
fn classify_collinear<S: Scalar>(s1: Segment<S>, s2: Segment<S>) -> SegmentsRelationship {
    if s1.end < s2.start || s2.end < s1.start {
        return SegmentsRelationship::None;
    }
    let lo = s1.start.max(s2.start);
    let hi = s1.end.min(s2.end);
    if lo == hi {
        SegmentsRelationship::Touch
    } else {
        SegmentsRelationship::Overlap
    }
}

/// Computes the intersection point of two segments known (via
/// [`segments_relationship`]) to `Cross` or `Touch` at a single point.
///
/// Returns [`Error::GeometryOracleContract`] if the computed point falls
/// outside either segment's bounding box — an oracle contract violation per
/// §7.
pub fn segments_intersection<S: Scalar>(
    s1: Segment<S>,
    s2: Segment<S>,
) -> Result<Point<S>, Error> {
    let (p1, q1) = (s1.start, s1.end);
    let (p2, q2) = (s2.start, s2.end);

    let d1x = q1.x - p1.x;
    let d1y = q1.y - p1.y;
    let d2x = q2.x - p2.x;
    let d2y = q2.y - p2.y;

    let denom = d1x * d2y - d1y * d2x;
    if denom == S::zero() {
        // Collinear or parallel: the only valid single-point case is a
        // shared endpoint, which the caller already special-cases before
        // reaching here; fall back to it directly.
        if p1 == p2 || p1 == q2 {
            return Ok(p1);
        }
        if q1 == p2 || q1 == q2 {
            return Ok(q1);
        }
        return Err(Error::GeometryOracleContract(
            "parallel segments have no unique intersection point".into(),
        ));
    }

    let ex = p2.x - p1.x;
    let ey = p2.y - p1.y;
    let t = (ex * d2y - ey * d2x) / denom;
    let point = Point::new(p1.x + t * d1x, p1.y + t * d1y);

    let within = |p: Point<S>, a: Point<S>, b: Point<S>| {
        let (x_lo, x_hi) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (y_lo, y_hi) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        p.x >= x_lo && p.x <= x_hi && p.y >= y_lo && p.y <= y_hi
    };
    if !within(point, p1, q1) || !within(point, p2, q2) {
        return Err(Error::GeometryOracleContract(
            "segments_intersection produced a point outside one of the segments".into(),
        ));
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::f64_coord as c;

    fn pt(x: f64, y: f64) -> Point<crate::scalar::F64> {
        Point::new(c(x), c(y))
    }

    #[test]
    fn orientation_detects_turn_direction() {
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn crossing_segments_cross() {
        let s1 = Segment::new(pt(0.0, 0.0), pt(2.0, 2.0)).unwrap();
        let s2 = Segment::new(pt(0.0, 2.0), pt(2.0, 0.0)).unwrap();
        assert_eq!(segments_relationship(s1, s2), SegmentsRelationship::Cross);
        let p = segments_intersection(s1, s2).unwrap();
        assert_eq!(p, pt(1.0, 1.0));
    }

    #[test]
    fn disjoint_segments_relate_as_none() {
        let s1 = Segment::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap();
        let s2 = Segment::new(pt(0.0, 5.0), pt(1.0, 5.0)).unwrap();
        assert_eq!(segments_relationship(s1, s2), SegmentsRelationship::None);
    }

    #[test]
    fn touching_at_shared_endpoint_is_touch() {
        let s1 = Segment::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap();
        let s2 = Segment::new(pt(1.0, 0.0), pt(1.0, 1.0)).unwrap();
        assert_eq!(segments_relationship(s1, s2), SegmentsRelationship::Touch);
    }

    #[test]
    fn collinear_partial_overlap_is_overlap() {
        let s1 = Segment::new(pt(0.0, 0.0), pt(2.0, 0.0)).unwrap();
        let s2 = Segment::new(pt(1.0, 0.0), pt(3.0, 0.0)).unwrap();
        assert_eq!(segments_relationship(s1, s2), SegmentsRelationship::Overlap);
    }

    #[test]
    fn collinear_touching_at_one_point_is_touch() {
        let s1 = Segment::new(pt(0.0, 0.0), pt(1.0, 0.0)).unwrap();
        let s2 = Segment::new(pt(1.0, 0.0), pt(2.0, 0.0)).unwrap();
        assert_eq!(segments_relationship(s1, s2), SegmentsRelationship::Touch);
    }
}
