//! Bounding-box predicates (§4.1), generalizing the teacher's single
//! `Bbox::overlaps` method into the full predicate set from
//! `clipping/core/bounding_box.py`. Used only as a pruning shortcut in
//! [`crate::ops`]; the sweep is always the final authority.

use crate::model::{Contour, Multipolygon, Polygon};
use crate::oracle::{self, SegmentsRelationship};
use crate::point::{Point, Segment};
use crate::scalar::Scalar;

/// Axis-aligned rectangle `(x_min, x_max, y_min, y_max)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox<S: Scalar> {
    pub x_min: S,
    pub x_max: S,
    pub y_min: S,
    pub y_max: S,
}

impl<S: Scalar> BoundingBox<S> {
    pub fn from_points<I: IntoIterator<Item = Point<S>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in iter {
            if p.x < bbox.x_min {
                bbox.x_min = p.x;
            }
            if p.x > bbox.x_max {
                bbox.x_max = p.x;
            }
            if p.y < bbox.y_min {
                bbox.y_min = p.y;
            }
            if p.y > bbox.y_max {
                bbox.y_max = p.y;
            }
        }
        Some(bbox)
    }

    /// Holes lie in the border's interior, so they never extend it (§4.1).
    pub fn from_polygon(polygon: &Polygon<S>) -> Self {
        Self::from_points(polygon.border.points().iter().copied())
            .expect("a validated polygon border has at least 3 vertices")
    }

    pub fn from_multipolygon(mp: &Multipolygon<S>) -> Option<Self> {
        mp.iter().fold(None, |acc, polygon| {
            let b = Self::from_polygon(polygon);
            Some(match acc {
                Some(a) => a.union(b),
                None => b,
            })
        })
    }

    fn union(self, other: Self) -> Self {
        BoundingBox {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    pub fn disjoint(&self, other: &Self) -> bool {
        self.x_min > other.x_max
            || self.x_max < other.x_min
            || self.y_min > other.y_max
            || self.y_max < other.y_min
    }

    pub fn intersects(&self, other: &Self) -> bool {
        !self.disjoint(other)
    }

    /// Intersects, but only along a shared boundary line or at a single
    /// point — not over a shared 2D region.
    pub fn touches(&self, other: &Self) -> bool {
        self.intersects(other)
            && ((self.x_min == other.x_max || self.x_max == other.x_min)
                && self.y_min <= other.y_max
                && other.y_min <= self.y_max
                || (self.x_min <= other.x_max && other.x_min <= self.x_max)
                    && (self.y_min == other.y_max || other.y_min == self.y_max))
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersects(other) && !self.touches(other)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.x_min <= self.x_min
            && self.x_max <= other.x_max
            && other.y_min <= self.y_min
            && self.y_max <= other.y_max
    }

    /// The stricter, topology-checking definition of "contained in the
    /// interior" (§9 Open Questions: the authoritative variant, not the
    /// bounding-box-only shortcut).
    pub fn within_of(&self, other: &Self) -> bool {
        other.x_min < self.x_min
            && self.x_max < other.x_max
            && other.y_min < self.y_min
            && self.y_max < other.y_max
    }

    pub fn contains_point(&self, p: Point<S>) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    pub fn covers_point(&self, p: Point<S>) -> bool {
        self.x_min < p.x && p.x < self.x_max && self.y_min < p.y && p.y < self.y_max
    }

    pub fn vertices(&self) -> [Point<S>; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }

    pub fn edges(&self) -> [Segment<S>; 4] {
        let v = self.vertices();
        [
            Segment::new(v[0], v[1]).expect("rectangle edge is non-degenerate"),
            Segment::new(v[1], v[2]).expect("rectangle edge is non-degenerate"),
            Segment::new(v[2], v[3]).expect("rectangle edge is non-degenerate"),
            Segment::new(v[3], v[0]).expect("rectangle edge is non-degenerate"),
        ]
    }

    pub fn intersects_with_segment(&self, segment: Segment<S>) -> bool {
        let seg_bbox = BoundingBox::from_points([segment.start, segment.end]).unwrap();
        self.intersects(&seg_bbox)
            && (seg_bbox.is_subset_of(self)
                || self.edges().iter().any(|edge| {
                    oracle::segments_relationship(*edge, segment) != SegmentsRelationship::None
                }))
    }

    pub fn overlaps_with_segment(&self, segment: Segment<S>) -> bool {
        let seg_bbox = BoundingBox::from_points([segment.start, segment.end]).unwrap();
        self.intersects(&seg_bbox)
            && (seg_bbox.is_subset_of(self)
                || self.edges().iter().any(|edge| {
                    !matches!(
                        oracle::segments_relationship(*edge, segment),
                        SegmentsRelationship::None | SegmentsRelationship::Touch
                    )
                }))
    }

    /// Is `border` entirely within this box's open interior, with none of
    /// the box's own boundary touching or crossing it?
    fn within_of_region(&self, border: &Contour<S>) -> bool {
        let border_bbox = BoundingBox::from_points(border.points().iter().copied()).unwrap();
        self.within_of(&border_bbox)
            && self
                .vertices()
                .iter()
                .all(|v| point_in_region(*v, border) == Location::Interior)
            && self.edges().iter().all(|edge| {
                border.edges().all(|border_edge| {
                    oracle::segments_relationship(*edge, border_edge) == SegmentsRelationship::None
                })
            })
    }

    /// Classifies this box against a polygon (border plus holes): used only
    /// as a pruning shortcut, and must agree with the sweep's final verdict
    /// (§4.1, tested as a property in `tests/properties.rs`).
    pub fn intersects_with_polygon(&self, polygon: &Polygon<S>) -> bool {
        let polygon_bbox = BoundingBox::from_polygon(polygon);
        self.intersects(&polygon_bbox)
            && (polygon_bbox.is_subset_of(self)
                || polygon
                    .border
                    .points()
                    .iter()
                    .any(|v| self.contains_point(*v))
                || self.within_of_region(&polygon.border)
                    && !polygon.holes.iter().any(|hole| self.within_of_region(hole))
                || self
                    .vertices()
                    .iter()
                    .any(|v| point_in_region(*v, &polygon.border) != Location::Exterior)
                || polygon
                    .border
                    .edges()
                    .any(|edge| self.intersects_with_segment(edge)))
    }

    pub fn overlaps_with_polygon(&self, polygon: &Polygon<S>) -> bool {
        let polygon_bbox = BoundingBox::from_polygon(polygon);
        self.intersects(&polygon_bbox)
            && (polygon_bbox.is_subset_of(self)
                || polygon
                    .border
                    .points()
                    .iter()
                    .any(|v| self.covers_point(*v))
                || self.within_of_region(&polygon.border)
                    && !polygon.holes.iter().any(|hole| self.within_of_region(hole))
                || self
                    .vertices()
                    .iter()
                    .any(|v| point_in_region(*v, &polygon.border) == Location::Interior)
                || polygon
                    .border
                    .edges()
                    .any(|edge| self.overlaps_with_segment(edge)))
    }
}

/// Where a point sits relative to a contour's region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

/// Classifies `point` against the region bounded by `border` via a crossing
/// number test, short-circuited by an exact on-edge check for the boundary
/// case. Used by the bounding-box/polygon pruning predicates above; the
/// sweep engine never needs this since it derives containment from
/// `in_out` labels directly.
pub fn point_in_region<S: Scalar>(point: Point<S>, border: &Contour<S>) -> Location {
    for edge in border.edges() {
        if oracle::point_on_segment(point, edge) {
            return Location::Boundary;
        }
    }
    let mut crossings = 0usize;
    for (a, b) in border.directed_edges() {
        if (a.y > point.y) != (b.y > point.y) {
            let x_at_y = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_at_y {
                crossings += 1;
            }
        }
    }
    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}
