//! The operation facade (§2 component 8, §4.7): the five dispatcher entry
//! points from §6, plus their multisegment-operand counterparts. Matches
//! `clipping/core/operation.py`'s module-level `compute` dispatcher, which
//! is the only place in the corpus these exact degenerate-case shortcuts are
//! grounded (the teacher has no facade at all — callers construct a
//! `Polygon` and call `.subtract`/`.union` directly with no pruning).

use crate::bbox::BoundingBox;
use crate::error::Error;
use crate::model::{Contour, Mix, Multipolygon, Multisegment, Polygon};
use crate::operation::{Operation, OperationKind};
use crate::point::{Point, Segment};
use crate::scalar::{Rational, Scalar};

fn to_rational_multipolygon<S: Scalar>(mp: &Multipolygon<S>) -> Multipolygon<Rational> {
    mp.iter()
        .map(|polygon| {
            Polygon::new(
                to_rational_contour(&polygon.border),
                polygon.holes.iter().map(to_rational_contour).collect(),
            )
        })
        .collect()
}

fn to_rational_contour<S: Scalar>(contour: &Contour<S>) -> Contour<Rational> {
    Contour::from_validated(
        contour
            .points()
            .iter()
            .map(|p| Point::new(p.x.to_rational(), p.y.to_rational()))
            .collect(),
    )
}

fn from_rational_multipolygon<S: Scalar>(mp: &Multipolygon<Rational>) -> Multipolygon<S> {
    mp.iter()
        .map(|polygon| {
            Polygon::new(
                from_rational_contour(&polygon.border),
                polygon.holes.iter().map(from_rational_contour).collect(),
            )
        })
        .collect()
}

fn from_rational_contour<S: Scalar>(contour: &Contour<Rational>) -> Contour<S> {
    Contour::from_validated(
        contour
            .points()
            .iter()
            .map(|p| Point::new(S::from_rational(p.x), S::from_rational(p.y)))
            .collect(),
    )
}

fn to_rational_multisegment<S: Scalar>(ms: &Multisegment<S>) -> Multisegment<Rational> {
    ms.iter()
        .map(|s| {
            Segment::new(
                Point::new(s.start.x.to_rational(), s.start.y.to_rational()),
                Point::new(s.end.x.to_rational(), s.end.y.to_rational()),
            )
            .expect("a validated segment is never degenerate after coercion")
        })
        .collect()
}

fn from_rational_multisegment<S: Scalar>(ms: &Multisegment<Rational>) -> Multisegment<S> {
    ms.iter()
        .map(|s| {
            Segment::new(
                Point::new(S::from_rational(s.start.x), S::from_rational(s.start.y)),
                Point::new(S::from_rational(s.end.x), S::from_rational(s.end.y)),
            )
            .expect("a validated segment is never degenerate after coercion")
        })
        .collect()
}

fn is_difference_like(kind: OperationKind) -> bool {
    matches!(kind, OperationKind::Difference)
}

fn is_intersection_like(kind: OperationKind) -> bool {
    matches!(
        kind,
        OperationKind::Intersection | OperationKind::CompleteIntersection
    )
}

/// §4.7 end to end for the four Boolean multipolygon operations: steps 1–4
/// of degenerate-case shortcuts, then (step 5) `accurate` coercion and
/// (step 6) the sweep.
fn dispatch_polygons<S: Scalar>(
    kind: OperationKind,
    operands: &[Multipolygon<S>],
    accurate: bool,
) -> Result<Multipolygon<S>, Error> {
    // Step 1: all operands empty.
    if operands.iter().all(|mp| mp.is_empty()) {
        return Ok(Vec::new());
    }

    // Step 2: some, but not all, operands empty.
    if operands.iter().any(|mp| mp.is_empty()) {
        if is_difference_like(kind) {
            return Ok(operands[0].clone());
        }
        if is_intersection_like(kind) {
            return Ok(Vec::new());
        }
        // Union / SymmetricDifference: drop the empties and recurse — the
        // remaining operands may still trigger step 3 or step 4 below.
        let remaining: Vec<Multipolygon<S>> =
            operands.iter().filter(|mp| !mp.is_empty()).cloned().collect();
        return dispatch_polygons(kind, &remaining, accurate);
    }

    // Step 3: a single operand remains, whether because the caller passed
    // just one or because step 2 dropped the rest as empty.
    if operands.len() == 1 {
        return Ok(operands[0].clone());
    }

    // Step 4: every pairwise bounding-box comparison is disjoint.
    let bboxes: Vec<BoundingBox<S>> = operands
        .iter()
        .map(|mp| {
            BoundingBox::from_multipolygon(mp)
                .expect("already excluded the all/any-empty cases above")
        })
        .collect();
    let all_disjoint = bboxes
        .iter()
        .enumerate()
        .all(|(i, a)| bboxes.iter().enumerate().all(|(j, b)| i == j || a.disjoint(b)));
    if all_disjoint {
        if is_difference_like(kind) {
            return Ok(operands[0].clone());
        }
        if is_intersection_like(kind) {
            return Ok(Vec::new());
        }
        let mut merged: Vec<Polygon<S>> = operands.iter().flatten().cloned().collect();
        merged.sort_by(|a, b| a.border.points()[0].cmp(&b.border.points()[0]));
        return Ok(merged);
    }

    // Step 5 + 6: coerce to exact rationals if requested, then sweep.
    if accurate {
        let rational_operands: Vec<Multipolygon<Rational>> =
            operands.iter().map(to_rational_multipolygon).collect();
        let result = Operation::compute_multipolygons(kind, &rational_operands)?;
        return Ok(from_rational_multipolygon(&result));
    }
    Operation::compute_multipolygons(kind, operands)
}

/// §6 `unite`. Accepts any number of multipolygon operands.
pub fn unite<S: Scalar>(operands: &[Multipolygon<S>], accurate: bool) -> Result<Multipolygon<S>, Error> {
    dispatch_polygons(OperationKind::Union, operands, accurate)
}

/// §6 `intersect`.
pub fn intersect<S: Scalar>(
    a: &Multipolygon<S>,
    b: &Multipolygon<S>,
    accurate: bool,
) -> Result<Multipolygon<S>, Error> {
    dispatch_polygons(OperationKind::Intersection, &[a.clone(), b.clone()], accurate)
}

/// §6 `subtract`.
pub fn subtract<S: Scalar>(
    a: &Multipolygon<S>,
    b: &Multipolygon<S>,
    accurate: bool,
) -> Result<Multipolygon<S>, Error> {
    dispatch_polygons(OperationKind::Difference, &[a.clone(), b.clone()], accurate)
}

/// §6 `symmetric_subtract`.
pub fn symmetric_subtract<S: Scalar>(
    a: &Multipolygon<S>,
    b: &Multipolygon<S>,
    accurate: bool,
) -> Result<Multipolygon<S>, Error> {
    dispatch_polygons(
        OperationKind::SymmetricDifference,
        &[a.clone(), b.clone()],
        accurate,
    )
}

/// §6 `complete_intersect`. Unlike the other four entry points, the
/// degenerate shortcuts (§4.7 steps 1, 2, 4) all collapse to an empty `Mix`
/// for this operation — `complete_intersect` never drops operands the way
/// Union/SymmetricDifference do, since its `multipoint`/`multisegment`
/// components are only meaningful when both operands are present.
pub fn complete_intersect<S: Scalar>(
    a: &Multipolygon<S>,
    b: &Multipolygon<S>,
    accurate: bool,
) -> Result<Mix<S>, Error> {
    let operands = [a.clone(), b.clone()];
    if operands.iter().any(|mp| mp.is_empty()) {
        return Ok(Mix {
            points: Vec::new(),
            segments: Vec::new(),
            polygons: Vec::new(),
        });
    }
    let bbox_a = BoundingBox::from_multipolygon(a).expect("checked non-empty above");
    let bbox_b = BoundingBox::from_multipolygon(b).expect("checked non-empty above");
    if bbox_a.disjoint(&bbox_b) {
        return Ok(Mix {
            points: Vec::new(),
            segments: Vec::new(),
            polygons: Vec::new(),
        });
    }
    if accurate {
        let rational_operands: [Multipolygon<Rational>; 2] = [
            to_rational_multipolygon(a),
            to_rational_multipolygon(b),
        ];
        let mix = Operation::compute_mix(&rational_operands)?;
        return Ok(Mix {
            points: mix
                .points
                .iter()
                .map(|p| Point::new(S::from_rational(p.x), S::from_rational(p.y)))
                .collect(),
            segments: from_rational_multisegment(&mix.segments),
            polygons: from_rational_multipolygon(&mix.polygons),
        });
    }
    Operation::compute_mix(&operands)
}

fn multisegment_bbox<S: Scalar>(ms: &Multisegment<S>) -> Option<BoundingBox<S>> {
    BoundingBox::from_points(ms.iter().flat_map(|s| [s.start, s.end]))
}

/// The multisegment-operand counterpart of [`dispatch_polygons`].
fn dispatch_segments<S: Scalar>(
    kind: OperationKind,
    operands: &[Multisegment<S>],
    accurate: bool,
) -> Result<Multisegment<S>, Error> {
    if operands.iter().all(|ms| ms.is_empty()) {
        return Ok(Vec::new());
    }

    if operands.iter().any(|ms| ms.is_empty()) {
        if is_difference_like(kind) {
            return Ok(operands[0].clone());
        }
        if is_intersection_like(kind) {
            return Ok(Vec::new());
        }
        let remaining: Vec<Multisegment<S>> =
            operands.iter().filter(|ms| !ms.is_empty()).cloned().collect();
        return dispatch_segments(kind, &remaining, accurate);
    }

    if operands.len() == 1 {
        return Ok(operands[0].clone());
    }

    let bboxes: Vec<BoundingBox<S>> = operands
        .iter()
        .map(|ms| multisegment_bbox(ms).expect("already excluded the all/any-empty cases above"))
        .collect();
    let all_disjoint = bboxes
        .iter()
        .enumerate()
        .all(|(i, a)| bboxes.iter().enumerate().all(|(j, b)| i == j || a.disjoint(b)));
    if all_disjoint {
        if is_difference_like(kind) {
            return Ok(operands[0].clone());
        }
        if is_intersection_like(kind) {
            return Ok(Vec::new());
        }
        let mut merged: Vec<Segment<S>> = operands.iter().flatten().copied().collect();
        merged.sort_by(|a, b| a.start.cmp(&b.start));
        return Ok(merged);
    }

    if accurate {
        let rational_operands: Vec<Multisegment<Rational>> =
            operands.iter().map(to_rational_multisegment).collect();
        let result = Operation::compute_multisegments(kind, &rational_operands)?;
        return Ok(from_rational_multisegment(&result));
    }
    Operation::compute_multisegments(kind, operands)
}

/// The multisegment-operand counterpart of [`unite`] (§6 "Parallel entry
/// points").
pub fn unite_segments<S: Scalar>(
    operands: &[Multisegment<S>],
    accurate: bool,
) -> Result<Multisegment<S>, Error> {
    dispatch_segments(OperationKind::Union, operands, accurate)
}

pub fn intersect_segments<S: Scalar>(
    a: &Multisegment<S>,
    b: &Multisegment<S>,
    accurate: bool,
) -> Result<Multisegment<S>, Error> {
    dispatch_segments(OperationKind::Intersection, &[a.clone(), b.clone()], accurate)
}

pub fn subtract_segments<S: Scalar>(
    a: &Multisegment<S>,
    b: &Multisegment<S>,
    accurate: bool,
) -> Result<Multisegment<S>, Error> {
    dispatch_segments(OperationKind::Difference, &[a.clone(), b.clone()], accurate)
}

pub fn symmetric_subtract_segments<S: Scalar>(
    a: &Multisegment<S>,
    b: &Multisegment<S>,
    accurate: bool,
) -> Result<Multisegment<S>, Error> {
    dispatch_segments(
        OperationKind::SymmetricDifference,
        &[a.clone(), b.clone()],
        accurate,
    )
}
