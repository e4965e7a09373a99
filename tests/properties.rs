//! Property tests (§8) over small random axis-aligned rectangles: cheap to
//! generate, unambiguous to check for similarity via area identities, in the
//! spirit of the `original_source` suite's `hypothesis` strategies and
//! `rgeometry`'s own use of `proptest` for its geometric invariants.

use planarops::scalar::{f64_coord, F64};
use planarops::{ops, Contour, Multipolygon, Point, Polygon};
use proptest::prelude::*;

fn rectangle(x0: i32, y0: i32, w: i32, h: i32) -> Multipolygon<F64> {
    let (x0, y0) = (x0 as f64, y0 as f64);
    let (x1, y1) = (x0 + w as f64, y0 + h as f64);
    vec![Polygon::new(
        Contour::new(vec![
            Point::new(f64_coord(x0), f64_coord(y0)),
            Point::new(f64_coord(x1), f64_coord(y0)),
            Point::new(f64_coord(x1), f64_coord(y1)),
            Point::new(f64_coord(x0), f64_coord(y1)),
        ])
        .unwrap(),
        Vec::new(),
    )]
}

/// Net signed area of a multipolygon: each polygon's border area (positive,
/// CCW) plus its holes' areas (negative, CW) — the usual area-with-holes
/// formula, robust to which vertex the assembler started a contour at.
fn total_area(mp: &Multipolygon<F64>) -> f64 {
    mp.iter()
        .map(|polygon| {
            let border = polygon.border.signed_area().into_inner();
            let holes: f64 = polygon
                .holes
                .iter()
                .map(|h| h.signed_area().into_inner())
                .sum();
            border + holes
        })
        .sum()
}

fn rect_strategy() -> impl Strategy<Value = (i32, i32, i32, i32)> {
    (0..6i32, 0..6i32, 1..4i32, 1..4i32)
}

proptest! {
    #[test]
    fn union_is_idempotent((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let union = ops::unite(&[a.clone()], false).unwrap();
        prop_assert_eq!(total_area(&union), total_area(&a));
    }

    #[test]
    fn intersection_is_idempotent((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let intersection = ops::intersect(&a, &a, false).unwrap();
        prop_assert_eq!(total_area(&intersection), total_area(&a));
    }

    #[test]
    fn difference_of_self_is_empty((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let difference = ops::subtract(&a, &a, false).unwrap();
        prop_assert!(difference.is_empty());
    }

    #[test]
    fn symmetric_difference_of_self_is_empty((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let symmetric = ops::symmetric_subtract(&a, &a, false).unwrap();
        prop_assert!(symmetric.is_empty());
    }

    #[test]
    fn union_is_commutative(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let ab = ops::unite(&[a.clone(), b.clone()], false).unwrap();
        let ba = ops::unite(&[b, a], false).unwrap();
        prop_assert_eq!(total_area(&ab), total_area(&ba));
    }

    #[test]
    fn intersection_is_commutative(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let a_and_b = ops::intersect(&a, &b, false).unwrap();
        let b_and_a = ops::intersect(&b, &a, false).unwrap();
        prop_assert_eq!(total_area(&a_and_b), total_area(&b_and_a));
    }

    #[test]
    fn union_area_matches_inclusion_exclusion(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let union = ops::unite(&[a.clone(), b.clone()], false).unwrap();
        let intersection = ops::intersect(&a, &b, false).unwrap();
        prop_assert_eq!(
            total_area(&union),
            total_area(&a) + total_area(&b) - total_area(&intersection)
        );
    }

    #[test]
    fn union_is_associative(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
        (cx, cy, cw, ch) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let c = rectangle(cx, cy, cw, ch);
        let left = {
            let ab = ops::unite(&[a.clone(), b.clone()], false).unwrap();
            ops::unite(&[ab, c.clone()], false).unwrap()
        };
        let right = {
            let bc = ops::unite(&[b, c], false).unwrap();
            ops::unite(&[a, bc], false).unwrap()
        };
        prop_assert_eq!(total_area(&left), total_area(&right));
    }

    #[test]
    fn union_absorbs_intersection(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let a_and_b = ops::intersect(&a, &b, false).unwrap();
        let absorbed = ops::unite(&[a.clone(), a_and_b], false).unwrap();
        prop_assert_eq!(total_area(&absorbed), total_area(&a));
    }

    #[test]
    fn intersection_absorbs_union(
        (ax, ay, aw, ah) in rect_strategy(),
        (bx, by, bw, bh) in rect_strategy(),
    ) {
        let a = rectangle(ax, ay, aw, ah);
        let b = rectangle(bx, by, bw, bh);
        let a_or_b = ops::unite(&[a.clone(), b], false).unwrap();
        let absorbed = ops::intersect(&a, &a_or_b, false).unwrap();
        prop_assert_eq!(total_area(&absorbed), total_area(&a));
    }

    #[test]
    fn empty_is_the_union_identity((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let empty: Multipolygon<F64> = Vec::new();
        let union = ops::unite(&[empty, a.clone()], false).unwrap();
        prop_assert_eq!(total_area(&union), total_area(&a));
    }

    #[test]
    fn empty_is_the_intersection_annihilator((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let empty: Multipolygon<F64> = Vec::new();
        let intersection = ops::intersect(&empty, &a, false).unwrap();
        prop_assert!(intersection.is_empty());
    }

    #[test]
    fn subtracting_empty_is_identity((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let empty: Multipolygon<F64> = Vec::new();
        let difference = ops::subtract(&a, &empty, false).unwrap();
        prop_assert_eq!(total_area(&difference), total_area(&a));
    }

    #[test]
    fn subtracting_from_empty_is_empty((x, y, w, h) in rect_strategy()) {
        let a = rectangle(x, y, w, h);
        let empty: Multipolygon<F64> = Vec::new();
        let difference = ops::subtract(&empty, &a, false).unwrap();
        prop_assert!(difference.is_empty());
    }
}
