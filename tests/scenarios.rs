//! The six concrete scenarios from the testable-properties list: disjoint
//! squares, edge-touching squares, corner touch, overlap, a polygon with a
//! hole covered by a larger square, and three-way union associativity.

use planarops::scalar::{f64_coord, F64};
use planarops::{ops, Contour, Multipolygon, Point, Polygon};

fn poly(points: &[(f64, f64)]) -> Polygon<F64> {
    Polygon::new(
        Contour::new(points.iter().map(|&(x, y)| Point::new(f64_coord(x), f64_coord(y))).collect())
            .expect("scenario contours are well-formed by construction"),
        Vec::new(),
    )
}

fn poly_with_hole(border: &[(f64, f64)], hole: &[(f64, f64)]) -> Polygon<F64> {
    Polygon::new(
        Contour::new(border.iter().map(|&(x, y)| Point::new(f64_coord(x), f64_coord(y))).collect())
            .unwrap(),
        vec![Contour::new(hole.iter().map(|&(x, y)| Point::new(f64_coord(x), f64_coord(y))).collect())
            .unwrap()],
    )
}

fn pt(x: f64, y: f64) -> Point<F64> {
    Point::new(f64_coord(x), f64_coord(y))
}

/// Checks that `contour` visits exactly `expected`'s points, in the same
/// cyclic order (rotation allowed, reversal not), the way a reader would
/// check that two drawings of the same polygon agree.
fn contour_matches(points: &[Point<F64>], expected: &[(f64, f64)]) -> bool {
    if points.len() != expected.len() {
        return false;
    }
    let expected: Vec<Point<F64>> = expected.iter().map(|&(x, y)| pt(x, y)).collect();
    let Some(start) = points.iter().position(|&p| p == expected[0]) else {
        return false;
    };
    (0..points.len()).all(|i| points[(start + i) % points.len()] == expected[i])
}

fn single_border_matches(mp: &Multipolygon<F64>, expected: &[(f64, f64)]) -> bool {
    mp.len() == 1 && mp[0].holes.is_empty() && contour_matches(mp[0].border.points(), expected)
}

#[test]
fn disjoint_unit_squares() {
    let a = vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])];
    let b = vec![poly(&[(2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (2.0, 1.0)])];

    let intersection = ops::intersect(&a, &b, false).unwrap();
    assert!(intersection.is_empty());

    let union = ops::unite(&[a.clone(), b.clone()], false).unwrap();
    assert_eq!(union.len(), 2);

    let difference = ops::subtract(&a, &b, false).unwrap();
    assert!(single_border_matches(
        &difference,
        &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
    ));
}

#[test]
fn edge_touching_squares() {
    let a = vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])];
    let b = vec![poly(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)])];

    let intersection = ops::intersect(&a, &b, false).unwrap();
    assert!(intersection.is_empty());

    let mix = ops::complete_intersect(&a, &b, false).unwrap();
    assert!(mix.polygons.is_empty());
    assert_eq!(mix.segments.len(), 1);
    let shared = mix.segments[0];
    assert_eq!(shared.start, pt(1.0, 0.0));
    assert_eq!(shared.end, pt(1.0, 1.0));

    let union = ops::unite(&[a, b], false).unwrap();
    assert!(single_border_matches(
        &union,
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]
    ));
}

#[test]
fn corner_touching_squares() {
    let a = vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])];
    let b = vec![poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)])];

    let intersection = ops::intersect(&a, &b, false).unwrap();
    assert!(intersection.is_empty());

    let mix = ops::complete_intersect(&a, &b, false).unwrap();
    assert!(mix.polygons.is_empty());
    assert!(mix.segments.is_empty());
    assert_eq!(mix.points, vec![pt(1.0, 1.0)]);

    let union = ops::unite(&[a, b], false).unwrap();
    assert_eq!(union.len(), 2);
}

#[test]
fn overlapping_squares() {
    let a = vec![poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])];
    let b = vec![poly(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])];

    let intersection = ops::intersect(&a, &b, false).unwrap();
    assert!(single_border_matches(
        &intersection,
        &[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]
    ));

    // Union minus intersection: area(A) + area(B) - 2 * area(overlap)
    // = 4 + 4 - 2 = 6, realized as a single hole-free, self-touching
    // polygon that pinches at the two points where A\B and B\A meet.
    let symmetric = ops::symmetric_subtract(&a, &b, false).unwrap();
    assert_eq!(symmetric.len(), 1);
    assert!(symmetric[0].holes.is_empty());
    assert_eq!(symmetric[0].border.signed_area().into_inner(), 6.0);
}

#[test]
fn polygon_with_hole_fully_covered_is_unchanged_by_intersection() {
    let a = vec![poly_with_hole(
        &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
        &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
    )];
    let b = vec![poly(&[(-1.0, -1.0), (5.0, -1.0), (5.0, 5.0), (-1.0, 5.0)])];

    let intersection = ops::intersect(&a, &b, false).unwrap();
    assert_eq!(intersection.len(), 1);
    assert_eq!(intersection[0].holes.len(), 1);
    assert!(contour_matches(
        intersection[0].border.points(),
        &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]
    ));
    assert!(contour_matches(
        intersection[0].holes[0].points(),
        &[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]
    ));
}

#[test]
fn three_way_union_is_associative() {
    let a = vec![poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])];
    let b = vec![poly(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)])];
    let c = vec![poly(&[(0.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)])];

    let left_to_right = {
        let ab = ops::unite(&[a.clone(), b.clone()], false).unwrap();
        ops::unite(&[ab, c.clone()], false).unwrap()
    };
    let right_to_left = {
        let bc = ops::unite(&[b.clone(), c.clone()], false).unwrap();
        ops::unite(&[a.clone(), bc], false).unwrap()
    };
    let flat = ops::unite(&[a, b, c], false).unwrap();

    for tromino in [&left_to_right, &right_to_left, &flat] {
        assert_eq!(tromino.len(), 1);
        assert!(tromino[0].holes.is_empty());
        assert_eq!(tromino[0].border.len(), 6);
    }
}
