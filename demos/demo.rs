//! Runnable walkthrough of the five dispatcher entry points over the
//! "overlapping squares" scenario from the spec's testable-properties list:
//! `A = [(0,0),(2,0),(2,2),(0,2)]`, `B = [(1,1),(3,1),(3,3),(1,3)]`.

use planarops::scalar::f64_coord;
use planarops::{ops, Contour, Point, Polygon};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<planarops::scalar::F64> {
    Polygon::new(
        Contour::new(vec![
            Point::new(f64_coord(x0), f64_coord(y0)),
            Point::new(f64_coord(x1), f64_coord(y0)),
            Point::new(f64_coord(x1), f64_coord(y1)),
            Point::new(f64_coord(x0), f64_coord(y1)),
        ])
        .expect("four distinct corners form a valid contour"),
        Vec::new(),
    )
}

fn print_multipolygon(label: &str, mp: &planarops::Multipolygon<planarops::scalar::F64>) {
    println!("{label}: {} polygon(s)", mp.len());
    for (i, polygon) in mp.iter().enumerate() {
        let points: Vec<(f64, f64)> = polygon
            .border
            .points()
            .iter()
            .map(|p| (p.x.into_inner(), p.y.into_inner()))
            .collect();
        println!("  [{i}] border = {points:?}, {} hole(s)", polygon.holes.len());
    }
}

fn main() {
    pretty_env_logger::try_init().ok();

    let a = vec![square(0.0, 0.0, 2.0, 2.0)];
    let b = vec![square(1.0, 1.0, 3.0, 3.0)];

    let union = ops::unite(&[a.clone(), b.clone()], false).expect("union succeeds");
    print_multipolygon("unite(A, B)", &union);

    let intersection = ops::intersect(&a, &b, false).expect("intersection succeeds");
    print_multipolygon("intersect(A, B)", &intersection);

    let difference = ops::subtract(&a, &b, false).expect("difference succeeds");
    print_multipolygon("subtract(A, B)", &difference);

    let symmetric = ops::symmetric_subtract(&a, &b, false).expect("symmetric difference succeeds");
    print_multipolygon("symmetric_subtract(A, B)", &symmetric);

    let mix = ops::complete_intersect(&a, &b, false).expect("complete intersection succeeds");
    println!(
        "complete_intersect(A, B): {} point(s), {} segment(s), {} polygon(s)",
        mix.points.len(),
        mix.segments.len(),
        mix.polygons.len()
    );
}
