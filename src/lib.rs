//! `planarops` computes Boolean set operations — union, intersection,
//! difference, symmetric difference, and a complete intersection that
//! preserves lower-dimensional remnants — over planar multipolygons and
//! multisegments.
//!
//! The engine (after Martínez–Rueda) is an event-driven line sweep: it fills
//! a priority queue with the oriented edges of every operand, sweeps left to
//! right over a balanced active-edge ordering, splits segments at detected
//! intersections, propagates inside/outside labels across operands, and
//! finally stitches the surviving edges back into well-formed contours with
//! correct hole parentage.
//!
//! ```
//! use planarops::scalar::f64_coord;
//! use planarops::{Contour, Point, Polygon, ops};
//!
//! let square = |x0: f64, y0: f64, x1: f64, y1: f64| {
//!     Polygon::new(
//!         Contour::new(vec![
//!             Point::new(f64_coord(x0), f64_coord(y0)),
//!             Point::new(f64_coord(x1), f64_coord(y0)),
//!             Point::new(f64_coord(x1), f64_coord(y1)),
//!             Point::new(f64_coord(x0), f64_coord(y1)),
//!         ]).unwrap(),
//!         Vec::new(),
//!     )
//! };
//! let a = vec![square(0.0, 0.0, 1.0, 1.0)];
//! let b = vec![square(2.0, 0.0, 3.0, 1.0)];
//! let union = ops::unite(&[a, b], false).unwrap();
//! assert_eq!(union.len(), 2);
//! ```

pub mod active_line;
pub mod assembler;
pub mod bbox;
pub mod error;
pub mod event;
pub mod model;
pub mod operation;
pub mod ops;
pub mod oracle;
pub mod point;
pub mod queue;
pub mod scalar;

pub use bbox::BoundingBox;
pub use error::Error;
pub use model::{Contour, Mix, Multipoint, Multipolygon, Multisegment, Polygon};
pub use operation::OperationKind;
pub use point::{Point, Segment};
pub use scalar::Scalar;
