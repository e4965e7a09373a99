//! The numeric domain the sweep runs over.
//!
//! The engine is generic over [`Scalar`] so the same sweep code drives both
//! the default floating-point path and the exact-rational path requested via
//! `accurate` (see [`crate::ops`]). Mixing representations within one sweep
//! is not expressible: every operand is coerced to a single `S` before the
//! `Operation` is built.

use num_rational::Ratio;
use num_traits::{One, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A coordinate type usable by the sweep engine.
///
/// `Ord` is required (not just `PartialOrd`) because events are kept in a
/// `BinaryHeap` and an active-line ordered set, both of which need a total
/// order; this is why floating point coordinates are wrapped in
/// [`OrderedFloat`] rather than used bare.
pub trait Scalar:
    Copy
    + Clone
    + Debug
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Coerce this value to the exact-rational domain used when `accurate`
    /// is requested. Lossy for types that are already exact only in the
    /// sense that the conversion is the identity.
    fn to_rational(self) -> Ratio<i64>;

    /// The inverse of [`Self::to_rational`], used by [`crate::ops`] to bring
    /// an `accurate`-mode result computed over `Ratio<i64>` back into the
    /// caller's own coordinate domain. Identity for `Ratio<i64>` itself.
    fn from_rational(r: Ratio<i64>) -> Self;
}

impl Scalar for OrderedFloat<f64> {
    fn to_rational(self) -> Ratio<i64> {
        Ratio::approximate_float(self.0).unwrap_or_else(Ratio::zero)
    }

    fn from_rational(r: Ratio<i64>) -> Self {
        OrderedFloat(*r.numer() as f64 / *r.denom() as f64)
    }
}

impl Scalar for Ratio<i64> {
    fn to_rational(self) -> Ratio<i64> {
        self
    }

    fn from_rational(r: Ratio<i64>) -> Self {
        r
    }
}

/// The default coordinate type for floating-point callers.
pub type F64 = OrderedFloat<f64>;

/// The coordinate type used on the `accurate` path.
pub type Rational = Ratio<i64>;

#[inline]
pub fn f64_coord(x: f64) -> F64 {
    OrderedFloat(x)
}
