//! Error taxonomy (§7). All variants are fatal for the call that raised
//! them: no partial result is ever returned alongside an `Err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A polygon border had fewer than 3 vertices, a segment had zero
    /// length, or a contour had duplicate consecutive vertices.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two edges belonging to the same operand were found collinear and
    /// overlapping; raised from the intersection handler (§4.4 `OVERLAP`).
    #[error("edges of the same operand overlap")]
    SelfOverlap,

    /// The geometry oracle returned a classification that cannot occur for
    /// the inputs given (e.g. a computed intersection point lying outside
    /// both segments). Surfaced rather than silently tolerated, since it
    /// indicates a bug in the oracle or its caller.
    #[error("geometry oracle contract violated: {0}")]
    GeometryOracleContract(String),
}
