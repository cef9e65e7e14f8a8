use thiserror::Error;

/// Errors emitted by fallible math operations.
///
/// Builders and conversions stay total; only operations that would otherwise
/// divide by a vanishing quantity report through this enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    /// The matrix determinant is zero, so no inverse exists.
    #[error("matrix is singular: determinant is zero")]
    SingularMatrix,
    /// A vector length fell below the degeneracy threshold where a direction
    /// or a division by length was required.
    #[error("vector length is below the degeneracy threshold")]
    DegenerateLength,
}
