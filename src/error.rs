use thiserror::Error;

/// Numeric degeneracies surfaced as errors instead of NaN results.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A vector with zero or non-finite length cannot be normalized.
    #[error("cannot normalize vector of length {length}")]
    DegenerateVector { length: f64 },

    #[error("integral approximation needs at least one segment")]
    NoSegments,
}
