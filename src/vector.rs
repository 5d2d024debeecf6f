use crate::{error::GeometryError, types::Vector3};
use std::fmt;

pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

/// Scale a vector to unit length.
///
/// A zero-length (or non-finite length) vector has no direction; instead of
/// producing NaN components this returns [GeometryError::DegenerateVector].
pub fn normalize(vector: &Vector3) -> Result<Vector3, GeometryError> {
    let length = vector.norm();
    if length == 0.0 || !length.is_finite() {
        return Err(GeometryError::DegenerateVector { length });
    }
    Ok(vector / length)
}

/// Render a vector as `(x, y, z)`.
pub fn display(vector: &Vector3) -> Display<'_> {
    Display(vector)
}

pub struct Display<'a>(&'a Vector3);

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
