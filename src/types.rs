use crate::rotation;
use nalgebra as na;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type Vector3 = na::Vector3<f64>;

/// Rotation quaternion. It is not required to be unit length; note that
/// `na::Quaternion::new` takes `w` first.
pub type Quaternion = na::Quaternion<f64>;

/// Row-major 3x3 matrix, only ever produced by [rotation::to_rotation_matrix].
pub type RotationMatrix = na::Matrix3<f64>;

/// A box with a center, full extents along its local axes and an orientation.
///
/// The fields are plain values and may be reassigned between collision
/// checks; vertices are derived from their current values on every call.
/// Sizes are expected to be non-negative and the rotation to be unit length,
/// neither is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cube {
    pub position: Vector3,
    pub size: Vector3,
    pub rotation: Quaternion,
}

impl Cube {
    pub fn new(position: Vector3, size: Vector3, rotation: Quaternion) -> Self {
        Self {
            position,
            size,
            rotation,
        }
    }

    pub fn axis_aligned(position: Vector3, size: Vector3) -> Self {
        Self::new(position, size, Quaternion::identity())
    }

    pub fn from_unit_rotation(
        position: Vector3,
        size: Vector3,
        rotation: na::UnitQuaternion<f64>,
    ) -> Self {
        Self::new(position, size, rotation.into_inner())
    }

    pub fn half_size(&self) -> Vector3 {
        self.size / 2.0
    }

    pub fn rotation_matrix(&self) -> RotationMatrix {
        rotation::to_rotation_matrix(&self.rotation)
    }

    /// Compute the eight world-space corners.
    ///
    /// The front face (`+z`) comes first, then the back face (`-z`), each
    /// walked bottom-left, bottom-right, top-right, top-left in the local frame.
    pub fn vertices(&self) -> [Vector3; 8] {
        let h = self.half_size();
        let local = [
            Vector3::new(-h.x, -h.y, h.z),
            Vector3::new(h.x, -h.y, h.z),
            Vector3::new(h.x, h.y, h.z),
            Vector3::new(-h.x, h.y, h.z),
            Vector3::new(-h.x, -h.y, -h.z),
            Vector3::new(h.x, -h.y, -h.z),
            Vector3::new(h.x, h.y, -h.z),
            Vector3::new(-h.x, h.y, -h.z),
        ];

        let norm = self.rotation.norm();
        if approx::relative_ne!(norm, 1.0, epsilon = 1e-9) {
            log::debug!("cube rotation has norm {norm}, vertices will be scaled or skewed");
        }

        let matrix = self.rotation_matrix();
        local.map(|corner| rotation::rotate(&corner, &matrix) + self.position)
    }
}
