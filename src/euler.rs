use crate::{error::GeometryError, types::Vector3, vector};
use nalgebra as na;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotations about the x, y and z axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Euler {
    pub vector: Vector3,
}

impl Default for Euler {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Euler {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            vector: Vector3::new(x, y, z),
        }
    }

    /// Orientation (pitch, yaw, no roll) of the direction from `to` back to `from`.
    pub fn look_at_point(from: &Vector3, to: &Vector3) -> Self {
        let d = from - to;
        let yaw = d.y.atan2(d.x);
        let pitch = (-d.z).atan2((d.x * d.x + d.y * d.y).sqrt());
        Self::new(pitch, yaw, 0.0)
    }

    pub fn look_at(&mut self, target: &Vector3) -> Result<(), GeometryError> {
        self.look_at_with_up(target, &vector::UP)
    }

    /// Re-orient toward `target`, treating the stored angles as the eye position.
    ///
    /// Fails without touching `self` when the view direction is zero or
    /// parallel to `up`.
    pub fn look_at_with_up(&mut self, target: &Vector3, up: &Vector3) -> Result<(), GeometryError> {
        let z = vector::normalize(&(target - self.vector))?;
        let x = vector::normalize(&up.cross(&z))?;
        let y = vector::normalize(&z.cross(&x))?;

        self.vector.x = y.y.atan2(x.y);
        self.vector.y = (-z.y).asin();
        self.vector.z = y.x.atan2(x.x);
        Ok(())
    }

    pub fn rotate(&mut self, x: f64, y: f64, z: f64) {
        self.vector += Vector3::new(x, y, z);
    }

    /// Unit quaternion applying roll `x`, pitch `y` and yaw `z`.
    pub fn to_quaternion(&self) -> na::UnitQuaternion<f64> {
        na::UnitQuaternion::from_euler_angles(self.vector.x, self.vector.y, self.vector.z)
    }
}

impl fmt::Display for Euler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", vector::display(&self.vector))
    }
}
