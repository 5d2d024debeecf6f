use crate::types::{Quaternion, RotationMatrix, Vector3};

/// Convert a quaternion into a 3x3 rotation matrix using the doubled-component form.
///
/// The quaternion is used as given. A unit quaternion yields an orthonormal
/// matrix; any other length silently yields a scaled, non-rigid transform.
pub fn to_rotation_matrix(q: &Quaternion) -> RotationMatrix {
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);
    let x2 = x * 2.0;
    let y2 = y * 2.0;
    let z2 = z * 2.0;

    let xx = x * x2;
    let xy = x * y2;
    let xz = x * z2;
    let yy = y * y2;
    let yz = y * z2;
    let zz = z * z2;
    let wx = w * x2;
    let wy = w * y2;
    let wz = w * z2;

    RotationMatrix::new(
        1.0 - (yy + zz), xy - wz, xz + wy,
        xy + wz, 1.0 - (xx + zz), yz - wx,
        xz - wy, yz + wx, 1.0 - (xx + yy),
    )
}

/// Multiply a vector by a matrix, each output component being a row dotted with `vector`.
pub fn rotate(vector: &Vector3, matrix: &RotationMatrix) -> Vector3 {
    matrix * vector
}
