//! Linear algebra type aliases and layout constants.
//!
//! Quaternions are always built scalar-first (`Quat::new(w, x, y, z)`), which
//! matches the flat pose layout `[px, py, pz, qw, qx, qy, qz]`.

use nalgebra::{Isometry3, Point3, Quaternion, UnitQuaternion, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// Quaternion with [`Real`] components (not necessarily unit norm).
pub type Quat = Quaternion<Real>;
/// Unit quaternion with [`Real`] components.
pub type UnitQuat = UnitQuaternion<Real>;
/// 3D rigid transform (SE(3)) using [`Real`].
pub type Iso3 = Isometry3<Real>;

/// Number of components in a flat vector.
pub const VEC_LEN: usize = 3;
/// Number of components in a flat quaternion (`w, x, y, z`).
pub const QUAT_LEN: usize = 4;
/// Number of components in a flat pose (`px, py, pz, qw, qx, qy, qz`).
pub const POSE_LEN: usize = VEC_LEN + QUAT_LEN;

/// Build a quaternion from `[w, x, y, z]`.
pub fn quat_from_wxyz(q: [Real; QUAT_LEN]) -> Quat {
    Quat::new(q[0], q[1], q[2], q[3])
}

/// Flatten a quaternion into `[w, x, y, z]`.
pub fn quat_to_wxyz(q: &Quat) -> [Real; QUAT_LEN] {
    [q.w, q.i, q.j, q.k]
}
