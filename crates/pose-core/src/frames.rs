//! Helpers for relating two independently tracked reference frames.
//!
//! Naming follows the `a_from_b` reading of a pose: `obj_in_a` maps points
//! from the object frame into frame A.

use crate::quat;
use crate::{Pose, PoseError, Vec3};

/// The pose's position expressed along its own rotated axes.
///
/// Rotates the position by the handedness-flipped orientation (scalar part
/// negated), i.e. by the inverse rotation. Equals `-pose.invert()?.position`
/// for a unit orientation.
pub fn position_in_own_axes(pose: &Pose) -> Result<Vec3, PoseError> {
    pose.check_finite()?;
    quat::rotate(&quat::flip_handedness(&pose.orientation), &pose.position)
}

/// `b` expressed in the frame of `a`: `a⁻¹ ∘ b`.
pub fn relative_pose(a: &Pose, b: &Pose) -> Result<Pose, PoseError> {
    a.invert()?.compose_normalized(b)
}

/// Pose of frame B in frame A, given the same object tracked in both.
///
/// `obj_in_a ∘ obj_in_b⁻¹`, orientation normalized.
pub fn frame_alignment(obj_in_a: &Pose, obj_in_b: &Pose) -> Result<Pose, PoseError> {
    obj_in_a.compose_normalized(&obj_in_b.invert()?)
}
