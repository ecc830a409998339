//! Applying poses to bare points.

use crate::quat;
use crate::{Pose, PoseError, Pt3};

/// Map `point` from the pose's local frame into its parent frame:
/// rotate by the orientation, then translate by the position.
pub fn apply_to_point(pose: &Pose, point: &Pt3) -> Result<Pt3, PoseError> {
    pose.check_finite()?;
    let rotated = quat::rotate(&pose.orientation, &point.coords)?;
    let mapped = pose.position + rotated;
    quat::check_vec_finite(&mapped, "result")?;
    Ok(Pt3::from(mapped))
}

/// [`apply_to_point`] over a slice. Fails on the first bad point.
pub fn apply_to_points(pose: &Pose, points: &[Pt3]) -> Result<Vec<Pt3>, PoseError> {
    points.iter().map(|p| apply_to_point(pose, p)).collect()
}

impl Pose {
    /// See [`apply_to_point`].
    pub fn apply_to_point(&self, point: &Pt3) -> Result<Pt3, PoseError> {
        apply_to_point(self, point)
    }
}
