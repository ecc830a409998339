//! Rigid poses as position ⊕ orientation quaternion.

use nalgebra::Translation3;
use serde::{Deserialize, Serialize};

use crate::quat;
use crate::{quat_from_wxyz, quat_to_wxyz, Iso3, PoseError, Quat, Real, UnitQuat, Vec3, POSE_LEN};

/// A rigid transform: rotate by `orientation`, then translate by `position`.
///
/// The flat layout is `[px, py, pz, qw, qx, qy, qz]`; serde uses the same
/// 7-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[Real; 7]", try_from = "[Real; 7]")]
pub struct Pose {
    /// Translation applied after the rotation.
    pub position: Vec3,
    /// Orientation, scalar first. Expected to be unit norm when used as a
    /// rotation.
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// `(0, 0, 0, 1, 0, 0, 0)`.
    pub fn identity() -> Self {
        Self::new(Vec3::zeros(), quat::identity())
    }

    /// Translation-only pose.
    pub fn from_translation(x: Real, y: Real, z: Real) -> Self {
        Self::new(Vec3::new(x, y, z), quat::identity())
    }

    /// Build from `[px, py, pz, qw, qx, qy, qz]` without validation.
    pub fn from_array(a: [Real; POSE_LEN]) -> Self {
        Self::new(
            Vec3::new(a[0], a[1], a[2]),
            quat_from_wxyz([a[3], a[4], a[5], a[6]]),
        )
    }

    /// Flatten into `[px, py, pz, qw, qx, qy, qz]`.
    pub fn to_array(&self) -> [Real; POSE_LEN] {
        let [qw, qx, qy, qz] = quat_to_wxyz(&self.orientation);
        [
            self.position.x,
            self.position.y,
            self.position.z,
            qw,
            qx,
            qy,
            qz,
        ]
    }

    pub fn check_finite(&self) -> Result<(), PoseError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(PoseError::NonFinite("position"));
        }
        quat::check_finite(&self.orientation)
    }

    /// Same pose with a unit-norm orientation.
    pub fn normalized(&self) -> Result<Self, PoseError> {
        self.check_finite()?;
        Ok(Self::new(self.position, quat::normalize(&self.orientation)?))
    }

    /// The pose that undoes `self`.
    ///
    /// `q' = normalize(conjugate(q))`, `p' = rotate(q', -p)`, so that
    /// `self.invert()?.compose(self)?` is the identity once its orientation
    /// is normalized.
    pub fn invert(&self) -> Result<Self, PoseError> {
        self.check_finite()?;
        let orientation = quat::normalize(&quat::conjugate(&self.orientation))?;
        let position = quat::rotate(&orientation, &-self.position)?;
        Ok(Self::new(position, orientation))
    }

    /// Express `offset` in the frame of `self` (the base).
    ///
    /// `position = base.p + rotate(base.q, offset.p)` and
    /// `orientation = base.q ⊗ offset.q`. The orientation is not renormalized;
    /// use [`Pose::compose_normalized`] when drift matters.
    pub fn compose(&self, offset: &Pose) -> Result<Self, PoseError> {
        self.check_finite()?;
        offset.check_finite()?;
        let position = self.position + quat::rotate(&self.orientation, &offset.position)?;
        quat::check_vec_finite(&position, "result")?;
        let orientation = quat::product(&self.orientation, &offset.orientation);
        if !orientation.coords.iter().all(|c| c.is_finite()) {
            return Err(PoseError::NonFinite("result"));
        }
        Ok(Self::new(position, orientation))
    }

    /// [`Pose::compose`] followed by orientation normalization.
    pub fn compose_normalized(&self, offset: &Pose) -> Result<Self, PoseError> {
        self.compose(offset)?.normalized()
    }

    /// Convert into an nalgebra isometry. The orientation is normalized.
    pub fn to_iso3(&self) -> Result<Iso3, PoseError> {
        let unit = self.normalized()?;
        Ok(Iso3::from_parts(
            Translation3::from(unit.position),
            UnitQuat::new_unchecked(unit.orientation),
        ))
    }
}

impl From<&Iso3> for Pose {
    fn from(iso: &Iso3) -> Self {
        Self::new(iso.translation.vector, *iso.rotation.quaternion())
    }
}

impl From<Pose> for [Real; POSE_LEN] {
    fn from(pose: Pose) -> Self {
        pose.to_array()
    }
}

impl TryFrom<[Real; POSE_LEN]> for Pose {
    type Error = PoseError;

    fn try_from(a: [Real; POSE_LEN]) -> Result<Self, Self::Error> {
        let pose = Self::from_array(a);
        pose.check_finite()?;
        Ok(pose)
    }
}

impl TryFrom<&[Real]> for Pose {
    type Error = PoseError;

    fn try_from(s: &[Real]) -> Result<Self, Self::Error> {
        let a: [Real; POSE_LEN] = s.try_into().map_err(|_| PoseError::BufferLength {
            expected: POSE_LEN,
            got: s.len(),
        })?;
        Self::try_from(a)
    }
}
