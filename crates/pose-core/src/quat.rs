//! Quaternion kernel: normalization, vector rotation and the two sign
//! conventions used by the pose algebra.
//!
//! Two different "inverse" idioms exist and are kept apart on purpose:
//!
//! - [`conjugate`] negates the vector part. For a unit quaternion this is the
//!   true inverse, and it is what [`Pose::invert`](crate::Pose::invert) uses.
//! - [`flip_handedness`] negates the scalar part. As a rotation it is the
//!   same as the inverse rotation, but the resulting quaternion is the
//!   negative of the conjugate, so products built from it carry the opposite
//!   sign. Use it only where a handedness flip of a tracked orientation is
//!   meant.

use log::debug;

use crate::{PoseError, Quat, Real, Vec3};

/// Identity rotation `(1, 0, 0, 0)`.
pub fn identity() -> Quat {
    Quat::identity()
}

/// Return `Err(NonFinite)` if any component of `q` is NaN or infinite.
pub fn check_finite(q: &Quat) -> Result<(), PoseError> {
    if q.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        debug!(
            "rejecting non-finite quaternion ({}, {}, {}, {})",
            q.w, q.i, q.j, q.k
        );
        Err(PoseError::NonFinite("quaternion"))
    }
}

/// Largest absolute component; zero only for the zero quaternion.
fn max_abs(q: &Quat) -> Real {
    q.coords.iter().fold(0.0, |m: Real, c| m.max(c.abs()))
}

fn check_nonzero(q: &Quat) -> Result<Real, PoseError> {
    let scale = max_abs(q);
    if scale == 0.0 {
        debug!(
            "rejecting zero-norm quaternion ({}, {}, {}, {})",
            q.w, q.i, q.j, q.k
        );
        return Err(PoseError::ZeroNormQuaternion);
    }
    Ok(scale)
}

/// Return `Err(NonFinite(what))` if any component of `v` is NaN or infinite.
pub(crate) fn check_vec_finite(v: &Vec3, what: &'static str) -> Result<(), PoseError> {
    if v.iter().all(|c| c.is_finite()) {
        return Ok(());
    }
    debug!("rejecting non-finite {} ({}, {}, {})", what, v.x, v.y, v.z);
    Err(PoseError::NonFinite(what))
}

/// Rescale `q` to unit norm.
///
/// The quaternion is divided by its largest absolute component before the
/// norm is taken, so any finite nonzero input yields a unit result.
///
/// # Errors
/// [`PoseError::NonFinite`] for NaN/Inf components and
/// [`PoseError::ZeroNormQuaternion`] when every component is zero.
pub fn normalize(q: &Quat) -> Result<Quat, PoseError> {
    check_finite(q)?;
    let scaled = *q / check_nonzero(q)?;
    Ok(scaled / scaled.norm())
}

/// Rotate `v` by `q` (the sandwich product `q·(0,v)·q⁻¹`).
///
/// Evaluated algebraically as `v + w·t + u×t` with `t = 2·(u×v)`, where `u`
/// is the vector part and `w` the scalar part of `q`. The quaternion is not
/// normalized here; only unit quaternions give a pure rotation.
///
/// # Errors
/// Besides the input checks, [`PoseError::NonFinite`]`("result")` when the
/// rotated vector overflows.
pub fn rotate(q: &Quat, v: &Vec3) -> Result<Vec3, PoseError> {
    check_finite(q)?;
    check_nonzero(q)?;
    check_vec_finite(v, "vector")?;

    let u = q.imag();
    let t = u.cross(v) * 2.0;
    let out = v + t * q.w + u.cross(&t);
    check_vec_finite(&out, "result")?;
    Ok(out)
}

/// Negate the vector part: `(w, -x, -y, -z)`.
///
/// The inverse of a unit quaternion.
pub fn conjugate(q: &Quat) -> Quat {
    Quat::new(q.w, -q.i, -q.j, -q.k)
}

/// Negate the scalar part: `(-w, x, y, z)`.
///
/// Rotating by the result undoes a rotation by `q`, but the quaternion is
/// `-conjugate(q)`, not `conjugate(q)`.
pub fn flip_handedness(q: &Quat) -> Quat {
    Quat::new(-q.w, q.i, q.j, q.k)
}

/// Hamilton product `a ⊗ b`.
///
/// Rotating by the product is rotating by `b` first, then by `a`.
pub fn product(a: &Quat, b: &Quat) -> Quat {
    a * b
}

/// Whether `‖q‖` is within `tol` of one.
pub fn is_unit(q: &Quat, tol: Real) -> bool {
    (q.norm() - 1.0).abs() <= tol
}
