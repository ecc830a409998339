//! Flat-slice calling convention.
//!
//! Vectors are `[x, y, z]`, quaternions `[w, x, y, z]` and poses
//! `[px, py, pz, qw, qx, qy, qz]`. Outputs go into caller-owned storage and
//! are written only after the computation succeeded, so a failed call leaves
//! the output untouched. Aliasing an output with an input is expressed with
//! the `*_in_place` functions.

use crate::quat;
use crate::{
    quat_from_wxyz, quat_to_wxyz, Pose, PoseError, Pt3, Quat, Real, Vec3, POSE_LEN, QUAT_LEN,
    VEC_LEN,
};

fn check_len(buf: &[Real], expected: usize) -> Result<(), PoseError> {
    if buf.len() != expected {
        return Err(PoseError::BufferLength {
            expected,
            got: buf.len(),
        });
    }
    Ok(())
}

pub fn read_vec3(buf: &[Real]) -> Result<Vec3, PoseError> {
    check_len(buf, VEC_LEN)?;
    Ok(Vec3::new(buf[0], buf[1], buf[2]))
}

pub fn read_quat(buf: &[Real]) -> Result<Quat, PoseError> {
    check_len(buf, QUAT_LEN)?;
    Ok(quat_from_wxyz([buf[0], buf[1], buf[2], buf[3]]))
}

/// Read a pose, rejecting non-finite components.
pub fn read_pose(buf: &[Real]) -> Result<Pose, PoseError> {
    Pose::try_from(buf)
}

pub fn write_vec3(v: &Vec3, out: &mut [Real]) -> Result<(), PoseError> {
    check_len(out, VEC_LEN)?;
    out.copy_from_slice(v.as_slice());
    Ok(())
}

pub fn write_quat(q: &Quat, out: &mut [Real]) -> Result<(), PoseError> {
    check_len(out, QUAT_LEN)?;
    out.copy_from_slice(&quat_to_wxyz(q));
    Ok(())
}

pub fn write_pose(pose: &Pose, out: &mut [Real]) -> Result<(), PoseError> {
    check_len(out, POSE_LEN)?;
    out.copy_from_slice(&pose.to_array());
    Ok(())
}

/// Normalize a `[w, x, y, z]` slice in place, e.g. `&mut pose_buf[3..7]`.
pub fn normalize_quat_in_place(q: &mut [Real]) -> Result<(), PoseError> {
    let normalized = quat::normalize(&read_quat(q)?)?;
    write_quat(&normalized, q)
}

/// Replace the pose stored in `pose` with its inverse.
pub fn invert_pose_in_place(pose: &mut [Real]) -> Result<(), PoseError> {
    let inv = read_pose(pose)?.invert()?;
    write_pose(&inv, pose)
}

/// `out = base ∘ offset`, orientation not renormalized.
pub fn apply_pose_to_pose(out: &mut [Real], base: &[Real], offset: &[Real]) -> Result<(), PoseError> {
    check_len(out, POSE_LEN)?;
    let composed = read_pose(base)?.compose(&read_pose(offset)?)?;
    write_pose(&composed, out)
}

/// `pose = pose ∘ offset`, orientation not renormalized.
pub fn apply_pose_to_pose_in_place(pose: &mut [Real], offset: &[Real]) -> Result<(), PoseError> {
    let composed = read_pose(pose)?.compose(&read_pose(offset)?)?;
    write_pose(&composed, pose)
}

/// `offset = base ∘ offset`, orientation not renormalized.
pub fn compose_into_offset_in_place(base: &[Real], offset: &mut [Real]) -> Result<(), PoseError> {
    let composed = read_pose(base)?.compose(&read_pose(offset)?)?;
    write_pose(&composed, offset)
}

/// `out = rotate(q, v)` with `q` as `[w, x, y, z]`.
pub fn rotate_vec3(out: &mut [Real], q: &[Real], v: &[Real]) -> Result<(), PoseError> {
    check_len(out, VEC_LEN)?;
    let rotated = quat::rotate(&read_quat(q)?, &read_vec3(v)?)?;
    write_vec3(&rotated, out)
}

/// `v = rotate(q, v)` with `q` as `[w, x, y, z]`.
pub fn rotate_vec3_in_place(v: &mut [Real], q: &[Real]) -> Result<(), PoseError> {
    let rotated = quat::rotate(&read_quat(q)?, &read_vec3(v)?)?;
    write_vec3(&rotated, v)
}

/// `out = pose · point`.
pub fn apply_pose_to_point(out: &mut [Real], pose: &[Real], point: &[Real]) -> Result<(), PoseError> {
    check_len(out, VEC_LEN)?;
    let p = Pt3::from(read_vec3(point)?);
    let mapped = read_pose(pose)?.apply_to_point(&p)?;
    write_vec3(&mapped.coords, out)
}

/// `point = pose · point`.
pub fn apply_pose_to_point_in_place(point: &mut [Real], pose: &[Real]) -> Result<(), PoseError> {
    let p = Pt3::from(read_vec3(point)?);
    let mapped = read_pose(pose)?.apply_to_point(&p)?;
    write_vec3(&mapped.coords, point)
}
