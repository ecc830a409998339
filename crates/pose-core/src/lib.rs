//! Rigid-body pose algebra for tracking and calibration pipelines.
//!
//! This crate contains:
//! - a quaternion kernel (`normalize`, `rotate`, `conjugate`, `flip_handedness`),
//! - the [`Pose`] type (position ⊕ scalar-first unit quaternion) with
//!   inversion and composition,
//! - point transforms under a pose,
//! - a flat-buffer API over `[px, py, pz, qw, qx, qy, qz]` slices,
//! - frame helpers and serde-configurable batch requests.
//!
//! Pose convention: applying a pose to a point rotates by the orientation,
//! then translates by the position. `base.compose(&offset)` expresses
//! `offset` in `base`'s frame, so
//! `base.compose(&offset)?.apply_to_point(&x) == base.apply_to_point(&offset.apply_to_point(&x)?)`.

/// Flat-slice calling convention.
pub mod buffer;
/// Domain error type.
pub mod error;
/// Frame alignment helpers.
pub mod frames;
/// Linear algebra type aliases.
pub mod math;
/// Pose type, inversion and composition.
pub mod pose;
/// Quaternion kernel.
pub mod quat;
/// Serde-configurable batches of pose operations.
pub mod request;
/// Tolerance-based comparison helpers shared by test suites.
pub mod test_utils;
/// Point transforms under a pose.
pub mod transform;

pub use error::PoseError;
pub use math::*;
pub use pose::Pose;
pub use request::{run_batch, BatchOptions, BatchReport, OpOutcome, PoseBatch, PoseOp, PoseOutput};
pub use transform::{apply_to_point, apply_to_points};
