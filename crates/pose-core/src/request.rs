//! Serde-configurable batches of pose operations.
//!
//! A [`PoseBatch`] is the JSON-facing description of work for the pose
//! algebra: a list of [`PoseOp`]s plus [`BatchOptions`]. Quaternions are
//! `[w, x, y, z]`, vectors and points `[x, y, z]`, poses
//! `[px, py, pz, qw, qx, qy, qz]`.
//!
//! ```
//! use pose_core::{run_batch, PoseBatch};
//!
//! let batch: PoseBatch = serde_json::from_str(
//!     r#"{ "ops": [ { "type": "invert", "pose": [1, 1, 1, 0.5, 0, 0.5, 0] } ] }"#,
//! )
//! .unwrap();
//! let report = run_batch(&batch).unwrap();
//! assert_eq!(report.failed, 0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{frames, quat};
use crate::{quat_from_wxyz, quat_to_wxyz, Pose, PoseError, Pt3, Real, Vec3, QUAT_LEN, VEC_LEN};

/// A single pose operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PoseOp {
    Normalize {
        quaternion: [Real; QUAT_LEN],
    },
    Rotate {
        quaternion: [Real; QUAT_LEN],
        vector: [Real; VEC_LEN],
    },
    Invert {
        pose: Pose,
    },
    /// `base ∘ offset`. `normalize` overrides [`BatchOptions::normalize_compose`].
    Compose {
        base: Pose,
        offset: Pose,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        normalize: Option<bool>,
    },
    ApplyToPoint {
        pose: Pose,
        point: [Real; VEC_LEN],
    },
    FrameAlignment {
        object_in_a: Pose,
        object_in_b: Pose,
    },
}

/// Result value of a [`PoseOp`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PoseOutput {
    Quaternion([Real; QUAT_LEN]),
    Vector([Real; VEC_LEN]),
    Point([Real; VEC_LEN]),
    Pose(Pose),
}

/// Options shared by every op in a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Normalize the orientation of compose results unless the op says
    /// otherwise.
    pub normalize_compose: bool,
    /// Stop at the first failing op instead of recording the error.
    pub fail_fast: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            normalize_compose: false,
            fail_fast: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseBatch {
    pub ops: Vec<PoseOp>,
    #[serde(default)]
    pub options: BatchOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpOutcome {
    Ok(PoseOutput),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<OpOutcome>,
    /// Number of outcomes that are errors.
    pub failed: usize,
}

impl PoseOp {
    pub fn name(&self) -> &'static str {
        match self {
            PoseOp::Normalize { .. } => "normalize",
            PoseOp::Rotate { .. } => "rotate",
            PoseOp::Invert { .. } => "invert",
            PoseOp::Compose { .. } => "compose",
            PoseOp::ApplyToPoint { .. } => "apply_to_point",
            PoseOp::FrameAlignment { .. } => "frame_alignment",
        }
    }

    pub fn evaluate(&self, options: &BatchOptions) -> Result<PoseOutput, PoseError> {
        match self {
            PoseOp::Normalize { quaternion } => {
                let q = quat::normalize(&quat_from_wxyz(*quaternion))?;
                Ok(PoseOutput::Quaternion(quat_to_wxyz(&q)))
            }
            PoseOp::Rotate { quaternion, vector } => {
                let v = quat::rotate(&quat_from_wxyz(*quaternion), &Vec3::from(*vector))?;
                Ok(PoseOutput::Vector(v.into()))
            }
            PoseOp::Invert { pose } => Ok(PoseOutput::Pose(pose.invert()?)),
            PoseOp::Compose {
                base,
                offset,
                normalize,
            } => {
                let composed = if normalize.unwrap_or(options.normalize_compose) {
                    base.compose_normalized(offset)?
                } else {
                    base.compose(offset)?
                };
                Ok(PoseOutput::Pose(composed))
            }
            PoseOp::ApplyToPoint { pose, point } => {
                let p = pose.apply_to_point(&Pt3::from(*point))?;
                Ok(PoseOutput::Point(p.coords.into()))
            }
            PoseOp::FrameAlignment {
                object_in_a,
                object_in_b,
            } => Ok(PoseOutput::Pose(frames::frame_alignment(
                object_in_a,
                object_in_b,
            )?)),
        }
    }
}

/// Evaluate every op of `batch` in order.
///
/// With `fail_fast` the first error is returned; otherwise errors are
/// recorded in the report and counted in [`BatchReport::failed`].
pub fn run_batch(batch: &PoseBatch) -> Result<BatchReport, PoseError> {
    let mut report = BatchReport::default();
    for (idx, op) in batch.ops.iter().enumerate() {
        match op.evaluate(&batch.options) {
            Ok(out) => report.outcomes.push(OpOutcome::Ok(out)),
            Err(err) => {
                debug!("op {} ({}) failed: {}", idx, op.name(), err);
                if batch.options.fail_fast {
                    return Err(err);
                }
                report.failed += 1;
                report.outcomes.push(OpOutcome::Error(err.to_string()));
            }
        }
    }
    Ok(report)
}
