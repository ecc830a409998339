//! Algebraic laws of the pose algebra over seeded random poses.
//!
//! Validates the inverse law, consistency of composition with point
//! transforms, and length preservation of rotations.

use pose_core::quat;
use pose_core::test_utils::{assert_components_eq, TOLERANCE};
use pose_core::{apply_to_point, Pose, Pt3, Quat, Real, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 200;

fn random_unit_quat(rng: &mut StdRng) -> Quat {
    loop {
        let q = Quat::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if q.norm() > 0.1 {
            return quat::normalize(&q).expect("non-degenerate sample");
        }
    }
}

fn random_vec(rng: &mut StdRng, scale: Real) -> Vec3 {
    Vec3::new(
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
    )
}

fn random_pose(rng: &mut StdRng) -> Pose {
    Pose::new(random_vec(rng, 5.0), random_unit_quat(rng))
}

#[test]
fn inverse_law() {
    let mut rng = StdRng::seed_from_u64(7);
    let identity = Pose::identity().to_array();
    for _ in 0..SAMPLES {
        let pose = random_pose(&mut rng);
        let out = pose.invert().unwrap().compose_normalized(&pose).unwrap();
        assert_components_eq(&out.to_array(), &identity, TOLERANCE);
    }
}

#[test]
fn inverse_law_holds_for_unnormalized_input() {
    // The inverse orientation is normalized, so a scaled input still works.
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let mut pose = random_pose(&mut rng);
        let scaled = pose.orientation * rng.random_range(0.5..2.0);
        pose.orientation = scaled;
        let inv = pose.invert().unwrap();
        assert!(quat::is_unit(&inv.orientation, 1e-12));

        let unit = pose.normalized().unwrap();
        let out = inv.compose_normalized(&unit).unwrap();
        assert_components_eq(&out.to_array(), &Pose::identity().to_array(), TOLERANCE);
    }
}

#[test]
fn compose_agrees_with_sequential_point_transforms() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let a = random_pose(&mut rng);
        let b = random_pose(&mut rng);
        let x = Pt3::from(random_vec(&mut rng, 10.0));

        let composed = apply_to_point(&a.compose(&b).unwrap(), &x).unwrap();
        let sequential = apply_to_point(&a, &apply_to_point(&b, &x).unwrap()).unwrap();
        assert_components_eq(
            composed.coords.as_slice(),
            sequential.coords.as_slice(),
            TOLERANCE,
        );
    }
}

#[test]
fn rotation_preserves_length() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let q = random_unit_quat(&mut rng);
        let v = random_vec(&mut rng, 10.0);
        let r = quat::rotate(&q, &v).unwrap();
        assert!(
            (r.norm() - v.norm()).abs() < TOLERANCE,
            "length changed: {} -> {}",
            v.norm(),
            r.norm()
        );
    }
}

#[test]
fn identity_pose_is_neutral() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let x = Pt3::from(random_vec(&mut rng, 100.0));
        let out = apply_to_point(&Pose::identity(), &x).unwrap();
        assert_components_eq(out.coords.as_slice(), x.coords.as_slice(), TOLERANCE);

        let pose = random_pose(&mut rng);
        let left = Pose::identity().compose(&pose).unwrap();
        let right = pose.compose(&Pose::identity()).unwrap();
        assert_components_eq(&left.to_array(), &pose.to_array(), TOLERANCE);
        assert_components_eq(&right.to_array(), &pose.to_array(), TOLERANCE);
    }
}

#[test]
fn composition_is_not_commutative() {
    let a = Pose::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let b = Pose::from_array([0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0]);
    let ab = a.compose(&b).unwrap();
    let ba = b.compose(&a).unwrap();
    assert_components_eq(&ab.to_array(), &[1.0, 0.0, -2.0, 0.0, 0.0, 0.0, -1.0], TOLERANCE);
    assert_components_eq(&ba.to_array(), &[1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0], TOLERANCE);
}

#[test]
fn small_angle_rotations_need_no_special_case() {
    let half = 1e-9_f64;
    let q = quat::normalize(&Quat::new(half.cos(), 0.0, 0.0, half.sin())).unwrap();
    let pose = Pose::new(Vec3::new(0.5, 0.5, 0.5), q);
    let out = pose.invert().unwrap().compose_normalized(&pose).unwrap();
    assert_components_eq(&out.to_array(), &Pose::identity().to_array(), TOLERANCE);
}
