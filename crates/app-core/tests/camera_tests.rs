// Host-side tests for the camera rig strategies.

use app_core::{
    Camera, CameraRig, Orbit, RigMotion, Shake, BASE_CAMERA_Z, ORBIT_HEIGHT, ORBIT_RADIUS,
    SHAKE_INTENSITY,
};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn base() -> Camera {
    Camera::base(16.0 / 9.0)
}

#[test]
fn base_pose_is_the_resting_viewpoint() {
    let cam = base();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, BASE_CAMERA_Z));
    assert_eq!(cam.target, Vec3::ZERO);
    assert_eq!(cam.up, Vec3::Y);
    // matrices are well-formed
    let vp = cam.projection_matrix() * cam.view_matrix();
    assert!(vp.determinant().is_finite());
}

#[test]
fn orbit_keeps_radius_and_height_and_looks_at_origin() {
    let mut rig = CameraRig::new(base(), Box::new(Orbit::default()));
    for _ in 0..240 {
        let cam = rig.tick(DT);
        let lateral = (cam.eye.x * cam.eye.x + cam.eye.z * cam.eye.z).sqrt();
        assert!(
            (lateral - ORBIT_RADIUS).abs() < 1e-3,
            "orbit radius drifted: {lateral}"
        );
        assert!((cam.eye.y - ORBIT_HEIGHT).abs() < 1e-6);
        assert_eq!(cam.target, Vec3::ZERO);
    }
}

#[test]
fn orbit_actually_advances() {
    let mut rig = CameraRig::new(base(), Box::new(Orbit::default()));
    let first = rig.tick(DT).eye;
    let mut moved = false;
    for _ in 0..60 {
        if (rig.tick(DT).eye - first).length() > 0.1 {
            moved = true;
            break;
        }
    }
    assert!(moved, "orbit eye never left its starting point");
}

#[test]
fn shake_nudges_the_captured_base_within_intensity() {
    let mut rig = CameraRig::new(base(), Box::new(Shake::default()));
    for _ in 0..240 {
        let cam = rig.tick(DT);
        let delta = cam.eye - base().eye;
        assert!(delta.x.abs() <= SHAKE_INTENSITY + 1e-4);
        assert!(delta.y.abs() <= SHAKE_INTENSITY + 1e-4);
        assert_eq!(delta.z, 0.0, "shake must not move along the view axis");
        // the roll tilts up but never flips it
        assert!(cam.up.y > 0.0);
        assert!((cam.up.length() - 1.0).abs() < 1e-3);
    }
    // the base pose itself is untouched
    assert_eq!(rig.base().eye, base().eye);
}

#[test]
fn fresh_rigs_replay_the_same_contribution_sequence() {
    // Noise is deterministic, so a remounted page recaptures its pose and
    // replays identically; state never leaks between rig instances.
    let mut a = Shake::default();
    let mut b = Shake::default();
    for _ in 0..32 {
        let ca = a.contribute(DT);
        let cb = b.contribute(DT);
        match (ca, cb) {
            (
                app_core::PoseContribution::Offset {
                    translation: ta,
                    roll: ra,
                },
                app_core::PoseContribution::Offset {
                    translation: tb,
                    roll: rb,
                },
            ) => {
                assert_eq!(ta, tb);
                assert_eq!(ra, rb);
            }
            _ => panic!("shake must contribute offsets"),
        }
    }
}
