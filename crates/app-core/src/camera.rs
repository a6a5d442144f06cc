//! Camera description and per-frame rig motion.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The web frontend
//! consumes them to build camera matrices for the render collaborator.

use crate::constants::*;
use crate::motion::{deg_to_rad, noise2, orbit_xy};
use glam::{Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The resting viewpoint every page starts from.
    pub fn base(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, BASE_CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: deg_to_rad(CAMERA_FOV_DEG),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// What a rig strategy contributes for one frame: either a full replacement
/// viewpoint (orbit) or a nudge applied on top of the captured base (shake).
#[derive(Clone, Copy, Debug)]
pub enum PoseContribution {
    Absolute { eye: Vec3, target: Vec3 },
    Offset { translation: Vec3, roll: f32 },
}

/// Per-frame pose contribution capability. Exactly one strategy is active
/// per page; switching strategies means constructing a new rig.
pub trait RigMotion {
    fn contribute(&mut self, dt: f32) -> PoseContribution;
}

/// Circular motion around the origin at a fixed height, always looking in.
#[derive(Clone, Copy, Debug)]
pub struct Orbit {
    pub radius: f32,
    pub height: f32,
    pub speed: f32,
    angle: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            radius: ORBIT_RADIUS,
            height: ORBIT_HEIGHT,
            speed: ORBIT_SPEED,
            angle: 0.0,
        }
    }
}

impl RigMotion for Orbit {
    fn contribute(&mut self, dt: f32) -> PoseContribution {
        self.angle += self.speed * dt;
        let (x, z) = orbit_xy(self.angle, self.radius);
        PoseContribution::Absolute {
            eye: Vec3::new(x, self.height, z),
            target: Vec3::ZERO,
        }
    }
}

/// Coherent-noise handheld shake around the captured base pose. X, Y and
/// roll come from three decorrelated samples of one noise field.
#[derive(Clone, Copy, Debug)]
pub struct Shake {
    pub intensity: f32,
    pub frequency: f32,
    t: f32,
}

impl Default for Shake {
    fn default() -> Self {
        Self {
            intensity: SHAKE_INTENSITY,
            frequency: SHAKE_FREQUENCY,
            t: 0.0,
        }
    }
}

impl RigMotion for Shake {
    fn contribute(&mut self, dt: f32) -> PoseContribution {
        self.t += dt * self.frequency;
        let t = self.t;
        PoseContribution::Offset {
            translation: Vec3::new(noise2(t, 0.0), noise2(0.0, t), 0.0) * self.intensity,
            roll: noise2(t, t) * self.intensity,
        }
    }
}

/// A base pose captured at activation plus one motion strategy. The base is
/// never persisted across page transitions; each mount recaptures it.
pub struct CameraRig {
    base: Camera,
    motion: Box<dyn RigMotion>,
}

impl CameraRig {
    pub fn new(base: Camera, motion: Box<dyn RigMotion>) -> Self {
        Self { base, motion }
    }

    pub fn base(&self) -> &Camera {
        &self.base
    }

    /// Compose this frame's pose from the base and the strategy contribution.
    pub fn tick(&mut self, dt: f32) -> Camera {
        match self.motion.contribute(dt) {
            PoseContribution::Absolute { eye, target } => Camera {
                eye,
                target,
                ..self.base.clone()
            },
            PoseContribution::Offset { translation, roll } => {
                let eye = self.base.eye + translation;
                let fwd = (self.base.target - eye).normalize_or_zero();
                let up = if fwd.length_squared() > 0.0 {
                    Quat::from_axis_angle(fwd, roll) * self.base.up
                } else {
                    self.base.up
                };
                Camera {
                    eye,
                    up,
                    ..self.base.clone()
                }
            }
        }
    }
}
