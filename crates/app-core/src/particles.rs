//! Procedural particle field driven by bounded random walk + coherent noise.
//!
//! The field is self-healing: any particle that leaves its bounds is folded
//! back on the next `advance`, so no tick can fail. Positions and opacities
//! are exported as flat buffers for the render collaborator.

use crate::constants::*;
use crate::motion::noise2;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub phase_seed: f32,
    pub opacity: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    positions: Vec<[f32; 3]>,
    opacities: Vec<f32>,
    rng: StdRng,
    elapsed: f32,
}

impl ParticleField {
    /// Build a field of `count` particles. Population is fixed for the
    /// lifetime of the field; pages tear the whole field down on exit.
    pub fn new(count: usize, seed: u64) -> Self {
        // Mix the base seed so consecutive page mounts with nearby seeds
        // still start decorrelated.
        let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-PARTICLE_BOUND_XZ..PARTICLE_BOUND_XZ),
                    rng.gen_range(-PARTICLE_BAND_HALF_HEIGHT..PARTICLE_BAND_HALF_HEIGHT),
                    rng.gen_range(-PARTICLE_BOUND_XZ..PARTICLE_BOUND_XZ),
                ),
                velocity: Vec3::new(
                    rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                    rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                    rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                ),
                phase_seed: rng.gen_range(0.0..256.0),
                opacity: rng.gen_range(0.0..1.0),
            })
            .collect::<Vec<_>>();
        Self {
            positions: vec![[0.0; 3]; count],
            opacities: vec![0.0; count],
            particles,
            rng,
            elapsed: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// World-space center of the visibility band for a given scroll offset.
    pub fn band_center_for_offset(offset: f32) -> f32 {
        -offset * WORLD_UNITS_PER_PAGE
    }

    /// Advance the simulation by `dt` seconds around the scroll-relative
    /// band center. Out-of-band particles respawn inside the band on this
    /// very step.
    pub fn advance(&mut self, dt: f32, band_center: f32) {
        self.elapsed += dt;
        let t = self.elapsed;
        let band_lo = band_center - PARTICLE_BAND_HALF_HEIGHT;
        let band_hi = band_center + PARTICLE_BAND_HALF_HEIGHT;

        for (i, p) in self.particles.iter_mut().enumerate() {
            // One noise field, three decorrelated channels per particle.
            let s = p.phase_seed + t * PARTICLE_NOISE_FREQ;
            let force = Vec3::new(noise2(s, 0.0), noise2(0.0, s), noise2(s, s));
            p.velocity += force * PARTICLE_NOISE_STRENGTH * dt;
            p.velocity = p
                .velocity
                .clamp(Vec3::splat(-PARTICLE_MAX_SPEED), Vec3::splat(PARTICLE_MAX_SPEED));
            p.position += p.velocity * dt;

            // reflect only outward motion, so a particle past the wall turns
            // back instead of flip-flopping in place
            if p.position.x.abs() > PARTICLE_BOUND_XZ && p.position.x * p.velocity.x > 0.0 {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.z.abs() > PARTICLE_BOUND_XZ && p.position.z * p.velocity.z > 0.0 {
                p.velocity.z = -p.velocity.z;
            }

            if p.position.y < band_lo || p.position.y > band_hi {
                p.position = Vec3::new(
                    self.rng.gen_range(-PARTICLE_BOUND_XZ..PARTICLE_BOUND_XZ),
                    self.rng.gen_range(band_lo..band_hi),
                    self.rng.gen_range(-PARTICLE_BOUND_XZ..PARTICLE_BOUND_XZ),
                );
                p.velocity = Vec3::new(
                    self.rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                    self.rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                    self.rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
                );
            }

            // Recomputed every frame, never persisted across ticks.
            p.opacity = 0.5 + 0.5 * (t * PARTICLE_OPACITY_RATE + i as f32).sin();

            self.positions[i] = p.position.to_array();
            self.opacities[i] = p.opacity;
        }
    }

    /// XYZ-interleaved positions as one flat slice for the renderer.
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }
}
