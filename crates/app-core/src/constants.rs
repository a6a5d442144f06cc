// Shared choreography tuning constants used by both the core and the web frontend.

// Scroll track
pub const MAX_SCROLL_PAGES: f32 = 10.0; // virtual pages on the scroll track
pub const WORLD_UNITS_PER_PAGE: f32 = 6.0; // world-space Y travelled per scroll page

// Hero overlay
pub const TITLE_REVEAL_POINT: f32 = 0.47; // offset at which the title is fully raised
pub const MARKER_BASE_TOP_PX: f32 = 50.0; // resting top of the scroll marker
pub const PANEL_RADIUS_MAX_PX: f32 = 24.0; // rounded panel corners at rest

// Hero spinner widget
pub const SPINNER_STEP_RAD: f32 = 0.01; // per-frame x/y rotation of the hero cube

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_BOUND_XZ: f32 = 10.0; // velocity reflects outside ±bound on X/Z
pub const PARTICLE_BAND_HALF_HEIGHT: f32 = 10.0; // visibility band half-height around the scroll center
pub const PARTICLE_NOISE_STRENGTH: f32 = 1.2; // noise force applied to velocity, units/s^2
pub const PARTICLE_NOISE_FREQ: f32 = 0.4; // how fast the noise field drifts with time
pub const PARTICLE_MAX_SPEED: f32 = 2.5; // random walk stays bounded
pub const PARTICLE_SPAWN_SPEED: f32 = 0.6; // respawn velocity magnitude bound per axis
pub const PARTICLE_OPACITY_RATE: f32 = 5.0; // opacity = 0.5 + 0.5*sin(t*rate + index)

// Drag / momentum
pub const DRAG_DECAY: f32 = 0.99; // velocity multiplier per coast frame
pub const DRAG_REST_THRESHOLD: f32 = 0.05; // below this the coast loop stops

// Carousel wrap space (percent units)
pub const CAROUSEL_SCROLL_GAIN: f32 = 100.0; // scroll offset contribution per page
pub const CAROUSEL_DRAG_DIVISOR: f32 = 15.0; // dragged px to percent
pub const CAROUSEL_WRAP_SPAN: f32 = 150.0; // wrap period
pub const CAROUSEL_WRAP_MIN: f32 = -50.0; // wrap range is [min, min + span)
pub const CAROUSEL_SLOT_WIDTH: f32 = 25.0; // spacing between adjacent items

// Camera
// Base viewpoint shared by every page; rigs recapture it on mount.
pub const BASE_CAMERA_Z: f32 = 10.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;

// Orbit rig
pub const ORBIT_RADIUS: f32 = 6.0;
pub const ORBIT_HEIGHT: f32 = 1.0;
pub const ORBIT_SPEED: f32 = 1.0; // radians per second

// Shake rig
pub const SHAKE_INTENSITY: f32 = 0.35;
pub const SHAKE_FREQUENCY: f32 = 0.6; // noise-time advance per real second

// Page transitions
pub const TRANSITION_DURATION_SEC: f32 = 0.4;
pub const ENTER_OPACITY_FROM: f32 = 0.0;
pub const ENTER_SCALE_FROM: f32 = 0.92;
pub const ENTER_BLUR_FROM_PX: f32 = 8.0;
