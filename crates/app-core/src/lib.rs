pub mod camera;
pub mod carousel;
pub mod constants;
pub mod drag;
pub mod motion;
pub mod pages;
pub mod particles;
pub mod scene;
pub mod scroll;
pub mod styles;

pub use camera::*;
pub use carousel::*;
pub use constants::*;
pub use drag::*;
pub use pages::*;
pub use particles::*;
pub use scene::*;
pub use scroll::*;
