//! Scene registry: explicit entity handles for the render collaborator.
//!
//! Producers look nodes up by stable id every frame instead of capturing
//! long-lived references. A missing id means that handle is not mounted yet;
//! the caller skips the write for this frame and retries on the next one.

use fnv::FnvHashMap;
use glam::Vec3;

/// Numeric transform state the render collaborator consumes each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode {
    pub position: Vec3,
    /// Euler angles, radians.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub opacity: f32,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
        }
    }
}

#[derive(Default)]
pub struct SceneRegistry {
    nodes: FnvHashMap<String, SceneNode>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a handle under `id`, returning the fresh node.
    pub fn register(&mut self, id: impl Into<String>) -> &mut SceneNode {
        self.nodes.entry(id.into()).or_default()
    }

    pub fn remove(&mut self, id: &str) -> Option<SceneNode> {
        self.nodes.remove(id)
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// `None` until the handle is mounted; callers skip and retry next frame.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
