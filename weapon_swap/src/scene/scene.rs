/// Scene: in-memory scene graph.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Implements
/// `SceneGraph` so the substitution core can run headless: unit tests,
/// the demo binary, or hosts that mirror their own tree into it.

use glam::Vec3;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use super::scene_graph::{ComponentKind, ComponentKinds, ComponentRef, NodeKey, SceneGraph};
use super::template::ModelTemplate;

// ===== COMPONENTS =====

/// Mesh renderer attached to a node
#[derive(Debug, Clone, PartialEq)]
pub struct RendererComponent {
    pub enabled: bool,
    pub mesh_name: Option<String>,
    pub materials: Vec<String>,
}

impl RendererComponent {
    /// Enabled renderer with a mesh and materials
    pub fn new(mesh_name: impl Into<String>, materials: &[&str]) -> Self {
        Self {
            enabled: true,
            mesh_name: Some(mesh_name.into()),
            materials: materials.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Enabled renderer with no mesh or material metadata
    pub fn bare() -> Self {
        Self {
            enabled: true,
            mesh_name: None,
            materials: Vec::new(),
        }
    }
}

/// Particle system state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleEffect {
    pub playing: bool,
    pub live_particles: u32,
}

// ===== NODE =====

/// A node of the in-memory scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    local_position: Vec3,
    visible: bool,
    renderer: Option<RendererComponent>,
    /// Trail effect, `Some(enabled)` when attached
    trail: Option<bool>,
    /// Line effect, `Some(enabled)` when attached
    line: Option<bool>,
    particles: Option<ParticleEffect>,
}

impl SceneNode {
    fn new(name: String, parent: Option<NodeKey>) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            local_position: Vec3::ZERO,
            visible: true,
            renderer: None,
            trail: None,
            line: None,
            particles: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn renderer(&self) -> Option<&RendererComponent> {
        self.renderer.as_ref()
    }

    pub fn trail_enabled(&self) -> Option<bool> {
        self.trail
    }

    pub fn line_enabled(&self) -> Option<bool> {
        self.line
    }

    pub fn particles(&self) -> Option<&ParticleEffect> {
        self.particles.as_ref()
    }
}

// ===== SCENE =====

/// In-memory scene graph
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    /// Top-level nodes in insertion order
    roots: Vec<NodeKey>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Add a top-level node
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeKey {
        let key = self.nodes.insert(SceneNode::new(name.into(), None));
        self.roots.push(key);
        key
    }

    /// Append a child node under `parent`
    pub fn add_child(&mut self, parent: NodeKey, name: impl Into<String>) -> Result<NodeKey> {
        let name: String = name.into();
        if !self.nodes.contains_key(parent) {
            return Err(Error::InvalidNode(format!(
                "cannot add child '{}' to a missing parent", name
            )));
        }
        let key = self.nodes.insert(SceneNode::new(name, Some(parent)));
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        Ok(key)
    }

    /// Append a chain of nested children (`a`, then `b` under `a`, ...),
    /// returning the deepest one
    pub fn add_chain(&mut self, parent: NodeKey, names: &[&str]) -> Result<NodeKey> {
        let mut current = parent;
        for name in names {
            current = self.add_child(current, *name)?;
        }
        Ok(current)
    }

    /// Remove a node and its whole subtree. Returns false if the key is invalid.
    pub fn remove_node(&mut self, node: NodeKey) -> bool {
        let Some(parent) = self.nodes.get(node).map(|n| n.parent) else {
            return false;
        };
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|&c| c != node);
                }
            }
            None => self.roots.retain(|&r| r != node),
        }
        let mut stack = vec![node];
        while let Some(key) = stack.pop() {
            if let Some(n) = self.nodes.remove(key) {
                stack.extend(n.children);
            }
        }
        true
    }

    /// Get a node by key
    pub fn node(&self, node: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(node)
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Set the position relative to the parent. Returns false if the key is invalid.
    pub fn set_local_position(&mut self, node: NodeKey, position: Vec3) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.local_position = position;
                true
            }
            None => false,
        }
    }

    /// Attach (or replace) a renderer. Returns false if the key is invalid.
    pub fn set_renderer(&mut self, node: NodeKey, renderer: RendererComponent) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.renderer = Some(renderer);
                true
            }
            None => false,
        }
    }

    /// Attach (or update) a trail effect. Returns false if the key is invalid.
    pub fn set_trail(&mut self, node: NodeKey, enabled: bool) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.trail = Some(enabled);
                true
            }
            None => false,
        }
    }

    /// Attach (or update) a line effect. Returns false if the key is invalid.
    pub fn set_line(&mut self, node: NodeKey, enabled: bool) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.line = Some(enabled);
                true
            }
            None => false,
        }
    }

    /// Attach (or replace) a particle effect. Returns false if the key is invalid.
    pub fn set_particles(&mut self, node: NodeKey, particles: ParticleEffect) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.particles = Some(particles);
                true
            }
            None => false,
        }
    }

    /// First live node with exactly this name, in scene order
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.enumerate_all(&|key| self.name(key) == Some(name))
            .into_iter()
            .next()
    }

    fn spawn_template(&mut self, template: &ModelTemplate, parent: NodeKey) -> Result<NodeKey> {
        let key = self.add_child(parent, template.name.clone())?;
        if let Some(renderer) = &template.renderer {
            self.set_renderer(key, RendererComponent {
                enabled: true,
                mesh_name: renderer.mesh_name.clone(),
                materials: renderer.materials.clone(),
            });
        }
        for child in &template.children {
            self.spawn_template(child, key)?;
        }
        Ok(key)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for Scene {
    fn contains(&self, node: NodeKey) -> bool {
        self.nodes.contains_key(node)
    }

    fn roots(&self) -> Vec<NodeKey> {
        self.roots.clone()
    }

    fn children(&self, node: NodeKey) -> Vec<NodeKey> {
        self.nodes
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn name(&self, node: NodeKey) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn position(&self, node: NodeKey) -> Option<Vec3> {
        let mut n = self.nodes.get(node)?;
        let mut world = n.local_position;
        while let Some(parent) = n.parent.and_then(|p| self.nodes.get(p)) {
            world += parent.local_position;
            n = parent;
        }
        Some(world)
    }

    fn kinds(&self, node: NodeKey) -> ComponentKinds {
        let Some(n) = self.nodes.get(node) else {
            return ComponentKinds::empty();
        };
        let mut kinds = ComponentKinds::empty();
        if let Some(renderer) = &n.renderer {
            kinds |= ComponentKinds::RENDERER;
            if renderer.mesh_name.is_some() {
                kinds |= ComponentKinds::MESH;
            }
            if !renderer.materials.is_empty() {
                kinds |= ComponentKinds::MATERIAL_LIST;
            }
        }
        if n.trail.is_some() {
            kinds |= ComponentKinds::TRAIL_EFFECT;
        }
        if n.line.is_some() {
            kinds |= ComponentKinds::LINE_EFFECT;
        }
        if n.particles.is_some() {
            kinds |= ComponentKinds::PARTICLE_EFFECT;
        }
        kinds
    }

    fn mesh_name(&self, node: NodeKey) -> Option<&str> {
        self.nodes
            .get(node)?
            .renderer
            .as_ref()?
            .mesh_name
            .as_deref()
    }

    fn material_names(&self, node: NodeKey) -> Vec<&str> {
        self.nodes
            .get(node)
            .and_then(|n| n.renderer.as_ref())
            .map(|r| r.materials.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn is_enabled(&self, component: ComponentRef) -> bool {
        let Some(n) = self.nodes.get(component.node) else {
            return false;
        };
        match component.kind {
            ComponentKind::Renderer | ComponentKind::Mesh | ComponentKind::MaterialList => {
                n.renderer.as_ref().is_some_and(|r| r.enabled)
            }
            ComponentKind::TrailEffect => n.trail.unwrap_or(false),
            ComponentKind::LineEffect => n.line.unwrap_or(false),
            ComponentKind::ParticleEffect => n.particles.is_some_and(|p| p.playing),
        }
    }

    fn set_enabled(&mut self, component: ComponentRef, enabled: bool) {
        let Some(n) = self.nodes.get_mut(component.node) else {
            return;
        };
        match component.kind {
            ComponentKind::Renderer | ComponentKind::Mesh | ComponentKind::MaterialList => {
                if let Some(r) = n.renderer.as_mut() {
                    r.enabled = enabled;
                }
            }
            ComponentKind::TrailEffect => {
                if let Some(t) = n.trail.as_mut() {
                    *t = enabled;
                }
            }
            ComponentKind::LineEffect => {
                if let Some(l) = n.line.as_mut() {
                    *l = enabled;
                }
            }
            ComponentKind::ParticleEffect => {
                if let Some(p) = n.particles.as_mut() {
                    p.playing = enabled;
                }
            }
        }
    }

    fn stop_and_clear(&mut self, component: ComponentRef) {
        if component.kind != ComponentKind::ParticleEffect {
            return;
        }
        if let Some(p) = self.nodes.get_mut(component.node).and_then(|n| n.particles.as_mut()) {
            p.playing = false;
            p.live_particles = 0;
        }
    }

    fn instantiate(&mut self, template: &ModelTemplate, parent: NodeKey) -> Result<NodeKey> {
        self.spawn_template(template, parent)
    }

    fn set_visible(&mut self, node: NodeKey, visible: bool) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.visible = visible;
        }
    }

    fn is_visible(&self, node: NodeKey) -> bool {
        self.nodes.get(node).is_some_and(|n| n.visible)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
