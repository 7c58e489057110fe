/// Scene graph interface consumed by the substitution core.
///
/// The host owns the tree. The core only reads names, parents, children,
/// positions and attached component metadata, toggles enabled/visible flags,
/// and asks the host to instantiate substitute models. Nodes are addressed
/// by `NodeKey`; the core never holds references into the host's storage.

use bitflags::bitflags;
use glam::Vec3;
use slotmap::new_key_type;
use crate::error::Result;
use super::template::ModelTemplate;

// ===== KEYS =====

new_key_type! {
    /// Stable key of a node within a scene graph.
    ///
    /// A key stays valid until its own node is removed by the host.
    pub struct NodeKey;
}

// ===== COMPONENTS =====

/// Kind of component a node may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Renderer,
    Mesh,
    MaterialList,
    TrailEffect,
    LineEffect,
    ParticleEffect,
}

bitflags! {
    /// Set of component kinds attached to a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentKinds: u8 {
        const RENDERER        = 1 << 0;
        const MESH            = 1 << 1;
        const MATERIAL_LIST   = 1 << 2;
        const TRAIL_EFFECT    = 1 << 3;
        const LINE_EFFECT     = 1 << 4;
        const PARTICLE_EFFECT = 1 << 5;
    }
}

impl ComponentKinds {
    /// Flag matching a single kind
    pub fn of(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Renderer => Self::RENDERER,
            ComponentKind::Mesh => Self::MESH,
            ComponentKind::MaterialList => Self::MATERIAL_LIST,
            ComponentKind::TrailEffect => Self::TRAIL_EFFECT,
            ComponentKind::LineEffect => Self::LINE_EFFECT,
            ComponentKind::ParticleEffect => Self::PARTICLE_EFFECT,
        }
    }

    /// Whether a single kind is present
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.contains(Self::of(kind))
    }
}

/// Reference to one component attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub node: NodeKey,
    pub kind: ComponentKind,
}

// ===== SCENE GRAPH TRAIT =====

/// Capability interface over the host scene graph.
///
/// Missing nodes are reported as `None` / empty / `false`, never as panics:
/// the host may destroy nodes between frames.
pub trait SceneGraph {
    /// Whether the key refers to a live node
    fn contains(&self, node: NodeKey) -> bool;

    /// Top-level nodes, in host order
    fn roots(&self) -> Vec<NodeKey>;

    /// Ordered children of a node
    fn children(&self, node: NodeKey) -> Vec<NodeKey>;

    /// Node name
    fn name(&self, node: NodeKey) -> Option<&str>;

    /// Parent of a node, `None` for top-level nodes
    fn parent(&self, node: NodeKey) -> Option<NodeKey>;

    /// World-space position
    fn position(&self, node: NodeKey) -> Option<Vec3>;

    /// Component kinds attached to a node
    fn kinds(&self, node: NodeKey) -> ComponentKinds;

    /// Mesh name of the node's mesh component, if any
    fn mesh_name(&self, node: NodeKey) -> Option<&str>;

    /// Material names of the node's renderer, in slot order
    fn material_names(&self, node: NodeKey) -> Vec<&str>;

    /// Whether a component is currently enabled (particles: playing)
    fn is_enabled(&self, component: ComponentRef) -> bool;

    /// Enable or disable a component. Unknown components are ignored.
    fn set_enabled(&mut self, component: ComponentRef, enabled: bool);

    /// Stop a particle effect and clear its live particles immediately
    fn stop_and_clear(&mut self, component: ComponentRef);

    /// Instantiate a model under `parent` in local space with no offset
    fn instantiate(&mut self, template: &ModelTemplate, parent: NodeKey) -> Result<NodeKey>;

    /// Show or hide a node and its subtree
    fn set_visible(&mut self, node: NodeKey, visible: bool);

    /// Whether a node itself is flagged visible
    fn is_visible(&self, node: NodeKey) -> bool;

    /// Components of one kind attached to a node
    fn list_attached(&self, node: NodeKey, kind: ComponentKind) -> Vec<ComponentRef> {
        if self.kinds(node).has(kind) {
            vec![ComponentRef { node, kind }]
        } else {
            Vec::new()
        }
    }

    /// Look up a `/`-separated path of child names below `root`.
    ///
    /// Each segment must match a direct child name exactly; the first
    /// matching child is taken. Empty segments are skipped, so an empty
    /// path resolves to `root` itself.
    fn find_by_relative_path(&self, root: NodeKey, path: &str) -> Option<NodeKey> {
        if !self.contains(root) {
            return None;
        }
        let mut current = root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self
                .children(current)
                .into_iter()
                .find(|&child| self.name(child) == Some(segment))?;
        }
        Some(current)
    }

    /// Every node in the scene (depth-first, pre-order) matching `predicate`
    fn enumerate_all(&self, predicate: &dyn Fn(NodeKey) -> bool) -> Vec<NodeKey> {
        let mut out = Vec::new();
        for root in self.roots() {
            for node in super::hierarchy::descendants(self, root) {
                if predicate(node) {
                    out.push(node);
                }
            }
        }
        out
    }
}
