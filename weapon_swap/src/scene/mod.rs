//! Scene graph module
//!
//! Provides the `SceneGraph` interface the substitution core runs against,
//! hierarchy queries over it, and an in-memory implementation.

mod scene;
mod scene_graph;
mod template;
pub mod hierarchy;

#[cfg(test)]
pub(crate) mod test_rig;

pub use scene::{Scene, SceneNode, RendererComponent, ParticleEffect};
pub use scene_graph::{SceneGraph, NodeKey, ComponentKind, ComponentKinds, ComponentRef};
pub use template::{ModelTemplate, TemplateRenderer};
pub use hierarchy::{
    descendants, hierarchy_path, relative_path, lowest_common_ancestor,
    is_descendant_of, dump_hierarchy, NULL_PATH,
};
