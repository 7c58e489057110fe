//! Unit tests for the in-memory Scene
//!
//! Node management, the SceneGraph implementation and its default methods.

use super::*;
use crate::scene::test_rig::{build_flail_rig, wrench_template};

// ============================================================================
// NODE MANAGEMENT
// ============================================================================

#[test]
fn test_new_scene_is_empty() {
    let scene = Scene::new();
    assert_eq!(scene.node_count(), 0);
    assert!(scene.roots().is_empty());
}

#[test]
fn test_add_root_and_children() {
    let mut scene = Scene::default();
    let root = scene.add_root("Root");
    let a = scene.add_child(root, "A").unwrap();
    let b = scene.add_child(root, "B").unwrap();

    assert_eq!(scene.roots(), vec![root]);
    assert_eq!(scene.children(root), vec![a, b]);
    assert_eq!(scene.parent(a), Some(root));
    assert_eq!(scene.parent(root), None);
    assert_eq!(scene.name(b), Some("B"));
}

#[test]
fn test_add_child_to_missing_parent_fails() {
    let mut scene = Scene::new();
    let root = scene.add_root("Root");
    scene.remove_node(root);

    let result = scene.add_child(root, "Orphan");
    assert!(matches!(result, Err(Error::InvalidNode(_))));
}

#[test]
fn test_add_chain_returns_deepest() {
    let mut scene = Scene::new();
    let root = scene.add_root("Root");
    let leaf = scene.add_chain(root, &["A", "B", "C"]).unwrap();

    assert_eq!(scene.name(leaf), Some("C"));
    assert_eq!(scene.node_count(), 4);
    assert_eq!(scene.find_by_relative_path(root, "A/B/C"), Some(leaf));
}

#[test]
fn test_remove_node_removes_subtree() {
    let mut rig = build_flail_rig();
    let before = rig.scene.node_count();

    assert!(rig.scene.remove_node(rig.chain));
    assert_eq!(rig.scene.node_count(), before - 3);
    assert!(!rig.scene.contains(rig.ball));
    assert!(!rig.scene.contains(rig.sparks));
    assert!(!rig.scene.children(rig.weapon).contains(&rig.chain));
    assert!(!rig.scene.remove_node(rig.chain));
}

#[test]
fn test_remove_root_updates_roots() {
    let mut rig = build_flail_rig();
    assert!(rig.scene.remove_node(rig.world));
    assert!(rig.scene.roots().is_empty());
    assert_eq!(rig.scene.node_count(), 0);
}

#[test]
fn test_setters_on_dead_node_return_false() {
    let mut rig = build_flail_rig();
    rig.scene.remove_node(rig.terrain);

    assert!(!rig.scene.set_local_position(rig.terrain, Vec3::ONE));
    assert!(!rig.scene.set_renderer(rig.terrain, RendererComponent::bare()));
    assert!(!rig.scene.set_trail(rig.terrain, true));
    assert!(!rig.scene.set_line(rig.terrain, true));
    assert!(!rig.scene.set_particles(rig.terrain, ParticleEffect { playing: true, live_particles: 1 }));
}

#[test]
fn test_find_by_name_scene_order() {
    let rig = build_flail_rig();
    assert_eq!(rig.scene.find_by_name("Ball"), Some(rig.ball));
    assert_eq!(rig.scene.find_by_name("ball"), None);
}

// ============================================================================
// SCENE GRAPH IMPLEMENTATION
// ============================================================================

#[test]
fn test_position_accumulates_parent_chain() {
    let mut rig = build_flail_rig();
    rig.scene.set_local_position(rig.weapon, Vec3::new(1.0, 2.0, 0.0));

    assert_eq!(rig.scene.position(rig.ball), Some(Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(rig.scene.position(rig.sparks), Some(Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(rig.scene.position(rig.terrain), Some(Vec3::ZERO));
}

#[test]
fn test_kinds_reflect_components() {
    let rig = build_flail_rig();

    let handle = rig.scene.kinds(rig.handle);
    assert!(handle.has(ComponentKind::Renderer));
    assert!(handle.has(ComponentKind::Mesh));
    assert!(handle.has(ComponentKind::MaterialList));

    let chain = rig.scene.kinds(rig.chain);
    assert_eq!(chain, ComponentKinds::RENDERER);

    assert_eq!(rig.scene.kinds(rig.trail), ComponentKinds::TRAIL_EFFECT);
    assert_eq!(rig.scene.kinds(rig.line), ComponentKinds::LINE_EFFECT);
    assert_eq!(rig.scene.kinds(rig.sparks), ComponentKinds::PARTICLE_EFFECT);
    assert!(rig.scene.kinds(rig.player).is_empty());
}

#[test]
fn test_mesh_and_material_names() {
    let rig = build_flail_rig();
    assert_eq!(rig.scene.mesh_name(rig.ball), Some("8459_ball"));
    assert_eq!(rig.scene.material_names(rig.ball), vec!["ball_mat"]);
    assert_eq!(rig.scene.mesh_name(rig.chain), None);
    assert!(rig.scene.material_names(rig.player).is_empty());
}

#[test]
fn test_set_enabled_per_kind() {
    let mut rig = build_flail_rig();
    let renderer = ComponentRef { node: rig.ball, kind: ComponentKind::Renderer };
    let trail = ComponentRef { node: rig.trail, kind: ComponentKind::TrailEffect };

    assert!(rig.scene.is_enabled(renderer));
    rig.scene.set_enabled(renderer, false);
    assert!(!rig.scene.is_enabled(renderer));
    assert!(!rig.scene.node(rig.ball).unwrap().renderer().unwrap().enabled);

    assert!(!rig.scene.is_enabled(trail));
    rig.scene.set_enabled(trail, true);
    assert!(rig.scene.is_enabled(trail));
    assert_eq!(rig.scene.node(rig.trail).unwrap().trail_enabled(), Some(true));
}

#[test]
fn test_set_enabled_on_missing_component_is_ignored() {
    let mut rig = build_flail_rig();
    let line_on_ball = ComponentRef { node: rig.ball, kind: ComponentKind::LineEffect };

    rig.scene.set_enabled(line_on_ball, true);
    assert!(!rig.scene.is_enabled(line_on_ball));
    assert_eq!(rig.scene.node(rig.ball).unwrap().line_enabled(), None);
}

#[test]
fn test_stop_and_clear_particles() {
    let mut rig = build_flail_rig();
    let sparks = ComponentRef { node: rig.sparks, kind: ComponentKind::ParticleEffect };
    assert!(rig.scene.is_enabled(sparks));

    rig.scene.stop_and_clear(sparks);

    let particles = rig.scene.node(rig.sparks).unwrap().particles().unwrap();
    assert!(!particles.playing);
    assert_eq!(particles.live_particles, 0);
}

#[test]
fn test_instantiate_spawns_template_tree() {
    let mut rig = build_flail_rig();
    let template = wrench_template();
    let before = rig.scene.node_count();

    let spawned = rig.scene.instantiate(&template, rig.ball).unwrap();

    assert_eq!(rig.scene.node_count(), before + template.node_count());
    assert_eq!(rig.scene.parent(spawned), Some(rig.ball));
    assert_eq!(rig.scene.name(spawned), Some("Wrench"));
    assert_eq!(rig.scene.mesh_name(spawned), Some("wrench_9210"));
    assert_eq!(rig.scene.position(spawned), rig.scene.position(rig.ball));
    assert!(rig.scene.find_by_relative_path(spawned, "WrenchJaw").is_some());
    assert!(rig.scene.is_visible(spawned));
}

#[test]
fn test_instantiate_under_dead_parent_fails() {
    let mut rig = build_flail_rig();
    rig.scene.remove_node(rig.chain);

    let result = rig.scene.instantiate(&wrench_template(), rig.ball);
    assert!(matches!(result, Err(Error::InvalidNode(_))));
}

#[test]
fn test_set_visible() {
    let mut rig = build_flail_rig();
    rig.scene.set_visible(rig.weapon, false);
    assert!(!rig.scene.is_visible(rig.weapon));
    assert!(!rig.scene.node(rig.weapon).unwrap().visible());
}

// ============================================================================
// DEFAULT METHODS
// ============================================================================

#[test]
fn test_list_attached() {
    let rig = build_flail_rig();
    assert_eq!(
        rig.scene.list_attached(rig.sparks, ComponentKind::ParticleEffect),
        vec![ComponentRef { node: rig.sparks, kind: ComponentKind::ParticleEffect }]
    );
    assert!(rig.scene.list_attached(rig.sparks, ComponentKind::Renderer).is_empty());
}

#[test]
fn test_find_by_relative_path() {
    let rig = build_flail_rig();
    assert_eq!(rig.scene.find_by_relative_path(rig.weapon, "Chain/Ball"), Some(rig.ball));
    assert_eq!(rig.scene.find_by_relative_path(rig.weapon, "/Chain//Ball/"), Some(rig.ball));
    assert_eq!(rig.scene.find_by_relative_path(rig.weapon, ""), Some(rig.weapon));
    assert_eq!(rig.scene.find_by_relative_path(rig.weapon, "Chain/ball"), None);
    assert_eq!(rig.scene.find_by_relative_path(rig.weapon, "Missing"), None);
}

#[test]
fn test_enumerate_all_walks_every_root() {
    let rig = build_flail_rig();
    let renderers = rig
        .scene
        .enumerate_all(&|node| rig.scene.kinds(node).has(ComponentKind::Renderer));

    assert_eq!(renderers, vec![rig.handle, rig.chain, rig.ball, rig.terrain]);
}
