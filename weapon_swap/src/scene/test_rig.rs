/// Test fixtures (no host engine required)
///
/// A flail weapon rig under a player hierarchy, a substitute template, a
/// capturing logger, and a scene wrapper counting visibility writes.
///
/// ```text
/// World
///   Player
///     Armature
///       Hand_R
///         Flail_Weapon              <- weapon root
///           Handle_8454             renderer (mesh 8454_handle, flail_mat)
///           Chain                   renderer
///             Ball                  renderer (mesh 8459_ball, ball_mat), local (0,-1,0)
///               Sparks              particles (playing)
///           SwingTrail              trail effect (off)
///           SwingLine               line effect (off)
///   Terrain                         renderer (mesh ground, grass)
/// ```

use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::error::Result;
use crate::log::{LogEntry, LogSeverity, Logger};
use super::scene::{ParticleEffect, RendererComponent, Scene};
use super::scene_graph::{ComponentKinds, ComponentRef, NodeKey, SceneGraph};
use super::template::ModelTemplate;

// ============================================================================
// Flail rig
// ============================================================================

pub(crate) struct FlailRig {
    pub scene: Scene,
    pub world: NodeKey,
    pub player: NodeKey,
    pub hand: NodeKey,
    pub weapon: NodeKey,
    pub handle: NodeKey,
    pub chain: NodeKey,
    pub ball: NodeKey,
    pub sparks: NodeKey,
    pub trail: NodeKey,
    pub line: NodeKey,
    pub terrain: NodeKey,
}

pub(crate) fn build_flail_rig() -> FlailRig {
    let mut scene = Scene::new();
    let world = scene.add_root("World");
    let player = scene.add_child(world, "Player").unwrap();
    let hand = scene.add_chain(player, &["Armature", "Hand_R"]).unwrap();
    let weapon = scene.add_child(hand, "Flail_Weapon").unwrap();

    let handle = scene.add_child(weapon, "Handle_8454").unwrap();
    scene.set_renderer(handle, RendererComponent::new("8454_handle", &["flail_mat"]));

    let chain = scene.add_child(weapon, "Chain").unwrap();
    scene.set_renderer(chain, RendererComponent::bare());

    let ball = scene.add_child(chain, "Ball").unwrap();
    scene.set_renderer(ball, RendererComponent::new("8459_ball", &["ball_mat"]));
    scene.set_local_position(ball, Vec3::new(0.0, -1.0, 0.0));

    let sparks = scene.add_child(ball, "Sparks").unwrap();
    scene.set_particles(sparks, ParticleEffect { playing: true, live_particles: 12 });

    let trail = scene.add_child(weapon, "SwingTrail").unwrap();
    scene.set_trail(trail, false);
    let line = scene.add_child(weapon, "SwingLine").unwrap();
    scene.set_line(line, false);

    let terrain = scene.add_child(world, "Terrain").unwrap();
    scene.set_renderer(terrain, RendererComponent::new("ground", &["grass"]));

    FlailRig {
        scene, world, player, hand, weapon, handle, chain, ball, sparks, trail, line, terrain,
    }
}

pub(crate) fn wrench_template() -> ModelTemplate {
    ModelTemplate::new("Wrench")
        .with_renderer("wrench_9210", &["wrench_mat"])
        .with_child(ModelTemplate::new("WrenchJaw"))
}

// ============================================================================
// Capturing logger
// ============================================================================

pub(crate) struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Entries from `source` at `severity` whose message contains `needle`
pub(crate) fn count_entries(
    entries: &Arc<Mutex<Vec<LogEntry>>>,
    source: &str,
    severity: LogSeverity,
    needle: &str,
) -> usize {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source && e.severity == severity && e.message.contains(needle))
        .count()
}

// ============================================================================
// Visibility-write counting scene
// ============================================================================

/// Delegates to a `Scene`, counting every `set_visible` call
pub(crate) struct CountingScene {
    pub inner: Scene,
    pub visibility_writes: usize,
}

impl CountingScene {
    pub fn new(inner: Scene) -> Self {
        Self { inner, visibility_writes: 0 }
    }
}

impl SceneGraph for CountingScene {
    fn contains(&self, node: NodeKey) -> bool {
        self.inner.contains(node)
    }

    fn roots(&self) -> Vec<NodeKey> {
        self.inner.roots()
    }

    fn children(&self, node: NodeKey) -> Vec<NodeKey> {
        self.inner.children(node)
    }

    fn name(&self, node: NodeKey) -> Option<&str> {
        self.inner.name(node)
    }

    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.inner.parent(node)
    }

    fn position(&self, node: NodeKey) -> Option<Vec3> {
        self.inner.position(node)
    }

    fn kinds(&self, node: NodeKey) -> ComponentKinds {
        self.inner.kinds(node)
    }

    fn mesh_name(&self, node: NodeKey) -> Option<&str> {
        self.inner.mesh_name(node)
    }

    fn material_names(&self, node: NodeKey) -> Vec<&str> {
        self.inner.material_names(node)
    }

    fn is_enabled(&self, component: ComponentRef) -> bool {
        self.inner.is_enabled(component)
    }

    fn set_enabled(&mut self, component: ComponentRef, enabled: bool) {
        self.inner.set_enabled(component, enabled)
    }

    fn stop_and_clear(&mut self, component: ComponentRef) {
        self.inner.stop_and_clear(component)
    }

    fn instantiate(&mut self, template: &ModelTemplate, parent: NodeKey) -> Result<NodeKey> {
        self.inner.instantiate(template, parent)
    }

    fn set_visible(&mut self, node: NodeKey, visible: bool) {
        self.visibility_writes += 1;
        self.inner.set_visible(node, visible)
    }

    fn is_visible(&self, node: NodeKey) -> bool {
        self.inner.is_visible(node)
    }
}
