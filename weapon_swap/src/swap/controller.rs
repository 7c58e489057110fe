/// Visual substitution controller.
///
/// Lifecycle: `Unbound` --activate--> `Active`, exactly once. Activation
/// hides the original weapon visuals, resolves the handle and mass anchors,
/// spawns a grip-pose and a swing-pose substitute, and from then on
/// `update` flips between the two every time the swing signal changes.
///
/// A refused activation (no template or no root) is reported once and is
/// terminal for this controller; there is no retry.

use crate::error::{Error, Result};
use crate::scene::{descendants, hierarchy_path, ComponentKind, NodeKey, SceneGraph};
use super::classifier::{SwingClassifier, SwingState};
use super::config::SwapConfig;
use super::resolver::{NameTokens, PathResolver};

const SOURCE: &str = "weapon_swap::Controller";

// ===== TYPES =====

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for a binding and activation
    Unbound,
    /// Substitutes spawned, classifier running
    Active,
    /// Activation was refused; stays inactive for good
    Refused,
}

/// The two spawned substitute instances.
///
/// After setup exactly one of them is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutePair {
    /// Parented to the handle anchor, shown while idle
    pub grip: NodeKey,
    /// Parented to the mass anchor, shown while swinging
    pub swing: NodeKey,
}

// ===== CONTROLLER =====

pub struct VisualSwapController {
    config: SwapConfig,
    state: ControllerState,
    handle_anchor: Option<NodeKey>,
    mass_anchor: Option<NodeKey>,
    substitutes: Option<SubstitutePair>,
    classifier: SwingClassifier,
    swinging: bool,
}

impl VisualSwapController {
    pub fn new(config: SwapConfig) -> Self {
        let classifier = SwingClassifier::new(config.swing_speed_threshold);
        Self {
            config,
            state: ControllerState::Unbound,
            handle_anchor: None,
            mass_anchor: None,
            substitutes: None,
            classifier,
            swinging: false,
        }
    }

    // ===== GETTERS =====

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ControllerState::Active
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Mutable configuration, only while still unbound
    pub fn config_mut(&mut self) -> Option<&mut SwapConfig> {
        match self.state {
            ControllerState::Unbound => Some(&mut self.config),
            _ => None,
        }
    }

    pub fn handle_anchor(&self) -> Option<NodeKey> {
        self.handle_anchor
    }

    pub fn mass_anchor(&self) -> Option<NodeKey> {
        self.mass_anchor
    }

    pub fn substitutes(&self) -> Option<SubstitutePair> {
        self.substitutes
    }

    /// Swing state decided by the last `update`
    pub fn is_swinging(&self) -> bool {
        self.swinging
    }

    // ===== ACTIVATION =====

    /// One-time setup: hide originals, resolve anchors, spawn substitutes.
    ///
    /// # Errors
    ///
    /// - `MissingPrerequisite` if the template or a live root is missing
    ///   (logged once, controller becomes `Refused`)
    /// - `InvalidState` if the controller is already active or was refused
    /// - whatever the host returns from `instantiate` (controller becomes `Refused`)
    pub fn activate<G: SceneGraph + ?Sized>(&mut self, graph: &mut G) -> Result<()> {
        match self.state {
            ControllerState::Unbound => {}
            ControllerState::Active => {
                crate::swap_bail!(SOURCE,
                    "Already active; despawn substitutes before binding another weapon");
            }
            ControllerState::Refused => {
                return Err(Error::InvalidState("activation was refused earlier".to_string()));
            }
        }

        let root = self.config.root.filter(|&r| graph.contains(r));
        let (Some(root), Some(template)) = (root, self.config.template.clone()) else {
            crate::swap_warn!(SOURCE, "Assign a weapon root and a substitute template.");
            self.state = ControllerState::Refused;
            return Err(Error::MissingPrerequisite(
                "weapon root and substitute template are required".to_string(),
            ));
        };

        // 1) Hide original visuals, keep their logic alive
        self.hide_original(graph, root);

        // 2) Anchors, defaulting to the root
        let handle_keys = NameTokens::new(&self.config.handle_fallback_keys);
        let handle = PathResolver::resolve_or(
            &*graph,
            root,
            &self.config.handle_attach_path,
            &self.config.handle_names,
            |name| handle_keys.matches(name),
            root,
        );
        let mass_keys = NameTokens::new(&self.config.mass_fallback_keys);
        let mass = PathResolver::resolve_or(
            &*graph,
            root,
            &self.config.mass_attach_path,
            &self.config.mass_names,
            |name| mass_keys.matches(name),
            root,
        );

        // 3) Substitutes, idle pose visible
        let spawned = graph
            .instantiate(&template, handle)
            .and_then(|grip| graph.instantiate(&template, mass).map(|swing| (grip, swing)));
        let (grip, swing) = match spawned {
            Ok(pair) => pair,
            Err(e) => {
                crate::swap_error!(SOURCE, "Failed to spawn substitutes: {}", e);
                self.state = ControllerState::Refused;
                return Err(e);
            }
        };
        graph.set_visible(grip, true);
        graph.set_visible(swing, false);

        // 4) Motion tracking starts from here
        self.classifier = SwingClassifier::new(self.config.swing_speed_threshold);
        self.classifier.reset(graph.position(mass));
        self.swinging = false;

        self.handle_anchor = Some(handle);
        self.mass_anchor = Some(mass);
        self.substitutes = Some(SubstitutePair { grip, swing });
        self.state = ControllerState::Active;

        if self.config.log_once_on_bind {
            crate::swap_info!(SOURCE, "handle anchor: {}", hierarchy_path(&*graph, handle));
            crate::swap_info!(SOURCE, "mass anchor:   {}", hierarchy_path(&*graph, mass));
        }
        Ok(())
    }

    fn hide_original<G: SceneGraph + ?Sized>(&self, graph: &mut G, root: NodeKey) {
        let hide_keys = NameTokens::new(&self.config.hide_keys);
        for node in descendants(&*graph, root) {
            let kinds = graph.kinds(node);
            if kinds.has(ComponentKind::Renderer)
                && graph.name(node).is_some_and(|name| hide_keys.matches(name))
            {
                for renderer in graph.list_attached(node, ComponentKind::Renderer) {
                    graph.set_enabled(renderer, false);
                }
            }
            for kind in [ComponentKind::TrailEffect, ComponentKind::LineEffect] {
                for effect in graph.list_attached(node, kind) {
                    graph.set_enabled(effect, false);
                }
            }
            for particles in graph.list_attached(node, ComponentKind::ParticleEffect) {
                graph.stop_and_clear(particles);
            }
        }
    }

    // ===== PER FRAME =====

    /// Classify this frame and flip substitute visibility on change.
    ///
    /// Returns `None` unless the controller is active.
    pub fn update<G: SceneGraph + ?Sized>(&mut self, graph: &mut G, dt: f32) -> Option<SwingState> {
        if self.state != ControllerState::Active {
            return None;
        }
        let root = self.config.root?;
        let mass = self.mass_anchor?;

        let effects_active =
            self.config.use_effects_as_swing_signal && effects_enabled(&*graph, root);
        let swing_state = self.classifier.classify(effects_active, graph.position(mass), dt);

        if swing_state.swinging != self.swinging {
            if let Some(pair) = self.substitutes {
                graph.set_visible(pair.grip, !swing_state.swinging);
                graph.set_visible(pair.swing, swing_state.swinging);
            }
            self.swinging = swing_state.swinging;
            crate::swap_trace!(SOURCE, "swinging={} (effects={}, speed={:?})",
                swing_state.swinging, swing_state.effect_driven, swing_state.speed);
        }
        Some(swing_state)
    }
}

/// Whether any trail or line effect under `root` is currently enabled
pub fn effects_enabled<G: SceneGraph + ?Sized>(graph: &G, root: NodeKey) -> bool {
    descendants(graph, root).into_iter().any(|node| {
        [ComponentKind::TrailEffect, ComponentKind::LineEffect]
            .into_iter()
            .flat_map(|kind| graph.list_attached(node, kind))
            .any(|effect| graph.is_enabled(effect))
    })
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
