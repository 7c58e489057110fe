/// Direct binder: polls a known player hierarchy for the live weapon root.
///
/// For hosts without an equip event. After `search_delay` seconds it picks
/// the first node under the player root whose name contains the marker (or
/// "weapon"), hands it to the controller as root and activates it. It
/// keeps polling every frame until something matches, then stops for good.

use crate::error::Result;
use crate::scene::{descendants, hierarchy_path, NodeKey, SceneGraph};
use super::config::AutoBindConfig;
use super::controller::{ControllerState, VisualSwapController};
use super::resolver::contains_ignore_case;

const SOURCE: &str = "weapon_swap::AutoBinder";

pub struct AutoBinder {
    config: AutoBindConfig,
    elapsed: f32,
    applied: bool,
}

impl AutoBinder {
    pub fn new(config: AutoBindConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            applied: false,
        }
    }

    pub fn config(&self) -> &AutoBindConfig {
        &self.config
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// First node under the player root that looks like the weapon instance
    pub fn find_weapon_root<G: SceneGraph + ?Sized>(&self, graph: &G) -> Option<NodeKey> {
        let player_root = self.config.player_root?;
        descendants(graph, player_root).into_iter().find(|&node| {
            graph.name(node).is_some_and(|name| {
                contains_ignore_case(name, &self.config.marker_name)
                    || contains_ignore_case(name, "weapon")
            })
        })
    }

    /// Advance one frame. Returns the bound weapon root on the frame binding happens.
    ///
    /// # Errors
    ///
    /// Propagates the controller's activation error on the binding frame,
    /// e.g. `MissingPrerequisite` when no template was assigned. The binder
    /// counts as applied either way.
    pub fn tick<G: SceneGraph + ?Sized>(
        &mut self,
        graph: &mut G,
        dt: f32,
        controller: &mut VisualSwapController,
    ) -> Result<Option<NodeKey>> {
        if self.applied
            || self.config.player_root.is_none()
            || controller.state() != ControllerState::Unbound
        {
            return Ok(None);
        }

        self.elapsed += dt;
        if self.elapsed < self.config.search_delay {
            return Ok(None);
        }

        let Some(weapon_root) = self.find_weapon_root(&*graph) else {
            return Ok(None);
        };
        if let Some(config) = controller.config_mut() {
            config.root = Some(weapon_root);
        }
        self.applied = true;
        crate::swap_info!(SOURCE, "Bound to: {}", hierarchy_path(&*graph, weapon_root));

        controller.activate(graph)?;
        Ok(Some(weapon_root))
    }
}

#[cfg(test)]
#[path = "auto_binder_tests.rs"]
mod tests;
