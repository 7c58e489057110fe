/// Frame driver: discovery first, then per-frame classification.
///
/// While the controller is unbound, the configured discovery strategy runs
/// once per tick; its binding is written into the controller configuration
/// and the controller is activated. From then on only the classifier runs.

use crate::error::{Error, Result};
use crate::scene::SceneGraph;
use crate::time::FrameClock;
use super::auto_binder::AutoBinder;
use super::classifier::SwingState;
use super::controller::{ControllerState, VisualSwapController};
use super::search::{CandidateSearch, SearchStatus};

/// How the session finds the weapon
pub enum Discovery {
    /// Caller binds and activates the controller itself
    None,
    /// Scene-wide candidate search with LCA root inference
    SceneWide(CandidateSearch),
    /// Poll a player hierarchy for the weapon root
    Direct(AutoBinder),
}

pub struct SwapSession {
    controller: VisualSwapController,
    discovery: Discovery,
}

impl SwapSession {
    pub fn new(controller: VisualSwapController, discovery: Discovery) -> Self {
        Self { controller, discovery }
    }

    pub fn controller(&self) -> &VisualSwapController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut VisualSwapController {
        &mut self.controller
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    /// Run one frame.
    ///
    /// Returns the classified swing state on frames where the controller is
    /// active.
    ///
    /// # Errors
    ///
    /// Terminal failures, on the frame they happen only: a refused
    /// activation or `SearchFailed` when discovery gives up. Later ticks
    /// return `Ok(None)`.
    pub fn tick<G: SceneGraph + ?Sized>(
        &mut self,
        graph: &mut G,
        clock: &dyn FrameClock,
    ) -> Result<Option<SwingState>> {
        let dt = clock.delta_seconds();

        match self.controller.state() {
            ControllerState::Active => return Ok(self.controller.update(graph, dt)),
            ControllerState::Refused => return Ok(None),
            ControllerState::Unbound => {}
        }

        match &mut self.discovery {
            Discovery::None => Ok(None),
            Discovery::Direct(binder) => {
                binder.tick(graph, dt, &mut self.controller)?;
                Ok(None)
            }
            Discovery::SceneWide(search) => {
                if self.controller.config().template.is_none() {
                    return Ok(None);
                }
                match search.tick(&*graph, dt) {
                    SearchStatus::Bound(binding) | SearchStatus::PartialBound(binding) => {
                        if let Some(config) = self.controller.config_mut() {
                            binding.apply_to(config);
                        }
                        self.controller.activate(graph)?;
                        Ok(None)
                    }
                    SearchStatus::Failed => Err(Error::SearchFailed(format!(
                        "no handle or mass candidate within {:.1}s",
                        search.config().max_search_seconds
                    ))),
                    SearchStatus::Idle | SearchStatus::Scanning => Ok(None),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
