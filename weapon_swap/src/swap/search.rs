/// Scene-wide, time-sliced discovery of the handle and mass nodes.
///
/// Polled once per frame. Each scan pass looks for whichever roles are
/// still missing; a role's first candidate is kept for good. Once both
/// roles are known, their lowest common ancestor becomes the weapon root.
/// After `max_search_seconds` the search settles for a partial binding, or
/// reports failure, and goes idle for the rest of its life.

use crate::scene::{
    hierarchy_path, lowest_common_ancestor, relative_path,
    ComponentKind, NodeKey, SceneGraph,
};
use super::binding::AttachmentBinding;
use super::config::{RoleKeys, SearchConfig};
use super::resolver::NameTokens;

const SOURCE: &str = "weapon_swap::Search";

// ===== TYPES =====

/// Functional slot an anchor fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Handle,
    Mass,
}

/// Transient search state, dropped once the search finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAccumulator {
    pub handle: Option<NodeKey>,
    pub mass: Option<NodeKey>,
    /// Seconds since the search started
    pub total_elapsed: f32,
    /// Seconds since the last scan pass
    pub since_last_scan: f32,
    /// Scan passes run so far
    pub passes: u32,
}

impl SearchAccumulator {
    pub fn candidate(&self, role: Role) -> Option<NodeKey> {
        match role {
            Role::Handle => self.handle,
            Role::Mass => self.mass,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<NodeKey> {
        match role {
            Role::Handle => &mut self.handle,
            Role::Mass => &mut self.mass,
        }
    }
}

/// Outcome of one search tick
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// Finished earlier; nothing to do
    Idle,
    /// Still looking
    Scanning,
    /// Both roles found
    Bound(AttachmentBinding),
    /// Timed out with exactly one role found
    PartialBound(AttachmentBinding),
    /// Timed out with nothing found, or with one parentless candidate
    Failed,
}

// ===== SEARCH =====

/// Time-sliced scene-wide candidate search
pub struct CandidateSearch {
    config: SearchConfig,
    accumulator: Option<SearchAccumulator>,
}

impl CandidateSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            accumulator: Some(SearchAccumulator::default()),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current search state, `None` once finished
    pub fn accumulator(&self) -> Option<&SearchAccumulator> {
        self.accumulator.as_ref()
    }

    /// Whether the search has bound, settled or failed
    pub fn is_finished(&self) -> bool {
        self.accumulator.is_none()
    }

    /// Advance the search by one frame of `dt` seconds.
    pub fn tick<G: SceneGraph + ?Sized>(&mut self, graph: &G, dt: f32) -> SearchStatus {
        let Some(acc) = self.accumulator.as_mut() else {
            return SearchStatus::Idle;
        };

        acc.total_elapsed += dt;
        acc.since_last_scan += dt;

        if acc.since_last_scan >= self.config.scan_interval {
            acc.since_last_scan = 0.0;
            acc.passes += 1;
            for role in [Role::Handle, Role::Mass] {
                if acc.candidate(role).is_none() {
                    *acc.slot_mut(role) = find_candidate(graph, self.config.keys(role));
                }
            }
            crate::swap_trace!(SOURCE, "Scan pass {}: handle={} mass={}",
                acc.passes, acc.handle.is_some(), acc.mass.is_some());
        }

        if let (Some(handle), Some(mass)) = (acc.handle, acc.mass) {
            let root = lowest_common_ancestor(graph, handle, mass)
                .or_else(|| graph.parent(handle))
                .unwrap_or(handle);
            let binding = AttachmentBinding {
                root,
                handle: Some(handle),
                mass: Some(mass),
                handle_path: relative_path(graph, root, handle),
                mass_path: relative_path(graph, root, mass),
            };
            crate::swap_info!(SOURCE, "Bound:\n  root:   {}\n  handle: {}\n  mass:   {}",
                hierarchy_path(graph, root), binding.handle_path, binding.mass_path);
            self.accumulator = None;
            return SearchStatus::Bound(binding);
        }

        if acc.total_elapsed < self.config.max_search_seconds {
            return SearchStatus::Scanning;
        }

        let (handle, mass) = (acc.handle, acc.mass);
        self.accumulator = None;

        // A lone top-level candidate leaves nothing to root the binding at
        let Some(root) = handle.or(mass).and_then(|found| graph.parent(found)) else {
            crate::swap_error!(SOURCE,
                "Failed to locate handle/mass within {:.1}s. Swing once to spawn the mass, or adjust search keys.",
                self.config.max_search_seconds);
            return SearchStatus::Failed;
        };

        let binding = AttachmentBinding {
            root,
            handle,
            mass,
            handle_path: handle.map(|h| relative_path(graph, root, h)).unwrap_or_default(),
            mass_path: mass.map(|m| relative_path(graph, root, m)).unwrap_or_default(),
        };
        crate::swap_warn!(SOURCE, "Partial bind (timeout). root={}, handle={}, mass={}",
            hierarchy_path(graph, root), binding.handle_path, binding.mass_path);
        SearchStatus::PartialBound(binding)
    }
}

/// First node in scene order matching a role's keys.
///
/// Renderer-bearing nodes are checked first, by node name, mesh name
/// (id keys only) and material names. Then every node, by name alone.
pub fn find_candidate<G: SceneGraph + ?Sized>(graph: &G, keys: &RoleKeys) -> Option<NodeKey> {
    let ids = NameTokens::new(&keys.id_keys);
    let names = NameTokens::new(&keys.name_keys);
    let name_matches = |text: &str| ids.matches(text) || names.matches(text);

    let renderers = graph.enumerate_all(&|node| graph.kinds(node).has(ComponentKind::Renderer));
    for node in renderers {
        if graph.name(node).is_some_and(name_matches) {
            return Some(node);
        }
        if graph.mesh_name(node).is_some_and(|mesh| ids.matches(mesh)) {
            return Some(node);
        }
        if graph.material_names(node).into_iter().any(name_matches) {
            return Some(node);
        }
    }

    graph
        .enumerate_all(&|node| graph.name(node).is_some_and(name_matches))
        .into_iter()
        .next()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
