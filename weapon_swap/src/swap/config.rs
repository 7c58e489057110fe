/// Configuration surface for substitution, discovery and auto-binding.
///
/// All fields are plain data, settable before activation. Token lists are
/// matched case-insensitively and tried in order.

use crate::scene::{ModelTemplate, NodeKey};
use super::search::Role;

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

// ===== CONTROLLER CONFIG =====

/// Visual substitution controller configuration
#[derive(Debug, Clone)]
pub struct SwapConfig {
    /// Substitute model spawned at both anchors
    pub template: Option<ModelTemplate>,
    /// Live weapon root the anchors are resolved under
    pub root: Option<NodeKey>,
    /// Explicit root-relative handle path (e.g. "Armature/Hand_R/Weapon")
    pub handle_attach_path: String,
    /// Explicit root-relative mass path (e.g. "Flail/Chain/Ball")
    pub mass_attach_path: String,
    /// Exact handle node names, highest priority first
    pub handle_names: Vec<String>,
    /// Exact mass node names, highest priority first
    pub mass_names: Vec<String>,
    /// Substrings tried on every node name when no handle name matched
    pub handle_fallback_keys: Vec<String>,
    /// Substrings tried on every node name when no mass name matched
    pub mass_fallback_keys: Vec<String>,
    /// Renderers whose node name contains any of these are hidden
    pub hide_keys: Vec<String>,
    /// Mass-anchor speed (units/s) at or above which the weapon is swinging
    pub swing_speed_threshold: f32,
    /// Treat any enabled trail/line effect under the root as swinging
    pub use_effects_as_swing_signal: bool,
    /// Log resolved anchor paths once when setup completes
    pub log_once_on_bind: bool,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            template: None,
            root: None,
            handle_attach_path: String::new(),
            mass_attach_path: String::new(),
            handle_names: strings(&["Weapon", "WeaponRoot", "r_hand", "RightHand", "Hand_R"]),
            mass_names: strings(&["Ball", "bangle", "Head", "Spike", "FlailBall"]),
            handle_fallback_keys: strings(&["weapon", "hand", "r_hand"]),
            mass_fallback_keys: strings(&["ball", "bangle", "spike"]),
            hide_keys: strings(&["flail", "bangle", "ball", "chain", "trail", "8454", "8459"]),
            swing_speed_threshold: 3.0,
            use_effects_as_swing_signal: true,
            log_once_on_bind: true,
        }
    }
}

// ===== SEARCH CONFIG =====

/// Identifying substrings for one search role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleKeys {
    /// Asset-id tokens (also matched against mesh names)
    pub id_keys: Vec<String>,
    /// Semantic name tokens
    pub name_keys: Vec<String>,
}

impl RoleKeys {
    pub fn new(id_keys: &[&str], name_keys: &[&str]) -> Self {
        Self {
            id_keys: strings(id_keys),
            name_keys: strings(name_keys),
        }
    }
}

/// Scene-wide candidate search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub handle: RoleKeys,
    pub mass: RoleKeys,
    /// Minimum seconds between two scan passes
    pub scan_interval: f32,
    /// Seconds after which the search settles for what it has
    pub max_search_seconds: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            handle: RoleKeys::new(&["8454"], &["weapon", "handle"]),
            mass: RoleKeys::new(&["8459"], &["ball", "bangle", "spike", "head"]),
            scan_interval: 0.5,
            max_search_seconds: 20.0,
        }
    }
}

impl SearchConfig {
    pub fn keys(&self, role: Role) -> &RoleKeys {
        match role {
            Role::Handle => &self.handle,
            Role::Mass => &self.mass,
        }
    }
}

// ===== AUTO BINDER CONFIG =====

/// Direct binder configuration
#[derive(Debug, Clone)]
pub struct AutoBindConfig {
    /// Local player hierarchy to search under
    pub player_root: Option<NodeKey>,
    /// Substring identifying the weapon instance
    pub marker_name: String,
    /// Seconds to wait before the first search
    pub search_delay: f32,
}

impl Default for AutoBindConfig {
    fn default() -> Self {
        Self {
            player_root: None,
            marker_name: "Flail".to_string(),
            search_delay: 0.25,
        }
    }
}
