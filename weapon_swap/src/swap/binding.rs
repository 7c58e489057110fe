/// Resolved attachment binding produced by discovery.

use crate::scene::NodeKey;
use super::config::SwapConfig;

/// Root plus handle/mass anchors and their root-relative paths.
///
/// The paths let the controller re-derive the anchors through
/// `PathResolver` if the host rebuilds the weapon below `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentBinding {
    pub root: NodeKey,
    pub handle: Option<NodeKey>,
    pub mass: Option<NodeKey>,
    /// Empty when the handle was not found
    pub handle_path: String,
    /// Empty when the mass was not found
    pub mass_path: String,
}

impl AttachmentBinding {
    /// Write root and explicit paths into a controller configuration
    pub fn apply_to(&self, config: &mut SwapConfig) {
        config.root = Some(self.root);
        config.handle_attach_path = self.handle_path.clone();
        config.mass_attach_path = self.mass_path.clone();
    }
}
