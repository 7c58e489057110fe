/// Hierarchy queries over any `SceneGraph`: traversal, paths, common ancestors.

use rustc_hash::FxHashSet;
use super::scene_graph::{NodeKey, SceneGraph};

const SOURCE: &str = "weapon_swap::Hierarchy";

/// Path shown for a node that does not exist.
pub const NULL_PATH: &str = "<null>";

/// All nodes under `root`, depth-first pre-order, `root` included.
///
/// Returns an empty list when `root` is not a live node.
pub fn descendants<G: SceneGraph + ?Sized>(graph: &G, root: NodeKey) -> Vec<NodeKey> {
    let mut out = Vec::new();
    if !graph.contains(root) {
        return out;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        // Reverse so the first child is popped first
        stack.extend(graph.children(node).into_iter().rev());
    }
    out
}

/// Absolute `a/b/c` path from the scene root down to `node`.
pub fn hierarchy_path<G: SceneGraph + ?Sized>(graph: &G, node: NodeKey) -> String {
    let Some(name) = graph.name(node) else {
        return NULL_PATH.to_string();
    };
    let mut segments = vec![name];
    let mut current = graph.parent(node);
    while let Some(parent) = current {
        segments.push(graph.name(parent).unwrap_or_default());
        current = graph.parent(parent);
    }
    segments.reverse();
    segments.join("/")
}

/// Path from `root` (exclusive) down to `leaf`, usable with
/// `SceneGraph::find_by_relative_path`.
///
/// Empty when `leaf == root`. When `leaf` is not below `root`, falls back
/// to the absolute hierarchy path of `leaf`.
pub fn relative_path<G: SceneGraph + ?Sized>(graph: &G, root: NodeKey, leaf: NodeKey) -> String {
    if !graph.contains(root) || !graph.contains(leaf) {
        return String::new();
    }
    if !is_descendant_of(graph, leaf, root) {
        return hierarchy_path(graph, leaf);
    }
    let mut segments = Vec::new();
    let mut current = leaf;
    while current != root {
        segments.push(graph.name(current).unwrap_or_default());
        match graph.parent(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    segments.reverse();
    segments.join("/")
}

/// Deepest node that is an ancestor of (or equal to) both `a` and `b`.
pub fn lowest_common_ancestor<G: SceneGraph + ?Sized>(
    graph: &G,
    a: NodeKey,
    b: NodeKey,
) -> Option<NodeKey> {
    if !graph.contains(a) || !graph.contains(b) {
        return None;
    }
    let mut ancestors = FxHashSet::default();
    let mut current = Some(a);
    while let Some(node) = current {
        ancestors.insert(node);
        current = graph.parent(node);
    }
    let mut current = Some(b);
    while let Some(node) = current {
        if ancestors.contains(&node) {
            return Some(node);
        }
        current = graph.parent(node);
    }
    None
}

/// Whether `node` is `ancestor` or lies below it.
pub fn is_descendant_of<G: SceneGraph + ?Sized>(graph: &G, node: NodeKey, ancestor: NodeKey) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n == ancestor {
            return true;
        }
        current = graph.parent(n);
    }
    false
}

/// Log every path under `root` (pre-order) at INFO and return the lines.
///
/// Lines start at `root`'s own name, not at the scene root; paste a line
/// minus its first segment into an explicit attach path.
pub fn dump_hierarchy<G: SceneGraph + ?Sized>(graph: &G, root: NodeKey) -> Vec<String> {
    if !graph.contains(root) {
        crate::swap_warn!(SOURCE, "dump_hierarchy: root is null");
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut stack = vec![(root, String::new())];
    while let Some((node, prefix)) = stack.pop() {
        let name = graph.name(node).unwrap_or_default();
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", prefix, name)
        };
        for child in graph.children(node).into_iter().rev() {
            stack.push((child, path.clone()));
        }
        crate::swap_info!(SOURCE, "{}", path);
        lines.push(path);
    }
    lines
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
