/// Attach-point resolution below a known root.
///
/// Strategies, first hit wins:
/// 1. explicit root-relative path
/// 2. preferred exact names (case-insensitive), list order beats tree position
/// 3. fallback predicate over node names
///
/// A miss is `None`, never an error; callers pick the default.

use crate::scene::{descendants, NodeKey, SceneGraph};

// ===== NAME MATCHING =====

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive substring predicate over a token list.
///
/// Empty tokens never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTokens {
    tokens: Vec<String>,
}

impl NameTokens {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Whether `text` contains any token
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.tokens.iter().any(|t| lowered.contains(t.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ===== RESOLVER =====

/// Stateless attach-point resolver
pub struct PathResolver;

impl PathResolver {
    /// Resolve the best node under `root`, or `None` if no strategy matched.
    ///
    /// Enumeration is depth-first pre-order and includes `root` itself.
    pub fn resolve<G, S, F>(
        graph: &G,
        root: NodeKey,
        explicit_path: &str,
        preferred_names: &[S],
        fallback: F,
    ) -> Option<NodeKey>
    where
        G: SceneGraph + ?Sized,
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        if !explicit_path.is_empty() {
            if let Some(found) = graph.find_by_relative_path(root, explicit_path) {
                return Some(found);
            }
        }

        let all = descendants(graph, root);

        for preferred in preferred_names {
            let wanted = preferred.as_ref().to_lowercase();
            let hit = all.iter().copied().find(|&node| {
                graph
                    .name(node)
                    .is_some_and(|name| name.to_lowercase() == wanted)
            });
            if hit.is_some() {
                return hit;
            }
        }

        all.into_iter()
            .find(|&node| graph.name(node).is_some_and(|name| fallback(name)))
    }

    /// `resolve`, defaulting to `default` on a miss
    pub fn resolve_or<G, S, F>(
        graph: &G,
        root: NodeKey,
        explicit_path: &str,
        preferred_names: &[S],
        fallback: F,
        default: NodeKey,
    ) -> NodeKey
    where
        G: SceneGraph + ?Sized,
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        Self::resolve(graph, root, explicit_path, preferred_names, fallback).unwrap_or(default)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
