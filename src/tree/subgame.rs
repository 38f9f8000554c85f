use crate::*;
use petgraph::stable_graph::NodeIndex;
use std::collections::HashSet;

/// Subgame structure of a [`Game`].
///
/// A node roots a proper subgame when it is a decision node and no
/// information set straddles the boundary of its subtree: every infoset
/// with one member inside has all of its members inside.
impl Game {
    /// Whether `node` roots a proper subgame. The root of a non-trivial
    /// game always qualifies.
    pub fn is_subgame_root(&self, node: NodeIndex) -> bool {
        if self.is_terminal(node) {
            return false;
        }
        let span = self.descendants(node).into_iter().collect::<HashSet<_>>();
        span.iter()
            .filter_map(|n| self.decision(*n))
            .all(|infoset| self.members(infoset).iter().all(|m| span.contains(m)))
    }
    /// Immediate subgame roots strictly below `node`.
    ///
    /// Descends through children, stopping at the first subgame root on each
    /// branch, so nested subgames are left for the recursive call on their
    /// enclosing root. Returned in preorder.
    pub fn subroots(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut found = Vec::new();
        let mut stack = self.children(node);
        stack.reverse();
        while let Some(next) = stack.pop() {
            if self.is_subgame_root(next) {
                found.push(next);
            } else {
                stack.extend(self.children(next).into_iter().rev());
            }
        }
        found
    }
    /// Every subgame root in the game, in preorder.
    pub fn subgame_roots(&self) -> Vec<NodeIndex> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.is_subgame_root(*n))
            .collect()
    }
}
