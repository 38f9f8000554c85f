use crate::*;
use petgraph::stable_graph::NodeIndex;
use std::collections::HashMap;

/// Structural surgery used by subgame decomposition.
///
/// - `relabel()` — Tag every infoset with a fresh sequential [`Label`]
/// - `truncate(node, leaves)` — Fresh game copied from one subtree
/// - `prune(node)` — Delete a subtree in place, leaving a terminal node
impl Game {
    /// Assigns `Label(0)`, `Label(1)`, ... to infosets in index order,
    /// overwriting any previous labels.
    pub fn relabel(&mut self) -> Vec<(InfosetIndex, Label)> {
        let indices = self.infosets().map(|(i, _)| i).collect::<Vec<_>>();
        indices
            .into_iter()
            .enumerate()
            .map(|(n, infoset)| (infoset, Label::from(n)))
            .inspect(|(infoset, label)| self.set_label(*infoset, *label))
            .collect()
    }

    /// Builds a new game from the subtree rooted at `node`.
    ///
    /// Every node listed in `leaves` is copied as a terminal node carrying
    /// the given outcome, whatever lies beneath it. The copy's root carries
    /// no outcome: payoff accrued at `node` belongs to whoever collapses the
    /// subtree. Infosets are renumbered in the copy but keep their labels.
    /// Only infosets met inside the subtree are copied, so `node` should
    /// root a proper subgame for the copy's infosets to be complete.
    pub fn truncate(&self, node: NodeIndex, leaves: &HashMap<NodeIndex, Outcome>) -> Game {
        let mut copy = Game::new(self.players.iter().cloned());
        let mut infosets = HashMap::<InfosetIndex, InfosetIndex>::new();
        let mut stack = vec![(node, copy.root())];
        while let Some((old, new)) = stack.pop() {
            if let Some(outcome) = leaves.get(&old) {
                let outcome = copy.new_outcome(outcome.clone());
                copy.attach(new, outcome);
                continue;
            }
            if old != node {
                if let Some(outcome) = self.outcome(old) {
                    let outcome = copy.new_outcome(outcome.clone());
                    copy.attach(new, outcome);
                }
            }
            if let Some(infoset) = self.decision(old) {
                let mapped = *infosets
                    .entry(infoset)
                    .or_insert_with(|| copy.adopt(self.infoset(infoset)));
                let children = copy.append(new, mapped);
                stack.extend(self.children(old).into_iter().zip(children).rev());
            }
        }
        copy
    }

    /// Deletes every descendant of `node`, which becomes a terminal node.
    /// The node keeps its own outcome. Emptied infosets stay declared so
    /// that infoset numbering is stable.
    pub fn prune(&mut self, node: NodeIndex) {
        for n in self.descendants(node) {
            if let Some(infoset) = self.decision(n) {
                self.infosets[infoset.index()].leave(n);
            }
            if n != node {
                self.graph.remove_node(n);
            }
        }
        self.graph[node].infoset = None;
    }

    /// Declares a memberless copy of a foreign infoset in this game.
    fn adopt(&mut self, infoset: &Infoset) -> InfosetIndex {
        let number = match infoset.turn() {
            Turn::Chance => self.chance.len(),
            Turn::Choice(player) => self.owned[player].len(),
        };
        self.infosets.push(infoset.hollow(number));
        let index = InfosetIndex::new(self.infosets.len() - 1);
        match infoset.turn() {
            Turn::Chance => self.chance.push(index),
            Turn::Choice(player) => self.owned[player].push(index),
        }
        index
    }
}
