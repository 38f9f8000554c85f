use crate::*;
use petgraph::stable_graph::NodeIndex;
use serde::Serialize;

/// Stable index of an outcome within one [`Game`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OutcomeIndex(usize);

impl OutcomeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Payoff per player, accrued when play passes through a node.
///
/// Missing entries read as zero, so an outcome built for fewer players
/// than the game declares is still well-defined.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Outcome(Vec<Utility>);

impl Outcome {
    pub fn zero(players: usize) -> Self {
        Self(vec![0.; players])
    }
    pub fn payoff(&self, player: usize) -> Utility {
        self.0.get(player).copied().unwrap_or_default()
    }
    pub fn payoffs(&self) -> &[Utility] {
        &self.0
    }
    /// Collapse a solved subgame rooted at `node` into a single outcome.
    ///
    /// The payoff to each player is what the solver reported for the
    /// subgame plus whatever `node` itself already paid out (zero if it
    /// carries no outcome). The result stands in for the entire subtree
    /// when `node`'s parent is solved.
    pub fn synthesize(game: &Game, node: NodeIndex, solved: &[Utility]) -> Self {
        let prior = game.outcome(node);
        (0..game.players())
            .map(|player| {
                solved.get(player).copied().unwrap_or_default()
                    + prior.map_or(0., |o| o.payoff(player))
            })
            .collect()
    }
}

impl From<Vec<Utility>> for Outcome {
    fn from(payoffs: Vec<Utility>) -> Self {
        Self(payoffs)
    }
}

impl<const K: usize> From<[Utility; K]> for Outcome {
    fn from(payoffs: [Utility; K]) -> Self {
        Self(payoffs.to_vec())
    }
}

impl FromIterator<Utility> for Outcome {
    fn from_iter<I: IntoIterator<Item = Utility>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let payoffs = self
            .0
            .iter()
            .map(|u| format!("{:+.4}", u))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", payoffs)
    }
}
