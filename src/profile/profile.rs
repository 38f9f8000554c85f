use crate::*;
use petgraph::stable_graph::NodeIndex;
use serde::Serialize;

/// Behavior profile: a probability for every supported action at every
/// player infoset.
///
/// Stored as a three-level [`Partitioned`] vector over the support's
/// layout, so slot `k` of an infoset is the `k`-th *supported* action.
/// Actions outside the support read as probability zero; chance actions
/// read as their fixed odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    #[serde(skip)]
    support: Support,
    behavior: Partitioned<Probability>,
}

impl Profile {
    pub fn new(support: Support, behavior: Partitioned<Probability>) -> Self {
        Self { support, behavior }
    }
    /// All-zero profile, as used for partial assignments.
    pub fn zeros(game: &Game, support: &Support) -> Self {
        Self::new(support.clone(), Partitioned::zeros(support.layout(game)))
    }
    /// Uniform mixing over each infoset's supported actions.
    pub fn uniform(game: &Game, support: &Support) -> Self {
        let mut profile = Self::zeros(game, support);
        for (index, infoset) in game.infosets() {
            if let Turn::Choice(player) = infoset.turn() {
                let width = support.width(index);
                if let Some(slots) = profile.behavior.infoset_mut(player, infoset.number()) {
                    slots.iter_mut().for_each(|p| *p = 1. / width as Probability);
                }
            }
        }
        profile
    }
    /// Pure profile playing `choose(infoset)` everywhere. The chosen action
    /// must be supported.
    pub fn pure(game: &Game, support: &Support, choose: impl Fn(InfosetIndex) -> usize) -> Self {
        let mut profile = Self::zeros(game, support);
        for (index, infoset) in game.infosets() {
            if !infoset.turn().is_chance() {
                profile.set(game, index, choose(index), 1.);
            }
        }
        profile
    }

    pub fn support(&self) -> &Support {
        &self.support
    }
    pub fn behavior(&self) -> &Partitioned<Probability> {
        &self.behavior
    }
    pub fn into_behavior(self) -> Partitioned<Probability> {
        self.behavior
    }
    /// Probability of taking `action` at `infoset`.
    pub fn probability(&self, game: &Game, infoset: InfosetIndex, action: usize) -> Probability {
        let info = game.infoset(infoset);
        match info.turn() {
            Turn::Chance => info.odds(action),
            Turn::Choice(player) => self
                .support
                .position(infoset, action)
                .and_then(|slot| self.behavior.get(player, info.number(), slot))
                .copied()
                .unwrap_or_default(),
        }
    }
    /// Sets the probability of a supported action at a player infoset.
    pub fn set(&mut self, game: &Game, infoset: InfosetIndex, action: usize, p: Probability) {
        let info = game.infoset(infoset);
        let player = info.turn().player().expect("chance odds are fixed");
        let slot = self
            .support
            .position(infoset, action)
            .expect("action outside support");
        self.behavior[(player, info.number(), slot)] = p;
    }
    /// Every slot is either zero or one.
    pub fn is_pure(&self) -> bool {
        self.behavior
            .as_slice()
            .iter()
            .all(|p| *p == 0. || *p == 1.)
    }

    /// Expected payoff to every player from the root.
    pub fn payoffs(&self, game: &Game) -> Vec<Utility> {
        self.value(game, game.root())
    }
    pub fn payoff(&self, game: &Game, player: usize) -> Utility {
        self.payoffs(game)[player]
    }
    /// Expected payoff to every player from `node` onward, counting the
    /// outcome at `node` itself.
    pub fn value(&self, game: &Game, node: NodeIndex) -> Vec<Utility> {
        let mut value = match game.outcome(node) {
            Some(outcome) => (0..game.players()).map(|p| outcome.payoff(p)).collect(),
            None => vec![0.; game.players()],
        };
        if let Some(infoset) = game.decision(node) {
            for (action, child) in game.children(node).into_iter().enumerate() {
                let p = self.probability(game, infoset, action);
                if p == 0. {
                    continue;
                }
                for (v, u) in value.iter_mut().zip(self.value(game, child)) {
                    *v += p * u;
                }
            }
        }
        value
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players = self
            .behavior
            .nested()
            .into_iter()
            .map(|infosets| {
                infosets
                    .into_iter()
                    .map(|slots| {
                        slots
                            .iter()
                            .map(|p| format!("{:.3}", p))
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join(" ; ");
        write!(f, "[{}]", players)
    }
}
