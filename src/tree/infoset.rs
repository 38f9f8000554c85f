use crate::*;
use petgraph::stable_graph::NodeIndex;

/// Stable index of an information set within one [`Game`].
///
/// Indices are only meaningful inside the game that issued them; use
/// [`Label`]s to match infosets across copies.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InfosetIndex(usize);

impl InfosetIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Information set: the nodes a decision-maker cannot tell apart.
///
/// # Invariants
///
/// 1. Every member offers exactly `width()` actions, one child per action
/// 2. Members are ordered by the time they joined
/// 3. `number()` is this infoset's position among its owner's infosets,
///    and is what partitioned vectors use as the infoset coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Infoset {
    turn: Turn,
    number: usize,
    actions: Vec<String>,
    odds: Vec<Probability>,
    members: Vec<NodeIndex>,
    label: Option<Label>,
}

impl Infoset {
    pub(crate) fn new(turn: Turn, number: usize, actions: Vec<String>, odds: Vec<Probability>) -> Self {
        debug_assert!(odds.is_empty() || odds.len() == actions.len());
        Self {
            turn,
            number,
            actions,
            odds,
            members: Vec::new(),
            label: None,
        }
    }
    /// Copy of this infoset's structure, without members.
    pub(crate) fn hollow(&self, number: usize) -> Self {
        Self {
            turn: self.turn,
            number,
            actions: self.actions.clone(),
            odds: self.odds.clone(),
            members: Vec::new(),
            label: self.label,
        }
    }
    pub(crate) fn join(&mut self, node: NodeIndex) {
        self.members.push(node);
    }
    pub(crate) fn leave(&mut self, node: NodeIndex) {
        self.members.retain(|m| *m != node);
    }
    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = Some(label);
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn number(&self) -> usize {
        self.number
    }
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
    /// Number of actions available at every member.
    pub fn width(&self) -> usize {
        self.actions.len()
    }
    pub fn members(&self) -> &[NodeIndex] {
        &self.members
    }
    pub fn label(&self) -> Option<Label> {
        self.label
    }
    /// Fixed probability of a chance action. Zero for player infosets.
    pub fn odds(&self, action: usize) -> Probability {
        self.odds.get(action).copied().unwrap_or_default()
    }
}

impl std::fmt::Display for Infoset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} [{}]", self.turn, self.number, self.actions.join(" "))
    }
}
