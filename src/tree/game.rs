use crate::*;
use petgraph::Direction;
use petgraph::stable_graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;

/// A finite extensive-form game stored as an index arena.
///
/// # Structure
///
/// Nodes live in a petgraph `StableDiGraph` whose edges are labeled with
/// the action position they realize, so indices survive the node removals
/// performed by [`Game::prune`]. Infosets and outcomes live in side arenas
/// addressed by [`InfosetIndex`] and [`OutcomeIndex`]. Nothing here owns
/// anything else; every relationship is an index.
///
/// # Construction
///
/// - `new(players)` — Root-only game
/// - `new_infoset(turn, actions)` / `new_chance(actions)` — Declare an infoset
/// - `append(node, infoset)` — Turn a terminal node into a decision, one child per action
/// - `new_outcome(payoffs)` + `attach(node, outcome)` — Payoffs
///
/// # Navigation
///
/// - `root()`, `parent(node)`, `children(node)` (ordered by action)
/// - `decision(node)` — Infoset at a node, `None` when terminal
/// - `descendants(node)` — Preorder walk of a subtree
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) graph: StableDiGraph<Vertex, usize>,
    pub(super) root: NodeIndex,
    pub(super) players: Vec<String>,
    pub(super) owned: Vec<Vec<InfosetIndex>>,
    pub(super) chance: Vec<InfosetIndex>,
    pub(super) infosets: Vec<Infoset>,
    pub(super) outcomes: Vec<Outcome>,
}

impl Game {
    /// Creates a game consisting of a single terminal root.
    pub fn new<S>(players: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        let players = players.into_iter().map(Into::into).collect::<Vec<String>>();
        let mut graph = StableDiGraph::default();
        let root = graph.add_node(Vertex::default());
        Self {
            graph,
            root,
            owned: vec![Vec::new(); players.len()],
            players,
            chance: Vec::new(),
            infosets: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    // construction

    /// Declares a new infoset for a strategic player.
    pub fn new_infoset<S>(&mut self, turn: Turn, actions: impl IntoIterator<Item = S>) -> InfosetIndex
    where
        S: Into<String>,
    {
        let player = turn.player().expect("chance infosets need odds, use new_chance");
        assert!(player < self.players(), "no such player {}", player);
        let actions = actions.into_iter().map(Into::into).collect::<Vec<String>>();
        let number = self.owned[player].len();
        let index = self.push(Infoset::new(turn, number, actions, Vec::new()));
        self.owned[player].push(index);
        index
    }
    /// Declares a new chance infoset from (action, probability) pairs.
    pub fn new_chance<S>(&mut self, actions: impl IntoIterator<Item = (S, Probability)>) -> InfosetIndex
    where
        S: Into<String>,
    {
        let (actions, odds) = actions
            .into_iter()
            .map(|(a, p)| (a.into(), p))
            .unzip::<String, Probability, Vec<String>, Vec<Probability>>();
        let number = self.chance.len();
        let index = self.push(Infoset::new(Turn::Chance, number, actions, odds));
        self.chance.push(index);
        index
    }
    /// Registers an outcome so it can be attached to nodes.
    pub fn new_outcome(&mut self, payoffs: impl Into<Outcome>) -> OutcomeIndex {
        self.outcomes.push(payoffs.into());
        OutcomeIndex::new(self.outcomes.len() - 1)
    }
    /// Makes a terminal node a member of `infoset`, growing one child per action.
    /// Returns the children in action order.
    pub fn append(&mut self, node: NodeIndex, infoset: InfosetIndex) -> Vec<NodeIndex> {
        assert!(self.graph.contains_node(node), "append to missing node");
        assert!(self.is_terminal(node), "append to decision node {:?}", node);
        let width = self.infoset(infoset).width();
        self.graph[node].infoset = Some(infoset);
        self.infosets[infoset.index()].join(node);
        (0..width)
            .map(|action| {
                let child = self.graph.add_node(Vertex::default());
                self.graph.add_edge(node, child, action);
                child
            })
            .collect()
    }
    pub fn attach(&mut self, node: NodeIndex, outcome: OutcomeIndex) {
        assert!(outcome.index() < self.outcomes.len(), "attach missing outcome");
        self.graph[node].outcome = Some(outcome);
    }
    pub fn detach(&mut self, node: NodeIndex) {
        self.graph[node].outcome = None;
    }
    pub fn set_label(&mut self, infoset: InfosetIndex, label: Label) {
        self.infosets[infoset.index()].set_label(label);
    }
    fn push(&mut self, infoset: Infoset) -> InfosetIndex {
        self.infosets.push(infoset);
        InfosetIndex::new(self.infosets.len() - 1)
    }

    // players and infosets

    /// Number of strategic players.
    pub fn players(&self) -> usize {
        self.players.len()
    }
    pub fn name(&self, player: usize) -> &str {
        &self.players[player]
    }
    pub fn infoset(&self, infoset: InfosetIndex) -> &Infoset {
        &self.infosets[infoset.index()]
    }
    /// All infosets in index order, including chance and memberless ones.
    pub fn infosets(&self) -> impl Iterator<Item = (InfosetIndex, &Infoset)> {
        self.infosets
            .iter()
            .enumerate()
            .map(|(i, infoset)| (InfosetIndex::new(i), infoset))
    }
    /// A player's infosets, positioned by their number.
    pub fn owned(&self, player: usize) -> &[InfosetIndex] {
        &self.owned[player]
    }
    /// Chance infosets, positioned by their number.
    pub fn chances(&self) -> &[InfosetIndex] {
        &self.chance
    }
    /// Infoset of `player` at position `number`.
    pub fn locate(&self, player: usize, number: usize) -> Option<InfosetIndex> {
        self.owned.get(player)?.get(number).copied()
    }
    pub fn members(&self, infoset: InfosetIndex) -> &[NodeIndex] {
        self.infoset(infoset).members()
    }
    pub fn actions(&self, infoset: InfosetIndex) -> &[String] {
        self.infoset(infoset).actions()
    }
    pub fn label(&self, infoset: InfosetIndex) -> Option<Label> {
        self.infoset(infoset).label()
    }

    // nodes

    pub fn root(&self) -> NodeIndex {
        self.root
    }
    /// Number of live nodes.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.graph.contains_node(node)
    }
    pub fn vertex(&self, node: NodeIndex) -> &Vertex {
        &self.graph[node]
    }
    /// Infoset the node belongs to, `None` when terminal.
    pub fn decision(&self, node: NodeIndex) -> Option<InfosetIndex> {
        self.graph[node].infoset
    }
    pub fn outcome(&self, node: NodeIndex) -> Option<&Outcome> {
        self.graph[node]
            .outcome
            .map(|outcome| &self.outcomes[outcome.index()])
    }
    pub fn is_terminal(&self, node: NodeIndex) -> bool {
        self.graph[node].is_terminal()
    }
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .next()
    }
    /// Position of the action leading into this node.
    pub fn incoming(&self, node: NodeIndex) -> Option<usize> {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .next()
            .map(|edge| *edge.weight())
    }
    /// Direct children, ordered by action position.
    pub fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut edges = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect::<Vec<_>>();
        edges.sort_unstable();
        edges.into_iter().map(|(_, child)| child).collect()
    }
    /// Every node of the subtree rooted at `node`, in preorder.
    pub fn descendants(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut order = Vec::new();
        let mut stack = vec![node];
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        order
    }

    /// display the subtree in a human-readable format
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        if x == self.root {
            writeln!(f, "\nROOT   {}", self.describe(x))?;
        }
        let children = self.children(x);
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            let edge = self
                .decision(x)
                .map(|infoset| self.actions(infoset)[i].as_str())
                .unwrap_or_default();
            writeln!(f, "{}{}──{} → {}", prefix, stem, edge, self.describe(child))?;
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
    fn describe(&self, x: NodeIndex) -> String {
        match (self.decision(x), self.outcome(x)) {
            (Some(infoset), Some(outcome)) => format!("{} {}", self.infoset(infoset), outcome),
            (Some(infoset), None) => format!("{}", self.infoset(infoset)),
            (None, Some(outcome)) => format!("{}", outcome),
            (None, None) => String::from("·"),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, self.root, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_follow_action_order() {
        let mut game = Game::new(["P1"]);
        let root = game.root();
        let infoset = game.new_infoset(Turn::Choice(0), ["a", "b", "c"]);
        let children = game.append(root, infoset);
        assert_eq!(game.children(root), children);
        for (action, child) in children.iter().enumerate() {
            assert_eq!(game.parent(*child), Some(root));
            assert_eq!(game.incoming(*child), Some(action));
            assert!(game.is_terminal(*child));
        }
        assert_eq!(game.parent(root), None);
    }

    #[test]
    fn infosets_number_per_player() {
        let mut game = Game::new(["P1", "P2"]);
        let a = game.new_infoset(Turn::Choice(0), ["x", "y"]);
        let b = game.new_infoset(Turn::Choice(1), ["x", "y"]);
        let c = game.new_infoset(Turn::Choice(0), ["x"]);
        let d = game.new_chance([("h", 0.5), ("t", 0.5)]);
        assert_eq!(game.infoset(a).number(), 0);
        assert_eq!(game.infoset(b).number(), 0);
        assert_eq!(game.infoset(c).number(), 1);
        assert_eq!(game.infoset(d).number(), 0);
        assert_eq!(game.owned(0), &[a, c]);
        assert_eq!(game.locate(1, 0), Some(b));
        assert_eq!(game.locate(1, 1), None);
        assert_eq!(game.chances(), &[d]);
        assert_eq!(game.infoset(d).odds(1), 0.5);
    }

    #[test]
    fn members_join_on_append() {
        let mut game = Game::new(["P1", "P2"]);
        let root = game.root();
        let first = game.new_infoset(Turn::Choice(0), ["l", "r"]);
        let second = game.new_infoset(Turn::Choice(1), ["l", "r"]);
        let children = game.append(root, first);
        for child in children.iter() {
            game.append(*child, second);
        }
        assert_eq!(game.members(second), children.as_slice());
        assert_eq!(game.n(), 7);
        assert_eq!(game.descendants(root).len(), 7);
        assert_eq!(game.descendants(root)[1], children[0]);
    }

    #[test]
    #[should_panic]
    fn append_twice_panics() {
        let mut game = Game::new(["P1"]);
        let root = game.root();
        let infoset = game.new_infoset(Turn::Choice(0), ["a"]);
        game.append(root, infoset);
        game.append(root, infoset);
    }

    #[test]
    fn display_renders_every_edge() {
        let game = games::sequential();
        let text = game.to_string();
        assert!(text.contains("ROOT"));
        for action in ["L", "R", "A", "B", "a", "b"] {
            assert!(text.contains(&format!("──{} →", action)));
        }
    }
}
