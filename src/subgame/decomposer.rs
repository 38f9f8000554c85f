use crate::*;
use petgraph::stable_graph::NodeIndex;
use std::collections::HashMap;
use std::sync::Arc;

/// Nash equilibria by subgame decomposition.
///
/// Wraps a leaf [`Solver`] and only ever hands it truncated subgames:
/// each proper subgame below the current node is solved first, replaced
/// by a terminal node paying one of its equilibrium payoffs, and the
/// leaf solver is invoked on what remains for every combination of
/// chosen payoffs.
///
/// # Algorithm
///
/// For each node, depth-first:
///
/// 1. Find the immediate proper subgames below it
/// 2. Solve each recursively; if any has no solution, neither does this node
/// 3. Form the cross product of sibling solutions
/// 4. For each combination, truncate the subtree at the subgames, restrict
///    the support, and invoke the leaf solver
/// 5. Merge every leaf equilibrium with the combination, synthesize the
///    node's payoff, and pass both upward
/// 6. Prune the node's subtree from the working copy
///
/// # Empty results
///
/// A child subgame without equilibria empties the whole node at once and
/// skips every remaining combination. A leaf solve without equilibria
/// only drops its own combination. Errors from the leaf solver abort the
/// decomposition and are returned untouched.
pub struct Decomposer<S> {
    solver: S,
}

/// Per-decomposition context threaded through the recursion.
struct Frame<'a> {
    support: &'a Support,
    layout: Arc<Layout>,
    correspondence: Correspondence,
}

impl<S> Decomposer<S>
where
    S: Solver,
{
    pub fn new(solver: S) -> Self {
        Self { solver }
    }
    pub fn solver(&self) -> &S {
        &self.solver
    }
    pub fn into_inner(self) -> S {
        self.solver
    }

    /// Equilibria of `game` restricted to `support`.
    ///
    /// The game is never mutated: decomposition consumes one labeled
    /// clone of it.
    pub fn decompose(&mut self, game: &Game, support: &Support) -> anyhow::Result<Vec<Equilibrium>> {
        let mut working = game.clone();
        let correspondence = Correspondence::label(game, &mut working);
        let frame = Frame {
            layout: support.layout(&working),
            correspondence,
            support,
        };
        let root = working.root();
        log::debug!(
            "decomposing {} nodes across {} infosets",
            working.n(),
            frame.correspondence.len()
        );
        let partials = self.recurse(&mut working, &frame, root)?;
        let equilibria = partials
            .into_iter()
            .map(|partial| self.express(game, &working, &frame, partial))
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("decomposition found {} equilibria", equilibria.len());
        Ok(equilibria)
    }

    /// Solutions of the subgame rooted at `node` of the working copy,
    /// whose subtree is pruned before returning.
    fn recurse(&mut self, working: &mut Game, frame: &Frame, node: NodeIndex) -> anyhow::Result<Vec<Partial>> {
        if working.is_terminal(node) {
            let outcome = working
                .outcome(node)
                .cloned()
                .unwrap_or_else(|| Outcome::zero(working.players()));
            return Ok(vec![Partial::terminal(frame.layout.clone(), outcome)]);
        }
        let subroots = working.subroots(node);
        log::debug!("node {:?} has {} subgames below it", node, subroots.len());
        let mut combinations = vec![Combination::seed(frame.layout.clone())];
        for subroot in subroots.iter().copied() {
            let solutions = self.recurse(working, frame, subroot)?;
            if solutions.is_empty() {
                log::debug!("subgame at {:?} has no equilibria, abandoning {:?}", subroot, node);
                working.prune(node);
                return Ok(Vec::new());
            }
            combinations = combinations
                .iter()
                .flat_map(|combination| solutions.iter().map(move |partial| combination.extend(partial)))
                .collect();
        }
        let mut partials = Vec::new();
        for combination in combinations.iter() {
            let leaves = subroots
                .iter()
                .copied()
                .zip(combination.outcomes().iter().cloned())
                .collect::<HashMap<_, _>>();
            let truncated = working.truncate(node, &leaves);
            let restricted = self.restrict(working, &truncated, frame)?;
            let solutions = self.solver.solve(&truncated, &restricted)?;
            if solutions.is_empty() {
                log::debug!("no equilibria for one combination at {:?}", node);
                continue;
            }
            log::debug!("{} equilibria for one combination at {:?}", solutions.len(), node);
            for solution in solutions.iter() {
                let mut behavior = combination.behavior().clone();
                behavior.merge(&self.translate(working, &truncated, &restricted, frame, solution)?);
                let outcome = Outcome::synthesize(working, node, &solution.payoffs(&truncated));
                partials.push(Partial::new(behavior, outcome));
            }
        }
        working.prune(node);
        Ok(partials)
    }

    /// Full support of a truncated copy, cut down to the caller's support
    /// infoset by infoset.
    fn restrict(&self, working: &Game, truncated: &Game, frame: &Frame) -> anyhow::Result<Support> {
        let mut restricted = Support::full(truncated);
        for (index, infoset) in truncated.infosets() {
            if infoset.turn().is_chance() {
                continue;
            }
            let target = Self::lookup(infoset, &frame.correspondence)?;
            for action in 0..working.infoset(target).width() {
                if !frame.support.contains(target, action) {
                    restricted.remove(index, action);
                }
            }
        }
        Ok(restricted)
    }

    /// Leaf equilibrium rewritten into working-copy coordinates.
    fn translate(
        &self,
        working: &Game,
        truncated: &Game,
        restricted: &Support,
        frame: &Frame,
        solution: &Profile,
    ) -> anyhow::Result<Partitioned<Probability>> {
        let mut behavior = Partitioned::zeros(frame.layout.clone());
        for (index, infoset) in truncated.infosets() {
            let Turn::Choice(player) = infoset.turn() else {
                continue;
            };
            let target = Self::lookup(infoset, &frame.correspondence)?;
            let number = working.infoset(target).number();
            for action in restricted.actions(index) {
                let slot = frame
                    .support
                    .position(target, action)
                    .ok_or_else(|| anyhow::anyhow!("action {} unsupported at {}", action, infoset))?;
                behavior[(player, number, slot)] = solution.probability(truncated, index, action);
            }
        }
        Ok(behavior)
    }

    /// Working-copy behavior re-expressed over the caller's game.
    fn express(&self, game: &Game, working: &Game, frame: &Frame, partial: Partial) -> anyhow::Result<Equilibrium> {
        let payoff = partial.outcome().clone();
        let source = partial.into_behavior();
        let mut behavior = Partitioned::zeros(frame.layout.clone());
        for (index, infoset) in working.infosets() {
            let Turn::Choice(player) = infoset.turn() else {
                continue;
            };
            let label = infoset
                .label()
                .ok_or_else(|| anyhow::anyhow!("unlabeled infoset {}", infoset))?;
            let original = game.infoset(frame.correspondence.original(label)?);
            debug_assert!(frame.correspondence.working(label)? == index);
            if let (Some(from), Some(into)) = (
                source.infoset(player, infoset.number()),
                behavior.infoset_mut(player, original.number()),
            ) {
                into.copy_from_slice(from);
            }
        }
        Ok(Equilibrium::new(Profile::new(frame.support.clone(), behavior), payoff))
    }

    fn lookup(infoset: &Infoset, correspondence: &Correspondence) -> anyhow::Result<InfosetIndex> {
        infoset
            .label()
            .ok_or_else(|| anyhow::anyhow!("unlabeled infoset {}", infoset))
            .and_then(|label| correspondence.working(label))
    }
}

impl<S> Solver for Decomposer<S>
where
    S: Solver,
{
    fn solve(&mut self, game: &Game, support: &Support) -> anyhow::Result<Vec<Profile>> {
        Ok(self
            .decompose(game, support)?
            .into_iter()
            .map(Equilibrium::into_profile)
            .collect())
    }
}
