use crate::*;
use std::sync::Arc;

/// One solution of a subgame on its way up the recursion: the behavior it
/// assigns inside the subgame, and the payoff it collapses to.
#[derive(Debug, Clone, PartialEq)]
pub struct Partial {
    behavior: Partitioned<Probability>,
    outcome: Outcome,
}

impl Partial {
    pub fn new(behavior: Partitioned<Probability>, outcome: Outcome) -> Self {
        Self { behavior, outcome }
    }
    /// Contribution of a terminal node: nothing to play, its own payoff.
    pub fn terminal(layout: Arc<Layout>, outcome: Outcome) -> Self {
        Self::new(Partitioned::zeros(layout), outcome)
    }
    pub fn behavior(&self) -> &Partitioned<Probability> {
        &self.behavior
    }
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
    pub fn into_behavior(self) -> Partitioned<Probability> {
        self.behavior
    }
}

/// One element of the cross product of sibling subgame solutions.
///
/// The merged behavior is the union of the chosen partials, one per
/// sibling, and `outcomes[k]` is the payoff chosen for the `k`-th sibling.
/// Siblings occupy disjoint infosets, so merging never overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    behavior: Partitioned<Probability>,
    outcomes: Vec<Outcome>,
}

impl Combination {
    /// The empty combination: no siblings chosen yet.
    pub fn seed(layout: Arc<Layout>) -> Self {
        Self {
            behavior: Partitioned::zeros(layout),
            outcomes: Vec::new(),
        }
    }
    /// This combination with one more sibling solution appended.
    pub fn extend(&self, partial: &Partial) -> Self {
        let mut next = self.clone();
        next.behavior.merge(&partial.behavior);
        next.outcomes.push(partial.outcome.clone());
        next
    }
    pub fn behavior(&self) -> &Partitioned<Probability> {
        &self.behavior
    }
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Arc<Layout> {
        Arc::new(Layout::from(Shape::from(vec![vec![2, 2], vec![2]])))
    }

    #[test]
    fn sibling_partials_merge_disjointly() {
        let layout = layout();
        let mut left = Partitioned::zeros(layout.clone());
        let mut right = Partitioned::zeros(layout.clone());
        left[(0, 0, 1)] = 1.;
        right[(0, 1, 0)] = 0.5;
        right[(0, 1, 1)] = 0.5;
        right[(1, 0, 0)] = 1.;
        let left = Partial::new(left, Outcome::from([1., 0.]));
        let right = Partial::new(right, Outcome::from([0., 1.]));
        assert!(left.behavior().is_disjoint(right.behavior()));
        let combination = Combination::seed(layout).extend(&left).extend(&right);
        assert_eq!(combination.behavior().as_slice(), &[0., 1., 0.5, 0.5, 1., 0.]);
        assert_eq!(combination.outcomes(), &[Outcome::from([1., 0.]), Outcome::from([0., 1.])]);
    }

    #[test]
    fn extending_leaves_the_seed_untouched() {
        let layout = layout();
        let seed = Combination::seed(layout.clone());
        let partial = Partial::terminal(layout, Outcome::from([2., 2.]));
        let next = seed.extend(&partial);
        assert!(seed.outcomes().is_empty());
        assert_eq!(next.outcomes().len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn overlapping_partials_are_rejected() {
        let layout = layout();
        let mut behavior = Partitioned::zeros(layout.clone());
        behavior[(1, 0, 0)] = 1.;
        let partial = Partial::new(behavior, Outcome::default());
        Combination::seed(layout).extend(&partial).extend(&partial);
    }
}
