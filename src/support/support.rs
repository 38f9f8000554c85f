use crate::*;
use serde::Serialize;
use std::sync::Arc;

/// Boolean mask over infoset → action pairs of one [`Game`].
///
/// The mask is indexed by [`InfosetIndex`], so a support only makes sense
/// for the game it was built from (or a clone of it, which preserves
/// infoset indices). Chance infosets are tracked but always full; they
/// never contribute slots to a behavior profile.
///
/// # Invariants
///
/// 1. Every infoset keeps at least one supported action
/// 2. Slot order within an infoset follows action order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Support(Vec<Vec<bool>>);

impl Support {
    /// Every action of every infoset.
    pub fn full(game: &Game) -> Self {
        Self(
            game.infosets()
                .map(|(_, infoset)| vec![true; infoset.width()])
                .collect(),
        )
    }
    pub fn contains(&self, infoset: InfosetIndex, action: usize) -> bool {
        self.0
            .get(infoset.index())
            .and_then(|mask| mask.get(action))
            .copied()
            .unwrap_or(false)
    }
    /// Drops an action. Refuses (returning `false`) when the action is
    /// already absent or is the last one left at its infoset.
    pub fn remove(&mut self, infoset: InfosetIndex, action: usize) -> bool {
        if !self.contains(infoset, action) || self.width(infoset) <= 1 {
            return false;
        }
        self.0[infoset.index()][action] = false;
        true
    }
    /// Restores an action. Returns `false` if it was already present.
    pub fn insert(&mut self, infoset: InfosetIndex, action: usize) -> bool {
        match self.0.get_mut(infoset.index()).and_then(|m| m.get_mut(action)) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
    /// Number of supported actions at an infoset.
    pub fn width(&self, infoset: InfosetIndex) -> usize {
        self.0
            .get(infoset.index())
            .map_or(0, |mask| mask.iter().filter(|b| **b).count())
    }
    /// Supported action positions, in order.
    pub fn actions(&self, infoset: InfosetIndex) -> Vec<usize> {
        self.0
            .get(infoset.index())
            .map(|mask| {
                mask.iter()
                    .enumerate()
                    .filter(|(_, b)| **b)
                    .map(|(a, _)| a)
                    .collect()
            })
            .unwrap_or_default()
    }
    /// Slot of a supported action among its infoset's supported actions.
    pub fn position(&self, infoset: InfosetIndex, action: usize) -> Option<usize> {
        self.contains(infoset, action)
            .then(|| self.0[infoset.index()][..action].iter().filter(|b| **b).count())
    }
    /// Action position occupying a slot. Inverse of [`Support::position`].
    pub fn action(&self, infoset: InfosetIndex, slot: usize) -> Option<usize> {
        self.actions(infoset).get(slot).copied()
    }
    /// Per-player, per-infoset supported action counts.
    pub fn shape(&self, game: &Game) -> Shape {
        Shape::from(
            (0..game.players())
                .map(|player| {
                    game.owned(player)
                        .iter()
                        .map(|infoset| self.width(*infoset))
                        .collect()
                })
                .collect::<Vec<Vec<usize>>>(),
        )
    }
    /// Offset tables for profiles over this support.
    pub fn layout(&self, game: &Game) -> Arc<Layout> {
        Arc::new(Layout::from(self.shape(game)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_support_matches_game() {
        let game = games::sequential();
        let support = Support::full(&game);
        assert_eq!(support.shape(&game), Shape::from(vec![vec![2, 2], vec![2]]));
        assert_eq!(support.layout(&game).size(), 6);
    }

    #[test]
    fn remove_shrinks_shape_and_shifts_slots() {
        let mut game = Game::new(["P1"]);
        let root = game.root();
        let infoset = game.new_infoset(Turn::Choice(0), ["a", "b", "c"]);
        game.append(root, infoset);
        let mut support = Support::full(&game);
        assert!(support.remove(infoset, 0));
        assert!(!support.remove(infoset, 0));
        assert_eq!(support.actions(infoset), vec![1, 2]);
        assert_eq!(support.position(infoset, 2), Some(1));
        assert_eq!(support.position(infoset, 0), None);
        assert_eq!(support.action(infoset, 0), Some(1));
        assert_eq!(support.shape(&game), Shape::from(vec![vec![2]]));
    }

    #[test]
    fn last_action_cannot_be_removed() {
        let game = games::sequential();
        let column = game.owned(1)[0];
        let mut support = Support::full(&game);
        assert!(support.remove(column, 1));
        assert!(!support.remove(column, 0));
        assert_eq!(support.width(column), 1);
        assert!(support.insert(column, 1));
        assert!(!support.insert(column, 1));
        assert_eq!(support.width(column), 2);
    }

    #[test]
    fn restricted_copy_is_independent() {
        let game = games::sequential();
        let column = game.owned(1)[0];
        let original = Support::full(&game);
        let mut restricted = original.clone();
        restricted.remove(column, 0);
        assert!(original.contains(column, 0));
        assert!(!restricted.contains(column, 0));
    }

    #[test]
    fn chance_infosets_carry_no_slots() {
        let game = games::lottery();
        let support = Support::full(&game);
        let chance = game.chances()[0];
        assert_eq!(support.width(chance), 2);
        assert_eq!(support.shape(&game).size(), 4);
    }
}
