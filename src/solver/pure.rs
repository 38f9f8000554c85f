use crate::*;
use std::sync::Arc;

/// Exhaustive pure-strategy equilibrium search.
///
/// Every pure behavior profile of the support is enumerated and kept when
/// no player can gain more than `tolerance` by switching to any other pure
/// behavior of their own. Complete for pure equilibria, blind to mixed
/// ones. Cost is the product of supported widths, squared per player, so
/// this is meant for small games and for the leaves of a decomposition.
pub struct PureSolver {
    tolerance: Utility,
    observer: Option<Observer>,
    cancel: Option<Box<dyn Fn() -> bool>>,
}

impl Default for PureSolver {
    fn default() -> Self {
        Self::new(PAYOFF_TOLERANCE)
    }
}

impl PureSolver {
    pub fn new(tolerance: Utility) -> Self {
        Self {
            tolerance,
            observer: None,
            cancel: None,
        }
    }
    /// Reports the first and last enumerated profiles and every accepted
    /// equilibrium.
    pub fn with_observer(mut self, observer: impl FnMut(Progress, &Profile) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
    /// Polled before each profile; returning `true` aborts with [`Cancelled`].
    pub fn with_cancel(mut self, cancel: impl Fn() -> bool + 'static) -> Self {
        self.cancel = Some(Box::new(cancel));
        self
    }
    pub fn tolerance(&self) -> Utility {
        self.tolerance
    }

    fn notify(&mut self, progress: Progress, profile: &Profile) {
        if let Some(observer) = self.observer.as_mut() {
            observer(progress, profile);
        }
    }
    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|cancel| cancel())
    }

    /// Whether no player profits from a unilateral pure deviation.
    fn is_nash(&self, game: &Game, support: &Support, choice: &Choice, digits: &[usize]) -> bool {
        let profile = choice.profile(support, digits);
        let payoffs = profile.payoffs(game);
        (0..game.players()).all(|player| {
            let span = choice.span(player);
            Odometer::new(choice.radices[span.clone()].to_vec())
                .filter(|deviation| deviation.as_slice() != &digits[span.clone()])
                .all(|deviation| {
                    let mut swapped = digits.to_vec();
                    swapped[span.clone()].copy_from_slice(&deviation);
                    let payoff = choice.profile(support, &swapped).payoff(game, player);
                    payoff <= payoffs[player] + self.tolerance
                })
        })
    }
}

impl Solver for PureSolver {
    fn solve(&mut self, game: &Game, support: &Support) -> anyhow::Result<Vec<Profile>> {
        let choice = Choice::new(game, support);
        let total = Odometer::size(&choice.radices);
        let mut equilibria = Vec::new();
        for (n, digits) in Odometer::new(choice.radices.clone()).enumerate() {
            if self.cancelled() {
                log::debug!("pure search cancelled after {} of {} profiles", n, total);
                return Err(Cancelled.into());
            }
            let first = n == 0;
            let last = n + 1 == total;
            let nash = self.is_nash(game, support, &choice, &digits);
            if first || last || nash {
                let profile = choice.profile(support, &digits);
                if first {
                    self.notify(Progress::Start, &profile);
                }
                if nash {
                    log::trace!("pure equilibrium {}", profile);
                    self.notify(Progress::Candidate, &profile);
                }
                if last {
                    self.notify(Progress::End, &profile);
                }
                if nash {
                    equilibria.push(profile);
                }
            }
        }
        log::trace!("{} pure equilibria among {} profiles", equilibria.len(), total);
        Ok(equilibria)
    }
}

/// Player infosets flattened in (player, number) order, one digit each.
struct Choice {
    layout: Arc<Layout>,
    slots: Vec<(usize, usize)>,
    radices: Vec<usize>,
    starts: Vec<usize>,
}

impl Choice {
    fn new(game: &Game, support: &Support) -> Self {
        let layout = support.layout(game);
        let mut slots = Vec::new();
        let mut radices = Vec::new();
        let mut starts = Vec::new();
        for player in 0..game.players() {
            starts.push(slots.len());
            for (number, infoset) in game.owned(player).iter().enumerate() {
                slots.push((player, number));
                radices.push(support.width(*infoset));
            }
        }
        starts.push(slots.len());
        Self {
            layout,
            slots,
            radices,
            starts,
        }
    }
    /// Digit positions owned by one player.
    fn span(&self, player: usize) -> std::ops::Range<usize> {
        self.starts[player]..self.starts[player + 1]
    }
    fn profile(&self, support: &Support, digits: &[usize]) -> Profile {
        let mut behavior = Partitioned::zeros(self.layout.clone());
        for ((player, number), slot) in self.slots.iter().zip(digits) {
            behavior[(*player, *number, *slot)] = 1.;
        }
        Profile::new(support.clone(), behavior)
    }
}
