use crate::*;

/// Finds equilibria of a game restricted to a support.
///
/// # Contract
///
/// - Every returned profile is defined over exactly `support`
/// - An empty `Vec` means "no equilibria found" and is a valid answer
/// - Anything that stops the search early (including [`Cancelled`]) is an
///   `Err`, never an empty `Vec`
///
/// Completeness of the returned set is the implementor's business.
/// Closures with the right signature are solvers too.
pub trait Solver {
    fn solve(&mut self, game: &Game, support: &Support) -> anyhow::Result<Vec<Profile>>;
}

impl<F> Solver for F
where
    F: FnMut(&Game, &Support) -> anyhow::Result<Vec<Profile>>,
{
    fn solve(&mut self, game: &Game, support: &Support) -> anyhow::Result<Vec<Profile>> {
        self(game, support)
    }
}

/// Raised by a solver that was asked to stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "solver cancelled")
    }
}

impl std::error::Error for Cancelled {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_solvers() {
        let mut calls = 0;
        let mut solver = |game: &Game, support: &Support| -> anyhow::Result<Vec<Profile>> {
            calls += 1;
            Ok(vec![Profile::uniform(game, support)])
        };
        let game = games::pennies();
        let profiles = solver.solve(&game, &Support::full(&game)).expect("solve");
        assert_eq!(profiles.len(), 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn cancellation_survives_anyhow() {
        let error = anyhow::Error::from(Cancelled);
        assert!(error.downcast_ref::<Cancelled>().is_some());
        assert_eq!(error.to_string(), "solver cancelled");
    }
}
