use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::Cell;

/// Two independent P2 subgames under one P1 choice.
///
/// Under `x`, P2 is indifferent between `a` (1, 0) and `b` (2, 0), so
/// both are equilibria. Under `y`, P2 strictly prefers `a` (1, 0) to
/// `b` (0, -1).
fn twins() -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let first = game.new_infoset(Turn::Choice(0), ["x", "y"]);
    let root = game.root();
    let children = game.append(root, first);
    let tables = [[[1., 0.], [2., 0.]], [[1., 0.], [0., -1.]]];
    for (child, table) in children.into_iter().zip(tables) {
        let infoset = game.new_infoset(Turn::Choice(1), ["a", "b"]);
        for (leaf, payoffs) in game.append(child, infoset).into_iter().zip(table) {
            let outcome = game.new_outcome(payoffs);
            game.attach(leaf, outcome);
        }
    }
    game
}

fn probabilities(game: &Game, profile: &Profile, infoset: InfosetIndex) -> Vec<Probability> {
    (0..game.infoset(infoset).width())
        .map(|action| profile.probability(game, infoset, action))
        .collect()
}

#[test]
fn sequential_composes_both_subgame_equilibria() {
    let game = games::sequential();
    let [first, row] = [game.owned(0)[0], game.owned(0)[1]];
    let col = game.owned(1)[0];
    let mut fallback = PureSolver::default();
    let stub = |g: &Game, s: &Support| -> anyhow::Result<Vec<Profile>> {
        if g.owned(1).is_empty() {
            return fallback.solve(g, s);
        }
        Ok(vec![
            Profile::pure(g, s, |_| 0),
            Profile::pure(g, s, |_| 1),
        ])
    };
    let equilibria = Decomposer::new(stub)
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(equilibria.len(), 2);
    let found = equilibria
        .iter()
        .map(|e| {
            let p = e.profile();
            (
                probabilities(&game, p, first),
                probabilities(&game, p, row),
                probabilities(&game, p, col),
                e.payoff().clone(),
            )
        })
        .collect::<Vec<_>>();
    assert!(found.contains(&(vec![0., 1.], vec![1., 0.], vec![1., 0.], Outcome::from([3., 1.]))));
    assert!(found.contains(&(vec![1., 0.], vec![0., 1.], vec![0., 1.], Outcome::from([2., 2.]))));
}

#[test]
fn empty_solver_empties_games_with_subgames() {
    let calls = Cell::new(0);
    let nothing = |_: &Game, _: &Support| -> anyhow::Result<Vec<Profile>> {
        calls.set(calls.get() + 1);
        Ok(Vec::new())
    };
    let game = games::sequential();
    let equilibria = Decomposer::new(nothing)
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert!(equilibria.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn terminal_game_needs_no_solver() {
    let calls = Cell::new(0);
    let counting = |g: &Game, s: &Support| -> anyhow::Result<Vec<Profile>> {
        calls.set(calls.get() + 1);
        Ok(vec![Profile::uniform(g, s)])
    };
    let game = games::trivial([4., -1.]);
    let equilibria = Decomposer::new(counting)
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(equilibria.len(), 1);
    assert_eq!(equilibria[0].payoff(), &Outcome::from([4., -1.]));
    assert!(equilibria[0].profile().behavior().is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn profiles_live_on_the_callers_support() {
    let game = games::sequential();
    let col = game.owned(1)[0];
    let mut support = Support::full(&game);
    support.remove(col, 1);
    let equilibria = Decomposer::new(PureSolver::default())
        .decompose(&game, &support)
        .expect("decompose");
    assert_eq!(equilibria.len(), 1);
    assert_eq!(equilibria[0].profile().support(), &support);
    assert_eq!(equilibria[0].profile().behavior().len(), 5);
    assert_eq!(equilibria[0].payoff(), &Outcome::from([3., 1.]));
}

#[test]
fn unsolvable_subgame_prunes_its_siblings() {
    let calls = Cell::new(0);
    let mut fallback = PureSolver::default();
    let first_fails = |g: &Game, s: &Support| -> anyhow::Result<Vec<Profile>> {
        calls.set(calls.get() + 1);
        match calls.get() {
            1 => Ok(Vec::new()),
            _ => fallback.solve(g, s),
        }
    };
    let game = twins();
    let equilibria = Decomposer::new(first_fails)
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert!(equilibria.is_empty());
    assert_eq!(calls.get(), 1);
}

#[test]
fn unsolvable_combination_skips_only_itself() {
    let calls = Cell::new(0);
    let roots = Cell::new(0);
    let mut fallback = PureSolver::default();
    let first_root_fails = |g: &Game, s: &Support| -> anyhow::Result<Vec<Profile>> {
        calls.set(calls.get() + 1);
        if !g.owned(0).is_empty() {
            roots.set(roots.get() + 1);
            if roots.get() == 1 {
                return Ok(Vec::new());
            }
        }
        fallback.solve(g, s)
    };
    let game = twins();
    let equilibria = Decomposer::new(first_root_fails)
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(calls.get(), 4);
    assert_eq!(roots.get(), 2);
    assert_eq!(equilibria.len(), 1);
    assert_eq!(equilibria[0].payoff(), &Outcome::from([2., 0.]));
}

#[test]
fn sibling_subgames_merge_into_one_profile() {
    let game = twins();
    let equilibria = Decomposer::new(PureSolver::default())
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    // P1 is indifferent while P2 plays a under x, and takes x once P2 plays b
    assert_eq!(equilibria.len(), 3);
    for equilibrium in equilibria.iter() {
        let profile = equilibrium.profile();
        for (index, _) in game.infosets() {
            let total = probabilities(&game, profile, index).iter().sum::<Probability>();
            assert_eq!(total, 1.);
        }
        assert_eq!(profile.payoffs(&game), equilibrium.payoff().payoffs());
    }
}

#[test]
fn centipede_keeps_only_subgame_perfect_play() {
    let game = games::centipede(2);
    let support = Support::full(&game);
    let nash = PureSolver::default().solve(&game, &support).expect("solve");
    let perfect = Decomposer::new(PureSolver::default())
        .decompose(&game, &support)
        .expect("decompose");
    assert_eq!(nash.len(), 2);
    assert_eq!(perfect.len(), 1);
    assert!(nash.contains(perfect[0].profile()));

    let game = games::centipede(6);
    let perfect = Decomposer::new(PureSolver::default())
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(perfect.len(), 1);
    assert_eq!(perfect[0].payoff(), &Outcome::from([2., 0.]));
    for (index, _) in game.infosets() {
        assert_eq!(perfect[0].profile().probability(&game, index, 0), 1.);
    }
}

#[test]
fn chance_weights_synthesized_payoffs() {
    let game = games::lottery();
    let equilibria = Decomposer::new(PureSolver::default())
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(equilibria.len(), 1);
    assert_eq!(equilibria[0].payoff(), &Outcome::from([2.5, -2.5]));
}

#[test]
fn pennies_has_no_pure_equilibrium() {
    let game = games::pennies();
    let equilibria = Decomposer::new(PureSolver::default())
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert!(equilibria.is_empty());
}

#[test]
fn cancellation_is_not_an_empty_result() {
    let game = games::sequential();
    let mut decomposer = Decomposer::new(PureSolver::default().with_cancel(|| true));
    let error = decomposer
        .decompose(&game, &Support::full(&game))
        .expect_err("cancelled");
    assert!(error.downcast_ref::<Cancelled>().is_some());
}

#[test]
fn solver_errors_propagate_verbatim() {
    let failing = |_: &Game, _: &Support| -> anyhow::Result<Vec<Profile>> { Err(anyhow::anyhow!("boom")) };
    let game = games::sequential();
    let error = Decomposer::new(failing)
        .decompose(&game, &Support::full(&game))
        .expect_err("boom");
    assert_eq!(error.to_string(), "boom");
}

#[test]
fn callers_game_is_untouched() {
    let game = games::sequential();
    let before = game.to_string();
    Decomposer::new(PureSolver::default())
        .decompose(&game, &Support::full(&game))
        .expect("decompose");
    assert_eq!(game.to_string(), before);
    assert!(game.infosets().all(|(_, infoset)| infoset.label().is_none()));
}

#[test]
fn decomposers_nest_as_solvers() {
    let game = games::sequential();
    let support = Support::full(&game);
    let mut nested = Decomposer::new(Decomposer::new(PureSolver::default()));
    let profiles = nested.solve(&game, &support).expect("solve");
    assert_eq!(profiles.len(), 2);
}

#[test]
fn random_decompositions_are_nash_with_consistent_payoffs() {
    let ref mut rng = SmallRng::seed_from_u64(0xDECAF);
    for _ in 0..96 {
        let game = games::random(rng, 2);
        let support = Support::full(&game);
        let nash = PureSolver::default().solve(&game, &support).expect("solve");
        let perfect = Decomposer::new(PureSolver::default())
            .decompose(&game, &support)
            .expect("decompose");
        for equilibrium in perfect.iter() {
            assert!(nash.contains(equilibrium.profile()), "{}", game);
            let payoffs = equilibrium.profile().payoffs(&game);
            for (a, b) in payoffs.iter().zip(equilibrium.payoff().payoffs()) {
                assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
