use crate::*;
use petgraph::stable_graph::NodeIndex;
use rand::Rng;

/// Random two-player tree of at most `depth` levels of decisions.
///
/// Below the root each node ends the game with probability
/// [`RANDOM_TERMINAL`]. Decision nodes belong to chance or to either
/// player; a player node joins an infoset already opened on the same
/// level (same owner and width) with probability [`RANDOM_JOIN`], which
/// is how information sets come to straddle would-be subgame boundaries.
/// Leaves pay small integers.
pub fn random(rng: &mut impl Rng, depth: usize) -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let mut frontier = vec![game.root()];
    for level in 0..depth {
        let mut opened = Vec::<InfosetIndex>::new();
        let mut next = Vec::new();
        for node in frontier {
            if level > 0 && rng.random_bool(RANDOM_TERMINAL) {
                payout(&mut game, node, rng);
                continue;
            }
            let infoset = match rng.random_range(0..5) {
                0 => game.new_chance([("heads", 0.5), ("tails", 0.5)]),
                n => {
                    let turn = Turn::Choice(n % 2);
                    let width = rng.random_range(2..=3);
                    let existing = opened
                        .iter()
                        .copied()
                        .filter(|i| game.infoset(*i).turn() == turn)
                        .filter(|i| game.infoset(*i).width() == width)
                        .last();
                    match existing {
                        Some(infoset) if rng.random_bool(RANDOM_JOIN) => infoset,
                        _ => {
                            let actions = ["left", "middle", "right"];
                            let infoset = game.new_infoset(turn, actions.into_iter().take(width));
                            opened.push(infoset);
                            infoset
                        }
                    }
                }
            };
            next.extend(game.append(node, infoset));
        }
        frontier = next;
    }
    for node in frontier {
        payout(&mut game, node, rng);
    }
    game
}

fn payout(game: &mut Game, node: NodeIndex, rng: &mut impl Rng) {
    let payoffs = [rng.random_range(-3..=3) as Utility, rng.random_range(-3..=3) as Utility];
    let outcome = game.new_outcome(payoffs);
    game.attach(node, outcome);
}

impl Arbitrary for Game {
    fn sample(rng: &mut impl Rng) -> Self {
        random(rng, RANDOM_DEPTH)
    }
}
