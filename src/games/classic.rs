use crate::*;

/// P1 chooses `L` (ending at (2, 2)) or `R`, after which P1 and P2 play a
/// 2×2 coordination game without observing each other.
///
/// ```text
///          a        b
///   A   (3, 1)   (0, 0)
///   B   (0, 0)   (1, 3)
/// ```
///
/// Infosets: P1 #0 at the root, P1 #1 for the row choice, P2 #0 for the
/// column choice. The only proper subgame below the root starts at `R`.
pub fn sequential() -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let first = game.new_infoset(Turn::Choice(0), ["L", "R"]);
    let row = game.new_infoset(Turn::Choice(0), ["A", "B"]);
    let col = game.new_infoset(Turn::Choice(1), ["a", "b"]);
    let root = game.root();
    let [left, right] = <[_; 2]>::try_from(game.append(root, first)).expect("two actions");
    let early = game.new_outcome([2., 2.]);
    game.attach(left, early);
    let table = [[[3., 1.], [0., 0.]], [[0., 0.], [1., 3.]]];
    for (r, node) in game.append(right, row).into_iter().enumerate() {
        for (c, leaf) in game.append(node, col).into_iter().enumerate() {
            let outcome = game.new_outcome(table[r][c]);
            game.attach(leaf, outcome);
        }
    }
    game
}

/// Matching pennies: P1 wins on a match, P2 on a mismatch. No pure
/// equilibrium, and no subgame below the root.
pub fn pennies() -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let first = game.new_infoset(Turn::Choice(0), ["H", "T"]);
    let second = game.new_infoset(Turn::Choice(1), ["H", "T"]);
    let root = game.root();
    for (a, node) in game.append(root, first).into_iter().enumerate() {
        for (b, leaf) in game.append(node, second).into_iter().enumerate() {
            let sign = if a == b { 1. } else { -1. };
            let outcome = game.new_outcome([sign, -sign]);
            game.attach(leaf, outcome);
        }
    }
    game
}

/// Centipede game of `depth` stages. Stage `k` belongs to player `k % 2`,
/// who may `take` (paying themself `k + 2` and the other `k`) or `pass`.
/// Passing through every stage pays (`depth`, `depth`). Every decision
/// node roots a subgame; the unique subgame perfect play is to take at once.
pub fn centipede(depth: usize) -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let mut node = game.root();
    for k in 0..depth {
        let mover = k % 2;
        let infoset = game.new_infoset(Turn::Choice(mover), ["take", "pass"]);
        let [take, pass] = <[_; 2]>::try_from(game.append(node, infoset)).expect("two actions");
        let mut payoffs = [k as Utility; 2];
        payoffs[mover] += 2.;
        let outcome = game.new_outcome(payoffs);
        game.attach(take, outcome);
        node = pass;
    }
    let end = game.new_outcome([depth as Utility; 2]);
    game.attach(node, end);
    game
}

/// Fair coin, then P1 decides knowing the result. Heads pays 3 to `keep`
/// and -1 to `swap`; tails pays 1 to `keep` and 2 to `swap`. Zero-sum.
pub fn lottery() -> Game {
    let mut game = Game::new(["P1", "P2"]);
    let coin = game.new_chance([("heads", 0.5), ("tails", 0.5)]);
    let root = game.root();
    let flips = game.append(root, coin);
    for (flip, payoffs) in flips.into_iter().zip([[3., -1.], [1., 2.]]) {
        let infoset = game.new_infoset(Turn::Choice(0), ["keep", "swap"]);
        for (leaf, u) in game.append(flip, infoset).into_iter().zip(payoffs) {
            let outcome = game.new_outcome([u, -u]);
            game.attach(leaf, outcome);
        }
    }
    game
}

/// A game with no moves at all, one player per payoff.
pub fn trivial<const K: usize>(payoffs: [Utility; K]) -> Game {
    let mut game = Game::new((1..=K).map(|p| format!("P{}", p)));
    let outcome = game.new_outcome(payoffs);
    let root = game.root();
    game.attach(root, outcome);
    game
}
