//! Reference games for tests, benchmarks, and the `solve` binary.
//!
//! - `sequential()` — A first move, then a 2×2 simultaneous subgame
//! - `pennies()` — Matching pennies, no proper subgame below the root
//! - `centipede(depth)` — Take-or-pass chain of nested subgames
//! - `lottery()` — Chance move followed by one decision per outcome
//! - `trivial(payoffs)` — A lone terminal root
//! - `random(rng, depth)` — Random trees with straddling infosets

mod classic;
mod random;

pub use classic::*;
pub use random::*;
