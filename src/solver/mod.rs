//! Equilibrium finders invoked on (sub)games.
//!
//! - [`Solver`] — The pluggable seam: a game and a support in, equilibria out
//! - [`PureSolver`] — Exhaustive pure-strategy enumeration
//! - [`Progress`] — Iterate tags reported to an optional observer
//! - [`Cancelled`] — Cooperative cancellation, always surfaced as an error

mod odometer;
mod progress;
mod pure;
mod solver;

pub use odometer::*;
pub use progress::*;
pub use pure::*;
pub use solver::*;
