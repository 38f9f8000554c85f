//! Recursive subgame decomposition.
//!
//! The [`Decomposer`] solves a game bottom-up: every proper subgame is
//! solved first, collapsed into a terminal payoff, and its partial
//! profiles are carried upward until the root is solved. Infosets are
//! matched across the working copies through [`Label`]s and the explicit
//! [`Correspondence`] built when decomposition starts.

mod correspondence;
mod decomposer;
mod equilibrium;
mod partial;

#[cfg(test)]
mod tests;

pub use correspondence::*;
pub use decomposer::*;
pub use equilibrium::*;
pub use partial::*;
