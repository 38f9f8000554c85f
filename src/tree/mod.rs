//! Game tree primitives for extensive-form games.
//!
//! This module defines the arena that stores a game:
//! - Turn types (player or chance)
//! - Information sets, their actions, members, and correspondence labels
//! - Outcomes (per-player payoffs) and the outcome synthesizer
//! - The [`Game`] arena itself, with the subgame-root predicate and the
//!   structural surgery (copy, truncate, prune) used by decomposition

mod game;
mod infoset;
mod label;
mod outcome;
mod subgame;
mod surgery;
mod turn;
mod vertex;

pub use game::*;
pub use infoset::*;
pub use label::*;
pub use outcome::*;
pub use turn::*;
pub use vertex::*;
