//! Behavior profiles and their expected payoffs.

mod profile;

pub use profile::*;
