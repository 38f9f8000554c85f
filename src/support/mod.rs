//! Behavior supports: which actions remain usable at each infoset.

mod support;

pub use support::*;
