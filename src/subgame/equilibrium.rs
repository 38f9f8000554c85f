use crate::*;
use serde::Serialize;

/// A full-game equilibrium found by decomposition: a behavior profile over
/// the caller's support, and the expected payoff it realizes at the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    profile: Profile,
    payoff: Outcome,
}

impl Equilibrium {
    pub fn new(profile: Profile, payoff: Outcome) -> Self {
        Self { profile, payoff }
    }
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn payoff(&self) -> &Outcome {
        &self.payoff
    }
    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.profile, self.payoff)
    }
}
