//! Nash equilibria of finite extensive-form games by subgame decomposition.
//!
//! Rather than handing a whole game tree to an equilibrium finder, the
//! [`Decomposer`] splits the tree at every proper subgame root, solves each
//! subgame bottom-up with a pluggable [`Solver`], collapses solved subgames
//! into terminal payoffs, and reassembles the partial solutions into
//! full-game equilibria.
//!
//! # Module Structure
//!
//! - `tree` — Game tree arena (nodes, infosets, outcomes, subgame predicate)
//! - `vector` — Partitioned vectors addressed by player, infoset, action
//! - `support` — Behavior supports (which actions remain usable)
//! - `profile` — Behavior profiles and expected payoffs
//! - `solver` — The [`Solver`] seam and the pure-strategy reference solver
//! - `subgame` — Recursive subgame decomposition
//! - `games` — Reference games and random tree generation

pub mod games;
mod profile;
mod solver;
mod subgame;
mod support;
mod tree;
mod vector;

pub use profile::*;
pub use solver::*;
pub use subgame::*;
pub use support::*;
pub use tree::*;
pub use vector::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, expected values, and deviation gains.
pub type Utility = f64;
/// Behavior strategy weights and chance odds.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and demos.
pub trait Arbitrary: Sized {
    /// Generate an instance from the given source of randomness.
    fn sample(rng: &mut impl rand::Rng) -> Self;
    /// Generate an instance from the thread-local generator.
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

// ============================================================================
// SOLVER PARAMETERS
// ============================================================================
/// Slack allowed before a unilateral deviation counts as profitable.
pub const PAYOFF_TOLERANCE: Utility = 1e-9;
/// Depth of trees produced by [`Arbitrary`] for [`Game`].
pub const RANDOM_DEPTH: usize = 4;
/// Chance that a generated node ends the game early.
pub const RANDOM_TERMINAL: Probability = 0.25;
/// Chance that a generated decision joins an existing infoset.
pub const RANDOM_JOIN: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory receiving timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    std::fs::create_dir_all(LOG_DIRECTORY).expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))
            .expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
