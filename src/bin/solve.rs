//! Solve Binary
//!
//! Decomposes a reference game into subgames and prints every pure
//! subgame perfect equilibrium found.
//!
//! Options: --game, --depth, --seed, --json, --verbose

use clap::Parser;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use subgames::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Reference {
    Sequential,
    Pennies,
    Centipede,
    Lottery,
    Random,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "sequential")]
    game: Reference,
    #[arg(long, default_value_t = 4, help = "Stages of centipede, levels of random trees")]
    depth: usize,
    #[arg(long, default_value_t = 0, help = "Seed for random trees")]
    seed: u64,
    #[arg(long, help = "Print equilibria as JSON")]
    json: bool,
    #[arg(long, help = "Log solver iterates to the terminal")]
    verbose: bool,
}

impl Args {
    fn build(&self) -> Game {
        match self.game {
            Reference::Sequential => games::sequential(),
            Reference::Pennies => games::pennies(),
            Reference::Centipede => games::centipede(self.depth),
            Reference::Lottery => games::lottery(),
            Reference::Random => games::random(&mut SmallRng::seed_from_u64(self.seed), self.depth),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let game = args.build();
    log::info!("solving {:?} {}", args.game, game);
    let solver = PureSolver::default().with_observer(|progress, profile| log::debug!("{:<10}{}", progress, profile));
    let equilibria = Decomposer::new(solver).decompose(&game, &Support::full(&game))?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&equilibria)?),
        false => equilibria
            .iter()
            .enumerate()
            .for_each(|(i, equilibrium)| println!("{:>2}. {}", i + 1, equilibrium)),
    }
    Ok(())
}
