use std::io::{stdout, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use candy_lane::core::SimConfig;
use candy_lane::sim::{OutputFormat, Simulation};

#[derive(Debug, Parser)]
#[command(name = "candysim", version)]
#[command(about = "Simulates games of Candy Lane to see how long they take")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = 1)]
    players: usize,

    /// Number of games to simulate
    #[arg(short = 'n', long = "games", visible_alias = "n", default_value_t = 10_000)]
    games: usize,

    /// Play one game and print every turn
    #[arg(short, long)]
    verbose: bool,

    /// Allow backwards candy jumps
    #[arg(long = "allow-back", default_value_t = true, action = ArgAction::Set)]
    allow_back: bool,

    /// Seed the deck once for a reproducible run (default: reseed from the clock on every reshuffle)
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a game with no winner after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Write the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        let mut config = SimConfig::new()
            .with_players(self.players)
            .with_games(self.games)
            .with_verbose(self.verbose)
            .with_allow_back(self.allow_back);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_turns) = self.max_turns {
            config = config.with_max_turns(max_turns);
        }
        config
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut sim = Simulation::new(args.config()).context("invalid simulation setup")?;

    let mut out = BufWriter::new(stdout().lock());
    sim.report(&mut out, args.format())
        .context("simulation failed")?;
    out.flush()?;
    Ok(())
}
