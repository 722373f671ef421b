//! Command-line benchmark driver for `moo_rs` strategies.
//!
//! ```bash
//! # 1000 exhaustive-search sessions at difficulty 4 on 8 workers
//! moo_runner --runs 1000 --workers 8
//!
//! # play a session yourself
//! moo_runner --strategy interactive --workers 1
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use moo_rs::{harness::Harness, Strategy};
use moo_strategies::{Dedup, Exhaustive, Interactive, Random};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of digits in the secret code (1 to 10)
    #[arg(short, long, default_value_t = 4)]
    difficulty: usize,

    /// Number of benchmark sessions to run
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Number of worker threads (defaults to the CPU count)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Capacity of the bounded job queue
    #[arg(long, default_value_t = 1000)]
    queue_capacity: usize,

    /// Guessing strategy to benchmark
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Exhaustive)]
    strategy: StrategyKind,

    /// Stop a session after this many rounds and count it as unsolved
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Log every recorded session
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyKind {
    /// Fresh random guess every round
    Random,
    /// Random guesses, never repeated within a session
    Dedup,
    /// Candidate filtering, guaranteed to terminate
    Exhaustive,
    /// Human input over stdin
    Interactive,
}

impl StrategyKind {
    fn build(self, difficulty: usize) -> Result<Box<dyn Strategy>> {
        Ok(match self {
            StrategyKind::Random => Box::new(Random::new(difficulty)?),
            StrategyKind::Dedup => Box::new(Dedup::new(difficulty)?),
            StrategyKind::Exhaustive => Box::new(Exhaustive::new(difficulty)?),
            StrategyKind::Interactive => Box::new(Interactive::new(difficulty)?),
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
    debug!(?args, "parsed configuration");

    let mut harness = Harness::new()
        .difficulty(args.difficulty)
        .workers(args.workers.unwrap_or_else(num_cpus::get))
        .queue_capacity(args.queue_capacity)
        .max_rounds(args.max_rounds);
    if args.verbose {
        harness = harness.verbose();
    }
    for _ in 0..args.runs {
        harness = harness.add_strategy(args.strategy.build(args.difficulty)?);
    }

    harness.run_and_summarize()?;

    Ok(())
}
