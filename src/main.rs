#![warn(clippy::all)]

use anyhow::{ensure, Result};
use clap::{builder::TypedValueParser, Parser, ValueEnum};
use conway_term::{
    Config, ConvergenceDetector, ConvergenceMode, EdgePolicy, FingerprintKind, FramePacer,
    Simulation, TerminalRenderer,
};
use std::{path::PathBuf, time::Duration};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Reseed as soon as a stride matches exactly.
    Strict,
    /// Reseed when the agreement count reaches the threshold.
    Graded,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fingerprint {
    Population,
    Positional,
}

/// Conway's Game of Life in the terminal, reseeding once the field settles.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = Config::WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    width: usize,
    #[arg(long, default_value_t = Config::HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    height: usize,
    /// Pause between generations.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = Config::FRAME_DELAY_MS)]
    delay_ms: u64,
    /// Pause after reseeding.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = Config::RESEED_PAUSE_MS)]
    reseed_pause_ms: u64,
    /// Stitch the edges of the field together.
    #[arg(long)]
    torus: bool,
    #[arg(long, value_enum, default_value_t = Mode::Strict)]
    mode: Mode,
    /// Number of generations kept for convergence detection (even).
    #[arg(long, default_value_t = ConvergenceDetector::DEFAULT_CAPACITY)]
    window: usize,
    /// Agreement count that counts as converged in graded mode (defaults to the window).
    #[arg(long)]
    threshold: Option<usize>,
    /// Reseed after this many generations without convergence.
    #[arg(long, default_value_t = Config::MAX_GENERATIONS, value_parser = clap::value_parser!(u64).range(1..))]
    max_generations: u64,
    /// Probability of a cell being alive after reseeding.
    #[arg(long, default_value_t = Config::DENSITY)]
    density: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Initial board: one line per row, any non-space character is alive.
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Fingerprint::Population)]
    fingerprint: Fingerprint,
    /// Color alive cells by their number of neighbors.
    #[arg(long)]
    neighbor_colors: bool,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ensure!(
            cli.threshold.is_none() || matches!(cli.mode, Mode::Graded),
            "--threshold only applies to --mode graded"
        );
        Ok(Config {
            width: cli.width,
            height: cli.height,
            frame_delay: Duration::from_millis(cli.delay_ms),
            reseed_pause: Duration::from_millis(cli.reseed_pause_ms),
            edge_policy: if cli.torus {
                EdgePolicy::Torus
            } else {
                EdgePolicy::Clamped
            },
            convergence_mode: match cli.mode {
                Mode::Strict => ConvergenceMode::Strict,
                Mode::Graded => ConvergenceMode::Graded {
                    threshold: cli.threshold.unwrap_or(cli.window),
                },
            },
            history_capacity: cli.window,
            fingerprint: match cli.fingerprint {
                Fingerprint::Population => FingerprintKind::Population,
                Fingerprint::Positional => FingerprintKind::Positional,
            },
            max_generations: cli.max_generations,
            density: cli.density,
            seed: cli.seed,
            board: cli.board,
            neighbor_colors: cli.neighbor_colors,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::try_from(Cli::parse())?;
    let mut pacer = FramePacer::new(config.frame_delay);
    let mut simulation = Simulation::new(config)?;

    let mut renderer = TerminalRenderer::new()?;
    simulation.run(&mut renderer, &mut pacer)
}
