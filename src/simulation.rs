use crate::{
    apply_rule, count_board, fingerprint, load_board, Config, ConvergenceDetector,
    ConvergenceReport, FramePacer, Grid, NeighborCounts,
};
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Read-only view of the generation about to be stepped.
pub struct Frame<'a> {
    pub grid: &'a Grid,
    /// Present only when neighbor coloring is enabled.
    pub counts: Option<&'a NeighborCounts>,
    pub generation: u64,
    pub population: u64,
    pub fps: f64,
}

/// Consumer of rendered generations.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> Result<()>;

    /// Polled once per frame; `true` ends [`Simulation::run`].
    fn should_stop(&mut self) -> Result<bool> {
        Ok(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReseedReason {
    Converged,
    GenerationCap,
}

#[derive(Clone, Copy, Debug)]
pub struct StepOutcome {
    /// Generation reached by this step (before any reseed).
    pub generation: u64,
    pub changed: usize,
    pub report: ConvergenceReport,
    pub reseeded: Option<ReseedReason>,
}

pub struct Simulation {
    config: Config,
    grid: Grid,
    detector: ConvergenceDetector,
    rng: ChaCha8Rng,
    generation: u64,
}

impl Simulation {
    /// Starts from the configured board file, or from a random field.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let mut rng = if let Some(x) = config.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let grid = match &config.board {
            Some(path) => load_board(path, config.width, config.height)?,
            None => {
                let mut grid = Grid::blank(config.width, config.height);
                grid.randomize(&mut rng, config.density);
                grid
            }
        };
        Ok(Self::from_parts(config, grid, rng))
    }

    /// Starts from the given field, which must match the configured size.
    pub fn with_grid(config: Config, grid: Grid) -> Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            grid.size() == (config.width, config.height),
            "grid is {:?}, expected {}x{}",
            grid.size(),
            config.width,
            config.height
        );
        let rng = match config.seed {
            Some(x) => ChaCha8Rng::seed_from_u64(x),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::from_parts(config, grid, rng))
    }

    fn from_parts(config: Config, grid: Grid, rng: ChaCha8Rng) -> Self {
        let detector = ConvergenceDetector::new(config.history_capacity, config.convergence_mode);
        log::info!(
            "starting {}x{} simulation: {:?} edges, {:?} detection over {} generations, cap {}",
            config.width,
            config.height,
            config.edge_policy,
            config.convergence_mode,
            config.history_capacity,
            config.max_generations
        );
        Self {
            config,
            grid,
            detector,
            rng,
            generation: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn detector(&self) -> &ConvergenceDetector {
        &self.detector
    }

    /// Neighbor counts of the current generation.
    pub fn counts(&self) -> NeighborCounts {
        count_board(&self.grid, self.config.edge_policy)
    }

    /// Advances one generation, reseeding on convergence or at the generation cap.
    pub fn step(&mut self) -> StepOutcome {
        let counts = self.counts();
        self.step_with_counts(&counts)
    }

    fn step_with_counts(&mut self, counts: &NeighborCounts) -> StepOutcome {
        let transition = apply_rule(&self.grid, counts);
        self.grid = transition.grid;
        self.generation += 1;

        let fp = fingerprint(&self.grid, self.config.fingerprint);
        let report = self.detector.insert(fp);
        log::trace!(
            "generation {}: fingerprint {}, {} cells changed",
            self.generation,
            fp,
            transition.changed
        );

        let reseeded = if report.is_converged() {
            log::debug!("generation {}: {:?}", self.generation, report);
            Some(ReseedReason::Converged)
        } else if self.generation >= self.config.max_generations {
            Some(ReseedReason::GenerationCap)
        } else {
            None
        };
        let outcome = StepOutcome {
            generation: self.generation,
            changed: transition.changed,
            report,
            reseeded,
        };
        if let Some(reason) = reseeded {
            log::info!("reseeding after generation {}: {:?}", self.generation, reason);
            self.reseed();
        }
        outcome
    }

    /// Replaces the field with a random one and forgets the fingerprint history.
    pub fn reseed(&mut self) {
        self.grid.randomize(&mut self.rng, self.config.density);
        self.detector.reset();
        self.generation = 0;
    }

    /// Renders and steps until the sink asks to stop or fails.
    pub fn run(&mut self, sink: &mut impl RenderSink, pacer: &mut FramePacer) -> Result<()> {
        while !sink.should_stop()? {
            let counts = self.counts();
            sink.render(&Frame {
                grid: &self.grid,
                counts: self.config.neighbor_colors.then_some(&counts),
                generation: self.generation,
                population: self.grid.population(),
                fps: pacer.fps(),
            })?;
            let outcome = self.step_with_counts(&counts);
            if outcome.reseeded.is_some() {
                pacer.pause(self.config.reseed_pause);
            }
            pacer.delay();
        }
        Ok(())
    }
}
