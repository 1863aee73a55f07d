use crate::{ConvergenceDetector, ConvergenceMode, EdgePolicy, FingerprintKind};
use anyhow::{ensure, Result};
use std::{path::PathBuf, time::Duration};

/// Resolved settings of a simulation run.
#[derive(Clone, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub frame_delay: Duration,
    pub reseed_pause: Duration,
    pub edge_policy: EdgePolicy,
    pub convergence_mode: ConvergenceMode,
    /// Number of fingerprints kept by the detector.
    pub history_capacity: usize,
    pub fingerprint: FingerprintKind,
    /// The field is reseeded once this many generations pass without convergence.
    pub max_generations: u64,
    /// Probability of a cell being alive after reseeding.
    pub density: f64,
    pub seed: Option<u64>,
    /// Initial pattern; later reseeds are random.
    pub board: Option<PathBuf>,
    /// Color alive cells by their neighbor count.
    pub neighbor_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            frame_delay: Duration::from_millis(Self::FRAME_DELAY_MS),
            reseed_pause: Duration::from_millis(Self::RESEED_PAUSE_MS),
            edge_policy: EdgePolicy::Clamped,
            convergence_mode: ConvergenceMode::Strict,
            history_capacity: ConvergenceDetector::DEFAULT_CAPACITY,
            fingerprint: FingerprintKind::Population,
            max_generations: Self::MAX_GENERATIONS,
            density: Self::DENSITY,
            seed: None,
            board: None,
            neighbor_colors: false,
        }
    }
}

impl Config {
    pub const WIDTH: usize = 60;
    pub const HEIGHT: usize = 40;
    pub const FRAME_DELAY_MS: u64 = 100;
    pub const RESEED_PAUSE_MS: u64 = 2000;
    pub const MAX_GENERATIONS: u64 = 5000;
    pub const DENSITY: f64 = 0.3;

    /// Checks the constraints that span several fields.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= 1 && self.height >= 1,
            "grid must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.history_capacity >= 4 && self.history_capacity % 2 == 0,
            "history window must be even and at least 4, got {}",
            self.history_capacity
        );
        if let ConvergenceMode::Graded { threshold } = self.convergence_mode {
            ensure!(
                (1..=self.history_capacity).contains(&threshold),
                "graded threshold must be within 1..={}, got {}",
                self.history_capacity,
                threshold
            );
        }
        ensure!(
            (0.0..=1.0).contains(&self.density),
            "density must be within [0, 1], got {}",
            self.density
        );
        ensure!(self.max_generations >= 1, "generation cap must be positive");
        Ok(())
    }
}
