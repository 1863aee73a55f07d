use crate::Grid;
use std::hash::BuildHasher;

/// How a generation is summarized before it enters the history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FingerprintKind {
    /// Number of alive cells. Cheap and lossy: different layouts with equal
    /// population collide.
    #[default]
    Population,
    /// Keyed hash of the whole cell layout.
    ///
    /// Not the classic behaviour: a blinker that keeps its population is seen
    /// as period 2 instead of period 1.
    Positional,
}

pub fn fingerprint(grid: &Grid, kind: FingerprintKind) -> u64 {
    match kind {
        FingerprintKind::Population => grid.population(),
        FingerprintKind::Positional => {
            // fixed keys, so equal grids give equal fingerprints across runs
            let state = ahash::RandomState::with_seeds(
                0x243f_6a88_85a3_08d3,
                0x1319_8a2e_0370_7344,
                0xa409_3822_299f_31d0,
                0x082e_fa98_ec4e_6c89,
            );
            BuildHasher::hash_one(&state, grid)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvergenceMode {
    /// Converged as soon as some stride divides the history exactly.
    Strict,
    /// Converged when the best agreement count reaches `threshold`.
    Graded { threshold: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvergenceReport {
    /// First stride whose residue classes are all uniform, if any.
    Strict { stride: Option<usize> },
    /// Best scaled agreement over all strides, in `[0, capacity]`.
    Graded { strength: usize, threshold: usize },
}

impl ConvergenceReport {
    pub fn is_converged(&self) -> bool {
        match *self {
            ConvergenceReport::Strict { stride } => stride.is_some(),
            ConvergenceReport::Graded {
                strength,
                threshold,
            } => strength >= threshold,
        }
    }
}

/// Detects static and oscillating patterns from a ring buffer of fingerprints.
///
/// Slots start zeroed. Until the buffer has been filled once, stale zeros take
/// part in the comparison, so an all-zero fingerprint sequence converges early.
#[derive(Clone, Debug)]
pub struct ConvergenceDetector {
    history: Vec<u64>,
    cursor: usize,
    mode: ConvergenceMode,
}

impl ConvergenceDetector {
    pub const DEFAULT_CAPACITY: usize = 16;

    /// `capacity` must be even and at least 4, otherwise no stride can be tested.
    pub fn new(capacity: usize, mode: ConvergenceMode) -> Self {
        assert!(
            capacity >= 4 && capacity % 2 == 0,
            "history capacity must be even and >= 4, got {}",
            capacity
        );
        Self {
            history: vec![0; capacity],
            cursor: 0,
            mode,
        }
    }

    pub fn capacity(&self) -> usize {
        self.history.len()
    }

    pub fn mode(&self) -> ConvergenceMode {
        self.mode
    }

    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Forgets every recorded fingerprint.
    pub fn reset(&mut self) {
        self.history.fill(0);
        self.cursor = 0;
    }

    /// Records the fingerprint of the latest generation and re-evaluates.
    pub fn insert(&mut self, fingerprint: u64) -> ConvergenceReport {
        self.history[self.cursor] = fingerprint;
        self.cursor = (self.cursor + 1) % self.history.len();
        self.evaluate()
    }

    pub fn evaluate(&self) -> ConvergenceReport {
        match self.mode {
            ConvergenceMode::Strict => ConvergenceReport::Strict {
                stride: self.strides().find(|&s| self.matches_exactly(s)),
            },
            ConvergenceMode::Graded { threshold } => ConvergenceReport::Graded {
                strength: self
                    .strides()
                    .map(|s| self.agreement(s))
                    .max()
                    .unwrap_or(0),
                threshold,
            },
        }
    }

    fn strides(&self) -> std::ops::Range<usize> {
        1..self.history.len() / 2
    }

    /// Every residue class modulo `stride` holds a single value.
    fn matches_exactly(&self, stride: usize) -> bool {
        self.history
            .iter()
            .zip(&self.history[stride..])
            .all(|(a, b)| a == b)
    }

    /// Agreeing same-residue pairs `slot[i] == slot[i + stride]`, scaled to `[0, capacity]`.
    ///
    /// Only an exact match at `stride` reaches `capacity`.
    fn agreement(&self, stride: usize) -> usize {
        let n = self.history.len();
        let pairs = n - stride;
        let agreeing = self
            .history
            .iter()
            .zip(&self.history[stride..])
            .filter(|(a, b)| a == b)
            .count();
        agreeing * n / pairs
    }
}
