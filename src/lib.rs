#![warn(clippy::all)]

mod convergence;
mod engine;
mod grid;
mod neighbors;
mod render;
mod simulation;
mod utils;

pub use convergence::{
    fingerprint, ConvergenceDetector, ConvergenceMode, ConvergenceReport, FingerprintKind,
};
pub use engine::{advance, apply_rule, next_state, Transition};
pub use grid::{Cell, Grid};
pub use neighbors::{count_board, count_neighbors, NeighborCounts};
pub use render::{draw_frame, TerminalRenderer};
pub use simulation::{Frame, ReseedReason, RenderSink, Simulation, StepOutcome};
pub use utils::{load_board, parse_board, write_board, Config, EdgePolicy, FramePacer};
