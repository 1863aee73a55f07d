mod config;
mod edge_policy;
mod fps_limit;
mod parse_board;

pub use config::Config;
pub use edge_policy::EdgePolicy;
pub use fps_limit::FramePacer;
pub use parse_board::{load_board, parse_board, write_board};
