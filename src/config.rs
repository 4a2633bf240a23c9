//! Command-line configuration for the `xiangqi_engine` binary.
//!
//! Logging is configured separately through `RUST_LOG`.

use clap::{Parser, Subcommand};

use crate::game_repr::START_FEN;

#[derive(Debug, Parser)]
#[command(name = "xiangqi_engine", about = "Xiangqi pseudo-legal move generator")]
pub struct Cli {
    /// Position to start from, in Xiangqi FEN
    #[arg(long, global = true, default_value = START_FEN)]
    pub fen: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the pseudo-legal moves of the side to move
    Moves,
    /// Count leaf nodes of the move tree
    Perft {
        depth: u32,
        /// Split root moves across the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Perft count below each root move
    Divide { depth: u32 },
}
