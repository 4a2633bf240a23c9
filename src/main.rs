use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use xiangqi_engine::config::{Cli, Command};
use xiangqi_engine::game_repr::{square_name, Position};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let pos = Position::from_fen(&cli.fen).with_context(|| format!("invalid FEN: {}", cli.fen))?;
    log::info!("loaded position {}", pos.to_fen());

    match cli.command {
        Command::Moves => {
            let moves = pos.pseudo_legal_moves();
            for from in pos.piece_squares(pos.side_to_move) {
                let targets = moves.target_squares(from);
                if targets.is_empty() {
                    continue;
                }
                let names: Vec<String> = targets.iter().map(|&to| square_name(to)).collect();
                println!("{}: {}", square_name(from), names.join(" "));
            }
            println!("\nTotal: {}", moves.len());
        }
        Command::Perft { depth, parallel } => {
            let start = Instant::now();
            let nodes = if parallel { pos.perft_parallel(depth) } else { pos.perft(depth) };
            let duration = start.elapsed();

            println!("Result: {} nodes", nodes);
            println!("Time: {:.2}s", duration.as_secs_f64());
            println!("Nodes/sec: {:.0}", nodes as f64 / duration.as_secs_f64());
        }
        Command::Divide { depth } => {
            let mut total = 0;
            for (mv, count) in pos.divide(depth) {
                println!("{}: {}", mv, count);
                total += count;
            }
            println!("\nTotal: {}", total);
        }
    }

    Ok(())
}
