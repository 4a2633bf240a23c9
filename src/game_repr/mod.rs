mod moves;
mod piece;
mod position;
mod piece_moves;
pub mod bitboards;
pub mod movegen;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use bitboards::*;
pub use movegen::*;
