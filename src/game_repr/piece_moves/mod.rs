//! One file per piece type. Each routine returns the target squares for a
//! single origin; [`MoveGenerator`](super::movegen::MoveGenerator) records them.

mod advisor;
mod cannon;
mod elephant;
mod horse;
mod pawn;
mod rook;
