//! Pseudo-legal move generation for Xiangqi (Chinese chess).
//!
//! [`game_repr::MoveGenerator`] precomputes the movement tables once and then
//! produces a fresh [`game_repr::MoveSet`] for any [`game_repr::Position`] and
//! side. Check and pin detection are not part of this crate.

pub mod config;
pub mod game_repr;
