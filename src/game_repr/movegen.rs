use std::sync::LazyLock;

use super::bitboards::{squares, MoveTables, SQUARES};
use super::{Color, MoveSet, Position, Type};

/// Process-wide generator used by [`Position`]; tables are built on first use
pub static MOVE_GENERATOR: LazyLock<MoveGenerator> = LazyLock::new(MoveGenerator::new);

/// Pseudo-legal move generator.
///
/// Holds only the precomputed movement tables. Every call to
/// [`MoveGenerator::generate`] builds and returns a fresh [`MoveSet`], so a
/// single generator can be shared between threads.
///
/// Moves are pseudo-legal: piece geometry, blocking and capture rules are
/// applied, but nothing checks whether the mover's general is left attacked.
/// Generals produce no moves here.
pub struct MoveGenerator {
    pub(crate) tables: Box<MoveTables>,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self {
            tables: Box::new(MoveTables::new()),
        }
    }

    pub fn tables(&self) -> &MoveTables {
        &self.tables
    }

    /// Every pseudo-legal move of `side` in `position`
    pub fn generate(&self, position: &Position, side: Color) -> MoveSet {
        let mut moves = MoveSet::new();

        for idx in squares(position.occupied_by(side)) {
            self.piece_moves_into(position, idx, &mut moves);
        }

        log::trace!("generated {} moves for {:?}", moves.len(), side);
        moves
    }

    /// Add the moves of the piece on `idx` to `moves`. Empty squares add nothing.
    pub fn piece_moves_into(&self, position: &Position, idx: usize, moves: &mut MoveSet) {
        debug_assert!(idx < SQUARES, "square {} is off the board", idx);

        let Some(piece) = position.piece_at(idx) else {
            return;
        };

        let targets = match piece.piece_type {
            Type::Rook => self.rook_targets(position, idx, piece.color),
            Type::Cannon => self.cannon_targets(position, idx, piece.color),
            Type::Horse => self.horse_targets(position, idx, piece.color),
            Type::Advisor => self.advisor_targets(position, idx, piece.color),
            Type::Elephant => self.elephant_targets(position, idx, piece.color),
            Type::Pawn => self.pawn_targets(position, idx, piece.color),
            Type::General => return,
        };

        moves.extend_from(idx, targets);
    }
}
