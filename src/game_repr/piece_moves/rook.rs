use crate::game_repr::bitboards::{ray, square_bb, Bitboard, Direction};
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    /// Slide along each orthogonal ray: empty squares are quiet moves, the
    /// first occupied square ends the ray and is a capture if it is an enemy
    pub(crate) fn rook_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        let mut targets = 0;

        for dir in Direction::ORTHOGONAL {
            for sq in ray(idx, dir) {
                match position.piece_at(sq) {
                    None => targets |= square_bb(sq),
                    Some(piece) => {
                        if !piece.is(friendly) {
                            targets |= square_bb(sq);
                        }
                        break;
                    }
                }
            }
        }

        targets
    }
}
