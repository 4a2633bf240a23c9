use crate::game_repr::bitboards::{ray, square_bb, Bitboard, Direction};
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    /// Quiet moves like a rook up to the first piece (the screen). Past the
    /// screen only the next occupied square counts, as a capture if it is an enemy.
    pub(crate) fn cannon_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        let mut targets = 0;

        for dir in Direction::ORTHOGONAL {
            let mut in_attack_mode = false;

            for sq in ray(idx, dir) {
                match (in_attack_mode, position.piece_at(sq)) {
                    (false, None) => targets |= square_bb(sq),
                    (false, Some(_)) => in_attack_mode = true,
                    (true, None) => {}
                    (true, Some(piece)) => {
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
