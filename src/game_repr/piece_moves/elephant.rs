use crate::game_repr::bitboards::{square_bb, step, Bitboard, Direction};
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    pub(crate) fn elephant_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        let mut targets = self.tables.elephant[friendly.index()][idx];

        // a piece on the diagonal midpoint blocks the jump behind it
        for dir in Direction::DIAGONAL {
            let Some(eye) = step(idx, dir) else {
                continue;
            };
            if !position.is_occupied(eye) {
                continue;
            }
            if let Some(target) = step(eye, dir) {
                targets &= !square_bb(target);
            }
        }

        targets & !position.occupied_by(friendly)
    }
}
