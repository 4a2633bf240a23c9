use crate::game_repr::bitboards::{step, Bitboard, LEG_JUMPS};
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    pub(crate) fn horse_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        let entry = &self.tables.horse[idx];
        let mut targets = entry.all;

        // an occupied leg square (either color) removes both jumps over it
        for (d, pair) in LEG_JUMPS.iter().enumerate() {
            if let Some(leg) = step(idx, pair.leg) {
                if position.is_occupied(leg) {
                    targets &= !entry.by_leg[d];
                }
            }
        }

        targets & !position.occupied_by(friendly)
    }
}
