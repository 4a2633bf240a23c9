use crate::game_repr::bitboards::Bitboard;
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    pub(crate) fn advisor_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        self.tables.advisor[friendly.index()][idx] & !position.occupied_by(friendly)
    }
}
