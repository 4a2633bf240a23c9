use crate::game_repr::bitboards::Bitboard;
use crate::game_repr::movegen::MoveGenerator;
use crate::game_repr::{Color, Position};

impl MoveGenerator {
    /// Single steps only, so nothing can block a pawn
    pub(crate) fn pawn_targets(&self, position: &Position, idx: usize, friendly: Color) -> Bitboard {
        self.tables.pawn[friendly.index()][idx] & !position.occupied_by(friendly)
    }
}
