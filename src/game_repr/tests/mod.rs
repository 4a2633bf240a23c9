use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, idx: usize, piece: Piece) {
    pos.set_piece(idx, Some(piece));
}

pub fn red(piece_type: Type) -> Piece {
    Piece::new(Color::Red, piece_type)
}

pub fn black(piece_type: Type) -> Piece {
    Piece::new(Color::Black, piece_type)
}

pub fn generate(pos: &Position, side: Color) -> MoveSet {
    MOVE_GENERATOR.generate(pos, side)
}

/// Helper function to check if a move exists in the move set
pub fn has_move(moves: &MoveSet, from: usize, to: usize) -> bool {
    moves.contains(from, to)
}

/// Sorted targets of one origin
pub fn targets_of(moves: &MoveSet, from: usize) -> Vec<usize> {
    moves.target_squares(from).to_vec()
}

pub fn sq(rank: usize, file: usize) -> usize {
    square_at(rank, file)
}

// ==================== TEST MODULES ====================

mod generator_properties;
