use super::{Color, Type, piece::Piece};

pub mod geometry;
pub mod tables;
pub use geometry::*;
pub use tables::*;

/// One bit per board square, bit `i` is square `i` (rank = i / 9, file = i % 9)
pub type Bitboard = u128;

/// All 90 squares of the board
pub const BOARD_MASK: Bitboard = (1u128 << SQUARES) - 1;

/// Bitboard representation using 14 u128 values (7 piece types x 2 colors)
#[derive(Clone, Copy, Debug)]
pub struct Bitboards {
    /// 14 piece-specific bitboards indexed by [color * 7 + piece_type]
    /// Red:   0=General, 1=Advisor, 2=Elephant, 3=Horse, 4=Rook, 5=Cannon, 6=Pawn
    /// Black: 7=General, ... 13=Pawn
    pieces: [Bitboard; 14],
}

impl Bitboards {
    /// Create empty bitboards
    pub fn empty() -> Self {
        Self {
            pieces: [0; 14],
        }
    }

    /// Convert from 90-element mailbox to bitboards
    pub fn from_array(squares: &[Option<Piece>; SQUARES]) -> Self {
        let mut bitboards = Self::empty();

        for (idx, piece) in squares.iter().enumerate() {
            if let Some(piece) = piece {
                bitboards.add_piece(piece.color, piece.piece_type, idx);
            }
        }

        bitboards
    }

    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> Bitboard {
        self.pieces[piece_type_to_index(color, piece_type)]
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> Bitboard {
        let base = color.index() * 7;
        self.pieces[base..base + 7].iter().fold(0, |acc, bb| acc | bb)
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> Bitboard {
        self.occupied_by_color(Color::Red) | self.occupied_by_color(Color::Black)
    }

    /// Update a piece position (move from one square to another)
    pub fn move_piece(&mut self, color: Color, piece_type: Type, from: usize, to: usize) {
        let idx = piece_type_to_index(color, piece_type);
        self.pieces[idx] &= !square_bb(from);
        self.pieces[idx] |= square_bb(to);
    }

    pub fn remove_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[piece_type_to_index(color, piece_type)] &= !square_bb(square);
    }

    pub fn add_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[piece_type_to_index(color, piece_type)] |= square_bb(square);
    }
}

#[inline(always)]
fn piece_type_to_index(color: Color, piece_type: Type) -> usize {
    color.index() * 7 + piece_type.index()
}

#[inline(always)]
pub const fn square_bb(square: usize) -> Bitboard {
    1u128 << square
}

#[inline(always)]
pub const fn rank_of(square: usize) -> usize {
    square / FILES
}

#[inline(always)]
pub const fn file_of(square: usize) -> usize {
    square % FILES
}

#[inline(always)]
pub const fn square_at(rank: usize, file: usize) -> usize {
    rank * FILES + file
}

/// ICCS coordinate of a square: file `a`..`i`, rank `0`..`9` counted from Red's back rank
pub fn square_name(square: usize) -> String {
    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'0' + (RANKS - 1 - rank_of(square)) as u8) as char;
    format!("{}{}", file, rank)
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut Bitboard) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}

#[inline]
pub fn popcount(bb: Bitboard) -> u32 {
    bb.count_ones()
}

/// Iterate the squares of a bitboard in ascending order
pub fn squares(bb: Bitboard) -> Squares {
    Squares(bb)
}

#[derive(Clone, Copy, Debug)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bitboards() {
        let bb = Bitboards::empty();
        assert_eq!(bb.all_occupied(), 0);
    }

    #[test]
    fn test_occupied_by_color() {
        let mut bb = Bitboards::empty();
        bb.add_piece(Color::Red, Type::Pawn, 54);
        bb.add_piece(Color::Red, Type::Rook, 89);
        bb.add_piece(Color::Black, Type::Cannon, 19);

        assert_eq!(bb.occupied_by_color(Color::Red), square_bb(54) | square_bb(89));
        assert_eq!(bb.occupied_by_color(Color::Black), square_bb(19));
        assert_eq!(bb.pieces_of_type(Color::Black, Type::Cannon), square_bb(19));
    }

    #[test]
    fn test_move_and_remove_piece() {
        let mut bb = Bitboards::empty();
        bb.add_piece(Color::Black, Type::Horse, 1);
        bb.move_piece(Color::Black, Type::Horse, 1, 20);
        assert_eq!(bb.all_occupied(), square_bb(20));

        bb.remove_piece(Color::Black, Type::Horse, 20);
        assert_eq!(bb.all_occupied(), 0);
    }

    #[test]
    fn test_pop_lsb_high_squares() {
        let mut bb = square_bb(3) | square_bb(89);
        assert_eq!(pop_lsb(&mut bb), 3);
        assert_eq!(pop_lsb(&mut bb), 89);
        assert_eq!(bb, 0);
    }

    #[test]
    fn test_squares_iterator() {
        let bb = square_bb(0) | square_bb(45) | square_bb(88);
        assert_eq!(squares(bb).collect::<Vec<_>>(), vec![0, 45, 88]);
        assert_eq!(squares(bb).len(), 3);
        assert_eq!(popcount(BOARD_MASK), 90);
    }

    #[test]
    fn test_square_names() {
        // Red's back-rank left corner is a0, Black's is a9
        assert_eq!(square_name(square_at(9, 0)), "a0");
        assert_eq!(square_name(square_at(0, 8)), "i9");
        assert_eq!(square_name(square_at(7, 7)), "h2");
    }
}
