use std::fmt;

use smallvec::SmallVec;

use super::bitboards::{popcount, square_bb, square_name, squares, Bitboard, SQUARES};

/*-------ARCHITECTURE--------*/

// | 2 bits | 7 bits | 7 bits |
// | unused |  From  |   To   |
// |         16 bits          |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    buf: u16,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Move {
        debug_assert!((from as usize) < SQUARES && (to as usize) < SQUARES);
        Self {
            buf: ((from as u16) << 7) | to as u16,
        }
    }

    pub fn from(&self) -> usize {
        ((self.buf >> 7) & 0x7F) as usize
    }

    pub fn to(&self) -> usize {
        (self.buf & 0x7F) as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from()), square_name(self.to()))
    }
}

/// Flat move buffer for iteration during search and perft
pub type MoveList = SmallVec<[Move; 128]>;

/// Set of pseudo-legal moves, stored as one target bitboard per origin square.
/// The per-origin bitboards are the `target_squares` view of the set.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveSet {
    targets: [Bitboard; SQUARES],
    origins: Bitboard,
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSet {
    pub fn new() -> Self {
        Self {
            targets: [0; SQUARES],
            origins: 0,
        }
    }

    pub fn insert(&mut self, mv: Move) {
        self.extend_from(mv.from(), square_bb(mv.to()));
    }

    /// Add every square in `targets` as a move from `from`
    pub fn extend_from(&mut self, from: usize, targets: Bitboard) {
        if targets == 0 {
            return;
        }
        self.targets[from] |= targets;
        self.origins |= square_bb(from);
    }

    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.targets[from] & square_bb(to) != 0
    }

    pub fn len(&self) -> usize {
        squares(self.origins)
            .map(|from| popcount(self.targets[from]) as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.origins == 0
    }

    /// Squares that have at least one move
    pub fn origins(&self) -> Bitboard {
        self.origins
    }

    pub fn targets_from(&self, from: usize) -> Bitboard {
        self.targets[from]
    }

    /// Targets of one origin as a list, ascending
    pub fn target_squares(&self, from: usize) -> SmallVec<[usize; 17]> {
        squares(self.targets[from]).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        squares(self.origins).flat_map(move |from| {
            squares(self.targets[from]).map(move |to| Move::new(from as u8, to as u8))
        })
    }

    pub fn to_list(&self) -> MoveList {
        self.iter().collect()
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|mv| mv.to_string())).finish()
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = Self::new();
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}
