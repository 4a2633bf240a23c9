use super::bitboards::{square_at, Direction, FILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    General,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Pawn,
}

impl Type {
    pub const ALL: [Type; 7] = [
        Type::General,
        Type::Advisor,
        Type::Elephant,
        Type::Horse,
        Type::Rook,
        Type::Cannon,
        Type::Pawn,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Red sets up on ranks 5..=9 and moves north, Black on ranks 0..=4 and moves south
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction of a pawn push
    pub const fn forward(self) -> Direction {
        match self {
            Self::Red => Direction::North,
            Self::Black => Direction::South,
        }
    }

    /// Middle square of this color's palace
    pub const fn palace_center(self) -> usize {
        match self {
            Self::Red => square_at(8, FILES / 2),
            Self::Black => square_at(1, FILES / 2),
        }
    }

    /// Whether `rank` lies on the opponent's side of the river
    pub const fn has_crossed_river(self, rank: usize) -> bool {
        match self {
            Self::Red => rank < 5,
            Self::Black => rank > 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// FEN letter to piece. Uppercase is Red, lowercase Black.
    /// `h`/`e` are accepted as aliases of `n`/`b`.
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Black };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => Type::General,
            'a' => Type::Advisor,
            'b' | 'e' => Type::Elephant,
            'n' | 'h' => Type::Horse,
            'r' => Type::Rook,
            'c' => Type::Cannon,
            'p' => Type::Pawn,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::General => 'k',
            Type::Advisor => 'a',
            Type::Elephant => 'b',
            Type::Horse => 'n',
            Type::Rook => 'r',
            Type::Cannon => 'c',
            Type::Pawn => 'p',
        };
        match self.color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
