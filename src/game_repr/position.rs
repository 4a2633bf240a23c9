use rayon::prelude::*;
use thiserror::Error;

use super::bitboards::{square_bb, squares, Bitboard, Bitboards, Squares, FILES, RANKS, SQUARES};
use super::movegen::MOVE_GENERATOR;
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION
 */

pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty FEN string")]
    Empty,
    #[error("expected 10 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 9 files")]
    RankLength { rank: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
}

#[derive(Clone, Debug)]
pub struct Position {
    /// Bitboard representation for occupancy queries
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation (kept in sync with bitboards)
    pub squares: [Option<Piece>; SQUARES],
    pub side_to_move: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    captured_piece: Option<Piece>,
}

impl Default for Position {
    fn default() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(position) => position,
            Err(err) => unreachable!("start position FEN is valid: {err}"),
        }
    }
}

impl Position {
    pub fn empty() -> Position {
        Self {
            bitboards: Bitboards::empty(),
            squares: [None; SQUARES],
            side_to_move: Color::Red,
        }
    }

    /// Parse piece placement and side to move. Ranks are listed from rank 0
    /// (Black's back rank) down to rank 9; trailing fields are ignored.
    pub fn from_fen(fen_str: &str) -> Result<Position, FenError> {
        let mut parts = fen_str.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != RANKS {
            return Err(FenError::RankCount(rows.len()));
        }

        let mut board = [None; SQUARES];
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file >= FILES {
                        return Err(FenError::RankLength { rank });
                    }
                    board[rank * FILES + file] = Some(piece);
                    file += 1;
                }
                if file > FILES {
                    return Err(FenError::RankLength { rank });
                }
            }
            if file != FILES {
                return Err(FenError::RankLength { rank });
            }
        }

        let side_to_move = match parts.next() {
            None | Some("w") | Some("r") => Color::Red,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidSide(other.to_string())),
        };

        Ok(Self {
            bitboards: Bitboards::from_array(&board),
            squares: board,
            side_to_move,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in 0..RANKS {
            let mut empty_count = 0;
            for file in 0..FILES {
                match self.squares[rank * FILES + file] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank + 1 < RANKS {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::Red => "w",
            Color::Black => "b",
        };
        fen.push_str(&format!(" {} - - 0 1", side));

        fen
    }

    #[inline(always)]
    pub fn piece_at(&self, square: usize) -> Option<Piece> {
        self.squares[square]
    }

    #[inline(always)]
    pub fn is_occupied(&self, square: usize) -> bool {
        self.occupied() & square_bb(square) != 0
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.bitboards.all_occupied()
    }

    #[inline(always)]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.bitboards.occupied_by_color(color)
    }

    /// Squares holding a piece of `color`, ascending
    pub fn piece_squares(&self, color: Color) -> Squares {
        squares(self.occupied_by(color))
    }

    /// Put a piece on an empty square, or clear a square with `None`
    pub fn set_piece(&mut self, square: usize, piece: Option<Piece>) {
        if let Some(old) = self.squares[square] {
            self.bitboards.remove_piece(old.color, old.piece_type, square);
        }
        if let Some(new) = piece {
            self.bitboards.add_piece(new.color, new.piece_type, square);
        }
        self.squares[square] = piece;
    }

    /// Pseudo-legal moves for the side to move
    pub fn pseudo_legal_moves(&self) -> MoveSet {
        MOVE_GENERATOR.generate(self, self.side_to_move)
    }

    /// Play a move without checking it; the returned info restores the position
    pub fn make_move_undoable(&mut self, mv: Move) -> UndoInfo {
        let from = mv.from();
        let to = mv.to();
        let moving_piece = self.squares[from];
        let captured_piece = self.squares[to];

        debug_assert!(moving_piece.is_some(), "no piece on {}", from);

        if let Some(captured) = captured_piece {
            self.bitboards.remove_piece(captured.color, captured.piece_type, to);
        }
        if let Some(moving) = moving_piece {
            self.bitboards.move_piece(moving.color, moving.piece_type, from, to);
        }

        self.squares[to] = moving_piece;
        self.squares[from] = None;
        self.side_to_move = self.side_to_move.opposite();

        UndoInfo { captured_piece }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        let from = mv.from();
        let to = mv.to();
        let moving_piece = self.squares[to];

        if let Some(moving) = moving_piece {
            self.bitboards.move_piece(moving.color, moving.piece_type, to, from);
        }
        if let Some(captured) = undo.captured_piece {
            self.bitboards.add_piece(captured.color, captured.piece_type, to);
        }

        self.squares[from] = moving_piece;
        self.squares[to] = undo.captured_piece;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Count leaf nodes of the pseudo-legal move tree
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.pseudo_legal_moves();

        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        let mut pos = self.clone();

        for mv in moves.iter() {
            let undo = pos.make_move_undoable(mv);
            nodes += pos.perft(depth - 1);
            pos.unmake_move(mv, undo);
        }

        nodes
    }

    /// Same count as [`Position::perft`], with root moves split across the rayon pool.
    /// Each task works on its own position copy; the generator is shared read-only.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }

        let moves = self.pseudo_legal_moves().to_list();
        moves
            .as_slice()
            .par_iter()
            .map(|&mv| {
                let mut pos = self.clone();
                pos.make_move_undoable(mv);
                pos.perft(depth - 1)
            })
            .sum()
    }

    /// Perft count below each root move (debugging tool)
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.pseudo_legal_moves();
        let mut pos = self.clone();

        moves
            .iter()
            .map(|mv| {
                let undo = pos.make_move_undoable(mv);
                let count = pos.perft(depth.saturating_sub(1));
                pos.unmake_move(mv, undo);
                (mv, count)
            })
            .collect()
    }
}
