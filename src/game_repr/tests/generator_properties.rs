use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_repr::{
    square_bb, squares, Bitboard, Color, MoveGenerator, MoveSet, Piece, Position, Type,
    BOARD_MASK, FILES, MOVE_GENERATOR, RANKS, SQUARES,
};
use super::{black, empty_board, generate, place_piece, red, sq};

/// Scatter random pieces of both colors over an empty board
fn random_position(rng: &mut StdRng) -> Position {
    let mut pos = empty_board();
    let count = rng.gen_range(2..=32);
    for _ in 0..count {
        let square = rng.gen_range(0..SQUARES);
        let color = if rng.gen_bool(0.5) { Color::Red } else { Color::Black };
        let piece_type = Type::ALL[rng.gen_range(0..Type::ALL.len())];
        place_piece(&mut pos, square, Piece::new(color, piece_type));
    }
    pos
}

fn on_board(rank: isize, file: isize) -> bool {
    (0..RANKS as isize).contains(&rank) && (0..FILES as isize).contains(&file)
}

fn crossed_river(color: Color, rank: isize) -> bool {
    match color {
        Color::Red => rank < 5,
        Color::Black => rank > 4,
    }
}

/// Coordinate-based move rules, written independently of the tables
fn reference_targets(pos: &Position, from: usize) -> Bitboard {
    let Some(piece) = pos.piece_at(from) else {
        return 0;
    };
    let rank = (from / FILES) as isize;
    let file = (from % FILES) as isize;
    let at = |r: isize, f: isize| pos.piece_at(r as usize * FILES + f as usize);
    let mut targets = 0;
    let mut add = |r: isize, f: isize| {
        let target = at(r, f);
        if target.map_or(true, |p| p.color != piece.color) {
            targets |= square_bb(r as usize * FILES + f as usize);
        }
    };

    match piece.piece_type {
        Type::Rook | Type::Cannon => {
            for (dr, df) in [(-1, 0), (0, 1), (1, 0), (0, -1)] {
                let (mut r, mut f) = (rank + dr, file + df);
                let mut screened = false;
                while on_board(r, f) {
                    let occupied = at(r, f).is_some();
                    if piece.piece_type == Type::Rook {
                        add(r, f);
                        if occupied {
                            break;
                        }
                    } else if !screened {
                        if occupied {
                            screened = true;
                        } else {
                            add(r, f);
                        }
                    } else if occupied {
                        add(r, f);
                        break;
                    }
                    r += dr;
                    f += df;
                }
            }
        }
        Type::Horse => {
            for (dr, df) in [(-2, -1), (-2, 1), (2, -1), (2, 1), (-1, -2), (1, -2), (-1, 2), (1, 2)] {
                let (r, f) = (rank + dr, file + df);
                let (leg_r, leg_f) = if dr.abs() == 2 { (rank + dr / 2, file) } else { (rank, file + df / 2) };
                if on_board(r, f) && at(leg_r, leg_f).is_none() {
                    add(r, f);
                }
            }
        }
        Type::Elephant => {
            if !crossed_river(piece.color, rank) {
                for (dr, df) in [(-2, -2), (-2, 2), (2, -2), (2, 2)] {
                    let (r, f) = (rank + dr, file + df);
                    if on_board(r, f) && !crossed_river(piece.color, r) && at(rank + dr / 2, file + df / 2).is_none() {
                        add(r, f);
                    }
                }
            }
        }
        Type::Advisor => {
            let center_rank = match piece.color {
                Color::Red => 8,
                Color::Black => 1,
            };
            let corners = [(-1, -1), (-1, 1), (1, -1), (1, 1)].map(|(dr, df)| (center_rank + dr, 4 + df));
            if (rank, file) == (center_rank, 4) {
                for (r, f) in corners {
                    add(r, f);
                }
            } else if corners.contains(&(rank, file)) {
                add(center_rank, 4);
            }
        }
        Type::Pawn => {
            let forward = match piece.color {
                Color::Red => -1,
                Color::Black => 1,
            };
            if on_board(rank + forward, file) {
                add(rank + forward, file);
            }
            if crossed_river(piece.color, rank) {
                for df in [-1, 1] {
                    if on_board(rank, file + df) {
                        add(rank, file + df);
                    }
                }
            }
        }
        Type::General => {}
    }

    targets
}

#[test]
fn test_matches_reference_rules_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    let generator = MoveGenerator::new();

    for _ in 0..500 {
        let pos = random_position(&mut rng);
        for side in [Color::Red, Color::Black] {
            let moves = generator.generate(&pos, side);
            for from in pos.piece_squares(side) {
                assert_eq!(
                    moves.targets_from(from),
                    reference_targets(&pos, from),
                    "square {} in {}",
                    from,
                    pos.to_fen()
                );
            }
        }
    }
}

#[test]
fn test_never_targets_own_pieces() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let pos = random_position(&mut rng);
        for side in [Color::Red, Color::Black] {
            let moves = generate(&pos, side);
            let own = pos.occupied_by(side);
            for mv in moves.iter() {
                assert!(own & square_bb(mv.from()) != 0, "origin must hold a piece of the mover");
                assert!(own & square_bb(mv.to()) == 0, "{} captures own piece in {}", mv, pos.to_fen());
                assert!(BOARD_MASK & square_bb(mv.to()) != 0);
            }
        }
    }
}

#[test]
fn test_generation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let start = Position::default();
    assert_eq!(generate(&start, Color::Red), generate(&start, Color::Red));

    for _ in 0..100 {
        let pos = random_position(&mut rng);
        let first = generate(&pos, Color::Black);
        let second = generate(&pos, Color::Black);
        assert_eq!(first, second);
    }
}

#[test]
fn test_generation_does_not_touch_board() {
    let pos = Position::default();
    let before = pos.to_fen();
    let _ = generate(&pos, Color::Red);
    let _ = generate(&pos, Color::Black);
    assert_eq!(pos.to_fen(), before);
}

#[test]
fn test_general_is_not_generated() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq(9, 4), red(Type::General));
    place_piece(&mut pos, sq(0, 4), black(Type::General));

    assert!(generate(&pos, Color::Red).is_empty());
    assert!(generate(&pos, Color::Black).is_empty());
}

#[test]
fn test_only_side_to_move_is_generated() {
    let pos = Position::default();
    let moves = generate(&pos, Color::Black);
    for from in squares(moves.origins()) {
        assert!(from < 5 * FILES, "Black pieces start on ranks 0..=4");
    }
}

#[test]
fn test_target_squares_view_matches_set() {
    let pos = Position::default();
    let moves = generate(&pos, Color::Red);

    let rebuilt: MoveSet = squares(moves.origins())
        .flat_map(|from| {
            moves
                .target_squares(from)
                .into_iter()
                .map(move |to| crate::game_repr::Move::new(from as u8, to as u8))
        })
        .collect();

    assert_eq!(rebuilt, moves);
    assert_eq!(moves.to_list().len(), moves.len());
}

#[test]
fn test_shared_generator_across_threads() {
    let pos = Position::default();
    let expected = MOVE_GENERATOR.generate(&pos, Color::Red);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| MOVE_GENERATOR.generate(&pos, Color::Red)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
