use crate::game_repr::Color;

use super::{
    file_of, popcount, rank_of, square_bb, step, Bitboard, Direction, DIST_TO_EDGE, HORSE_JUMPS,
    LEG_JUMPS, SQUARES,
};

/// Geometric horse targets from one square, ignoring occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorseTargets {
    /// Every on-board jump target
    pub all: Bitboard,
    /// `by_leg[d]` holds the targets lost when the leg square in primary
    /// direction `d` is occupied. The four entries partition `all`.
    pub by_leg: [Bitboard; 4],
}

/// Occupancy-independent targets for the table-driven pieces.
/// Built once per generator, never modified afterwards.
pub struct MoveTables {
    /// HORSE[square]; horse geometry is the same for both colors
    pub horse: [HorseTargets; SQUARES],
    /// ADVISOR[color][square]
    pub advisor: [[Bitboard; SQUARES]; 2],
    /// ELEPHANT[color][square]
    pub elephant: [[Bitboard; SQUARES]; 2],
    /// PAWN[color][square]
    pub pawn: [[Bitboard; SQUARES]; 2],
}

impl MoveTables {
    pub fn new() -> Self {
        let tables = Self {
            horse: generate_horse_moves(),
            advisor: generate_advisor_moves(),
            elephant: generate_elephant_moves(),
            pawn: generate_pawn_moves(),
        };

        log::debug!(
            "move tables built: {} horse, {} advisor, {} elephant, {} pawn entries",
            tables.horse.iter().map(|h| popcount(h.all)).sum::<u32>(),
            count_entries(&tables.advisor),
            count_entries(&tables.elephant),
            count_entries(&tables.pawn),
        );

        tables
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

fn count_entries(table: &[[Bitboard; SQUARES]; 2]) -> u32 {
    table.iter().flatten().map(|&bb| popcount(bb)).sum()
}

/// Chebyshev distance between two squares
fn king_distance(a: usize, b: usize) -> usize {
    rank_of(a).abs_diff(rank_of(b)).max(file_of(a).abs_diff(file_of(b)))
}

/// Target of a flat-array jump, if it lands on the board without wrapping
/// around a file edge
fn jump_target(square: usize, offset: isize, max_dist: usize) -> Option<usize> {
    let target = square as isize + offset;
    if !(0..SQUARES as isize).contains(&target) {
        return None;
    }
    let target = target as usize;
    // wrapping across a file edge shows up as a large file delta
    (king_distance(square, target) <= max_dist).then_some(target)
}

fn generate_horse_moves() -> [HorseTargets; SQUARES] {
    let mut horse = [HorseTargets::default(); SQUARES];

    for (sq, entry) in horse.iter_mut().enumerate() {
        for (d, pair) in LEG_JUMPS.iter().enumerate() {
            for &j in &pair.jumps {
                let Some(target) = jump_target(sq, HORSE_JUMPS[j].offset as isize, 2) else {
                    continue;
                };
                entry.by_leg[d] |= square_bb(target);
                entry.all |= square_bb(target);
            }
        }
    }

    horse
}

fn generate_advisor_moves() -> [[Bitboard; SQUARES]; 2] {
    // _____
    //|\ | /|
    //|--+--|  advisors only ever stand on the
    //|/ | \|  center or one of the four corners
    // -----
    let mut advisor = [[0; SQUARES]; 2];

    for color in [Color::Red, Color::Black] {
        let center = color.palace_center();
        for dir in Direction::DIAGONAL {
            let Some(corner) = step(center, dir) else {
                continue;
            };
            advisor[color.index()][center] |= square_bb(corner);
            advisor[color.index()][corner] |= square_bb(center);
        }
    }

    advisor
}

fn generate_elephant_moves() -> [[Bitboard; SQUARES]; 2] {
    let mut elephant = [[0; SQUARES]; 2];

    for color in [Color::Red, Color::Black] {
        for sq in 0..SQUARES {
            if color.has_crossed_river(rank_of(sq)) {
                continue;
            }
            for dir in Direction::DIAGONAL {
                if DIST_TO_EDGE[sq][dir.index()] < 2 {
                    continue;
                }
                let Some(target) = jump_target(sq, dir.offset() as isize * 2, 2) else {
                    continue;
                };
                if color.has_crossed_river(rank_of(target)) {
                    continue;
                }
                elephant[color.index()][sq] |= square_bb(target);
            }
        }
    }

    elephant
}

fn generate_pawn_moves() -> [[Bitboard; SQUARES]; 2] {
    let mut pawn = [[0; SQUARES]; 2];

    for color in [Color::Red, Color::Black] {
        for sq in 0..SQUARES {
            let targets = &mut pawn[color.index()][sq];

            if let Some(target) = step(sq, color.forward()) {
                *targets |= square_bb(target);
            }

            if color.has_crossed_river(rank_of(sq)) {
                for dir in [Direction::East, Direction::West] {
                    if let Some(target) = step(sq, dir) {
                        *targets |= square_bb(target);
                    }
                }
            }
        }
    }

    pawn
}
