//! Board topology shared by every move table: edge distances, ray offsets and
//! horse-jump vectors for the 10x9 board.
//!
//! Squares are numbered rank-major from Black's back rank: `rank = sq / 9`,
//! `file = sq % 9`. North points toward rank 0.

pub const RANKS: usize = 10;
pub const FILES: usize = 9;
pub const SQUARES: usize = RANKS * FILES;

/// The 8 ray directions. The discriminant order is the index order of
/// [`RAY_OFFSETS`] and of every `[_; 8]` distance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    NorthEast = 4,
    SouthEast = 5,
    SouthWest = 6,
    NorthWest = 7,
}

/// Flat-array delta of a single step in each direction
pub const RAY_OFFSETS: [i8; 8] = [-9, 1, 9, -1, -8, 10, 8, -10];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Clockwise from north; each entry's successor is the next primary direction
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn offset(self) -> i8 {
        RAY_OFFSETS[self as usize]
    }
}

/// DIST_TO_EDGE[square][direction] is the number of steps available before
/// leaving the board. Zero means no step in that direction is possible.
pub static DIST_TO_EDGE: [[u8; 8]; SQUARES] = generate_dist_to_edge();

const fn generate_dist_to_edge() -> [[u8; 8]; SQUARES] {
    let mut distances = [[0u8; 8]; SQUARES];
    let mut sq = 0;

    while sq < SQUARES {
        let up = (sq / FILES) as u8;
        let down = (RANKS - 1 - sq / FILES) as u8;
        let left = (sq % FILES) as u8;
        let right = (FILES - 1 - sq % FILES) as u8;

        distances[sq] = [
            up,
            right,
            down,
            left,
            min(up, right),
            min(right, down),
            min(down, left),
            min(left, up),
        ];
        sq += 1;
    }

    distances
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

#[inline(always)]
pub fn distance_to_edge(square: usize) -> [u8; 8] {
    DIST_TO_EDGE[square]
}

/// A horse jump: two steps along `leg`, then one step along `side`.
/// The square one step along `leg` is the one that blocks the jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorseJump {
    pub leg: Direction,
    pub side: Direction,
    pub offset: i8,
}

/// The 8 horse jumps, derived from the primary directions: for each direction
/// `d` and its clockwise successor, first (2, 1) steps then (1, 2) steps.
pub const HORSE_JUMPS: [HorseJump; 8] = generate_horse_jumps();

const fn generate_horse_jumps() -> [HorseJump; 8] {
    let mut jumps = [HorseJump {
        leg: Direction::North,
        side: Direction::East,
        offset: 0,
    }; 8];

    let mut d = 0;
    while d < 4 {
        let first = Direction::ORTHOGONAL[d];
        let second = Direction::ORTHOGONAL[(d + 1) % 4];

        let mut steps = 0;
        while steps < 2 {
            let first_steps = 2 - steps as i8;
            let second_steps = 1 + steps as i8;
            let offset = first.offset() * first_steps + second.offset() * second_steps;

            // the leg is whichever direction is taken twice
            let (leg, side) = if steps == 0 { (first, second) } else { (second, first) };
            jumps[d * 2 + steps] = HorseJump { leg, side, offset };
            steps += 1;
        }
        d += 1;
    }

    jumps
}

/// The jumps made impossible by an occupied leg square in one primary direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegJumps {
    pub leg: Direction,
    /// Indices into [`HORSE_JUMPS`]
    pub jumps: [usize; 2],
}

/// One entry per primary direction, in [`Direction::ORTHOGONAL`] order
pub const LEG_JUMPS: [LegJumps; 4] = generate_leg_jumps();

const fn generate_leg_jumps() -> [LegJumps; 4] {
    let jumps = generate_horse_jumps();
    let mut pairs = [LegJumps {
        leg: Direction::North,
        jumps: [0; 2],
    }; 4];

    let mut d = 0;
    while d < 4 {
        let leg = Direction::ORTHOGONAL[d];
        pairs[d].leg = leg;

        let mut found = 0;
        let mut j = 0;
        while j < 8 {
            if jumps[j].leg as usize == leg as usize {
                pairs[d].jumps[found] = j;
                found += 1;
            }
            j += 1;
        }
        assert!(found == 2);
        d += 1;
    }

    pairs
}

/// The 16 direction offsets: 8 ray steps followed by the 8 horse jumps
pub fn direction_offsets() -> [i8; 16] {
    let mut offsets = [0i8; 16];
    offsets[..8].copy_from_slice(&RAY_OFFSETS);
    for (slot, jump) in offsets[8..].iter_mut().zip(HORSE_JUMPS.iter()) {
        *slot = jump.offset;
    }
    offsets
}

/// The square one step away, if it is on the board
#[inline]
pub fn step(square: usize, direction: Direction) -> Option<usize> {
    if DIST_TO_EDGE[square][direction.index()] == 0 {
        return None;
    }
    Some((square as isize + direction.offset() as isize) as usize)
}

/// Squares stepped outward from `square` (exclusive) up to the board edge
pub fn ray(square: usize, direction: Direction) -> Ray {
    Ray {
        current: square as isize,
        offset: direction.offset() as isize,
        remaining: DIST_TO_EDGE[square][direction.index()],
    }
}

#[derive(Debug, Clone)]
pub struct Ray {
    current: isize,
    offset: isize,
    remaining: u8,
}

impl Iterator for Ray {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current += self.offset;
        Some(self.current as usize)
    }
}
