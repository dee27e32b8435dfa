#![allow(dead_code)]

use fenboard::{Piece, PieceCode, Position, Square};

/// xoshiro style generator, deterministic for a given seed
pub struct PRNG {
    s: (u64, u64, u64, u64),
}

impl PRNG {
    pub const fn new(seed: u64) -> Self {
        PRNG {
            s: (
                seed,
                seed.wrapping_mul(2),
                seed.wrapping_div(5),
                seed.wrapping_add(seed.wrapping_div(2)),
            ),
        }
    }

    pub const fn random_u64(&mut self) -> u64 {
        let t = self.s.1 << 17;
        self.s.2 ^= self.s.0;
        self.s.3 ^= self.s.1;
        self.s.1 ^= self.s.2;
        self.s.0 ^= self.s.3;
        self.s.2 ^= t;
        self.s.3 = self.s.3.rotate_left(45);

        self.s.0
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.random_u64() % n as u64) as usize
    }

    /// Random position where every square is filled with probability 1/4,
    /// mostly with pieces and occasionally with the unknown/occupied markers
    pub fn random_position(&mut self) -> Position {
        let mut position = Position::new();

        for square in Square::iter() {
            if self.below(4) != 0 {
                continue;
            }
            let code = match self.below(14) {
                12 => PieceCode::Unknown,
                13 => PieceCode::Occupied,
                i => PieceCode::Piece(Piece::from_index(i).unwrap_or(Piece::WhitePawn)),
            };
            position.set(square, code);
        }

        position
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(0x6B51FF299F6A3AEE)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a position from `(square, fen glyph)` pairs
pub fn position(pairs: &[(&str, char)]) -> Position {
    pairs
        .iter()
        .map(|&(square, glyph)| {
            (
                square.parse::<Square>().unwrap(),
                PieceCode::from_glyph(glyph).unwrap(),
            )
        })
        .collect()
}
