pub mod diff;
pub mod fen;
pub mod validate;

pub use diff::{Change, MoveDescriptor};
pub use fen::{FenError, FenStyle, START_FEN};
pub use validate::PositionError;

use crate::core::*;

/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// # Position
///
/// Mapping from square to piece code for the occupied squares of one board
/// snapshot. Squares without an entry are empty, so [`PieceCode::Empty`] is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: [Option<PieceCode>; Square::NUM],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Creates an empty board
    pub const fn new() -> Self {
        Self {
            board: [None; Square::NUM],
        }
    }

    /// Standard initial placement, the position of [`START_FEN`]
    pub fn start() -> Self {
        let mut position = Position::new();

        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, pt) in File::iter().zip(back_rank) {
            position.set(
                Square::from_parts(file, Rank::Rank1),
                Piece::from_parts(Colour::White, pt).into(),
            );
            position.set(
                Square::from_parts(file, Rank::Rank2),
                Piece::WhitePawn.into(),
            );
            position.set(
                Square::from_parts(file, Rank::Rank7),
                Piece::BlackPawn.into(),
            );
            position.set(
                Square::from_parts(file, Rank::Rank8),
                Piece::from_parts(Colour::Black, pt).into(),
            );
        }

        position
    }

    /// Returns the piece code on the square, `None` if the square is empty
    #[inline]
    pub const fn on(&self, square: Square) -> Option<PieceCode> {
        self.board[square.index()]
    }

    /// Places a code on the square, replacing what was there. Setting
    /// [`PieceCode::Empty`] clears the square.
    pub fn set(&mut self, square: Square, code: PieceCode) -> Option<PieceCode> {
        let stored = match code {
            PieceCode::Empty => None,
            code => Some(code),
        };
        std::mem::replace(&mut self.board[square.index()], stored)
    }

    /// Clears the square and returns what was on it
    pub fn remove(&mut self, square: Square) -> Option<PieceCode> {
        self.board[square.index()].take()
    }

    /// Occupied squares in index order, a1 first and h8 last
    pub fn iter(&self) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        Square::iter().filter_map(|sq| self.on(sq).map(|code| (sq, code)))
    }

    /// Occupied squares in FEN order, rank 8 first and files a to h within a rank
    pub fn iter_fen_order(&self) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        Rank::iter()
            .rev()
            .flat_map(|rank| File::iter().map(move |file| Square::from_parts(file, rank)))
            .filter_map(|sq| self.on(sq).map(|code| (sq, code)))
    }

    /// Number of occupied squares
    pub fn len(&self) -> usize {
        self.board.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(Option::is_none)
    }
}

impl FromIterator<(Square, PieceCode)> for Position {
    fn from_iter<I: IntoIterator<Item = (Square, PieceCode)>>(iter: I) -> Self {
        let mut position = Position::new();
        for (square, code) in iter {
            position.set(square, code);
        }
        position
    }
}

impl std::fmt::Display for Position {
    /// Standard run-length FEN placement
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fen_with(FenStyle::Compact))
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
