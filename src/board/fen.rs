use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{Position, PositionError};
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const EMPTY_BOARD_FEN: &str = "8/8/8/8/8/8/8/8";

/// Number of `/` separated rows in a board fragment
pub const FEN_ROWS: usize = Rank::NUM;

/******************************************\
|==========================================|
|              Validate Fen                |
|==========================================|
\******************************************/

/// Cuts off side to move, castling and the other fields after the first space
fn piece_placement(fen: &str) -> &str {
    fen.split(' ').next().unwrap_or_default()
}

/// Rewrites the digits 2-8 as that many '1's, so every remaining symbol covers one file
fn expand_empty_squares(row: &str) -> String {
    let mut expanded = String::with_capacity(File::NUM);
    for c in row.chars() {
        match c {
            '2'..='8' => (0..c as u8 - b'0').for_each(|_| expanded.push('1')),
            c => expanded.push(c),
        }
    }
    expanded
}

/// Symbols allowed in an expanded row
const fn is_board_symbol(c: char) -> bool {
    matches!(
        c,
        'k' | 'q' | 'r' | 'n' | 'b' | 'p' | 'K' | 'Q' | 'R' | 'N' | 'B' | 'P' | '1'
    ) || matches!(
        c,
        PieceCode::EMPTY_GLYPH | PieceCode::UNKNOWN_GLYPH | PieceCode::OCCUPIED_GLYPH
    )
}

/// Checks that the board part of `fen` has 8 rows of exactly 8 files each.
///
/// Anything from the first space onward is ignored.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = piece_placement(fen).split('/').collect();

    if rows.len() != FEN_ROWS {
        return Err(FenError::InvalidRowCount(rows.len()));
    }

    for (row, chunk) in rows.iter().enumerate() {
        let expanded = expand_empty_squares(chunk);

        if let Some(ch) = expanded.chars().find(|&c| !is_board_symbol(c)) {
            return Err(FenError::InvalidChar { row, ch });
        }

        let len = expanded.chars().count();
        if len != File::NUM {
            return Err(FenError::InvalidRowLength { row, len });
        }
    }

    Ok(())
}

pub fn is_valid_fen(fen: &str) -> bool {
    validate_fen(fen).is_ok()
}

/// Same as [`is_valid_fen`] for loosely typed input; anything but a JSON string is rejected
pub fn is_valid_fen_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_fen)
}

/******************************************\
|==========================================|
|               Parse Fen                  |
|==========================================|
\******************************************/

impl Position {
    /// Builds the position described by the board part of `fen`
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        if let Err(err) = validate_fen(fen) {
            debug!("rejected fen {fen:?}: {err}");
            return Err(err);
        }

        let mut position = Position::new();

        for (row, (chunk, rank)) in piece_placement(fen)
            .split('/')
            .zip(Rank::iter().rev())
            .enumerate()
        {
            Self::parse_row(&mut position, row, chunk, rank)?;
        }

        Ok(position)
    }

    fn parse_row(
        position: &mut Position,
        row: usize,
        chunk: &str,
        rank: Rank,
    ) -> Result<(), FenError> {
        let mut file: usize = 0;

        for ch in chunk.chars() {
            if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
                continue;
            }

            let code = PieceCode::from_glyph(ch).ok_or(FenError::InvalidChar { row, ch })?;
            let current_file = File::FileA.offset(file).ok_or(FenError::InvalidRowLength {
                row,
                len: file + 1,
            })?;

            position.set(Square::from_parts(current_file, rank), code);
            file += 1;
        }

        Ok(())
    }

    /// One glyph per square, see [`FenStyle::Expanded`]
    pub fn fen(&self) -> String {
        self.fen_with(FenStyle::Expanded)
    }

    pub fn fen_with(&self, style: FenStyle) -> String {
        let mut fen = String::with_capacity(Square::NUM + FEN_ROWS);

        for rank in Rank::iter().rev() {
            let mut empty_count = 0;

            for file in File::iter() {
                match self.on(Square::from_parts(file, rank)) {
                    Some(code) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(code.glyph());
                    }
                    None if style == FenStyle::Compact => empty_count += 1,
                    None => fen.push(PieceCode::EMPTY_GLYPH),
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::Rank1 {
                fen.push('/');
            }
        }

        fen
    }
}

impl std::str::FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    Position::from_fen(fen)
}

pub fn to_fen(position: &Position) -> String {
    position.fen()
}

/// Validates a loosely typed mapping and serializes it
pub fn to_fen_value(value: &Value) -> Result<String, PositionError> {
    Position::from_value(value).map(|position| position.fen())
}

/******************************************\
|==========================================|
|                Fen Style                 |
|==========================================|
\******************************************/

/// How the serializer writes empty squares
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenStyle {
    /// One glyph per square, empty squares written as `0`
    #[default]
    Expanded,
    /// Runs of empty squares collapsed into the digits 1-8
    Compact,
}

impl std::str::FromStr for FenStyle {
    type Err = ParseFenStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expanded" => Ok(FenStyle::Expanded),
            "compact" => Ok(FenStyle::Compact),
            _ => Err(ParseFenStyleError(s.to_string())),
        }
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN board must have 8 rows separated by '/', found {0}")]
    InvalidRowCount(usize),

    #[error("Row {row} of the FEN board covers {len} files, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("Invalid character in row {row} of the FEN board: '{ch}'")]
    InvalidChar { row: usize, ch: char },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown FEN style: '{0}', expected 'expanded' or 'compact'")]
pub struct ParseFenStyleError(pub String);
