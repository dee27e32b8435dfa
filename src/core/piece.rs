use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;

    /// Colour prefix of a two-character piece code ('w' or 'b')
    pub const fn code(&self) -> char {
        match self {
            Colour::White => 'w',
            Colour::Black => 'b',
        }
    }
}

crate::impl_enum_index!(Colour);

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Represents the different chess pieces, colour in the lowest bit

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn, BlackPawn, WhiteKnight, BlackKnight, WhiteBishop, BlackBishop, WhiteRook, BlackRook, WhiteQueen, BlackQueen, WhiteKing, BlackKing
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_enum_index!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_enum_index!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|                Piece Code                |
|==========================================|
\******************************************/

/// # Piece Code representation
///
/// The value stored for a square: either one of the 12 pieces, or one of
/// three placeholder markers used while a square's identity is not known.
///
/// - `Empty` is written as `0`, `Unknown` as `?` and `Occupied` as `-`, both in
///   FEN fragments and as piece-code strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceCode {
    Piece(Piece),
    Empty,
    Unknown,
    Occupied,
}

impl PieceCode {
    pub const EMPTY_GLYPH: char = '0';
    pub const UNKNOWN_GLYPH: char = '?';
    pub const OCCUPIED_GLYPH: char = '-';

    pub const fn is_sentinel(self) -> bool {
        !matches!(self, PieceCode::Piece(_))
    }
}

impl From<Piece> for PieceCode {
    fn from(piece: Piece) -> Self {
        PieceCode::Piece(piece)
    }
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use fenboard::core::{Piece, Colour, PieceType};
    ///
    /// assert_eq!(Piece::from_parts(Colour::Black, PieceType::King), Piece::BlackKing);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }

    /// Returns the FEN letter of the piece, upper case for white and lower case for black
    pub const fn glyph(self) -> char {
        PIECE_STR[self.index()] as char
    }

    /// Looks a FEN letter up in the glyph table
    pub fn from_glyph(c: char) -> Option<Self> {
        let index = PIECE_STR.iter().position(|&b| b as char == c)?;
        Piece::from_index(index)
    }
}

impl PieceType {
    /// Upper-case letter used as the type half of a piece code ('P', 'N', ...)
    pub const fn code(self) -> char {
        PIECE_STR[self.index() << 1] as char
    }

    pub fn from_code(c: char) -> Option<Self> {
        PieceType::iter().find(|pt| pt.code() == c)
    }
}

impl PieceCode {
    /// Maps a FEN board glyph to its piece code
    ///
    /// Digits are not glyphs of a single square and map to `None`, except the
    /// placeholder `0`.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            Self::EMPTY_GLYPH => Some(PieceCode::Empty),
            Self::UNKNOWN_GLYPH => Some(PieceCode::Unknown),
            Self::OCCUPIED_GLYPH => Some(PieceCode::Occupied),
            _ => Piece::from_glyph(c).map(PieceCode::Piece),
        }
    }

    /// Inverse of [`PieceCode::from_glyph`]
    pub const fn glyph(self) -> char {
        match self {
            PieceCode::Piece(piece) => piece.glyph(),
            PieceCode::Empty => Self::EMPTY_GLYPH,
            PieceCode::Unknown => Self::UNKNOWN_GLYPH,
            PieceCode::Occupied => Self::OCCUPIED_GLYPH,
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// Glyph table indexed by `Piece`; piece types sit at the even (white) slots
const PIECE_STR: &[u8; Piece::NUM] = b"PpNnBbRrQqKk";

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().to_ascii_lowercase())
    }
}

impl std::fmt::Display for PieceCode {
    /// Two-character code for pieces ("wP", "bK"), the bare glyph for placeholders
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceCode::Piece(piece) => write!(f, "{}{}", piece.colour().code(), piece.pt().code()),
            sentinel => write!(f, "{}", sentinel.glyph()),
        }
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the FEN piece letter into a piece, with error checkings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(piece_char), None) = (chars.next(), chars.next()) else {
            return Err(ParsePieceError::InvalidLength(s.chars().count()));
        };

        Piece::from_glyph(piece_char).ok_or(ParsePieceError::InvalidChar(piece_char))
    }
}

impl std::str::FromStr for PieceCode {
    type Err = ParsePieceCodeError;

    /// Parses `^[bw][KQRNBP]$` or one of the placeholder glyphs `0`, `?`, `-`
    ///
    /// ## Examples
    ///
    /// ```
    /// use fenboard::core::{Piece, PieceCode};
    ///
    /// assert_eq!("bQ".parse::<PieceCode>().unwrap(), PieceCode::Piece(Piece::BlackQueen));
    /// assert_eq!("?".parse::<PieceCode>().unwrap(), PieceCode::Unknown);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        match chars.as_slice() {
            &[glyph] => match PieceCode::from_glyph(glyph) {
                Some(code) if code.is_sentinel() => Ok(code),
                _ => Err(ParsePieceCodeError::InvalidSentinel(glyph)),
            },
            &[colour, pt] => {
                let colour = match colour {
                    'w' => Colour::White,
                    'b' => Colour::Black,
                    c => return Err(ParsePieceCodeError::InvalidColour(c)),
                };
                let pt = PieceType::from_code(pt).ok_or(ParsePieceCodeError::InvalidType(pt))?;
                Ok(PieceCode::Piece(Piece::from_parts(colour, pt)))
            }
            _ => Err(ParsePieceCodeError::InvalidLength(chars.len())),
        }
    }
}

/******************************************\
|==========================================|
|                  Serde                   |
|==========================================|
\******************************************/

impl Serialize for PieceCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/******************************************\
|==========================================|
|            Piece Parse Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of \"PNBRQKpnbrqk\"")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceCodeError {
    #[error("Invalid length for piece code: {0}, expected 2, or 1 for a placeholder")]
    InvalidLength(usize),
    #[error("Invalid colour in piece code: '{0}', expected 'w' or 'b'")]
    InvalidColour(char),
    #[error("Invalid piece type in piece code: '{0}', expected one of \"KQRBNP\"")]
    InvalidType(char),
    #[error("Invalid placeholder: '{0}', expected '0', '?' or '-'")]
    InvalidSentinel(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
