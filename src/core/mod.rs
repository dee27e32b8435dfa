// Core module exports

// Value types shared by the codec and the differ
pub mod macros;
pub mod piece;
pub mod square;

// Re-export common types for easier access
pub use piece::{Colour, ParsePieceCodeError, ParsePieceError, Piece, PieceCode, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
