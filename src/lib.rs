//! # fenboard
//!
//! Board-only FEN codec and position differ. Converts FEN placement
//! fragments to square→piece mappings and back, validates both forms, and
//! reconstructs the move that turned one position into the next.
pub mod board;
pub mod core;

pub use board::diff::{detect_move, diff};
pub use board::fen::{
    is_valid_fen, is_valid_fen_value, parse_fen, to_fen, to_fen_value, validate_fen,
};
pub use board::validate::is_valid_position;
pub use board::{Change, FenError, FenStyle, MoveDescriptor, Position, PositionError, START_FEN};
pub use crate::core::*;
