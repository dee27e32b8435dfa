use log::trace;
use serde::Serialize;

use super::Position;
use crate::core::*;

/******************************************\
|==========================================|
|                 Changes                  |
|==========================================|
\******************************************/

/// One square that differs between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Change {
    /// Occupied before, empty after
    Deleted { square: Square, before: PieceCode },
    /// Empty before, occupied after
    Added { square: Square, after: PieceCode },
    /// Occupied in both with different codes (captures, promotions)
    Updated {
        square: Square,
        before: PieceCode,
        after: PieceCode,
    },
}

impl Change {
    pub const fn square(&self) -> Square {
        match *self {
            Change::Deleted { square, .. }
            | Change::Added { square, .. }
            | Change::Updated { square, .. } => square,
        }
    }

    pub const fn before(&self) -> Option<PieceCode> {
        match *self {
            Change::Deleted { before, .. } | Change::Updated { before, .. } => Some(before),
            Change::Added { .. } => None,
        }
    }

    pub const fn after(&self) -> Option<PieceCode> {
        match *self {
            Change::Added { after, .. } | Change::Updated { after, .. } => Some(after),
            Change::Deleted { .. } => None,
        }
    }

    pub const fn is_deletion(&self) -> bool {
        matches!(self, Change::Deleted { .. })
    }
}

/// Lists every square that differs between `previous` and `current`.
///
/// Record order is fixed: first the occupied squares of `previous` in FEN
/// order, rank 8 down to rank 1 (deletions and updates), then the squares
/// occupied only in `current`, in the same order (additions).
pub fn diff(previous: &Position, current: &Position) -> Vec<Change> {
    let mut changes: Vec<Change> = previous
        .iter_fen_order()
        .filter_map(|(square, before)| match current.on(square) {
            None => Some(Change::Deleted { square, before }),
            Some(after) if after != before => Some(Change::Updated {
                square,
                before,
                after,
            }),
            Some(_) => None,
        })
        .collect();

    changes.extend(
        current
            .iter_fen_order()
            .filter(|&(square, _)| previous.on(square).is_none())
            .map(|(square, after)| Change::Added { square, after }),
    );

    changes
}

/******************************************\
|==========================================|
|             Move Descriptor              |
|==========================================|
\******************************************/

/// The move reconstructed from two successive positions.
///
/// Only the first two change records take part in the reconstruction. When
/// more squares changed (castling, en passant) `source_square` and
/// `target_square` are a best guess and callers should look at
/// [`MoveDescriptor::changes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescriptor {
    pub source_square: Option<Square>,
    pub target_square: Option<Square>,
    pub moved_piece: Option<PieceCode>,
    pub squares_affected: usize,
    #[serde(skip)]
    changes: Vec<Change>,
}

impl MoveDescriptor {
    /// Applies the deletion-precedence rule to the first two records.
    ///
    /// If the second record is a deletion it is the vacated source and the
    /// first record is the target. Otherwise the first record is the source
    /// and the second record supplies the target and the moved piece.
    pub fn from_changes(changes: Vec<Change>) -> Self {
        let (source_square, target_square, moved_piece) = match changes.as_slice() {
            [] => (None, None, None),
            [only] => (Some(only.square()), None, None),
            [first, second, ..] if second.is_deletion() => {
                (Some(second.square()), Some(first.square()), second.before())
            }
            [first, second, ..] => (Some(first.square()), Some(second.square()), second.after()),
        };

        Self {
            source_square,
            target_square,
            moved_piece,
            squares_affected: changes.len(),
            changes,
        }
    }

    /// Every change record, in [`diff`] order
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Exactly two squares changed, the shape of a plain move or capture
    pub fn is_simple(&self) -> bool {
        self.squares_affected == 2
    }
}

/// Infers the move that turned `previous` into `current`
pub fn detect_move(previous: &Position, current: &Position) -> MoveDescriptor {
    let descriptor = MoveDescriptor::from_changes(diff(previous, current));

    trace!(
        "detected move {:?} -> {:?} ({:?}), {} squares affected",
        descriptor.source_square,
        descriptor.target_square,
        descriptor.moved_piece,
        descriptor.squares_affected
    );

    descriptor
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
