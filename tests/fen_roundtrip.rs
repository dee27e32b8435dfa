mod common;

use common::{PRNG, init_logger, position};
use fenboard::board::fen::EMPTY_BOARD_FEN;
use fenboard::*;

#[test]
fn random_positions_roundtrip_through_fen() {
    init_logger();
    let mut rng = PRNG::default();

    for _ in 0..500 {
        let position = rng.random_position();

        let expanded = to_fen(&position);
        assert!(is_valid_fen(&expanded), "{expanded}");
        assert_eq!(parse_fen(&expanded).as_ref(), Ok(&position));

        let compact = position.fen_with(FenStyle::Compact);
        assert!(is_valid_fen(&compact), "{compact}");
        assert_eq!(parse_fen(&compact).as_ref(), Ok(&position));
    }
}

#[test]
fn random_positions_roundtrip_through_json() {
    let mut rng = PRNG::new(42);

    for _ in 0..200 {
        let position = rng.random_position();
        let value = serde_json::to_value(&position).unwrap();

        assert!(is_valid_position(&value));
        assert_eq!(Position::from_value(&value).as_ref(), Ok(&position));
        assert_eq!(to_fen_value(&value), Ok(to_fen(&position)));
    }
}

#[test]
fn empty_board() {
    let position = parse_fen(EMPTY_BOARD_FEN).unwrap();

    assert!(position.is_empty());
    assert_eq!(position.to_string(), EMPTY_BOARD_FEN);
    assert_eq!(parse_fen(&to_fen(&position)), Ok(position));
}

#[test]
fn suffix_after_first_space_is_ignored() {
    let full = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let position = parse_fen(full).unwrap();

    assert_eq!(position.on(Square::E4), Some(PieceCode::Piece(Piece::WhitePawn)));
    assert_eq!(position.on(Square::E2), None);
    assert_eq!(Ok(position), parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"));

    // Garbage after the space does not matter either.
    assert!(is_valid_fen("8/8/8/8/8/8/8/8 this is not a move"));
}

#[test]
fn malformed_fens_are_rejected() {
    init_logger();

    let malformed = [
        "8/8/8/8/8/8/8",
        "8/8/8/8/8/8/8/8/8",
        "7/8/8/8/8/8/8/8",
        "81/8/8/8/8/8/8/8",
        "9/8/8/8/8/8/8/8",
        "x7/8/8/8/8/8/8/8",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR",
        "8/8/8/8/8/8/8/8/",
        "",
        " 8/8/8/8/8/8/8/8",
    ];

    for fen in malformed {
        assert!(!is_valid_fen(fen), "{fen:?} should be rejected");
        assert!(parse_fen(fen).is_err(), "{fen:?} should not parse");
    }
}

#[test]
fn placeholders_survive_parsing() {
    let position = parse_fen("?7/8/8/8/8/8/8/7-").unwrap();

    assert_eq!(position, common::position(&[("a8", '?'), ("h1", '-')]));
    assert_eq!(
        to_fen(&position),
        "?0000000/00000000/00000000/00000000/00000000/00000000/00000000/0000000-"
    );
}

#[test]
fn start_position_matches_start_fen() {
    assert_eq!(parse_fen(START_FEN), Ok(Position::start()));
    assert_eq!(
        Position::start(),
        position(&[
            ("a1", 'R'),
            ("b1", 'N'),
            ("c1", 'B'),
            ("d1", 'Q'),
            ("e1", 'K'),
            ("f1", 'B'),
            ("g1", 'N'),
            ("h1", 'R'),
            ("a2", 'P'),
            ("b2", 'P'),
            ("c2", 'P'),
            ("d2", 'P'),
            ("e2", 'P'),
            ("f2", 'P'),
            ("g2", 'P'),
            ("h2", 'P'),
            ("a7", 'p'),
            ("b7", 'p'),
            ("c7", 'p'),
            ("d7", 'p'),
            ("e7", 'p'),
            ("f7", 'p'),
            ("g7", 'p'),
            ("h7", 'p'),
            ("a8", 'r'),
            ("b8", 'n'),
            ("c8", 'b'),
            ("d8", 'q'),
            ("e8", 'k'),
            ("f8", 'b'),
            ("g8", 'n'),
            ("h8", 'r'),
        ])
    );
}
