mod common;

use common::{PRNG, init_logger, position};
use fenboard::*;

#[test]
fn pawn_push_from_fen_snapshots() {
    init_logger();

    let previous = parse_fen(START_FEN).unwrap();
    let current = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();

    let mv = detect_move(&previous, &current);

    assert_eq!(mv.source_square, Some(Square::E2));
    assert_eq!(mv.target_square, Some(Square::E4));
    assert_eq!(mv.moved_piece, Some(PieceCode::Piece(Piece::WhitePawn)));
    assert_eq!(mv.squares_affected, 2);
}

#[test]
fn capture_in_both_directions() {
    let previous = position(&[("e4", 'P'), ("d5", 'p')]);

    let white_takes = detect_move(&previous, &position(&[("d5", 'P')]));
    assert_eq!(white_takes.source_square, Some(Square::E4));
    assert_eq!(white_takes.target_square, Some(Square::D5));
    assert_eq!(white_takes.moved_piece, Some(PieceCode::Piece(Piece::WhitePawn)));
    assert_eq!(white_takes.squares_affected, 2);

    let black_takes = detect_move(&previous, &position(&[("e4", 'p')]));
    assert_eq!(black_takes.source_square, Some(Square::D5));
    assert_eq!(black_takes.target_square, Some(Square::E4));
    assert_eq!(black_takes.moved_piece, Some(PieceCode::Piece(Piece::BlackPawn)));
    assert_eq!(black_takes.squares_affected, 2);
}

#[test]
fn castling_is_reported_as_four_squares() {
    let previous = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    let current = parse_fen("r3k2r/8/8/8/8/8/8/R4RK1").unwrap();

    let mv = detect_move(&previous, &current);

    assert_eq!(mv.squares_affected, 4);
    assert!(!mv.is_simple());

    let squares: Vec<Square> = mv.changes().iter().map(Change::square).collect();
    assert_eq!(squares, vec![Square::E1, Square::H1, Square::F1, Square::G1]);
}

#[test]
fn black_castling_records_come_before_white_ones() {
    let previous = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    let current = parse_fen("2kr3r/8/8/8/8/8/8/R4RK1").unwrap();

    let mv = detect_move(&previous, &current);
    let squares: Vec<Square> = mv.changes().iter().map(Change::square).collect();

    assert_eq!(
        squares,
        vec![
            Square::A8,
            Square::E8,
            Square::E1,
            Square::H1,
            Square::C8,
            Square::D8,
            Square::F1,
            Square::G1,
        ]
    );
    assert_eq!(mv.source_square, Some(Square::E8));
    assert_eq!(mv.target_square, Some(Square::A8));
    assert_eq!(mv.moved_piece, Some(PieceCode::Piece(Piece::BlackKing)));
}

#[test]
fn capture_promotion_reports_the_pawn() {
    let previous = parse_fen("r7/1P6/8/8/8/8/8/8").unwrap();
    let current = parse_fen("Q7/8/8/8/8/8/8/8").unwrap();

    let mv = detect_move(&previous, &current);

    assert_eq!(mv.source_square, Some(Square::B7));
    assert_eq!(mv.target_square, Some(Square::A8));
    assert_eq!(mv.moved_piece, Some(PieceCode::Piece(Piece::WhitePawn)));
    assert_eq!(mv.squares_affected, 2);
}

#[test]
fn random_single_piece_moves() {
    let mut rng = PRNG::new(7);

    for _ in 0..200 {
        let source = Square::from_index(rng.below(Square::NUM)).unwrap();
        let target = Square::from_index(rng.below(Square::NUM)).unwrap();
        if source == target {
            continue;
        }

        let piece = PieceCode::Piece(Piece::from_index(rng.below(Piece::NUM)).unwrap());
        let previous: Position = [(source, piece)].into_iter().collect();
        let current: Position = [(target, piece)].into_iter().collect();

        let mv = detect_move(&previous, &current);

        assert_eq!(mv.source_square, Some(source));
        assert_eq!(mv.target_square, Some(target));
        assert_eq!(mv.moved_piece, Some(piece));
        assert_eq!(mv.squares_affected, 2);
    }
}

#[test]
fn unchanged_position_has_no_move() {
    let position = Position::start();
    let mv = detect_move(&position, &position);

    assert_eq!(mv.squares_affected, 0);
    assert_eq!(mv.source_square, None);
    assert!(mv.changes().is_empty());
}
