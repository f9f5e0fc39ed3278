use super::*;

#[test]
fn test_piece_under_attack() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Pawn, Color::White, 4, 4);
    board.place_piece(PieceKind::Rook, Color::Black, 4, 0);

    let pawn = board.get_piece(4, 4).unwrap();
    assert!(piece_under_attack(&board, &pawn));

    // The pawn only covers its two capture diagonals
    let rook = board.get_piece(4, 0).unwrap();
    assert!(!piece_under_attack(&board, &rook));
}

#[test]
fn test_is_safe_square_ignores_kings() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::King, Color::Black, 0, 0);

    // Watched by the enemy king alone, still counted safe
    assert!(is_safe_square(&board, Color::White, 0, 1));

    board.place_piece(PieceKind::Rook, Color::Black, 7, 1);
    assert!(!is_safe_square(&board, Color::White, 0, 1));

    // Own pieces never make a square unsafe
    assert!(is_safe_square(&board, Color::Black, 0, 1));
}

#[test]
fn test_would_expose_king() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::King, Color::White, 7, 4);
    board.place_piece(PieceKind::Rook, Color::White, 6, 4);
    board.place_piece(PieceKind::Rook, Color::Black, 0, 4);
    let rook = board.get_piece(6, 4).unwrap();

    // Stepping off the file uncovers the king
    assert!(would_expose_king(&board, &rook, 6, 0));
    // Sliding along the file keeps the cover
    assert!(!would_expose_king(&board, &rook, 1, 4));
}

#[test]
fn test_would_expose_king_without_king() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Rook, Color::White, 6, 4);
    board.place_piece(PieceKind::Rook, Color::Black, 0, 4);
    let rook = board.get_piece(6, 4).unwrap();
    assert!(!would_expose_king(&board, &rook, 6, 0));
}

#[test]
fn test_attack_paths_trivial_and_bounded() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Rook, Color::White, 0, 0);
    let rook = board.get_piece(0, 0).unwrap();

    // Already standing on the target: one empty path
    let paths = attack_paths(&board, &rook, (0, 0), MAX_PATH_DEPTH);
    assert_eq!(paths, vec![vec![]]);

    // No hops allowed, target elsewhere: no paths
    assert!(attack_paths(&board, &rook, (0, 7), 0).is_empty());

    // One hop: the direct slide and nothing else
    let paths = attack_paths(&board, &rook, (0, 7), 1);
    assert_eq!(paths, vec![vec![(0, 7)]]);

    // Two hops: the direct slide plus one detour through each square
    // between the rook and the target
    let paths = attack_paths(&board, &rook, (0, 7), 2);
    assert_eq!(paths.len(), 7);
    assert!(paths.contains(&vec![(0, 7)]));
    assert!(paths.iter().all(|p| p.len() <= 2));
}

#[test]
fn test_attack_paths_avoid_unsafe_squares() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Rook, Color::White, 0, 0);
    board.place_piece(PieceKind::Rook, Color::Black, 7, 1);
    let rook = board.get_piece(0, 0).unwrap();

    // (0, 1) and (7, 0) are watched by the enemy rook, so no path may
    // step on them; detours run through the far side of the row
    let paths = attack_paths(&board, &rook, (0, 2), 2);
    assert_eq!(paths.len(), 6);
    assert!(paths.contains(&vec![(0, 2)]));
    assert!(!paths.iter().any(|p| p.contains(&(0, 1))));
    assert!(!paths.iter().any(|p| p.contains(&(7, 0))));
}

#[test]
fn test_board_report_empty() {
    assert_eq!(board_report(&Board::empty()), BoardReport::default());
}

#[test]
fn test_board_report_single_rook() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Rook, Color::White, 0, 0);

    let report = board_report(&board);
    assert_eq!(report.total_moves, 14);
    assert_eq!(report.safe_moves, 14);
    assert_eq!(report.dangerous_moves, 0);
    assert_eq!(report.pieces_under_attack, 0);
    // base 28, echoed: 28 + (28 + (28 + 28/2)/2)/2
    assert_eq!(report.complexity_score, 52);
}

#[test]
fn test_board_report_two_rooks() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Rook, Color::White, 0, 0);
    board.place_piece(PieceKind::Rook, Color::Black, 7, 7);

    let report = board_report(&board);
    assert_eq!(report.total_moves, 28);
    // Each rook has two landing squares covered by the other
    assert_eq!(report.safe_moves, 24);
    assert_eq!(report.dangerous_moves, 4);
    assert_eq!(report.pieces_under_attack, 0);
    assert_eq!(report.complexity_score, 127);
}

#[test]
fn test_board_report_counts_attacked_pieces() {
    let mut board = Board::empty();
    board.place_piece(PieceKind::Pawn, Color::White, 4, 4);
    board.place_piece(PieceKind::Rook, Color::Black, 4, 0);

    let report = board_report(&board);
    assert_eq!(report.total_moves, 13); // 2 pawn + 11 rook
    assert_eq!(report.safe_moves, 13);
    assert_eq!(report.dangerous_moves, 0);
    assert_eq!(report.pieces_under_attack, 1);
    assert_eq!(report.complexity_score, 58);
}
