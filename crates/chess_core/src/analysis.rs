//! Exploratory position analysis on top of the move generator.
//!
//! Everything here asks its question of a snapshot: what-if moves clone
//! the board and relocate one piece on the clone, so the live game is
//! never touched, and every recursion carries an explicit depth bound.

use crate::board::Board;
use crate::types::*;

/// Conventional hop bound for `attack_paths`.
pub const MAX_PATH_DEPTH: usize = 3;

/// Mobility and safety counts over every piece of both colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardReport {
    pub total_moves: usize,
    pub safe_moves: usize,
    pub dangerous_moves: usize,
    pub pieces_under_attack: usize,
    pub complexity_score: usize,
}

/// True when any enemy piece's candidate set contains the piece's square.
pub fn piece_under_attack(board: &Board, piece: &Piece) -> bool {
    pieces(board)
        .into_iter()
        .filter(|pc| pc.color != piece.color)
        .any(|pc| pc.possible_moves(board).contains(&(piece.row, piece.col)))
}

/// True when no enemy of `color` can reach `(row, col)`. Enemy kings are
/// left out of the scan; a square watched only by a king still counts as
/// safe here.
pub fn is_safe_square(board: &Board, color: Color, row: u8, col: u8) -> bool {
    !pieces(board)
        .into_iter()
        .filter(|pc| pc.color != color && pc.kind != PieceKind::King)
        .any(|pc| pc.possible_moves(board).contains(&(row, col)))
}

/// Would moving `piece` to `(to_row, to_col)` leave its own king attacked?
/// Answered on a relocated snapshot; false when the side has no king.
pub fn would_expose_king(board: &Board, piece: &Piece, to_row: u8, to_col: u8) -> bool {
    let (snapshot, _) = relocated(board, piece, to_row, to_col);
    let king = match pieces(&snapshot)
        .into_iter()
        .find(|pc| pc.kind == PieceKind::King && pc.color == piece.color)
    {
        Some(king) => king,
        None => return false,
    };
    piece_under_attack(&snapshot, &king)
}

/// Every sequence of at most `max_depth` hops that brings `piece` to
/// `target`. A hop may not revisit a square already on the path, must land
/// on a safe square, and must not expose the piece's own king; each hop
/// recurses on a snapshot with the piece relocated. A piece already on the
/// target yields one empty path.
pub fn attack_paths(
    board: &Board,
    piece: &Piece,
    target: (u8, u8),
    max_depth: usize,
) -> Vec<Vec<(u8, u8)>> {
    let mut paths = Vec::new();
    let mut path = Vec::new();
    extend_paths(board, *piece, target, max_depth, &mut path, &mut paths);
    paths
}

fn extend_paths(
    board: &Board,
    piece: Piece,
    target: (u8, u8),
    max_depth: usize,
    path: &mut Vec<(u8, u8)>,
    paths: &mut Vec<Vec<(u8, u8)>>,
) {
    if path.len() > max_depth {
        return;
    }
    if (piece.row, piece.col) == target {
        paths.push(path.clone());
        return;
    }
    for (row, col) in piece.possible_moves(board) {
        if path.contains(&(row, col)) {
            continue;
        }
        if !is_safe_square(board, piece.color, row, col) {
            continue;
        }
        if would_expose_king(board, &piece, row, col) {
            continue;
        }
        let (snapshot, moved) = relocated(board, &piece, row, col);
        path.push((row, col));
        extend_paths(&snapshot, moved, target, max_depth, path, paths);
        path.pop();
    }
}

/// Survey the whole position: candidate totals, per-square safety, pieces
/// standing on attacked squares, and the aggregate complexity score.
pub fn board_report(board: &Board) -> BoardReport {
    let mut report = BoardReport::default();
    for piece in pieces(board) {
        let moves = piece.possible_moves(board);
        report.total_moves += moves.len();
        for (row, col) in moves {
            if is_safe_square(board, piece.color, row, col) {
                report.safe_moves += 1;
            } else {
                report.dangerous_moves += 1;
            }
        }
        if piece_under_attack(board, &piece) {
            report.pieces_under_attack += 1;
        }
    }
    report.complexity_score = complexity_score(&report, 0);
    report
}

// Weighted count with diminishing echoes of itself at deeper levels;
// depth 0 is the value reported.
fn complexity_score(report: &BoardReport, depth: usize) -> usize {
    if depth > 5 {
        return 0;
    }
    let base = report.total_moves * 2 + report.dangerous_moves * 3 + report.pieces_under_attack * 5;
    if depth < 3 {
        base + complexity_score(report, depth + 1) / 2
    } else {
        base
    }
}

fn relocated(board: &Board, piece: &Piece, to_row: u8, to_col: u8) -> (Board, Piece) {
    let mut snapshot = board.clone();
    let mut moved = snapshot.remove_piece(piece.row, piece.col).unwrap_or(*piece);
    moved.move_to(to_row, to_col);
    snapshot.put_piece(moved);
    (snapshot, moved)
}

fn pieces(board: &Board) -> Vec<Piece> {
    let mut out = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            if let Some(piece) = board.get_piece(row, col) {
                out.push(piece);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
