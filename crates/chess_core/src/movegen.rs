use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Piece {
    /// Candidate destination squares for this piece, in a fixed probe
    /// order. Candidates respect geometry, occupancy and color only; whose
    /// turn it is stays the board's business.
    pub fn possible_moves(&self, board: &Board) -> Vec<(u8, u8)> {
        match self.kind {
            PieceKind::Pawn => pawn_moves(board, self),
            PieceKind::Rook => ray_moves(board, self, &[(0, 1), (1, 0), (0, -1), (-1, 0)]),
            PieceKind::Knight => step_moves(board, self, &KNIGHT_DELTAS),
            PieceKind::Bishop => ray_moves(board, self, &[(1, 1), (1, -1), (-1, 1), (-1, -1)]),
            PieceKind::Queen => ray_moves(
                board,
                self,
                &[
                    (0, 1),
                    (1, 0),
                    (0, -1),
                    (-1, 0),
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                ],
            ),
            PieceKind::King => step_moves(board, self, &KING_DELTAS),
        }
    }
}

fn pawn_moves(board: &Board, piece: &Piece) -> Vec<(u8, u8)> {
    let mut out = Vec::new();
    let r = piece.row as i8;
    let c = piece.col as i8;
    let dir: i8 = match piece.color {
        Color::White => -1,
        Color::Black => 1,
    };

    // forward 1
    if let Some((row, col)) = square(r + dir, c) {
        if board.get_piece(row, col).is_none() {
            out.push((row, col));

            // forward 2 on the first move, only while the single step is open
            if !piece.has_moved {
                if let Some((row2, col2)) = square(r + 2 * dir, c) {
                    if board.get_piece(row2, col2).is_none() {
                        out.push((row2, col2));
                    }
                }
            }
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some((row, col)) = square(r + dir, c + dc) {
            if enemy_at(board, piece.color, row, col) {
                out.push((row, col));
            }
        }
    }

    out
}

fn step_moves(board: &Board, piece: &Piece, deltas: &[(i8, i8)]) -> Vec<(u8, u8)> {
    let mut out = Vec::new();
    for &(dr, dc) in deltas {
        if let Some((row, col)) = square(piece.row as i8 + dr, piece.col as i8 + dc) {
            match board.get_piece(row, col) {
                None => out.push((row, col)),
                Some(pc) if pc.color != piece.color => out.push((row, col)),
                _ => {}
            }
        }
    }
    out
}

fn ray_moves(board: &Board, piece: &Piece, dirs: &[(i8, i8)]) -> Vec<(u8, u8)> {
    let mut out = Vec::new();
    for &(dr, dc) in dirs {
        let mut r = piece.row as i8 + dr;
        let mut c = piece.col as i8 + dc;
        while let Some((row, col)) = square(r, c) {
            match board.get_piece(row, col) {
                None => out.push((row, col)),
                Some(pc) if pc.color != piece.color => {
                    out.push((row, col));
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }
    out
}

fn enemy_at(board: &Board, color: Color, row: u8, col: u8) -> bool {
    match board.get_piece(row, col) {
        Some(pc) => pc.color != color,
        None => false,
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
