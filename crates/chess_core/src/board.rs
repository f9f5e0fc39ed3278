use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why the board declined a requested move. `move_piece` collapses these
/// to a plain `false`; `try_move_piece` hands them to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on the source square")]
    EmptySource,
    #[error("that piece belongs to the waiting player")]
    WrongTurn,
    #[error("destination is off the board")]
    OutOfBounds,
    #[error("destination already holds one of your pieces")]
    OwnPieceAtDestination,
    #[error("that piece cannot reach the destination")]
    Unreachable,
}

/// One entry of the append-only move log.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub piece: Piece,            // as it stands after the move
    pub captured: Option<Piece>, // occupant of the target square, if any
}

/// Back-rank piece order shared by both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    current_player: Color,
    game_over: bool,
    winner: Option<Color>,
    move_history: Vec<MoveRecord>,
}

impl Board {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();

        // Pawns
        for col in 0..8u8 {
            board.cells[1][col as usize] = Some(Piece::new(PieceKind::Pawn, Color::Black, 1, col));
            board.cells[6][col as usize] = Some(Piece::new(PieceKind::Pawn, Color::White, 6, col));
        }
        // Back ranks: Black along the top row, White along the bottom
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::Black, 0, col as u8));
            board.cells[7][col] = Some(Piece::new(kind, Color::White, 7, col as u8));
        }
        board
    }

    /// A board with no pieces on it, White to move. Starting point for
    /// custom setups.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            current_player: Color::White,
            game_over: false,
            winner: None,
            move_history: Vec::new(),
        }
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Copy of the piece on `(row, col)`; `None` for an empty square or
    /// out-of-range coordinates.
    pub fn get_piece(&self, row: u8, col: u8) -> Option<Piece> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    /// Put a fresh piece on the square, replacing any occupant. Returns
    /// false, changing nothing, when the square is out of range.
    pub fn place_piece(&mut self, kind: PieceKind, color: Color, row: u8, col: u8) -> bool {
        if row >= 8 || col >= 8 {
            return false;
        }
        self.cells[row as usize][col as usize] = Some(Piece::new(kind, color, row, col));
        true
    }

    /// Clear the square, returning whatever stood on it.
    pub fn remove_piece(&mut self, row: u8, col: u8) -> Option<Piece> {
        if row >= 8 || col >= 8 {
            return None;
        }
        self.cells[row as usize][col as usize].take()
    }

    /// Drop an existing piece onto the square its own coordinates name.
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        if piece.row < 8 && piece.col < 8 {
            self.cells[piece.row as usize][piece.col as usize] = Some(piece);
        }
    }

    pub fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .any(|pc| pc.kind == PieceKind::King && pc.color == color)
    }

    /// Turn-independent legality: the destination is in bounds, not held
    /// by the piece's own color, and a member of its candidate set.
    pub fn check_move(&self, piece: &Piece, to_row: u8, to_col: u8) -> Result<(), MoveError> {
        if to_row >= 8 || to_col >= 8 {
            return Err(MoveError::OutOfBounds);
        }
        if let Some(target) = self.get_piece(to_row, to_col) {
            if target.color == piece.color {
                return Err(MoveError::OwnPieceAtDestination);
            }
        }
        if piece.possible_moves(self).contains(&(to_row, to_col)) {
            Ok(())
        } else {
            Err(MoveError::Unreachable)
        }
    }

    pub fn is_valid_move(&self, piece: &Piece, to_row: u8, to_col: u8) -> bool {
        self.check_move(piece, to_row, to_col).is_ok()
    }

    /// Full move protocol. Nothing on the board changes unless the move is
    /// accepted, so a failing call can be retried or reported as-is.
    pub fn try_move_piece(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<(), MoveError> {
        let mut piece = self
            .get_piece(from_row, from_col)
            .ok_or(MoveError::EmptySource)?;
        if piece.color != self.current_player {
            return Err(MoveError::WrongTurn);
        }
        self.check_move(&piece, to_row, to_col)?;

        let captured = self.cells[to_row as usize][to_col as usize];
        self.cells[from_row as usize][from_col as usize] = None;
        piece.move_to(to_row, to_col);
        self.cells[to_row as usize][to_col as usize] = Some(piece);
        self.move_history.push(MoveRecord {
            from: (from_row, from_col),
            to: (to_row, to_col),
            piece,
            captured,
        });

        // Losing the king is the only end condition; the turn flips even
        // on the final move.
        let opponent = self.current_player.other();
        if !self.has_king(opponent) {
            self.game_over = true;
            self.winner = Some(self.current_player);
        }
        self.current_player = opponent;
        Ok(())
    }

    /// Boolean form of `try_move_piece`.
    pub fn move_piece(&mut self, from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> bool {
        self.try_move_piece(from_row, from_col, to_row, to_col)
            .is_ok()
    }

    /// Every move `color` could make as `(from_row, from_col, to_row, to_col)`,
    /// scanning squares in row-major order. Ignores whose turn it is.
    pub fn get_all_moves(&self, color: Color) -> Vec<(u8, u8, u8, u8)> {
        let mut moves = Vec::new();
        for row in 0..8u8 {
            for col in 0..8u8 {
                let piece = match self.get_piece(row, col) {
                    Some(pc) if pc.color == color => pc,
                    _ => continue,
                };
                for (to_row, to_col) in piece.possible_moves(self) {
                    if self.is_valid_move(&piece, to_row, to_col) {
                        moves.push((row, col, to_row, to_col));
                    }
                }
            }
        }
        moves
    }

    /// Back to the exact `new()` state.
    pub fn reset_board(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
