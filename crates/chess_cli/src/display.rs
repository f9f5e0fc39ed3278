//! Terminal rendering: the board, the move log, move lists and reports.

use crate::notation;
use crate::settings::Settings;
use chess_core::{Board, BoardReport, Color, MoveRecord, Piece, PieceKind};

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// The board as the players see it, optionally framed with coordinates.
/// Empty squares form a checkerboard so the eye keeps the grid.
pub fn render_board(board: &Board, settings: &Settings) -> String {
    let mut out = String::new();
    if settings.show_coordinates {
        out.push_str("  a b c d e f g h\n");
    }
    for row in 0..8u8 {
        let mut line = String::new();
        if settings.show_coordinates {
            line.push(rank_label(row));
            line.push(' ');
        }
        for col in 0..8u8 {
            let cell = match board.get_piece(row, col) {
                Some(piece) => piece_char(piece, settings.unicode_pieces),
                None => shade(row, col, settings.unicode_pieces),
            };
            line.push(cell);
            if col < 7 {
                line.push(' ');
            }
        }
        if settings.show_coordinates {
            line.push(' ');
            line.push(rank_label(row));
        }
        out.push_str(&line);
        out.push('\n');
    }
    if settings.show_coordinates {
        out.push_str("  a b c d e f g h\n");
    }
    out
}

/// One log entry, e.g. `  3. ♕ h5-f7 x♟`.
pub fn format_record(number: usize, record: &MoveRecord, settings: &Settings) -> String {
    let mut line = format!(
        "{:>3}. {} {}-{}",
        number,
        piece_char(record.piece, settings.unicode_pieces),
        notation::format_square(record.from.0, record.from.1),
        notation::format_square(record.to.0, record.to.1)
    );
    if let Some(captured) = record.captured {
        line.push_str(&format!(
            " x{}",
            piece_char(captured, settings.unicode_pieces)
        ));
    }
    line
}

pub fn render_history(board: &Board, settings: &Settings) -> String {
    if board.move_history().is_empty() {
        return "No moves yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, record) in board.move_history().iter().enumerate() {
        out.push_str(&format_record(i + 1, record, settings));
        out.push('\n');
    }
    out
}

/// Every move the side to play has, grouped per piece.
pub fn render_moves(board: &Board) -> String {
    let color = board.current_player();
    let moves = board.get_all_moves(color);
    if moves.is_empty() {
        return format!("{} has no moves.\n", color_name(color));
    }
    let mut out = format!("Moves for {}:\n", color_name(color));
    let mut current_from: Option<(u8, u8)> = None;
    for (from_row, from_col, to_row, to_col) in moves {
        if current_from != Some((from_row, from_col)) {
            if current_from.is_some() {
                out.push('\n');
            }
            let name = board
                .get_piece(from_row, from_col)
                .map(|pc| pc.kind.name())
                .unwrap_or("piece");
            out.push_str(&format!(
                "  {} {}:",
                name,
                notation::format_square(from_row, from_col)
            ));
            current_from = Some((from_row, from_col));
        }
        out.push_str(&format!(" {}", notation::format_square(to_row, to_col)));
    }
    out.push('\n');
    out
}

pub fn render_report(report: &BoardReport) -> String {
    format!(
        "Moves available: {} ({} safe, {} dangerous)\n\
         Pieces under attack: {}\n\
         Complexity score: {}\n",
        report.total_moves,
        report.safe_moves,
        report.dangerous_moves,
        report.pieces_under_attack,
        report.complexity_score
    )
}

fn rank_label(row: u8) -> char {
    (b'8' - row) as char
}

fn piece_char(piece: Piece, unicode: bool) -> char {
    if unicode {
        return piece.symbol();
    }
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

fn shade(row: u8, col: u8, unicode: bool) -> char {
    let dark = (row + col) % 2 == 0;
    match (unicode, dark) {
        (true, true) => '▓',
        (true, false) => '░',
        (false, true) => '.',
        (false, false) => ',',
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
