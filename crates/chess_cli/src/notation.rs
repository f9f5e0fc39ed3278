//! Coordinate-pair move notation.
//!
//! Moves are typed as two squares: `e2-e4`, `e2 e4` or `e2e4`. Files a-h
//! map to columns 0-7; ranks 8-1 map to rows 0-7 counted from Black's side.

/// Parse a move as `(from_row, from_col, to_row, to_col)`. Case is
/// forgiven, and any run of dashes or spaces may separate the squares;
/// a separator anywhere else makes the move unreadable.
pub fn parse_move(input: &str) -> Option<(u8, u8, u8, u8)> {
    let text = input.trim().to_ascii_lowercase();
    let b = text.as_bytes();
    if b.len() < 4 {
        return None;
    }
    let (from_row, from_col) = parse_square(b[0], b[1])?;
    let mut i = 2;
    while i < b.len() && matches!(b[i], b'-' | b' ') {
        i += 1;
    }
    if i + 2 != b.len() {
        return None;
    }
    let (to_row, to_col) = parse_square(b[i], b[i + 1])?;
    Some((from_row, from_col, to_row, to_col))
}

fn parse_square(file: u8, rank: u8) -> Option<(u8, u8)> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some((b'8' - rank, file - b'a'))
}

pub fn format_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = (b'8' - row) as char;
    format!("{file}{rank}")
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
