//! Uniformly random move selection for the `bot` command.

use chess_core::Board;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Any move the side to play could make, or `None` when it has none.
pub fn random_move(board: &Board) -> Option<(u8, u8, u8, u8)> {
    let moves = board.get_all_moves(board.current_player());
    moves.choose(&mut thread_rng()).copied()
}

#[cfg(test)]
#[path = "bot_tests.rs"]
mod bot_tests;
