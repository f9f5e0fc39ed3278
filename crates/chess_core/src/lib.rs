pub mod analysis;
pub mod board;
pub mod movegen;
pub mod types;

// Re-export the game model so callers need a single `use chess_core::*`
pub use analysis::*;
pub use board::*;
pub use types::*;
