//! Core Connect Four rules: board representation, the two sides, and the
//! engine that enforces turns, detects wins and draws, and resets.
//!
//! The engine is a plain owned value with no I/O. Callers serialize input and
//! render whatever it reports.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, Column, Line, COLS, ROWS};
pub use engine::{BoardEngine, GameResult, MoveError, Placement};
pub use player::Player;
