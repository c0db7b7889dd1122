//! # Connect Four
//!
//! A two-player Connect Four game on a 6×7 board, played in the terminal.
//! The rules engine is independent of the UI, which only reports column
//! choices to it and renders what it returns.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, rules engine
//! - [`ui`]: Terminal UI: board view, mouse and keyboard input
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
