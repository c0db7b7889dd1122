//! Terminal UI: renders the board engine's state and feeds it column
//! choices from mouse clicks or the keyboard.

mod app;
mod game_view;
mod palette;
pub mod terminal;

pub use app::App;
pub use palette::Palette;
