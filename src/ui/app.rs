use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::game_view;
use super::palette::Palette;
use crate::config::UiConfig;
use crate::error::ConfigError;
use crate::game::{BoardEngine, GameResult, MoveError, Player, COLS};

pub struct App {
    engine: BoardEngine,
    config: UiConfig,
    palette: Palette,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Finished game whose notice has not been dismissed yet
    pending_game_over: Option<GameResult>,
    /// Where the board was last drawn, for mapping mouse clicks
    board_area: Rect,
}

impl App {
    pub fn new(config: UiConfig) -> Result<Self, ConfigError> {
        let palette = Palette::from_config(&config)?;
        info!(
            player_a = %config.player_a_name,
            player_b = %config.player_b_name,
            "new game"
        );
        Ok(App {
            engine: BoardEngine::new(),
            selected_column: config.start_column.min(COLS - 1),
            config,
            palette,
            should_quit: false,
            message: None,
            pending_game_over: None,
            board_area: Rect::default(),
        })
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn pending_game_over(&self) -> Option<GameResult> {
        self.pending_game_over
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.config.player_a_name,
            Player::B => &self.config.player_b_name,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let mut board_area = self.board_area;
            terminal.draw(|f| board_area = game_view::render(f, self))?;
            self.board_area = board_area;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    self.handle_click(mouse.column, mouse.row)
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if self.pending_game_over.is_some() {
            self.acknowledge_game_over();
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    /// Handle a left click at a screen position
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if self.pending_game_over.is_some() {
            self.acknowledge_game_over();
            return;
        }

        if let Some(column) = game_view::column_at(self.board_area, x, y) {
            self.message = None;
            self.selected_column = column;
            self.drop_piece(column);
        }
    }

    /// Drop a piece for the side to move
    pub fn drop_piece(&mut self, column: usize) {
        match self.engine.drop_piece(column) {
            Ok(placement) => {
                debug!(
                    player = placement.player.label(),
                    row = placement.row,
                    column = placement.column,
                    "piece placed"
                );
                if placement.result.is_over() {
                    match placement.result {
                        GameResult::Win(player) => info!(winner = player.label(), "game won"),
                        _ => info!("game drawn"),
                    }
                    self.pending_game_over = Some(placement.result);
                    self.message = Some("Game Over!".to_string());
                }
            }
            Err(err @ MoveError::ColumnFull(_)) => {
                debug!(%err, "drop rejected");
                self.message = Some("Column is full!".to_string());
            }
            Err(err @ MoveError::InvalidColumn(_)) => {
                debug!(%err, "drop rejected");
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Dismiss the game-over notice, starting over if configured to
    fn acknowledge_game_over(&mut self) {
        self.pending_game_over = None;
        if self.config.auto_reset {
            self.reset();
        } else {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.pending_game_over = None;
        self.selected_column = self.config.start_column.min(COLS - 1);
        self.message = Some("New game started!".to_string());
        info!("board reset");
    }
}
