use ratatui::style::Color;

use crate::config::{parse_color, UiConfig};
use crate::error::ConfigError;
use crate::game::{Cell, Player};

/// Terminal colors for each kind of cell, resolved once from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player_a: Color,
    pub player_b: Color,
    pub empty: Color,
}

impl Palette {
    pub fn from_config(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Palette {
            player_a: parse_color("ui.player_a_color", &config.player_a_color)?,
            player_b: parse_color("ui.player_b_color", &config.player_b_color)?,
            empty: parse_color("ui.empty_color", &config.empty_color)?,
        })
    }

    pub fn player_color(&self, player: Player) -> Color {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    pub fn cell_color(&self, cell: Cell) -> Color {
        match cell.player() {
            Some(player) => self.player_color(player),
            None => self.empty,
        }
    }
}
