use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use crate::game::{Column, GameResult, COLS, ROWS};

/// Each cell is drawn three characters wide.
const CELL_WIDTH: u16 = 3;
/// Frame column on each side of the grid.
const BOARD_WIDTH: u16 = CELL_WIDTH * COLS as u16 + 2;
/// Column numbers, top border, grid rows, bottom border, cursor.
const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

/// Draw the whole screen and return the area the board occupies.
pub fn render(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    let board_area = board_rect(chunks[1]);
    render_board(frame, app, board_area);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);

    // Over the message and controls rows, so the board stays visible
    if let Some(result) = app.pending_game_over() {
        render_game_over(frame, app, result, chunks[2].union(chunks[3]));
    }

    board_area
}

/// Fixed-size board rectangle centered in `area`.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a screen position to the board column under it.
pub fn column_at(board: Rect, x: u16, y: u16) -> Option<usize> {
    if y < board.y || y >= board.y + board.height || x <= board.x {
        return None;
    }
    let col = ((x - board.x - 1) / CELL_WIDTH) as usize;
    (col < COLS).then_some(col)
}

/// Header text and color: the side to move, or the finished game's winner.
fn header_status(app: &App) -> (String, Color) {
    let palette = app.palette();
    match app.engine().result() {
        GameResult::InProgress => {
            let player = app.engine().current_player();
            (
                format!("{} to move", app.player_name(player)),
                palette.player_color(player),
            )
        }
        GameResult::Win(winner) => ("Game Over".to_string(), palette.player_color(winner)),
        GameResult::Draw => ("Game Over".to_string(), Color::White),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color) = header_status(app);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let board = app.engine().board();
    let palette = app.palette();
    let winning_line = app.engine().winning_line();
    let selected_column = app.selected_column();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for column in Column::all() {
        let col = column.index();
        let label = format!(" {} ", col + 1);
        if board.is_column_full(column) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let bar = "═".repeat(CELL_WIDTH as usize * COLS);
    lines.push(Line::from(format!("╔{bar}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("║")];
        for col in 0..COLS {
            let cell = board.get(row, col);
            let symbol = if cell.player().is_some() { " ● " } else { " . " };
            let mut style = Style::default().fg(palette.cell_color(cell));
            if winning_line.is_some_and(|line| line.contains(&(row, col))) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("╚{bar}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw(" ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Click/Enter: Drop  |  ←/→: Move  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn render_game_over(frame: &mut Frame, app: &App, result: GameResult, area: Rect) {
    let (text, color) = match result {
        GameResult::Win(player) => (
            format!("{} wins!", app.player_name(player)),
            app.palette().player_color(player),
        ),
        _ => ("It's a draw!".to_string(), Color::White),
    };

    let area = popup_rect(area, 30, 6);
    let popup = Paragraph::new(vec![
        Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Press any key or click"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game Over!"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
