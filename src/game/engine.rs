use super::board::{Board, Column, Line};
use super::player::Player;

/// Game status, derived from the board after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Rejected drops. None of these touch the board or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is over")]
    GameOver,
}

/// Where a piece landed, and the game status right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub result: GameResult,
}

/// Connect Four rules engine: owns the board and the side to move.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEngine {
    board: Board,
    current_player: Player,
}

impl BoardEngine {
    /// Empty board, player A to move
    pub fn new() -> Self {
        BoardEngine {
            board: Board::new(),
            current_player: Player::A,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drop a piece for the current player into a raw column index.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        self.drop_in(Column::new(column)?)
    }

    /// Drop a piece for the current player into a validated column.
    pub fn drop_in(&mut self, column: Column) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        self.current_player = player.other();

        Ok(Placement {
            row,
            column: column.index(),
            player,
            result: self.result(),
        })
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Winning side, if any four-in-a-row is on the board
    pub fn check_win(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Cells of the winning four-in-a-row, if any
    pub fn winning_line(&self) -> Option<Line> {
        self.board.winning_line()
    }

    /// Current game status. A win takes precedence over a full board.
    pub fn result(&self) -> GameResult {
        if let Some(player) = self.check_win() {
            GameResult::Win(player)
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result().is_over()
    }

    /// Clear the board and give the move back to player A
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::A;
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    /// Full-board game with no four-in-a-row at any point.
    const DRAW_GAME: [usize; 42] = [
        4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6, 5,
        2, 0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
    ];

    /// Full-board game where the 42nd move (player B) completes a four.
    const WIN_ON_LAST_MOVE: [usize; 42] = [
        4, 5, 6, 4, 4, 4, 3, 4, 1, 2, 3, 2, 5, 3, 0, 6, 1, 1, 4, 6, 0, 2, 2, 3, 0, 5, 6, 0, 3, 1,
        1, 0, 0, 5, 3, 6, 1, 2, 6, 2, 5, 5,
    ];

    fn play(engine: &mut BoardEngine, moves: &[usize]) -> Placement {
        let mut last = None;
        for &col in moves {
            last = Some(engine.drop_piece(col).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_initial_state() {
        let engine = BoardEngine::new();
        assert_eq!(engine.current_player(), Player::A);
        assert_eq!(engine.result(), GameResult::InProgress);
        assert!(!engine.is_terminal());
        assert!(!engine.is_full());
        assert_eq!(engine.check_win(), None);
    }

    #[test]
    fn test_drop_piece_reports_placement() {
        let mut engine = BoardEngine::new();
        let placement = engine.drop_piece(3).unwrap();

        assert_eq!(
            placement,
            Placement {
                row: 5,
                column: 3,
                player: Player::A,
                result: GameResult::InProgress,
            }
        );
        assert_eq!(engine.current_player(), Player::B);
        assert_eq!(engine.board().get(5, 3), Cell::A);
    }

    #[test]
    fn test_turn_alternates_on_success_only() {
        let mut engine = BoardEngine::new();
        for _ in 0..ROWS {
            engine.drop_piece(0).unwrap();
        }
        // Six drops: A, B, A, B, A, B
        assert_eq!(engine.current_player(), Player::A);
        for row in 0..ROWS {
            let expected = if row % 2 == 0 { Cell::B } else { Cell::A };
            assert_eq!(engine.board().get(row, 0), expected);
        }

        assert_eq!(engine.drop_piece(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(engine.current_player(), Player::A);

        assert_eq!(engine.drop_piece(1).unwrap().player, Player::A);
        assert_eq!(engine.current_player(), Player::B);
    }

    #[test]
    fn test_invalid_column_leaves_state_unchanged() {
        let mut engine = BoardEngine::new();
        engine.drop_piece(2).unwrap();
        let before = engine.clone();

        for col in [COLS, COLS + 1, usize::MAX] {
            assert_eq!(engine.drop_piece(col), Err(MoveError::InvalidColumn(col)));
            assert_eq!(engine, before);
        }
    }

    #[test]
    fn test_column_full_leaves_state_unchanged() {
        for col in 0..COLS {
            let mut engine = BoardEngine::new();
            for _ in 0..ROWS {
                engine.drop_piece(col).unwrap();
            }
            let before = engine.clone();
            assert_eq!(engine.drop_piece(col), Err(MoveError::ColumnFull(col)));
            assert_eq!(engine, before);
        }
    }

    #[test]
    fn test_vertical_win_scenario() {
        let mut engine = BoardEngine::new();
        let last = play(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);

        assert_eq!(last.player, Player::A);
        assert_eq!(last.row, 2);
        assert_eq!(last.result, GameResult::Win(Player::A));
        assert_eq!(engine.check_win(), Some(Player::A));
        assert!(engine.is_terminal());
    }

    #[test]
    fn test_horizontal_win_for_second_player() {
        let mut engine = BoardEngine::new();
        // A scatters on the bottom row's right side and stacks, B builds 0..=3
        let last = play(&mut engine, &[6, 0, 6, 1, 5, 2, 6, 3]);

        assert_eq!(last.result, GameResult::Win(Player::B));
        assert_eq!(engine.check_win(), Some(Player::B));
        assert_eq!(
            engine.winning_line(),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_win() {
        let mut engine = BoardEngine::new();
        // A: (5,0) (4,1) (3,2) (2,3)
        let last = play(&mut engine, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        assert_eq!(last.player, Player::A);
        assert_eq!(last.result, GameResult::Win(Player::A));
    }

    #[test]
    fn test_draw() {
        let mut engine = BoardEngine::new();
        for (i, &col) in DRAW_GAME.iter().enumerate() {
            let placement = engine.drop_piece(col).unwrap();
            if i + 1 < DRAW_GAME.len() {
                assert_eq!(placement.result, GameResult::InProgress);
            } else {
                assert_eq!(placement.result, GameResult::Draw);
            }
        }

        assert!(engine.is_full());
        assert_eq!(engine.check_win(), None);
        assert_eq!(engine.result(), GameResult::Draw);
    }

    #[test]
    fn test_win_beats_draw_on_last_cell() {
        let mut engine = BoardEngine::new();
        let last = play(&mut engine, &WIN_ON_LAST_MOVE);

        assert!(engine.is_full());
        assert_eq!(last.player, Player::B);
        assert_eq!(last.result, GameResult::Win(Player::B));
    }

    #[test]
    fn test_terminal_state_rejects_drops() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);
        let before = engine.clone();

        assert_eq!(engine.drop_piece(4), Err(MoveError::GameOver));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_reset() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);
        engine.reset();

        assert_eq!(engine, BoardEngine::new());
        assert_eq!(engine.check_win(), None);
        assert!(!engine.is_full());

        // Mid-game reset with B to move
        engine.drop_piece(3).unwrap();
        engine.reset();
        assert_eq!(engine.current_player(), Player::A);
        assert_eq!(engine.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_reset_after_draw() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAW_GAME);
        engine.reset();
        assert_eq!(engine.result(), GameResult::InProgress);
        assert!(engine.drop_piece(0).is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }
}
