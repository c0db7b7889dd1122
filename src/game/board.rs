use super::player::Player;
use super::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces needed to win.
const LINE_LEN: usize = 4;

/// Line directions as (row step, col step): horizontal, vertical,
/// diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }
}

/// A column index known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(usize);

impl Column {
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index < COLS {
            Ok(Column(index))
        } else {
            Err(MoveError::InvalidColumn(index))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// All seven columns, left to right
    pub fn all() -> impl Iterator<Item = Column> {
        (0..COLS).map(Column)
    }
}

impl TryFrom<usize> for Column {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Column::new(index)
    }
}

/// Four board coordinates as (row, col), in line order.
pub type Line = [(usize, usize); LINE_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: Column) -> bool {
        self.cells[0][col.index()] != Cell::Empty
    }

    /// Lowest empty row in a column, scanning from the bottom up
    pub fn lowest_empty_row(&self, col: Column) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col.index()] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: Column, cell: Cell) -> Result<usize, MoveError> {
        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col.index()))?;
        self.cells[row][col.index()] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Set every cell back to empty
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// The player owning a four-in-a-row, if any
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|line| self.get(line[0].0, line[0].1).player())
    }

    /// First four-in-a-row found scanning the grid top-left to bottom-right.
    ///
    /// Every occupied cell is tried as the start of a line in each of the
    /// four directions. A run longer than four matches from more than one
    /// start; only the first match in scan order is returned.
    pub fn winning_line(&self) -> Option<Line> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    let Some(line) = line_from(row, col, dr, dc) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| self.cells[r][c] == cell) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Coordinates of the line starting at (row, col), or None if it leaves the grid.
fn line_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<Line> {
    let mut line = [(row, col); LINE_LEN];
    for (k, slot) in line.iter_mut().enumerate().skip(1) {
        let r = row.checked_add_signed(dr * k as isize)?;
        let c = col.checked_add_signed(dc * k as isize)?;
        if r >= ROWS || c >= COLS {
            return None;
        }
        *slot = (r, c);
    }
    Some(line)
}
