use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// Accepts either case, so `'x'` and `'X'` are the same mark.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Self::X),
            'O' => Some(Self::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::X => Some(Mark::X),
            Self::O => Some(Mark::O),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Placed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
        }
    }
}

/// The nine cells of the grid, row by row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        let index = validate_index(index)?;
        Ok(self.cells[usize::from(index)])
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Sets the cell to `mark` if it is empty. An occupied cell is left alone and reported as
    /// [`MarkOutcome::NoChange`]; only an out-of-range index is an error.
    pub fn place_mark(&mut self, index: CellIndex, mark: Mark) -> Result<MarkOutcome> {
        let index = validate_index(index)?;
        let cell = &mut self.cells[usize::from(index)];

        Ok(if cell.is_empty() {
            *cell = mark.into();
            MarkOutcome::Placed
        } else {
            MarkOutcome::NoChange
        })
    }

    pub fn empty_cells(&self) -> CellSet {
        (0..CELL_COUNT as CellIndex)
            .filter(|&index| self[index].is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

/// Parses nine cells written row by row, ignoring whitespace. `X` and `O` may be in either case;
/// `_`, `.` and `-` are empty cells.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut len = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '_' | '.' | '-' => Cell::Empty,
                c => Mark::from_char(c)
                    .ok_or(ParseBoardError::InvalidChar(c))?
                    .into(),
            };
            if len < CELL_COUNT {
                board.cells[len] = cell;
            }
            len += 1;
        }

        if len != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(len));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.mark().map_or('_', Mark::as_char))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn place_mark_fills_empty_cell_once() {
        let mut board = Board::new();

        assert_eq!(board.place_mark(4, Mark::X).unwrap(), MarkOutcome::Placed);
        assert_eq!(board.place_mark(4, Mark::X).unwrap(), MarkOutcome::NoChange);
        assert_eq!(board.place_mark(4, Mark::O).unwrap(), MarkOutcome::NoChange);
        assert_eq!(board[4], Cell::X);
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn place_mark_rejects_out_of_range_index() {
        let mut board = Board::new();

        assert_eq!(
            board.place_mark(9, Mark::O),
            Err(GameError::InvalidIndex(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn empty_cells_tracks_placements_and_reset() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells(), CellSet::all());

        board.place_mark(0, Mark::X).unwrap();
        board.place_mark(8, Mark::O).unwrap();
        assert!(board.empty_cells().iter().eq(1..8));

        board.reset();
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let board: Board = "xXx oO_ ___".parse().unwrap();

        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.cell_at(5).unwrap(), Cell::Empty);
        assert_eq!(board.to_string(), "XXX\nOO_\n___");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "XXO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(3))
        );
        assert_eq!(
            "XXO OXZ ___".parse::<Board>(),
            Err(ParseBoardError::InvalidChar('Z'))
        );
    }

    #[test]
    fn full_board_has_no_empty_cells() {
        let board: Board = "XOX XOO OXX".parse().unwrap();

        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}
