use crate::*;

/// Three cells that win the game when they all hold the same mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine([CellIndex; 3]);

impl WinningLine {
    pub const fn cells(self) -> [CellIndex; 3] {
        self.0
    }
}

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Win {
    pub mark: Mark,
    pub line: WinningLine,
}

/// Returns the first line of [`WINNING_LINES`] whose three cells carry the same mark.
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.cells();
        let mark = board[a].mark()?;
        (board[a] == board[b] && board[b] == board[c]).then_some(Win { mark, line })
    })
}
