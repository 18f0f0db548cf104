use tictac_core::{CELL_COUNT, CellIndex, CellSet, Mark, Player, UiBinder};

/// Display state for the board, written only through [`UiBinder`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardView {
    cells: [Option<Mark>; CELL_COUNT],
    highlighted: CellSet,
    turn: Player,
    notice: Option<&'static str>,
}

impl BoardView {
    pub(crate) const ALREADY_WON_NOTICE: &'static str = "Already won! Reset the game.";

    pub(crate) fn mark_at(&self, index: CellIndex) -> Option<Mark> {
        self.cells.get(usize::from(index)).copied().flatten()
    }

    pub(crate) fn is_highlighted(&self, index: CellIndex) -> bool {
        self.highlighted.contains(index)
    }

    pub(crate) fn turn_text(&self) -> String {
        format!("Current turn: {}", self.turn.label())
    }

    /// Notice raised since the last call, shown once by the caller.
    pub(crate) fn take_notice(&mut self) -> Option<&'static str> {
        self.notice.take()
    }

    fn cell_mut(&mut self, index: CellIndex) -> Option<&mut Option<Mark>> {
        let cell = self.cells.get_mut(usize::from(index));
        if cell.is_none() {
            log::warn!("no cell with index {}", index);
        }
        cell
    }
}

impl UiBinder for BoardView {
    fn render_cell(&mut self, index: CellIndex, mark: Mark) {
        if let Some(cell) = self.cell_mut(index) {
            *cell = Some(mark);
        }
    }

    fn clear_cell(&mut self, index: CellIndex) {
        if let Some(cell) = self.cell_mut(index) {
            *cell = None;
        }
    }

    fn highlight(&mut self, cells: &[CellIndex]) {
        self.highlighted.extend(cells.iter().copied());
    }

    fn clear_highlights(&mut self) {
        self.highlighted = CellSet::empty();
    }

    fn set_turn_label(&mut self, active: Player) {
        self.turn = active;
    }

    fn notify_already_won(&mut self) {
        self.notice = Some(Self::ALREADY_WON_NOTICE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{ClickOutcome, PrecedenceHeuristic, TurnController};

    fn play_until_finished(seed: u64) -> (TurnController<PrecedenceHeuristic>, BoardView) {
        let mut controller = TurnController::new(PrecedenceHeuristic::new(seed));
        let mut view = BoardView::default();

        while !controller.state().is_finished() {
            let index = controller
                .session()
                .board()
                .empty_cells()
                .iter()
                .next()
                .unwrap();
            if controller.click(index, &mut view).unwrap() == ClickOutcome::ComputerTurnPending {
                controller.play_computer_turn(&mut view).unwrap();
            }
        }
        (controller, view)
    }

    #[test]
    fn starts_blank_on_player_turn() {
        let view = BoardView::default();

        assert_eq!(view.turn_text(), "Current turn: Player");
        assert!((0..CELL_COUNT as CellIndex).all(|i| view.mark_at(i).is_none()));
        assert!(!view.is_highlighted(0));
    }

    #[test]
    fn mirrors_the_session_board() {
        for seed in 0..20 {
            let (controller, view) = play_until_finished(seed);
            let board = controller.session().board();

            for index in 0..CELL_COUNT as CellIndex {
                assert_eq!(view.mark_at(index), board[index].mark(), "seed {seed}");
            }
            if let Some(win) = controller.session().outcome().and_then(|o| o.win()) {
                for index in win.line.cells() {
                    assert!(view.is_highlighted(index));
                }
            }
        }
    }

    #[test]
    fn already_won_notice_is_shown_once() {
        let (mut controller, mut view) = play_until_finished(3);

        assert_eq!(
            controller.click(0, &mut view).unwrap(),
            ClickOutcome::AlreadyWon
        );
        assert_eq!(view.take_notice(), Some(BoardView::ALREADY_WON_NOTICE));
        assert_eq!(view.take_notice(), None);
    }

    #[test]
    fn reset_blanks_cells_and_highlights() {
        let (mut controller, mut view) = play_until_finished(5);

        controller.reset(&mut view);

        assert_eq!(view, BoardView::default());
    }

    #[test]
    fn turn_label_follows_the_active_player() {
        let mut view = BoardView::default();

        view.set_turn_label(Player::Computer);
        assert_eq!(view.turn_text(), "Current turn: AI");

        view.render_cell(42, Mark::X);
        assert!(view.cells.iter().all(Option::is_none));
    }
}
