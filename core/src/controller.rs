use crate::*;

/// Pause before the computer's mark is shown, in milliseconds.
pub const COMPUTER_MOVE_DELAY_MS: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub const fn mark(self) -> Mark {
        match self {
            Self::Human => Mark::X,
            Self::Computer => Mark::O,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "AI",
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::Human
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    HumanTurn,
    ComputerTurn,
    Won,
}

impl TurnState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Win),
    Draw,
}

impl Outcome {
    pub const fn win(self) -> Option<Win> {
        match self {
            Self::Winner(win) => Some(win),
            Self::Draw => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    board: Board,
    active: Player,
    outcome: Option<Outcome>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Terminal flag, also raised when the board fills up without a line.
    pub fn has_winner(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn state(&self) -> TurnState {
        match (self.outcome, self.active) {
            (Some(_), _) => TurnState::Won,
            (None, Player::Human) => TurnState::HumanTurn,
            (None, Player::Computer) => TurnState::ComputerTurn,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.active = Player::Human;
        self.outcome = None;
    }
}

/// Rendering surface driven by [`TurnController`]. Implementations only display what they are told;
/// clicks are fed back through [`TurnController::click`].
pub trait UiBinder {
    fn render_cell(&mut self, index: CellIndex, mark: Mark);
    fn clear_cell(&mut self, index: CellIndex);
    fn highlight(&mut self, cells: &[CellIndex]);
    fn clear_highlights(&mut self);
    fn set_turn_label(&mut self, active: Player);
    fn notify_already_won(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The game is over, the UI was asked to say so.
    AlreadyWon,
    /// A computer move is still pending, the click was dropped.
    TurnInProgress,
    HumanWon(Win),
    /// The host must call [`TurnController::play_computer_turn`] after
    /// [`COMPUTER_MOVE_DELAY_MS`].
    ComputerTurnPending,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ComputerOutcome {
    Moved(CellIndex),
    Won(CellIndex, Win),
    Draw,
}

#[derive(Clone, Debug)]
pub struct TurnController<S> {
    session: GameSession,
    selector: S,
}

impl<S: MoveSelector> TurnController<S> {
    pub fn new(selector: S) -> Self {
        Self {
            session: GameSession::new(),
            selector,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> TurnState {
        self.session.state()
    }

    pub fn click(&mut self, index: CellIndex, ui: &mut impl UiBinder) -> Result<ClickOutcome> {
        let index = validate_index(index)?;

        match self.session.state() {
            TurnState::Won => {
                log::debug!("click on {} after the game ended", index);
                ui.notify_already_won();
                return Ok(ClickOutcome::AlreadyWon);
            }
            TurnState::ComputerTurn => {
                log::trace!("click on {} while the computer is moving", index);
                return Ok(ClickOutcome::TurnInProgress);
            }
            TurnState::HumanTurn => {}
        }

        if let Some(win) = self.human_attempt(index, ui)? {
            return Ok(ClickOutcome::HumanWon(win));
        }

        // XXX: the move and win check run a second time on the same cell. The cell is occupied by
        // now so nothing changes, but this is likely a leftover that was meant to follow the
        // computer's move instead.
        if let Some(win) = self.human_attempt(index, ui)? {
            return Ok(ClickOutcome::HumanWon(win));
        }

        self.toggle_player(ui);
        Ok(ClickOutcome::ComputerTurnPending)
    }

    fn human_attempt(&mut self, index: CellIndex, ui: &mut impl UiBinder) -> Result<Option<Win>> {
        let mark = Player::Human.mark();
        if self.session.board.place_mark(index, mark)?.has_update() {
            log::debug!("human played {}", index);
            ui.render_cell(index, mark);
        }
        Ok(self.record_winner(ui))
    }

    /// Second half of a human click, to be run once the host's delay has elapsed. The active player is
    /// handed back to the human even when the computer's move ends the game.
    pub fn play_computer_turn(&mut self, ui: &mut impl UiBinder) -> Result<ComputerOutcome> {
        if self.session.state() != TurnState::ComputerTurn {
            return Err(GameError::NotComputerTurn);
        }

        let empty = self.session.board.empty_cells();
        let outcome = if empty.is_empty() {
            log::debug!("board full, game drawn");
            self.session.outcome = Some(Outcome::Draw);
            ComputerOutcome::Draw
        } else {
            let index = self
                .selector
                .select_move(empty)
                .ok_or(GameError::NoMoveSelected)?;
            if !empty.contains(index) {
                return Err(GameError::IllegalSelection(index));
            }

            let mark = Player::Computer.mark();
            self.session.board.place_mark(index, mark)?;
            log::debug!("computer played {}", index);
            ui.render_cell(index, mark);

            match self.record_winner(ui) {
                Some(win) => ComputerOutcome::Won(index, win),
                None => ComputerOutcome::Moved(index),
            }
        };

        self.toggle_player(ui);
        Ok(outcome)
    }

    pub fn reset(&mut self, ui: &mut impl UiBinder) {
        log::debug!("reset game");
        self.session.reset();
        for index in 0..CELL_COUNT as CellIndex {
            ui.clear_cell(index);
        }
        ui.clear_highlights();
        ui.set_turn_label(self.session.active);
    }

    fn record_winner(&mut self, ui: &mut impl UiBinder) -> Option<Win> {
        let win = check_winner(&self.session.board)?;
        log::debug!("{} wins on {:?}", win.mark, win.line.cells());
        self.session.outcome = Some(Outcome::Winner(win));
        ui.highlight(&win.line.cells());
        Some(win)
    }

    fn toggle_player(&mut self, ui: &mut impl UiBinder) {
        self.session.active = self.session.active.opponent();
        ui.set_turn_label(self.session.active);
    }
}
