use crate::utils::js_random_seed;
use crate::view::BoardView;
use clap::Args;
use gloo::timers::callback::Timeout;
use tictac_core as game;
use game::{COMPUTER_MOVE_DELAY_MS, CellIndex, ClickOutcome, Outcome};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(CellIndex),
    /// Fired by the delay timer, tagged with the game it was scheduled for.
    ComputerMove(u32),
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    mark: Option<game::Mark>,
    #[prop_or_default]
    highlighted: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        mark,
        highlighted,
        callback,
    } = props.clone();

    let class = classes!("cell", highlighted.then_some("highlight"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell{} clicked", index);
        callback.emit(index);
    });

    html! {
        <td id={format!("cell{index}")} {class} {onclick}>
            { mark.map(|mark| mark.to_string()).unwrap_or_default() }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the computer player instead of a random one
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pause before the computer's move is shown, in milliseconds
    #[arg(long, default_value_t = COMPUTER_MOVE_DELAY_MS)]
    pub delay_ms: u32,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::TurnController<game::PrecedenceHeuristic>,
    board: BoardView,
    /// Bumped on reset so a computer move scheduled for an earlier game is dropped.
    generation: u32,
}

impl GameView {
    fn schedule_computer_move(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let generation = self.generation;
        // never cancelled, a stale move is discarded when it arrives
        Timeout::new(ctx.props().delay_ms, move || {
            link.send_message(Msg::ComputerMove(generation))
        })
        .forget();
    }

    fn click(&mut self, ctx: &Context<Self>, index: CellIndex) -> bool {
        match self.controller.click(index, &mut self.board) {
            Ok(ClickOutcome::ComputerTurnPending) => {
                self.schedule_computer_move(ctx);
                true
            }
            Ok(ClickOutcome::HumanWon(win)) => {
                log::info!("player wins on {:?}", win.line.cells());
                true
            }
            Ok(ClickOutcome::AlreadyWon) => {
                if let Some(notice) = self.board.take_notice() {
                    gloo::dialogs::alert(notice);
                }
                false
            }
            Ok(ClickOutcome::TurnInProgress) => false,
            Err(err) => {
                log::error!("click on cell {}: {}", index, err);
                false
            }
        }
    }

    fn computer_move(&mut self, generation: u32) -> bool {
        if generation != self.generation {
            log::debug!("dropping computer move scheduled before reset");
            return false;
        }

        match self.controller.play_computer_turn(&mut self.board) {
            Ok(outcome) => {
                log::debug!("computer turn: {:?}", outcome);
                true
            }
            Err(err) => {
                log::error!("computer turn failed: {}", err);
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.controller.reset(&mut self.board);
        true
    }

    fn result_text(&self) -> Option<String> {
        Some(match self.controller.session().outcome()? {
            Outcome::Winner(win) => format!("{} wins", win.mark),
            Outcome::Draw => "Draw".to_string(),
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            controller: game::TurnController::new(game::PrecedenceHeuristic::new(seed)),
            board: BoardView::default(),
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("update: {:?}", msg);
        match msg {
            CellClicked(index) => self.click(ctx, index),
            ComputerMove(generation) => self.computer_move(generation),
            Reset => self.reset(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let callback = ctx.link().callback(Msg::CellClicked);
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="tictac">
                <p id="turn">{ self.board.turn_text() }</p>
                <table>
                    {
                        for (0..3).map(|row| html! {
                            <tr>
                                {
                                    for (0..3).map(|col| {
                                        let index: CellIndex = row * 3 + col;
                                        let mark = self.board.mark_at(index);
                                        let highlighted = self.board.is_highlighted(index);
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {index} {mark} {highlighted} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if let Some(result) = self.result_text() {
                    <output>{ result }</output>
                }
                <button onclick={cb_reset}>{"Reset"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::TurnState;

    fn view(seed: u64) -> GameView {
        GameView {
            controller: game::TurnController::new(game::PrecedenceHeuristic::new(seed)),
            board: BoardView::default(),
            generation: 0,
        }
    }

    #[test]
    fn stale_computer_move_is_dropped() {
        let mut view = view(1);
        view.controller.click(4, &mut view.board).unwrap();
        assert!(view.reset());

        // the move scheduled before reset arrives late
        assert!(!view.computer_move(0));
        assert_eq!(view.controller.state(), TurnState::HumanTurn);
        assert_eq!(view.board, BoardView::default());

        assert_eq!(
            view.controller.click(4, &mut view.board).unwrap(),
            ClickOutcome::ComputerTurnPending
        );
        assert!(view.computer_move(1));
        assert_eq!(view.controller.state(), TurnState::HumanTurn);
        assert_eq!(view.controller.session().board().empty_cells().len(), 7);
    }

    #[test]
    fn computer_move_outside_its_turn_is_ignored() {
        let mut view = view(2);

        assert!(!view.computer_move(0));
        assert_eq!(view.board, BoardView::default());
    }

    #[test]
    fn result_text_follows_outcome() {
        for seed in 0..20 {
            let mut view = view(seed);
            assert_eq!(view.result_text(), None);

            while !view.controller.state().is_finished() {
                let board = view.controller.session().board();
                let index = board.empty_cells().iter().next().unwrap();
                if view.controller.click(index, &mut view.board).unwrap()
                    == ClickOutcome::ComputerTurnPending
                {
                    view.controller.play_computer_turn(&mut view.board).unwrap();
                }
            }

            let expected = match view.controller.session().outcome().unwrap() {
                Outcome::Winner(win) => format!("{} wins", win.mark),
                Outcome::Draw => "Draw".to_string(),
            };
            assert_eq!(view.result_text(), Some(expected));
        }
    }
}
