use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    /// The player left before the game was decided.
    Quit,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One player request, consumed by [`Game::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Flag(Coord2),
    Unflag(Coord2),
    /// Claim the cell is safe and reveal it.
    Assert(Coord2),
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Loss,
    Win,
    /// Session ended on request; the board was not touched.
    Quit,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// A single play session owning its board.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(config: BoardConfig, generator: impl BoardGenerator) -> Self {
        Self::new(Board::generate(config, generator))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Applies one action and classifies the turn.
    ///
    /// Coordinates are checked before anything changes, and once the game is finished
    /// every further action is rejected with [`GameError::AlreadyEnded`].
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        use Action::*;

        self.check_playing()?;

        let outcome = match action {
            Flag(coords) => {
                self.board.set_flag(coords, true)?;
                self.settle()
            }
            Unflag(coords) => {
                self.board.set_flag(coords, false)?;
                self.settle()
            }
            Assert(coords) => {
                let opened = self.board.reveal(coords)?;
                log::debug!("Revealed {} cells from {:?}", opened, coords);
                if self.board[coords].is_mine() {
                    self.lose(coords)
                } else {
                    self.settle()
                }
            }
            Quit => {
                self.state = GameState::Quit;
                Outcome::Quit
            }
        };

        log::debug!("{:?} -> {:?}", action, outcome);
        Ok(outcome)
    }

    fn settle(&mut self) -> Outcome {
        if self.board.is_won() {
            log::info!("All {} mines flagged", self.board.mine_count());
            self.state = GameState::Won;
            Outcome::Win
        } else {
            Outcome::Continue
        }
    }

    fn lose(&mut self, coords: Coord2) -> Outcome {
        log::info!("Mine hit at {:?}", coords);
        self.triggered_mine = Some(coords);
        self.board.reveal_mines();
        self.state = GameState::Lost;
        Outcome::Loss
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
