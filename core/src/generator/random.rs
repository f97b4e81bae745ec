use super::*;

/// Places a mine on each cell independently with the configured ratio. The total mine
/// count is whatever falls out; empty and completely mined boards are both possible.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local OS-backed generator, so every session differs.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let (width, height) = config.size();
        let ratio = config.mine_ratio();
        let mut board = Board::empty(config.size());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for y in 0..height {
            for x in 0..width {
                if rng.random_ratio(1, ratio.denominator()) {
                    board.place_mine((x, y));
                }
            }
        }

        log::debug!(
            "Generated {}x{} board with {} mines (one in {}, seed {})",
            width,
            height,
            board.mine_count(),
            ratio.denominator(),
            self.seed
        );
        if board.mine_count() == 0 {
            log::info!("Generated board has no mines");
        }
        board
    }
}
