//! Board model and turn logic for a single-player minesweeper variant.
//!
//! A [`Board`] is generated once per session with an independent per-cell mine
//! probability, and a [`Game`] applies player [`Action`]s to it until the player
//! flags exactly the mined cells (win), reveals a mine (loss), or quits.

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod types;

/// Probability of a cell holding a mine, expressed as "one in `denominator`".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MineRatio {
    denominator: u32,
}

impl MineRatio {
    /// One mine in four cells, roughly 25% density.
    pub const DEFAULT: Self = Self { denominator: 4 };

    pub const fn one_in(denominator: u32) -> Result<Self> {
        if denominator == 0 {
            return Err(GameError::InvalidMineRatio);
        }
        Ok(Self { denominator })
    }

    pub const fn denominator(self) -> u32 {
        self.denominator
    }
}

impl Default for MineRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    size: Coord2,
    mine_ratio: MineRatio,
}

impl BoardConfig {
    /// Validates dimensions coming from outside the core, rejecting zero and anything
    /// wider or taller than [`Coord::MAX`].
    pub fn new(width: usize, height: usize, mine_ratio: MineRatio) -> Result<Self> {
        let invalid = || GameError::InvalidDimensions { width, height };
        let size_x = Coord::try_from(width).map_err(|_| invalid())?;
        let size_y = Coord::try_from(height).map_err(|_| invalid())?;
        if size_x == 0 || size_y == 0 {
            return Err(invalid());
        }
        Ok(Self {
            size: (size_x, size_y),
            mine_ratio,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mine_ratio(&self) -> MineRatio {
        self.mine_ratio
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_full_range() {
        let config = BoardConfig::new(255, 1, MineRatio::DEFAULT).unwrap();
        assert_eq!(config.size(), (255, 1));
        assert_eq!(config.total_cells(), 255);
    }

    #[test]
    fn config_rejects_zero_and_oversized() {
        for (width, height) in [(0, 5), (5, 0), (256, 5), (5, 1000)] {
            assert_eq!(
                BoardConfig::new(width, height, MineRatio::DEFAULT),
                Err(GameError::InvalidDimensions { width, height })
            );
        }
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert_eq!(MineRatio::one_in(0), Err(GameError::InvalidMineRatio));
        assert_eq!(MineRatio::one_in(4), Ok(MineRatio::DEFAULT));
        assert_eq!(MineRatio::default().denominator(), 4);
    }
}
