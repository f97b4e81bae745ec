/// One grid position.
///
/// Mine placement and the adjacent count are fixed when the board is built; only the
/// flag and reveal bits change afterwards, and a revealed cell never closes again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    flagged: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Number of mines among the in-bounds Moore neighbors, 0 to 8.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Safe cell with no adjacent mines, the only kind a reveal cascades from.
    pub const fn is_zero(self) -> bool {
        !self.mine && self.adjacent_mines == 0
    }

    pub const fn view(self) -> CellView {
        match (self.revealed, self.mine, self.flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Revealed(self.adjacent_mines),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }

    pub(crate) fn place_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn open(&mut self) {
        self.revealed = true;
    }
}

/// Player-visible projection of a cell, used by frontends to pick a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}
