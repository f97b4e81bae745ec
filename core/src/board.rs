use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Rectangular grid of cells, indexed by `(x, y)`.
///
/// Every cell's adjacent count matches the mines around it; mines are placed only while
/// the board is being built and never move afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    pub fn generate(config: BoardConfig, generator: impl BoardGenerator) -> Self {
        generator.generate(config)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        Ok(board)
    }

    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Places a mine and bumps the count of every neighbor. Placing twice is a no-op.
    pub(crate) fn place_mine(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return;
        }
        cell.place_mine();
        self.mine_count += 1;

        for pos in self.cells.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].add_adjacent_mine();
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                x: coords.0.into(),
                y: coords.1.into(),
            })
        }
    }

    pub fn size(&self) -> Coord2 {
        let (x_len, y_len) = self.cells.dim();
        (x_len as Coord, y_len as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(Cell::is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(Cell::is_revealed)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()].set_flagged(flagged);
        Ok(())
    }

    /// Opens a cell and cascades through connected zero cells.
    ///
    /// Uses an explicit stack instead of recursion: a cell is marked revealed before it
    /// is pushed, so each one is visited at most once and a mine-free 255x255 board
    /// cannot exhaust the call stack. Flags do not block the cascade. Returns how many
    /// cells were newly revealed; revealing an open cell changes nothing.
    pub fn reveal(&mut self, coords: Coord2) -> Result<CellCount> {
        let coords = self.validate_coords(coords)?;

        let start = &mut self.cells[coords.to_nd_index()];
        if start.is_revealed() {
            return Ok(0);
        }
        start.open();
        let mut opened: CellCount = 1;

        let mut to_visit = Vec::new();
        if start.is_zero() {
            to_visit.push(coords);
        }

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.cells.iter_neighbors(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if cell.is_revealed() {
                    continue;
                }
                cell.open();
                opened += 1;
                if cell.is_zero() {
                    to_visit.push(pos);
                }
            }
        }

        Ok(opened)
    }

    /// Opens every mine on the board, used to show the layout after a loss.
    pub fn reveal_mines(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.is_mine())
            .for_each(Cell::open);
    }

    /// True when the flagged cells are exactly the mined cells. Revealed cells do not
    /// matter, so a board can be won by flagging alone.
    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine() == cell.is_flagged())
    }

    fn count_cells(&self, pred: impl Fn(Cell) -> bool) -> CellCount {
        // at most 255 * 255 cells, always fits
        self.cells.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
