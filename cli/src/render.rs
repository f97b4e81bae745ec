use sapper_core::{Board, CellView};
use std::io::{self, Write};

const DIGITS: [char; 9] = ['０', '１', '２', '３', '４', '５', '６', '７', '８'];

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '＇',
        CellView::Flagged => '＃',
        CellView::Mine => '＠',
        CellView::Revealed(count) => DIGITS[usize::from(count.min(8))],
    }
}

/// Writes one line per row, top row first.
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let (width, height) = board.size();
    for y in 0..height {
        let row: String = (0..width).map(|x| glyph(board[(x, y)].view())).collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_cell_state() {
        let mut board = Board::from_mine_coords((3, 2), &[(0, 0), (2, 1)]).unwrap();
        board.set_flag((2, 1), true).unwrap();
        board.reveal((1, 0)).unwrap();
        board.reveal((0, 0)).unwrap();

        let mut out = Vec::new();
        render(&board, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "＠２＇\n＇＇＃\n");
    }

    #[test]
    fn zero_uses_fullwidth_digit() {
        assert_eq!(glyph(CellView::Revealed(0)), '０');
        assert_eq!(glyph(CellView::Revealed(8)), '８');
    }
}
