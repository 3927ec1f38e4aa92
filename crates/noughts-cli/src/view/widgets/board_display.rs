use std::iter;

use noughts_engine::{Board, Coord, Mark};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::style;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// The board grid with the cursor, the last computer move and the winning line marked.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<Coord>,
    last_move: Option<Coord>,
    win_cells: &'a [Coord],
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            last_move: None,
            win_cells: &[],
            block: None,
        }
    }

    pub fn cursor(self, cursor: Coord) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn last_move(self, last_move: Option<Coord>) -> Self {
        Self { last_move, ..self }
    }

    pub fn win_cells(self, win_cells: &'a [Coord]) -> Self {
        Self { win_cells, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn side(&self) -> u16 {
        u16::from(self.board.size())
    }

    pub fn width(&self) -> u16 {
        self.side() * CELL_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        self.side() * CELL_HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_style(&self, coord: Coord, mark: Option<Mark>) -> Style {
        let base = if self.win_cells.contains(&coord) {
            style::WIN_LINE
        } else {
            match mark {
                Some(Mark::X) => style::X_MARK,
                Some(Mark::O) => style::O_MARK,
                None => style::EMPTY_DOT,
            }
        };
        let base = if self.last_move == Some(coord) {
            base.add_modifier(style::LAST_MOVE)
        } else {
            base
        };
        if self.cursor == Some(coord) {
            base.patch(style::CURSOR)
        } else {
            base
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let n = self.board.size().side();
        let horizontal =
            Layout::horizontal((0..n).map(|_| Constraint::Length(CELL_WIDTH))).flex(Flex::Center);
        let vertical =
            Layout::vertical((0..n).map(|_| Constraint::Length(CELL_HEIGHT))).flex(Flex::Center);

        let grid_rows = vertical.split(area);
        for (grid_row, row) in iter::zip(grid_rows.iter(), self.board.cells().chunks(n)) {
            let grid_cells = horizontal.split(*grid_row);
            for (grid_cell, cell) in iter::zip(grid_cells.iter(), row) {
                let cell_block = BlockWidget::bordered().border_style(style::GRID);
                let inner = cell_block.inner(*grid_cell);
                cell_block.render(*grid_cell, buf);

                let text = cell.mark().map_or_else(|| "·".to_owned(), |m| m.to_string());
                let style = self.cell_style(cell.coord(), cell.mark());
                buf.set_style(inner, style);
                Line::styled(text, style).centered().render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use noughts_engine::BoardSize;

    use super::*;

    #[test]
    fn test_size_follows_board() {
        let board = Board::new(BoardSize::FOUR);
        let display = BoardDisplay::new(&board);
        assert_eq!(display.width(), 4 * CELL_WIDTH);
        assert_eq!(display.height(), 4 * CELL_HEIGHT);

        let display = display.block(BlockWidget::bordered());
        assert_eq!(display.width(), 4 * CELL_WIDTH + 2);
    }

    #[test]
    fn test_renders_marks() {
        let mut board = Board::new(BoardSize::THREE);
        board.apply(Coord::new(1, 1), Mark::X).unwrap();
        let display = BoardDisplay::new(&board);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        let row = (0..area.width)
            .map(|x| buf[(x, 4)].symbol().to_owned())
            .collect::<String>();
        assert!(row.contains('X'), "{row:?}");
        assert_eq!(row.matches('·').count(), 2);
    }

    #[test]
    fn test_cursor_wins_over_mark_style() {
        let board = Board::new(BoardSize::THREE);
        let coord = Coord::new(0, 0);
        let display = BoardDisplay::new(&board).cursor(coord);
        assert_eq!(display.cell_style(coord, None).bg, style::CURSOR.bg);
        assert_eq!(
            display.cell_style(Coord::new(1, 0), None),
            style::EMPTY_DOT
        );
    }
}
