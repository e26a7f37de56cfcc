//! Tic-tac-toe board rendering.

use super::cell::render_cell;
use super::click_map::{ClickMap, Target};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use rewind_tictactoe::{Board, Position};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Renders the 3x3 grid centred in `area`, one clickable cell per position.
pub fn render_board(frame: &mut Frame, area: Rect, board: &Board, clicks: &mut ClickMap) {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        render_row(frame, *row_area, board, row, clicks);
    }
}

fn render_row(frame: &mut Frame, area: Rect, board: &Board, row: usize, clicks: &mut ClickMap) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH); 3])
        .split(area);

    for (col, cell_area) in cols.iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_cell(frame, *cell_area, board.get(pos), Target::Cell(pos), clicks);
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
