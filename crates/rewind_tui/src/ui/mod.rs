//! Stateless UI rendering.
//!
//! Drawing is a pure function of the [`GameView`]; the only output besides
//! the frame is the [`ClickMap`] of everything the user can click.

mod board;
mod cell;
mod click_map;

pub use board::render_board;
pub use click_map::{ClickMap, Target};

use board::CELL_WIDTH;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, MoveEntry, Status};

/// Width of the board pane, borders included.
const BOARD_PANE_WIDTH: u16 = CELL_WIDTH * 3 + 4;

/// Narrowest info pane that still fits " 1. Go to game start" between borders.
const INFO_PANE_MIN_WIDTH: u16 = 22;

/// Draws the whole game screen and returns its clickable regions.
pub fn draw(frame: &mut Frame, view: &GameView, title: &str) -> ClickMap {
    let mut clicks = ClickMap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board and info
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_PANE_WIDTH),
            Constraint::Min(INFO_PANE_MIN_WIDTH),
        ])
        .split(chunks[1]);

    let board_block = Block::default().borders(Borders::ALL).title("Board");
    let board_inner = board_block.inner(body[0]);
    frame.render_widget(board_block, body[0]);
    render_board(frame, board_inner, view.board(), &mut clicks);

    render_info(frame, body[1], view, &mut clicks);

    let help = Paragraph::new("Click a square to play, a move to rewind | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    clicks
}

/// Status line and the clickable move list.
fn render_info(frame: &mut Frame, area: Rect, view: &GameView, clicks: &mut ClickMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let moves_block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = moves_block.inner(chunks[1]);
    frame.render_widget(moves_block, chunks[1]);

    for (row, entry) in view.moves().iter().enumerate() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        if offset >= inner.height {
            break;
        }
        let line = move_line(row + 1, entry);
        // A clipped label is not offered as a click target.
        if line.width() > usize::from(inner.width) {
            continue;
        }
        let line_area = Rect::new(inner.x, inner.y + offset, inner.width, 1);
        frame.render_widget(Paragraph::new(line), line_area);
        clicks.register(line_area, Target::Jump(entry.step()));
    }
}

fn move_line(number: usize, entry: &MoveEntry) -> Line<'static> {
    let style = if entry.is_current() {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw(format!("{:>2}. ", number)),
        Span::styled(entry.label(), style),
    ])
}
