//! A single board cell.

use super::click_map::{ClickMap, Target};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Square};

/// Draws one cell as a bordered button and registers its click target as given.
pub fn render_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    target: Target,
    clicks: &mut ClickMap,
) {
    let style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    let button = Paragraph::new(square.symbol())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(button, area);
    clicks.register(area, target);
}
