//! Application state and event dispatch.

use crate::ui::{self, ClickMap, Target};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use rewind_tictactoe::{Game, Placement};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the game and the click map of the most recently drawn frame.
#[derive(Debug)]
pub struct App {
    game: Game,
    title: String,
    clicks: ClickMap,
    running: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            game: Game::new(),
            title: title.into(),
            clicks: ClickMap::new(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Click targets of the last drawn frame.
    pub fn clicks(&self) -> &ClickMap {
        &self.clicks
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draws the whole screen and remembers what can be clicked.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.clicks = ui::draw(frame, &self.game.view(), &self.title);
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Key(key) => self.handle_key(*key),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.clicks.target_at(mouse.column, mouse.row) {
            Some(target) => self.dispatch(target),
            None => debug!(column = mouse.column, row = mouse.row, "Click outside targets"),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            _ => {}
        }
    }

    /// Routes a click target to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, target: Target) {
        match target {
            Target::Cell(position) => match self.game.accept_move(position) {
                Placement::Placed { player, step, .. } => {
                    info!(%player, %position, step, "Mark placed");
                }
                Placement::Ignored(reason) => debug!(%reason, "Click ignored"),
            },
            Target::Jump(step) => {
                if let Err(e) = self.game.jump_to(step) {
                    warn!(error = %e, "Stale jump target");
                }
            }
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each event is handled to completion and followed by a full redraw.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        info!("Starting game loop");
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            let event = event::read()?;
            self.handle_event(&event);
        }
        info!("Game loop finished");
        Ok(())
    }
}
