//! Clickable regions recorded while drawing a frame.
//!
//! Renderers register the rectangle they drew together with the action it
//! triggers; the event loop hit-tests mouse clicks against the last frame.

use ratatui::layout::{Position as Point, Rect};
use rewind_tictactoe::Position;

/// What a click on a region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Place the current player's mark on this cell.
    Cell(Position),
    /// Display the given history step.
    Jump(usize),
}

/// Regions of the last drawn frame, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMap {
    regions: Vec<(Rect, Target)>,
}

impl ClickMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `area` as triggering `target`. Empty areas are skipped.
    pub fn register(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Returns the target under the given cell, preferring later regions.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let point = Point::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }

    /// Area registered for `target`, if it was drawn.
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// All registered regions.
    pub fn regions(&self) -> &[(Rect, Target)] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_inside_and_outside() {
        let mut map = ClickMap::new();
        map.register(Rect::new(2, 2, 4, 3), Target::Cell(Position::Center));

        assert_eq!(map.target_at(2, 2), Some(Target::Cell(Position::Center)));
        assert_eq!(map.target_at(5, 4), Some(Target::Cell(Position::Center)));
        assert_eq!(map.target_at(6, 4), None);
        assert_eq!(map.target_at(1, 2), None);
    }

    #[test]
    fn test_later_region_wins_on_overlap() {
        let mut map = ClickMap::new();
        map.register(Rect::new(0, 0, 10, 10), Target::Jump(0));
        map.register(Rect::new(0, 0, 2, 1), Target::Jump(1));

        assert_eq!(map.target_at(1, 0), Some(Target::Jump(1)));
        assert_eq!(map.target_at(5, 5), Some(Target::Jump(0)));
    }

    #[test]
    fn test_empty_area_is_not_registered() {
        let mut map = ClickMap::new();
        map.register(Rect::new(3, 3, 0, 1), Target::Jump(2));
        assert!(map.regions().is_empty());
        assert_eq!(map.area_of(Target::Jump(2)), None);
    }
}
