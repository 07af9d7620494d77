//! Board cursor and two-step swap selection.
//!
//! The player picks a cell, then picks a neighbor; the pair becomes a
//! [`Swap`]. Picking a non-neighbor moves the selection instead, and picking
//! the selected cell again drops it. Legality beyond adjacency is the engine's
//! call.

use crate::types::{GameAction, Pos, Swap, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    selected: Option<Pos>,
}

impl Default for Cursor {
    fn default() -> Self {
        // Start near the middle of the board.
        Self::new(Pos::new(BOARD_SIZE / 2, BOARD_SIZE / 2))
    }
}

impl Cursor {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            selected: None,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Feed one action; returns a swap once two neighbors have been picked.
    ///
    /// Hint and restart are not cursor actions and are ignored here.
    pub fn apply(&mut self, action: GameAction) -> Option<Swap> {
        if let Some(dir) = action.direction() {
            // Off-board steps leave the cursor on the edge.
            if let Some(next) = self.pos.step(dir) {
                self.pos = next;
            }
            return None;
        }

        match action {
            GameAction::Select => self.select(),
            GameAction::Cancel => {
                self.selected = None;
                None
            }
            _ => None,
        }
    }

    fn select(&mut self) -> Option<Swap> {
        match self.selected {
            None => {
                self.selected = Some(self.pos);
                None
            }
            Some(sel) if sel == self.pos => {
                self.selected = None;
                None
            }
            Some(sel) if sel.is_adjacent(self.pos) => {
                self.selected = None;
                Some(Swap::new(sel, self.pos))
            }
            Some(_) => {
                self.selected = Some(self.pos);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut cursor = Cursor::new(Pos::new(0, 0));
        cursor.apply(GameAction::CursorUp);
        cursor.apply(GameAction::CursorLeft);
        assert_eq!(cursor.pos(), Pos::new(0, 0));

        for _ in 0..10 {
            cursor.apply(GameAction::CursorDown);
            cursor.apply(GameAction::CursorRight);
        }
        assert_eq!(cursor.pos(), Pos::new(BOARD_SIZE - 1, BOARD_SIZE - 1));
    }

    #[test]
    fn test_select_neighbor_yields_swap() {
        let mut cursor = Cursor::new(Pos::new(2, 2));
        assert_eq!(cursor.apply(GameAction::Select), None);
        assert_eq!(cursor.selected(), Some(Pos::new(2, 2)));

        cursor.apply(GameAction::CursorRight);
        let swap = cursor.apply(GameAction::Select);
        assert_eq!(swap, Some(Swap::new(Pos::new(2, 2), Pos::new(2, 3))));
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn test_reselect_toggles_and_far_select_moves() {
        let mut cursor = Cursor::new(Pos::new(2, 2));
        cursor.apply(GameAction::Select);
        cursor.apply(GameAction::Select);
        assert_eq!(cursor.selected(), None);

        cursor.apply(GameAction::Select);
        cursor.apply(GameAction::CursorRight);
        cursor.apply(GameAction::CursorRight);
        assert_eq!(cursor.apply(GameAction::Select), None);
        assert_eq!(cursor.selected(), Some(Pos::new(2, 4)));
    }

    #[test]
    fn test_cancel_drops_selection() {
        let mut cursor = Cursor::default();
        cursor.apply(GameAction::Select);
        assert!(cursor.selected().is_some());
        cursor.apply(GameAction::Cancel);
        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.apply(GameAction::Hint), None);
    }
}
