//! GameView: maps a [`GameSnapshot`] plus cursor state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, Tile, BOARD_SIZE};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SELECT_BG: Rgb = Rgb::new(90, 90, 30);
const HINT_BG: Rgb = Rgb::new(40, 70, 50);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Player-side state the engine does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerView<'a> {
    pub cursor: Option<Pos>,
    pub selected: Option<Pos>,
    /// Highlight the snapshot's hint swap
    pub show_hint: bool,
    /// One-line message under the counters
    pub status: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1: cursor bracket, animal letter, cursor bracket.
        Self {
            cell_w: 3,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        player: &PlayerView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x, start_y);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let hinted = |pos: Pos| player.show_hint && snap.hint.is_some_and(|h| h.contains(pos));
        for (row, tiles) in snap.board.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let pos = Pos::new(row, col);
                let bg = if player.selected == Some(pos) {
                    SELECT_BG
                } else if hinted(pos) {
                    HINT_BG
                } else {
                    BOARD_BG
                };
                self.draw_tile(fb, origin, pos, tile, bg);
            }
        }

        if let Some(cursor) = player.cursor {
            self.draw_cursor(fb, origin, cursor);
        }

        self.draw_side_panel(fb, snap, player, viewport, start_x + frame_w, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        player: &PlayerView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, player, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of a board position.
    fn cell_origin(&self, origin: (u16, u16), pos: Pos) -> (u16, u16) {
        (
            origin.0 + 1 + pos.col as u16 * self.cell_w,
            origin.1 + 1 + pos.row as u16 * self.cell_h,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, origin: (u16, u16), pos: Pos, tile: Tile, bg: Rgb) {
        let (px, py) = self.cell_origin(origin, pos);
        let blank = CellStyle::new(Rgb::new(90, 90, 100), bg);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', blank);

        let (ch, style) = match tile_color(tile) {
            Some(fg) => (tile.as_char(), CellStyle::new(fg, bg).bold()),
            None => ('·', blank.dim()),
        };
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, origin: (u16, u16), pos: Pos) {
        if self.cell_w < 3 || !pos.in_bounds() {
            return;
        }
        let (px, py) = self.cell_origin(origin, pos);
        let y = py + self.cell_h / 2;
        for (x, ch) in [(px, '['), (px + self.cell_w - 1, ']')] {
            let bg = fb.get(x, y).map_or(BOARD_BG, |c| c.style.bg);
            let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
            fb.put_char(x, y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        player: &PlayerView<'_>,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, snap.moves_left, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "GROUP", label);
        match snap.largest_region {
            Some(region) => {
                let end = fb.put_u32(panel_x, y + 1, region.size as u32, value);
                let style = tile_color(region.tile).map_or(value, |fg| CellStyle { fg, ..value });
                fb.put_char(end + 1, y + 1, region.tile.as_char(), style);
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", value);
            }
        }
        y = y.saturating_add(3);

        if !player.status.is_empty() {
            fb.put_str(panel_x, y, player.status, value.dim());
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn tile_color(tile: Tile) -> Option<Rgb> {
    match tile {
        Tile::Empty => None,
        Tile::Dog => Some(Rgb::new(210, 150, 90)),
        Tile::Cat => Some(Rgb::new(240, 200, 80)),
        Tile::Rabbit => Some(Rgb::new(235, 235, 235)),
        Tile::Panda => Some(Rgb::new(120, 220, 140)),
        Tile::Koala => Some(Rgb::new(140, 160, 230)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Swap;

    fn snapshot() -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        for (r, row) in snap.board.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = Tile::ANIMALS[(r + c) % Tile::ANIMALS.len()];
            }
        }
        snap.moves_left = 30;
        snap
    }

    #[test]
    fn frame_size_fits_seven_cells_plus_border() {
        assert_eq!(GameView::default().frame_size(), (23, 9));
        assert_eq!(GameView::new(2, 1).frame_size(), (16, 9));
    }

    #[test]
    fn selected_and_hinted_cells_get_highlight_backgrounds() {
        let mut snap = snapshot();
        snap.hint = Some(Swap::new(Pos::new(0, 0), Pos::new(0, 1)));
        let player = PlayerView {
            selected: Some(Pos::new(3, 3)),
            show_hint: true,
            ..PlayerView::default()
        };
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snap, &player, Viewport::new(23, 9));

        // Cell (r, c) letter sits at x = 1 + 3c + 1, y = 1 + r.
        assert_eq!(fb.get(2, 1).unwrap().style.bg, HINT_BG);
        assert_eq!(fb.get(5, 1).unwrap().style.bg, HINT_BG);
        assert_eq!(fb.get(11, 4).unwrap().style.bg, SELECT_BG);
        assert_eq!(fb.get(8, 1).unwrap().style.bg, BOARD_BG);
    }

    #[test]
    fn hint_hidden_unless_requested() {
        let mut snap = snapshot();
        snap.hint = Some(Swap::new(Pos::new(0, 0), Pos::new(0, 1)));
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snap, &PlayerView::default(), Viewport::new(23, 9));
        assert_eq!(fb.get(2, 1).unwrap().style.bg, BOARD_BG);
    }

    #[test]
    fn cursor_is_bracketed() {
        let player = PlayerView {
            cursor: Some(Pos::new(6, 6)),
            ..PlayerView::default()
        };
        let fb = GameView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&snapshot(), &player, Viewport::new(23, 9));
        assert_eq!(fb.get(19, 7).unwrap().ch, '[');
        assert_eq!(fb.get(21, 7).unwrap().ch, ']');
    }
}
