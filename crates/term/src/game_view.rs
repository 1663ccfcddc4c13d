//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status line (score and length), then
//! the playfield inside a one-cell border. Border cells are decoration only;
//! board column 0 is drawn just inside the left border.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

const BODY: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120));
const HEAD: CellStyle = CellStyle::fg(Rgb::new(160, 255, 170)).bold();
const FOOD: CellStyle = CellStyle::fg(Rgb::new(220, 80, 80)).bold();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const FINISHED: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
const BANNER: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    body_glyph: char,
    food_glyph: char,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            body_glyph: '█',
            food_glyph: '●',
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_glyphs(mut self, body: char, food: char) -> Self {
        self.body_glyph = body;
        self.food_glyph = food;
        self
    }

    /// Size of the status line plus bordered playfield.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = snap.board.cols() as u16 * self.cell_w + 2;
        let h = snap.board.rows() as u16 + 2 + 1;
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_status(fb, snap, start_x, start_y);

        let board_y = start_y + 1;
        self.draw_border(fb, start_x, board_y, frame_w, frame_h - 1);

        let running = snap.running;
        for (r, row) in snap.board.iter_rows().enumerate() {
            for c in 0..row.width() as usize {
                if !row.test(c) {
                    continue;
                }
                let pos = Position::new(r as i16, c as i16);
                let style = if !running {
                    FINISHED
                } else if pos == snap.head {
                    HEAD
                } else {
                    BODY
                };
                self.draw_cell(fb, start_x, board_y, pos, self.body_glyph, style);
            }
        }

        if let Some(food) = snap.food {
            let style = if running { FOOD } else { FINISHED };
            self.draw_cell(fb, start_x, board_y, food, self.food_glyph, style);
        }

        if !running {
            let mid_y = board_y + (frame_h - 1) / 2;
            self.draw_centered(fb, start_x, mid_y, frame_w, "GAME OVER", BANNER);
            self.draw_centered(fb, start_x, mid_y + 1, frame_w, "n: new game  q: quit", VALUE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column and row of a board cell's left edge.
    pub fn cell_origin(&self, start_x: u16, board_y: u16, pos: Position) -> (u16, u16) {
        let x = start_x + 1 + pos.col as u16 * self.cell_w;
        let y = board_y + 1 + pos.row as u16;
        (x, y)
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if pos.row < 0 || pos.col < 0 {
            return;
        }
        let (x, y) = self.cell_origin(start_x, board_y, pos);
        for dx in 0..self.cell_w {
            fb.put_char(x.saturating_add(dx), y, ch, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let mut cx = fb.put_str(x, y, "score: ", VALUE);
        cx = fb.put_u32(cx, y, snap.score, LABEL);
        cx = fb.put_str(cx, y, "  length: ", VALUE);
        fb.put_u32(cx, y, snap.length, LABEL);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(tx, y, text, style);
    }
}
