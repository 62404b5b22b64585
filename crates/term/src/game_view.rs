//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each board cell is `cell_w` columns wide; the
//! middle column holds the pipe junction glyph and the side columns carry the
//! horizontal arms so neighbouring pipes visually join up.

use crate::core::{CellRole, GameSnapshot, LoseReason, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, TileKind};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 110);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const MASK_RIGHT: u8 = 1;
const MASK_LEFT: u8 = 4;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Box-drawing glyph for a direction mask (right=1, up=2, left=4, down=8).
pub fn pipe_glyph(mask: u8) -> char {
    match mask & 0xF {
        0 => ' ',
        1 => '╶',
        2 => '╵',
        3 => '└',
        4 => '╴',
        5 => '─',
        6 => '┘',
        7 => '┴',
        8 => '╷',
        9 => '┌',
        10 => '│',
        11 => '├',
        12 => '┐',
        13 => '┬',
        14 => '┤',
        _ => '┼',
    }
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps cells roughly square and leaves room for the arms.
        Self {
            cell_w: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_add(2);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Board cell under terminal position (`col`, `row`), if any.
    pub fn cell_at(&self, snap: &GameSnapshot, viewport: Viewport, col: u16, row: u16) -> Option<Pos> {
        let layout = self.layout(snap, viewport);
        let left = layout.x.saturating_add(1);
        let top = layout.y.saturating_add(1);
        if col < left || row < top {
            return None;
        }
        let x = (col - left) / self.cell_w;
        let y = row - top;
        if x >= snap.width || y >= snap.height {
            return None;
        }
        Some(Pos::new(x, y))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            layout.x.saturating_add(1),
            layout.y.saturating_add(1),
            snap.width.saturating_mul(self.cell_w),
            snap.height,
            ' ',
            CellStyle::default().on(BOARD_BG),
        );
        fb.draw_box(layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        let show_cursor = snap.playable();
        // Cells past the viewport edge are not drawn.
        let cols = snap
            .width
            .min(viewport.width.saturating_sub(layout.x) / self.cell_w);
        let rows = snap.height.min(viewport.height.saturating_sub(layout.y));
        for y in 0..rows {
            for x in 0..cols {
                let pos = Pos::new(x, y);
                let Some(cell) = snap.cell(pos) else {
                    continue;
                };
                let bg = if show_cursor && pos == snap.cursor {
                    CURSOR_BG
                } else {
                    BOARD_BG
                };
                let px = layout.x.saturating_add(1).saturating_add(x * self.cell_w);
                let py = layout.y.saturating_add(1).saturating_add(y);
                self.draw_tile(fb, px, py, &cell.tile, cell.role, cell.activated, bg);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.panels.start {
            self.draw_start_panel(fb, snap, layout);
        } else if snap.panels.win {
            self.draw_overlay(
                fb,
                layout,
                &[("ALL NODES POWERED", ""), ("r", " play again")],
                Rgb::new(120, 230, 140),
            );
        } else if snap.panels.lose {
            let headline = match snap.lose_reason {
                Some(LoseReason::OutOfMoves) => "OUT OF MOVES",
                _ => "OUT OF TIME",
            };
            self.draw_overlay(
                fb,
                layout,
                &[(headline, ""), ("r", " try again")],
                Rgb::new(240, 110, 110),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        tile: &TileSnapshot,
        role: CellRole,
        powered: bool,
        bg: Rgb,
    ) {
        let mid = px.saturating_add(self.cell_w / 2);

        if tile.kind == TileKind::Empty {
            let dot = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
            fb.fill_rect(px, py, self.cell_w, 1, ' ', dot);
            fb.put_char(mid, py, '·', dot);
            return;
        }

        let base = Rgb::from(tile.color);
        let style = if powered {
            CellStyle::new(base, bg).bold()
        } else {
            CellStyle::new(base.scaled(1, 2), bg)
        };

        let left_arm = if tile.mask & MASK_LEFT != 0 { '─' } else { ' ' };
        let right_arm = if tile.mask & MASK_RIGHT != 0 { '─' } else { ' ' };
        for cx in px..mid {
            fb.put_char(cx, py, left_arm, style);
        }
        for cx in mid.saturating_add(1)..px.saturating_add(self.cell_w) {
            fb.put_char(cx, py, right_arm, style);
        }

        let center = match role {
            CellRole::Source => '◆',
            CellRole::Node => '●',
            CellRole::Open => pipe_glyph(tile.mask),
        };
        fb.put_char(mid, py, center, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let warn = CellStyle::new(Rgb::new(240, 110, 110), PANEL_BG).bold();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "TIME", label);
        y += 1;
        let timer_style = if snap.labels.timer_secs < 10 { warn } else { value };
        fb.put_i64(panel_x, y, snap.labels.timer_secs, timer_style);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_i64(panel_x, y, snap.labels.moves as i64, value);
        y += 2;

        fb.put_str(panel_x, y, "NODES", label);
        y += 1;
        let cx = fb.put_u32(panel_x, y, snap.nodes_powered, value);
        fb.put_char(cx, y, '/', value);
        fb.put_u32(cx + 1, y, snap.nodes_total, value);
        y += 2;

        fb.put_str(panel_x, y, "HAND", label);
        y += 1;
        if snap.cursor_tile.kind != TileKind::Empty {
            self.draw_tile(fb, panel_x, y, &snap.cursor_tile, CellRole::Open, true, PANEL_BG);
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for tile in &snap.queue {
            if y >= viewport.height {
                break;
            }
            self.draw_tile(fb, panel_x, y, tile, CellRole::Open, false, PANEL_BG);
            y += 1;
        }
    }

    fn draw_start_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let difficulty = snap.difficulty.map_or("?", |d| d.label());
        let skill = snap.skill.map_or("?", |s| s.label());
        self.draw_overlay(
            fb,
            layout,
            &[
                ("P I P E S", ""),
                ("d difficulty ", difficulty),
                ("s skill      ", skill),
                ("Enter", " start"),
            ],
            Rgb::new(120, 200, 240),
        );
    }

    /// Boxed panel centred on the board. Each line is a label plus a highlighted value.
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        lines: &[(&str, &str)],
        accent: Rgb,
    ) {
        let text_w = lines
            .iter()
            .map(|(a, b)| (a.chars().count() + b.chars().count()) as u16)
            .max()
            .unwrap_or(0);
        let box_w = text_w + 4;
        let box_h = lines.len() as u16 + 2;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(box_w) / 2);
        let y = layout.y.saturating_add(layout.frame_h.saturating_sub(box_h) / 2);

        let plain = CellStyle::new(Rgb::new(230, 230, 230), PANEL_BG);
        let highlight = CellStyle::new(accent, PANEL_BG).bold();
        fb.fill_rect(x, y, box_w, box_h, ' ', plain);
        fb.draw_box(x, y, box_w, box_h, CellStyle::new(accent, PANEL_BG));

        for (i, (head, tail)) in lines.iter().enumerate() {
            let row = y.saturating_add(1 + i as u16);
            let head_style = if i == 0 || tail.is_empty() { highlight } else { plain };
            let cx = fb.put_str(x.saturating_add(2), row, head, head_style);
            fb.put_str(cx, row, tail, if i == 0 { plain } else { highlight });
        }
    }
}
