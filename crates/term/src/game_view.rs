//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn top-down: every `(x, y)` column shows only its
//! shallowest present tile. Tiles nearer the apex are drawn lighter, open
//! tiles bold and closed tiles dim.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::cursor::BoardCursor;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Dragon, GameAction, Suit, TileKind, MAX_X, MAX_Y, MIN_X, MIN_Y};

const COLS: usize = (MAX_X - MIN_X + 1) as usize;
const ROWS: usize = (MAX_Y - MIN_Y + 1) as usize;

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 20;

const HELP_LINES: [&str; 14] = [
    "Remove the tiles in matching pairs.",
    "A tile can be taken when nothing is on",
    "top of it and its left or right side is free.",
    "Any flower matches any flower, any season",
    "any season. Other tiles match only their twin.",
    "",
    "arrows/hjkl/wasd  move      space/enter  pick",
    "u  Ctrl-Z         undo      y  Ctrl-Y    redo",
    "t                 hint      n            new game",
    "g                 game no.  R            restart",
    "?                 help      q            quit",
    "",
    "Using a hint marks the game as assisted.",
    "Press any key to close.",
];

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

/// Modal layer drawn over the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    /// Typing a game number
    NumberPrompt { buffer: String },
    /// First hint of the game waits for a yes
    HintConfirm,
    /// Leaving a game in progress waits for a yes; holds the action to run
    AbandonConfirm { action: GameAction },
    /// No pair left: new game, cancel or quit
    Stuck,
    Won,
}

/// Front-end state that is not part of the game itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub cursor: BoardCursor,
    pub overlay: Overlay,
    /// One-line status under the board
    pub message: Option<String>,
}

/// Terminal renderer for the turtle.
pub struct GameView {
    /// Column width in terminal columns; at least 2 for the label.
    cell_w: u16,
    /// Row height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 leaves room for a bracketed label and reads roughly square.
        Self::new(4, 2)
    }
}

/// Where the bordered board sits on screen.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        state: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let with_panel = frame_w + PANEL_GAP + PANEL_W;
        let total_w = if viewport.width >= with_panel {
            with_panel
        } else {
            frame_w
        };
        let frame = Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(frame_h + 1) / 2,
            w: frame_w,
            h: frame_h,
        };

        let backdrop = backdrop_color(snap.backdrop);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(backdrop, backdrop),
        );
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, CellStyle::default());

        let tops = column_tops(snap);
        for (row, cols) in tops.iter().enumerate() {
            for (col, top) in cols.iter().enumerate() {
                if let Some(i) = *top {
                    self.draw_tile(fb, frame, col, row, &snap.tiles[i]);
                }
            }
        }
        self.draw_cursor(fb, frame, state.cursor, backdrop);

        if total_w == with_panel {
            self.draw_side_panel(fb, snap, viewport, frame);
        }

        if let Some(message) = &state.message {
            let style = CellStyle::new(Rgb::new(240, 200, 120), Rgb::new(0, 0, 0));
            fb.put_str(frame.x, frame.y + frame.h, message, style);
        }

        match &state.overlay {
            Overlay::None => {}
            Overlay::Help => self.draw_dialog(fb, frame, &HELP_LINES),
            Overlay::NumberPrompt { buffer } => {
                let mut entry = String::with_capacity(buffer.len() + 3);
                entry.push_str("> ");
                entry.push_str(buffer);
                entry.push('_');
                self.draw_dialog(
                    fb,
                    frame,
                    &[
                        "Game number (1 to 6 digits)",
                        "",
                        entry.as_str(),
                        "",
                        "Enter to deal, Esc to cancel",
                    ],
                );
            }
            Overlay::HintConfirm => self.draw_dialog(
                fb,
                frame,
                &["A hint marks this game as assisted.", "", "Show a hint?  [y] yes  [n] no"],
            ),
            Overlay::AbandonConfirm { action } => {
                let question = match action {
                    GameAction::Restart => "Restart this game from the deal?",
                    _ => "Abandon the current game?",
                };
                self.draw_dialog(fb, frame, &[question, "", "[y] yes  [n] no"]);
            }
            Overlay::Stuck => self.draw_dialog(
                fb,
                frame,
                &[
                    "No more moves.",
                    "",
                    "[n] new game  [Esc] cancel  [q] quit",
                ],
            ),
            Overlay::Won => {
                let mut line = String::from("Game ");
                line.push_str(&snap.game_number.to_string());
                line.push_str(if snap.hint_used { " cleared with hints" } else { " cleared" });
                self.draw_dialog(
                    fb,
                    frame,
                    &["YOU WIN", "", line.as_str(), "", "[n] new game  [q] quit"],
                );
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        state: &ViewState,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, state, viewport, &mut fb);
        fb
    }

    /// Screen cell of column `(col, row)`'s top-left corner.
    fn cell_origin(&self, frame: Frame, col: usize, row: usize) -> (u16, u16) {
        (
            frame.x + 1 + col as u16 * self.cell_w,
            frame.y + 1 + row as u16 * self.cell_h,
        )
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: usize,
        row: usize,
        tile: &TileSnapshot,
    ) {
        let (px, py) = self.cell_origin(frame, col, row);

        let bg = if tile.hinted {
            Rgb::new(250, 220, 90)
        } else {
            depth_shade(tile.position.z)
        };
        let mut style = CellStyle::new(kind_color(tile.kind), bg);
        style = if tile.open { style.bold() } else { style.dim() };
        if tile.selected {
            style = style.reverse();
        }

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        let [a, b] = tile.kind.label();
        let lx = px + (self.cell_w - 2) / 2;
        fb.put_char(lx, py, a, style);
        fb.put_char(lx + 1, py, b, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, frame: Frame, cursor: BoardCursor, backdrop: Rgb) {
        let col = (cursor.x - MIN_X) as usize;
        let row = (cursor.y - MIN_Y) as usize;
        let (px, py) = self.cell_origin(frame, col, row);

        for dx in 0..self.cell_w {
            if let Some(cell) = fb.get(px + dx, py) {
                fb.set(px + dx, py, cell.style.underline().into_cell(cell.ch));
            }
        }
        if self.cell_w >= 4 {
            let marker = |fb: &FrameBuffer, x: u16| {
                fb.get(x, py)
                    .map(|c| c.style)
                    .unwrap_or_else(|| CellStyle::new(Rgb::new(255, 255, 255), backdrop))
            };
            let left = marker(fb, px);
            let right = marker(fb, px + self.cell_w - 1);
            fb.put_char(px, py, '[', left);
            fb.put_char(px + self.cell_w - 1, py, ']', right);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x + frame.w + PANEL_GAP;
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let off = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "GAME", label);
        fb.put_u32(panel_x + 6, y, snap.game_number, value);
        y += 1;
        fb.put_str(panel_x, y, "TILES", label);
        fb.put_u32(panel_x + 6, y, snap.remaining as u32, value);
        y += 1;
        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_str(
            panel_x + 6,
            y,
            if snap.won {
                "done"
            } else if snap.moves_remain {
                "yes"
            } else {
                "none"
            },
            value,
        );
        y += 2;

        let end = fb.put_str(panel_x, y, "UNDO", if snap.can_undo { value } else { off });
        fb.put_str(end + 2, y, "REDO", if snap.can_redo { value } else { off });
        y += 1;
        fb.put_str(panel_x, y, "HINTS", label);
        fb.put_str(panel_x + 6, y, if snap.hint_used { "used" } else { "-" }, value);
        y += 2;

        fb.put_str(panel_x, y, "REMOVED", label);
        y += 1;
        // Most recent pair first, as many as fit.
        for pair in snap.removed.chunks(2).rev() {
            if y >= viewport.height {
                break;
            }
            let mut x = panel_x;
            for kind in pair {
                let [a, b] = kind.label();
                let style = CellStyle::new(kind_color(*kind), depth_shade(0));
                fb.put_char(x, y, a, style);
                fb.put_char(x + 1, y, b, style);
                x += 3;
            }
            y += 1;
        }
    }

    fn draw_dialog(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let text_w = lines.iter().map(|l| l.chars().count() as u16).max().unwrap_or(0);
        let w = (text_w + 4).min(fb.width());
        let h = lines.len() as u16 + 2;
        let x = frame.x + frame.w.saturating_sub(w) / 2;
        let y = frame.y + frame.h.saturating_sub(h) / 2;

        let style = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(20, 20, 30));
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, style);
        for (i, line) in lines.iter().enumerate() {
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str_centered(x + 1, y + 1 + i as u16, w.saturating_sub(2), line, line_style);
        }
    }
}

/// Snapshot index of the shallowest present tile per column, `[row][col]`.
fn column_tops(snap: &GameSnapshot) -> [[Option<usize>; COLS]; ROWS] {
    let mut tops = [[None; COLS]; ROWS];
    for (i, tile) in snap.tiles.iter().enumerate() {
        if !tile.present {
            continue;
        }
        let p = tile.position;
        if !(MIN_X..=MAX_X).contains(&p.x) || !(MIN_Y..=MAX_Y).contains(&p.y) {
            continue;
        }
        let slot: &mut Option<usize> = &mut tops[(p.y - MIN_Y) as usize][(p.x - MIN_X) as usize];
        if slot.map_or(true, |j| snap.tiles[j].position.z > p.z) {
            *slot = Some(i);
        }
    }
    tops
}

/// Tile face: lighter towards the apex.
fn depth_shade(z: i8) -> Rgb {
    Rgb::new(240, 234, 214).darken((z.max(0) as u8).saturating_mul(22))
}

fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Numeral { suit: Suit::Character, .. } => Rgb::new(170, 30, 30),
        TileKind::Numeral { suit: Suit::Bamboo, .. } => Rgb::new(20, 110, 40),
        TileKind::Numeral { suit: Suit::Circle, .. } => Rgb::new(30, 60, 160),
        TileKind::Wind(_) => Rgb::new(20, 20, 20),
        TileKind::Dragon(Dragon::Red) => Rgb::new(200, 0, 0),
        TileKind::Dragon(Dragon::Green) => Rgb::new(0, 130, 0),
        TileKind::WhiteDragon => Rgb::new(80, 80, 140),
        TileKind::Flower(_) => Rgb::new(170, 40, 140),
        TileKind::Season(_) => Rgb::new(170, 100, 0),
    }
}

/// Table colour for each backdrop index.
fn backdrop_color(backdrop: u32) -> Rgb {
    const BACKDROPS: [Rgb; 7] = [
        Rgb::new(20, 70, 40),
        Rgb::new(20, 40, 80),
        Rgb::new(70, 25, 25),
        Rgb::new(50, 30, 70),
        Rgb::new(25, 60, 70),
        Rgb::new(60, 50, 25),
        Rgb::new(40, 40, 45),
    ];
    BACKDROPS[backdrop as usize % BACKDROPS.len()]
}
