use tui_mahjong::core::{GameSession, GameSnapshot};
use tui_mahjong::term::{BoardCursor, FrameBuffer, GameView, Overlay, ViewState, Viewport};
use tui_mahjong::types::GameAction;

// Default cells are 4x2: 16 columns by 9 rows gives a 66x20 frame, plus one
// status line underneath.
const FRAME_W: u16 = 66;
const FRAME_H: u16 = 20;

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
    GameView::default().render(snap, &ViewState::default(), viewport)
}

fn session() -> GameSession {
    GameSession::new_game(Some(123456)).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = session().snapshot();
    let view = GameView::default();
    assert_eq!(view.frame_size(), (FRAME_W, FRAME_H));

    let fb = view.render(&snap, &ViewState::default(), Viewport::new(FRAME_W, FRAME_H + 1));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(FRAME_W - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, FRAME_H - 1).unwrap().ch, '└');
    assert_eq!(fb.get(FRAME_W - 1, FRAME_H - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_apex_label_bold_under_cursor() {
    let snap = session().snapshot();
    let fb = draw(&snap, Viewport::new(FRAME_W, FRAME_H + 1));

    // Apex column (0, 0) is column 7, row 4 inside the border.
    let (px, py) = (1 + 7 * 4, 1 + 4 * 2);
    let [a, b] = snap.tiles[0].kind.label();
    let first = fb.get(px + 1, py).unwrap();
    assert_eq!(first.ch, a);
    assert_eq!(fb.get(px + 2, py).unwrap().ch, b);
    assert!(first.style.bold);
    assert!(first.style.underline, "default cursor sits on the apex");
    assert_eq!(fb.get(px, py).unwrap().ch, '[');
    assert_eq!(fb.get(px + 3, py).unwrap().ch, ']');
}

#[test]
fn term_view_dims_capped_tile() {
    let snap = session().snapshot();
    let state = ViewState {
        cursor: BoardCursor::new(-7, -4),
        ..ViewState::default()
    };
    let fb = GameView::default().render(&snap, &state, Viewport::new(FRAME_W, FRAME_H + 1));

    // Column (1, 1) shows (1, 1, 1), capped by the apex.
    let (px, py) = (1 + 8 * 4, 1 + 5 * 2);
    let cell = fb.get(px + 1, py).unwrap();
    assert!(cell.style.dim);
    assert!(!cell.style.bold);
    assert!(!cell.style.underline);
}

#[test]
fn term_view_marks_selected_and_hinted_tiles() {
    let mut game = session();
    game.hint(true);
    let (a, _) = game.hint_pair().unwrap();
    let snap = game.snapshot();
    assert_eq!(snap.tiles.iter().filter(|t| t.hinted).count(), 2);

    let hinted = snap.tiles[a.index()];
    let fb = draw(&snap, Viewport::new(FRAME_W, FRAME_H + 1));
    let col = (hinted.position.x + 7) as u16;
    let row = (hinted.position.y + 4) as u16;
    let cell = fb.get(1 + col * 4 + 1, 1 + row * 2).unwrap();
    let label = hinted.kind.label();
    assert_eq!(cell.ch, label[0]);
    assert_eq!((cell.style.bg.r, cell.style.bg.g, cell.style.bg.b), (250, 220, 90));

    let pos = game.board().position_of(a).unwrap();
    game.attempt_select(pos).unwrap();
    let snap = game.snapshot();
    let fb = draw(&snap, Viewport::new(FRAME_W, FRAME_H + 1));
    assert!(fb.get(1 + col * 4 + 1, 1 + row * 2).unwrap().style.reverse);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = session();
    game.hint(true);
    let (x, y) = game.hint_pair().unwrap();
    let (px, py) = (
        game.board().position_of(x).unwrap(),
        game.board().position_of(y).unwrap(),
    );
    game.attempt_remove_pair(px, py).unwrap();

    let fb = draw(&game.snapshot(), Viewport::new(100, 24));
    let text = all_text(&fb);
    assert!(text.contains("GAME  123456"));
    assert!(text.contains("TILES 142"));
    assert!(text.contains("HINTS used"));
    assert!(text.contains("REMOVED"));
    assert!(text.contains("DC DC"), "removed red dragons listed:\n{}", text);
}

#[test]
fn term_view_hides_panel_when_narrow() {
    let fb = draw(&session().snapshot(), Viewport::new(70, 24));
    assert!(!all_text(&fb).contains("TILES"));
}

#[test]
fn term_view_overlays_and_message() {
    let snap = session().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(100, 24);

    let mut state = ViewState {
        overlay: Overlay::Help,
        message: Some("Nothing to undo".to_string()),
        ..ViewState::default()
    };
    let text = all_text(&view.render(&snap, &state, vp));
    assert!(text.contains("matching pairs"));
    assert!(text.contains("Nothing to undo"));

    state.overlay = Overlay::NumberPrompt {
        buffer: "42".to_string(),
    };
    assert!(all_text(&view.render(&snap, &state, vp)).contains("> 42_"));

    state.overlay = Overlay::AbandonConfirm {
        action: GameAction::NewGame,
    };
    assert!(all_text(&view.render(&snap, &state, vp)).contains("Abandon the current game?"));
    state.overlay = Overlay::AbandonConfirm {
        action: GameAction::Restart,
    };
    assert!(all_text(&view.render(&snap, &state, vp)).contains("Restart this game"));

    state.overlay = Overlay::Stuck;
    assert!(all_text(&view.render(&snap, &state, vp)).contains("No more moves."));

    state.overlay = Overlay::Won;
    let text = all_text(&view.render(&snap, &state, vp));
    assert!(text.contains("YOU WIN"));
    assert!(text.contains("Game 123456 cleared"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = session().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, &ViewState::default(), Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    let first = fb.clone();
    view.render_into(&snap, &ViewState::default(), Viewport::new(80, 24), &mut fb);
    assert_eq!(fb, first);
}
