use tui_mahjong::core::{GameSession, HintSearch, PairRemoval, SelectOutcome, TileId};
use tui_mahjong::types::{Dragon, Position, Suit, TileKind, DECK_SIZE};

fn pos(session: &GameSession, id: TileId) -> Position {
    session.board().position_of(id).unwrap()
}

/// Take the first hinted pair until none is left.
fn play_greedy(session: &mut GameSession) -> Vec<PairRemoval> {
    let mut removals = Vec::new();
    while let Some((a, b)) = HintSearch::find_match(session.board(), false) {
        let (pa, pb) = (pos(session, a), pos(session, b));
        removals.push(session.attempt_remove_pair(pa, pb).unwrap());
    }
    removals
}

#[test]
fn test_same_game_number_same_deal() {
    let a = GameSession::new_game(Some(123456)).unwrap();
    let b = GameSession::new_game(Some(123456)).unwrap();
    let kinds = |s: &GameSession| -> Vec<(TileKind, Position)> {
        s.board().tiles().map(|t| (t.kind, t.home)).collect()
    };
    assert_eq!(kinds(&a), kinds(&b));
    assert_eq!(a.backdrop(), b.backdrop());
}

#[test]
fn test_known_deal_for_123456() {
    let session = GameSession::new_game(Some(123456)).unwrap();
    let first: Vec<TileKind> = session.board().tiles().take(3).map(|t| t.kind).collect();
    assert_eq!(
        first,
        vec![
            TileKind::Numeral { suit: Suit::Bamboo, rank: 7 },
            TileKind::Numeral { suit: Suit::Character, rank: 6 },
            TileKind::Numeral { suit: Suit::Bamboo, rank: 4 },
        ]
    );
    assert_eq!(session.backdrop(), 1);
}

#[test]
fn test_fresh_deal_has_hint() {
    let mut session = GameSession::new_game(Some(123456)).unwrap();
    let (a, b) = HintSearch::find_match(session.board(), false).unwrap();
    assert_eq!((a.index(), b.index()), (38, 23));

    let tile_a = *session.board().tile(a).unwrap();
    let tile_b = *session.board().tile(b).unwrap();
    assert_eq!(tile_a.kind, TileKind::Dragon(Dragon::Red));
    assert_eq!(tile_b.kind, TileKind::Dragon(Dragon::Red));
    assert_eq!(tile_a.home, Position::new(3, -3, 3));
    assert_eq!(tile_b.home, Position::new(3, 1, 3));

    assert!(session.hint(true));
    assert_eq!(session.hint_pair(), Some((a, b)));
}

#[test]
fn test_greedy_play_wins_game_20() {
    let mut session = GameSession::new_game(Some(20)).unwrap();
    let removals = play_greedy(&mut session);

    assert_eq!(removals.len(), DECK_SIZE / 2);
    assert!(session.is_won());
    assert!(session.board().is_empty());

    let (last, rest) = removals.split_last().unwrap();
    assert!(last.won && !last.stuck);
    assert!(rest.iter().all(|r| !r.won && !r.stuck));
    assert_eq!(session.removed_order().count(), DECK_SIZE);
}

#[test]
fn test_greedy_play_gets_stuck_on_123456() {
    let mut session = GameSession::new_game(Some(123456)).unwrap();
    let removals = play_greedy(&mut session);

    assert_eq!(removals.len(), 25);
    assert_eq!(session.remaining(), 94);
    assert!(removals.last().unwrap().stuck);
    assert!(session.is_stuck());
    assert!(!session.moves_remain());
    assert!(!session.hint(true));
    assert_eq!(session.hint_pair(), None);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut session = GameSession::new_game(Some(123456)).unwrap();
    let fresh = session.board().clone();

    let (a, b) = HintSearch::find_match(session.board(), false).unwrap();
    session.attempt_remove_pair(pos(&session, a), pos(&session, b)).unwrap();
    let (c, d) = HintSearch::find_match(session.board(), false).unwrap();
    assert_eq!((c.index(), d.index()), (37, 16));
    session.attempt_remove_pair(pos(&session, c), pos(&session, d)).unwrap();

    let played = session.board().clone();
    let order: Vec<TileId> = session.removed_order().map(|t| t.id).collect();
    assert_eq!(order, vec![b, a, d, c]);

    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    assert_eq!(session.board(), &fresh);
    assert!(session.can_redo());

    assert!(session.redo());
    assert!(session.redo());
    assert!(!session.redo());
    assert_eq!(session.board(), &played);
    let replayed: Vec<TileId> = session.removed_order().map(|t| t.id).collect();
    assert_eq!(replayed, order);
}

#[test]
fn test_manual_removal_after_undo_clears_redo() {
    let mut session = GameSession::new_game(Some(123456)).unwrap();
    let (a, b) = HintSearch::find_match(session.board(), false).unwrap();
    let (pa, pb) = (pos(&session, a), pos(&session, b));

    session.attempt_remove_pair(pa, pb).unwrap();
    assert!(session.undo());
    assert!(session.can_redo());

    // A plain select leaves redo alone.
    session.attempt_select(pa).unwrap();
    assert!(session.can_redo());

    match session.attempt_select(pb).unwrap() {
        SelectOutcome::Removed(removal) => {
            assert_eq!(removal.initiating, a);
            assert_eq!(removal.other, b);
        }
        other => panic!("expected a removal, got {:?}", other),
    }
    assert!(!session.can_redo());
    assert!(!session.redo());
}

#[test]
fn test_undo_clears_selection_and_hint() {
    let mut session = GameSession::new_game(Some(123456)).unwrap();
    let (a, b) = HintSearch::find_match(session.board(), false).unwrap();
    session.attempt_remove_pair(pos(&session, a), pos(&session, b)).unwrap();

    session.hint(true);
    let (c, _) = session.hint_pair().unwrap();
    session.attempt_select(pos(&session, c)).unwrap();
    assert_eq!(session.selected(), Some(c));

    assert!(session.undo());
    assert_eq!(session.selected(), None);
    assert_eq!(session.hint_pair(), None);
}

#[test]
fn test_game_numbers_wrap_to_six_digits() {
    let a = GameSession::new_game(Some(2_000_020)).unwrap();
    let b = GameSession::new_game(Some(20)).unwrap();
    assert_eq!(a.game_number(), 20);
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_game_zero_and_one_deal_differently() {
    let zero = GameSession::new_game(Some(0)).unwrap();
    let one = GameSession::new_game(Some(1)).unwrap();
    assert_eq!(zero.game_number(), 0);
    assert_ne!(zero.board(), one.board());

    let wrapped = GameSession::new_game(Some(1_000_000)).unwrap();
    assert_eq!(wrapped.board(), zero.board());
}

#[test]
fn test_print_deal_json_shape() {
    let session = GameSession::new_game(Some(20)).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["game_number"], 20);
    assert_eq!(json["remaining"], 144);
    let tiles = json["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 144);
    assert_eq!(tiles[143]["position"], serde_json::json!({ "x": 8, "y": 0, "z": 4 }));
    assert_eq!(tiles.iter().filter(|t| t["open"] == true).count(), 35);
}
