//! End-to-end session tests.
//!
//! These drive a `GameSession` purely through events, the way the
//! terminal loop does, and check the player-visible behaviour.

use memory_match::catalog::{CatalogEntry, CatalogRegistry, ItemId};
use memory_match::{
    CardFace, CardPosition, GameSession, GameStatus, IgnoreReason, Notification, SessionBuilder, SessionEvent,
};

fn catalog(n: u32) -> CatalogRegistry {
    (1..=n)
        .map(|i| CatalogEntry::new(ItemId::new(i), &format!("creature-{i}")).unwrap())
        .collect()
}

fn build(pairs: usize, seed: u64) -> GameSession {
    SessionBuilder::new()
        .pairs(pairs)
        .time_limit(30)
        .mismatch_delay_ms(800)
        .power_up_duration_ms(1500)
        .seed(seed)
        .build(catalog(40))
        .unwrap()
}

fn flip(session: &mut GameSession, pos: usize) -> Vec<Notification> {
    session.handle(SessionEvent::Flip(CardPosition::new(pos))).unwrap()
}

fn layout(session: &GameSession) -> Vec<ItemId> {
    session.board().cards().map(|c| c.item_id).collect()
}

/// Play a perfect game, returning the final notifications.
fn solve(session: &mut GameSession) -> Vec<Notification> {
    let items = layout(session);
    let mut last = Vec::new();
    for (pos, item) in items.iter().enumerate() {
        if session.board().is_matched(*item) {
            continue;
        }
        let mate = items
            .iter()
            .enumerate()
            .position(|(p, i)| p != pos && i == item)
            .unwrap();
        flip(session, pos);
        last = flip(session, mate);
    }
    last
}

/// Test that a perfect game wins with exactly two clicks per pair.
#[test]
fn test_perfect_game() {
    let mut session = build(8, 1);
    let last = solve(&mut session);

    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.board().matched_pairs(), 8);
    assert_eq!(session.board().clicks(), 16);
    assert!(last.iter().any(|n| matches!(n, Notification::Won(r) if r.is_win())));
    assert!(session
        .view()
        .cards
        .iter()
        .all(|c| matches!(c, CardFace::Matched { .. })));
}

/// Test that a won game ignores everything but reset.
#[test]
fn test_terminal_ignores_input() {
    let mut session = build(2, 3);
    solve(&mut session);
    let clicks = session.board().clicks();

    for event in [
        SessionEvent::Flip(CardPosition::new(0)),
        SessionEvent::Tick,
        SessionEvent::PowerUp,
        SessionEvent::Advance(10_000),
    ] {
        assert_eq!(
            session.handle(event).unwrap(),
            vec![Notification::Ignored(IgnoreReason::GameOver)]
        );
    }
    assert_eq!(session.board().clicks(), clicks);
    assert_eq!(session.time_remaining(), 30);
    assert_eq!(session.now_ms(), 0);
}

/// Test a mismatch with the revert delay driven by the logical clock.
#[test]
fn test_mismatch_reverts_after_delay() {
    let mut session = build(4, 7);
    let items = layout(&session);
    let other = items.iter().position(|&i| i != items[0]).unwrap();

    session.handle(SessionEvent::Advance(200)).unwrap();
    flip(&mut session, 0);
    let out = flip(&mut session, other);
    assert!(out.iter().any(|n| matches!(n, Notification::Mismatch { revert_at_ms: 1000, .. })));

    assert!(session.handle(SessionEvent::Advance(999)).unwrap().is_empty());
    assert_eq!(session.selection().len(), 2);

    let out = session.handle(SessionEvent::Advance(1000)).unwrap();
    assert!(matches!(&out[..], [Notification::CardsHidden(hidden)] if hidden.len() == 2));
    assert!(session.selection().is_empty());
    assert_eq!(session.board().matched_pairs(), 0);

    // the board accepts input again
    let out = flip(&mut session, other);
    assert!(matches!(out[0], Notification::CardRevealed { .. }));
}

/// Test that the countdown ends the game and reports the result.
#[test]
fn test_timeout() {
    let mut session = build(4, 11);
    let items = layout(&session);
    let mate = items.iter().rposition(|&i| i == items[0]).unwrap();
    flip(&mut session, 0);
    flip(&mut session, mate);

    let mut lost = None;
    for _ in 0..30 {
        for n in session.handle(SessionEvent::Tick).unwrap() {
            if let Notification::Lost(result) = n {
                lost = Some(result);
            }
        }
    }

    let result = lost.expect("game should time out");
    assert_eq!(result.status, GameStatus::Lost);
    assert_eq!(result.matched_pairs, 1);
    assert_eq!(result.clicks, 2);
    assert_eq!(result.elapsed_secs, 30);
    assert!(session.is_locked());
}

/// Test that reset gives a fresh board of the same size.
#[test]
fn test_reset_regenerates_board() {
    let mut session = build(8, 21);
    let before = layout(&session);
    flip(&mut session, 0);
    session.handle(SessionEvent::Tick).unwrap();

    session.handle(SessionEvent::Reset).unwrap();
    let after = layout(&session);

    assert_eq!(after.len(), before.len());
    assert_ne!(after, before);
    assert_eq!(session.board().clicks(), 0);
    assert_eq!(session.time_remaining(), 30);
    assert_eq!(session.status(), GameStatus::Active);
}

/// Test that the same seed replays the same sequence of boards.
#[test]
fn test_seeded_sessions_replay() {
    let mut a = build(6, 99);
    let mut b = build(6, 99);
    assert_eq!(layout(&a), layout(&b));

    a.handle(SessionEvent::Reset).unwrap();
    b.handle(SessionEvent::Reset).unwrap();
    assert_eq!(layout(&a), layout(&b));
}

/// Test the power-up lifecycle through the view.
#[test]
fn test_power_up_view() {
    let mut session = build(3, 5);
    session.handle(SessionEvent::Advance(100)).unwrap();
    let out = session.handle(SessionEvent::PowerUp).unwrap();
    assert_eq!(out, vec![Notification::PowerUpStarted { ends_at_ms: 1600 }]);

    let view = session.view();
    assert!(view.peeking && view.locked);
    assert!(view.cards.iter().all(|c| matches!(c, CardFace::Shown { .. })));

    // a second activation while running is refused
    assert_eq!(
        session.handle(SessionEvent::PowerUp).unwrap(),
        vec![Notification::Ignored(IgnoreReason::NoPowerUp)]
    );

    session.handle(SessionEvent::Advance(1600)).unwrap();
    let view = session.view();
    assert!(!view.peeking && !view.locked);
    assert_eq!(view.power_ups_left, 0);
    assert!(view.cards.iter().all(CardFace::is_hidden));
}

/// Test that a board larger than the catalog is refused.
#[test]
fn test_catalog_too_small() {
    let result = SessionBuilder::new().pairs(10).seed(1).build(catalog(9));
    assert!(matches!(
        result,
        Err(memory_match::MatchError::NotEnoughEntries { needed: 10, available: 9 })
    ));
}
