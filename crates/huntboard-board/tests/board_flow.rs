//! End-to-end board flows: full pointer gestures through the controller,
//! with the host applying each optimistic reorder and refreshing region
//! geometry the way a real layout pass would.

use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use huntboard_board::{
    BoardController, BoardEvent, DragSession, DropRegion, DropTarget, resolve,
};
use huntboard_core::{
    Card, CardId, Column, ColumnId, ColumnMap, Point, PointerEvent, PointerEventKind, Rect, Status,
};

fn wall() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

fn stage_columns() -> ColumnMap {
    ColumnMap::new(
        vec![
            Column::new("applied", "Applied", vec![Status::new("applied")], "applied"),
            Column::new(
                "interview",
                "Interviewing",
                vec![
                    Status::new("first-interview"),
                    Status::new("final-interview"),
                ],
                "first-interview",
            ),
        ],
        ColumnId::new("applied"),
    )
    .unwrap()
}

/// Stack card regions inside their column, 50px pitch, and register both
/// column backgrounds.
fn layout(ctrl: &mut BoardController, applied: &[&str], interview: &[&str]) {
    ctrl.clear_regions();
    ctrl.update_region(
        DropTarget::Column(ColumnId::new("applied")),
        Rect::new(0.0, 0.0, 100.0, 500.0),
    );
    for (i, id) in applied.iter().enumerate() {
        ctrl.update_region(
            DropTarget::Card(CardId::new(*id)),
            Rect::new(10.0, 10.0 + 50.0 * i as f32, 80.0, 40.0),
        );
    }
    ctrl.update_region(
        DropTarget::Column(ColumnId::new("interview")),
        Rect::new(110.0, 0.0, 100.0, 500.0),
    );
    for (i, id) in interview.iter().enumerate() {
        ctrl.update_region(
            DropTarget::Card(CardId::new(*id)),
            Rect::new(120.0, 10.0 + 50.0 * i as f32, 80.0, 40.0),
        );
    }
}

fn ids(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}

/// Drive one pointer event, applying any reorder to the host list.
fn drive(
    ctrl: &mut BoardController,
    cards: &mut Vec<Card>,
    kind: PointerEventKind,
    pos: Point,
    at: Instant,
) -> Vec<BoardEvent> {
    let events = ctrl.handle_pointer(cards, &PointerEvent::new(kind, pos, at), wall());
    for event in &events {
        if let BoardEvent::Reorder(next) = event {
            *cards = next.clone();
        }
    }
    events
}

#[test]
fn cross_column_drag_end_to_end() {
    // Card x (applied) dragged over card y (interview column, combined
    // index 2): x lands at index 2 with the interview column's default
    // status; the applied column's remaining cards keep their order.
    let mut ctrl = BoardController::new(stage_columns());
    let created = wall() - chrono::Duration::days(1);
    let mut cards = vec![
        Card::new("p", "applied", created),
        Card::new("x", "applied", created),
        Card::new("y", "final-interview", created),
        Card::new("q", "first-interview", created),
        Card::new("r", "applied", created),
    ];
    layout(&mut ctrl, &["p", "x", "r"], &["y", "q"]);

    let t = Instant::now();
    // Grab x at its region center and hover over y.
    drive(&mut ctrl, &mut cards, PointerEventKind::Down, Point::new(50.0, 80.0), t);
    let events = drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Move,
        Point::new(160.0, 30.0),
        t + Duration::from_millis(16),
    );

    assert!(matches!(events.first(), Some(BoardEvent::DragStarted(id)) if id.as_str() == "x"));
    assert_eq!(ids(&cards), ["p", "y", "x", "q", "r"], "x takes y's index");
    assert_eq!(cards[2].status.as_str(), "first-interview");
    assert_eq!(cards[2].updated_at, wall(), "status change carries a fresh stamp");
    // Applied column's remaining cards: p before r, as before.
    let applied: Vec<&str> = cards
        .iter()
        .filter(|c| c.status.as_str() == "applied")
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(applied, ["p", "r"]);

    let snap = ctrl.snapshot(&cards);
    assert!(snap.columns[1].highlighted, "target column is highlighted mid-drag");

    // The host re-laid out after the optimistic reorder: x now occupies
    // the interview column's second slot, under the pointer's card. The
    // release lands on x's own refreshed region.
    layout(&mut ctrl, &["p", "r"], &["y", "x", "q"]);
    let events = drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Up,
        Point::new(160.0, 80.0),
        t + Duration::from_millis(32),
    );
    assert_eq!(events, vec![BoardEvent::DragEnded], "hover reorder was the terminal one");
    assert_eq!(ids(&cards), ["p", "y", "x", "q", "r"]);

    let snap = ctrl.snapshot(&cards);
    assert_eq!(snap.active_card, None);
    assert!(snap.columns.iter().all(|c| !c.highlighted));
}

#[test]
fn same_column_reorder_end_to_end() {
    // Card x (index 3) dragged over card z (index 0, same column): x moves
    // to index 0, status untouched, z/m/n keep their relative order.
    let mut ctrl = BoardController::new(stage_columns());
    let mut cards = vec![
        Card::new("z", "applied", wall()),
        Card::new("m", "applied", wall()),
        Card::new("n", "applied", wall()),
        Card::new("x", "applied", wall()),
    ];
    layout(&mut ctrl, &["z", "m", "n", "x"], &[]);

    let t = Instant::now();
    drive(&mut ctrl, &mut cards, PointerEventKind::Down, Point::new(50.0, 180.0), t);
    drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Move,
        Point::new(50.0, 30.0),
        t + Duration::from_millis(16),
    );

    assert_eq!(ids(&cards), ["x", "z", "m", "n"]);
    assert!(cards.iter().all(|c| c.status.as_str() == "applied"));

    layout(&mut ctrl, &["x", "z", "m", "n"], &[]);
    let events = drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Up,
        Point::new(50.0, 30.0),
        t + Duration::from_millis(32),
    );
    assert_eq!(events, vec![BoardEvent::DragEnded]);
    assert_eq!(ids(&cards), ["x", "z", "m", "n"]);
}

#[test]
fn drop_on_empty_column_background() {
    let mut ctrl = BoardController::new(stage_columns());
    let mut cards = vec![
        Card::new("x", "applied", wall()),
        Card::new("p", "applied", wall()),
    ];
    layout(&mut ctrl, &["x", "p"], &[]);

    let t = Instant::now();
    drive(&mut ctrl, &mut cards, PointerEventKind::Down, Point::new(50.0, 30.0), t);
    drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Move,
        Point::new(160.0, 250.0),
        t + Duration::from_millis(16),
    );

    assert_eq!(ids(&cards), ["x", "p"], "background drop keeps the index");
    assert_eq!(cards[0].status.as_str(), "first-interview");

    layout(&mut ctrl, &["p"], &["x"]);
    let events = drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Up,
        Point::new(160.0, 250.0),
        t + Duration::from_millis(32),
    );
    assert_eq!(events, vec![BoardEvent::DragEnded]);
}

#[test]
fn cancelled_drag_keeps_optimistic_changes() {
    let mut ctrl = BoardController::new(stage_columns());
    let mut cards = vec![
        Card::new("x", "applied", wall()),
        Card::new("y", "first-interview", wall()),
    ];
    layout(&mut ctrl, &["x"], &["y"]);

    let t = Instant::now();
    drive(&mut ctrl, &mut cards, PointerEventKind::Down, Point::new(50.0, 30.0), t);
    drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Move,
        Point::new(160.0, 30.0),
        t + Duration::from_millis(16),
    );
    assert_eq!(cards[1].id.as_str(), "x");
    assert_eq!(cards[1].status.as_str(), "first-interview");

    let events = drive(
        &mut ctrl,
        &mut cards,
        PointerEventKind::Cancel,
        Point::new(160.0, 30.0),
        t + Duration::from_millis(32),
    );
    assert_eq!(events, vec![BoardEvent::DragCancelled]);
    // No rollback: the optimistic move stands until the host reconciles.
    assert_eq!(cards[1].status.as_str(), "first-interview");
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

/// Build `n` cards in the applied column with stacked regions.
fn column_fixture(n: usize) -> (ColumnMap, Vec<Card>, Vec<DropRegion>) {
    let columns = stage_columns();
    let cards: Vec<Card> = (0..n)
        .map(|i| Card::new(format!("card-{i}"), "applied", wall()))
        .collect();
    let mut regions = vec![DropRegion::column(
        "applied",
        Rect::new(0.0, 0.0, 100.0, 50.0 * n as f32 + 20.0),
    )];
    for (i, card) in cards.iter().enumerate() {
        regions.push(DropRegion::card(
            card.id.clone(),
            Rect::new(10.0, 10.0 + 50.0 * i as f32, 80.0, 40.0),
        ));
    }
    (columns, cards, regions)
}

proptest! {
    /// Stability law: a same-column reorder preserves the relative order
    /// of every card except the active one, and the active card lands at
    /// the target's index.
    #[test]
    fn same_column_reorder_is_stable(n in 2usize..10, from in 0usize..10, to in 0usize..10) {
        let (from, to) = (from % n, to % n);
        prop_assume!(from != to);

        let (columns, cards, regions) = column_fixture(n);
        let mut session = DragSession::with_defaults();
        let grabbed = regions[1 + from].rect;
        session.press(cards[from].id.clone(), grabbed, grabbed.center());

        let target_center = regions[1 + to].rect.center();
        let events = session.motion(&cards, &columns, &regions, target_center, wall());

        let reordered = events
            .iter()
            .find_map(|e| match e {
                BoardEvent::Reorder(list) => Some(list.clone()),
                _ => None,
            })
            .expect("distinct indices must reorder");

        prop_assert_eq!(reordered.len(), cards.len());
        prop_assert_eq!(&reordered[to].id, &cards[from].id);

        let before: Vec<&CardId> = cards
            .iter()
            .map(|c| &c.id)
            .filter(|id| *id != &cards[from].id)
            .collect();
        let after: Vec<&CardId> = reordered
            .iter()
            .map(|c| &c.id)
            .filter(|id| *id != &cards[from].id)
            .collect();
        prop_assert_eq!(before, after, "relative order of other cards must survive");

        for card in &reordered {
            prop_assert_eq!(card.status.as_str(), "applied", "same-column move keeps status");
        }
    }

    /// Tie-break determinism: two candidates at exactly equal center
    /// distance resolve to whichever was registered first, every time.
    #[test]
    fn equal_distance_resolves_to_first_registered(k in 30u32..250) {
        let z = 2.0 * k as f32;
        let above = DropRegion::card("above", Rect::new(0.0, 0.0, 80.0, 40.0));
        let below = DropRegion::card("below", Rect::new(0.0, z, 80.0, 40.0));
        // Dragged rect overlapping both, centered exactly between their
        // centers; pointer far away so the intersection fallback fires.
        let dragged = Rect::new(0.0, 30.0, 80.0, z - 20.0);
        let pointer = Point::new(900.0, 900.0);

        let forward = vec![above.clone(), below.clone()];
        let reversed = vec![below, above];

        for _ in 0..3 {
            let hits = resolve(pointer, dragged, &forward);
            prop_assert_eq!(&hits[0].target, &DropTarget::Card(CardId::new("above")));

            let hits = resolve(pointer, dragged, &reversed);
            prop_assert_eq!(&hits[0].target, &DropTarget::Card(CardId::new("below")));
        }
    }

    /// The resolver is a pure function: identical inputs, identical
    /// ranking.
    #[test]
    fn resolver_is_reproducible(
        px in 0.0f32..300.0,
        py in 0.0f32..300.0,
        n in 1usize..8,
    ) {
        let (_, _, regions) = column_fixture(n);
        let dragged = Rect::new(px, py, 80.0, 40.0);
        let first = resolve(Point::new(px, py), dragged, &regions);
        for _ in 0..5 {
            prop_assert_eq!(&resolve(Point::new(px, py), dragged, &regions), &first);
        }
    }
}
