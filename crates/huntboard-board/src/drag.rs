#![forbid(unsafe_code)]

//! Drag session state machine.
//!
//! Owns the lifecycle of one drag gesture: a press arms the session, motion
//! past the activation distance starts the drag, every subsequent motion
//! frame resolves a drop candidate and may emit an optimistic reorder, and
//! release/cancel tear the session down.
//!
//! # State Machine
//!
//! `Idle → Armed → Dragging → Idle`
//!
//! - **Armed**: pressed on a card but below the activation distance. A
//!   release here was a click; nothing is emitted.
//! - **Dragging**: the active card follows the pointer. Each motion frame
//!   runs the collision resolver; frames resolving to the same target as
//!   the previous frame are no-ops.
//!
//! # Invariants
//!
//! 1. Every drag is well-formed: one `DragStarted`, then zero or more
//!    `Reorder`s, then exactly one of `DragEnded` / `DragCancelled`.
//! 2. The host's card list is never mutated: every `Reorder` carries a
//!    freshly built list.
//! 3. Same-column reorders preserve the relative order of all other cards.
//! 4. Cancel never rolls back: reorders already emitted stand, and the
//!    host reconciles against its source of truth.
//! 5. No clocks are read: identical input sequences emit identical event
//!    sequences.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use huntboard_core::{Card, CardId, ColumnId, ColumnMap, Point, Rect};

use crate::collision;
use crate::region::{DropRegion, DropTarget};

/// Host notifications emitted by the board.
///
/// `Reorder` is optimistic and may fire repeatedly while a drag hovers new
/// targets; hosts treat each as an idempotent full-list replacement. The
/// lifecycle variants carry no data implications — they exist for UI
/// highlighting only.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// A drag crossed the activation distance.
    DragStarted(CardId),
    /// The card list changed (status move and/or reorder).
    Reorder(Vec<Card>),
    /// The drag finished over whatever the final frame resolved.
    DragEnded,
    /// The drag was interrupted. Emitted changes are not rolled back.
    DragCancelled,
}

/// Tuning for drag activation.
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Distance in pixels the pointer must travel from the press point
    /// before a drag starts (default: 8.0). Distinguishes drag from click.
    pub activation_distance: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 8.0,
        }
    }
}

impl DragConfig {
    /// Set the activation distance.
    #[must_use]
    pub fn with_activation_distance(mut self, px: f32) -> Self {
        self.activation_distance = px.max(0.0);
        self
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    Idle,
    Armed {
        card: CardId,
        origin: Point,
        grabbed: Rect,
    },
    Dragging {
        card: CardId,
        origin: Point,
        grabbed: Rect,
        last_target: Option<DropTarget>,
        highlighted: Option<ColumnId>,
    },
}

/// The drag session state machine.
///
/// Pointer handlers are transition functions over explicit state; the
/// session holds no references to host data and reads no clocks.
#[derive(Debug, Clone)]
pub struct DragSession {
    config: DragConfig,
    state: SessionState,
}

impl DragSession {
    /// Create a session with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
        }
    }

    /// Create a session with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DragConfig::default())
    }

    /// The card being dragged, once past the activation distance.
    #[must_use]
    pub fn active_card(&self) -> Option<&CardId> {
        match &self.state {
            SessionState::Dragging { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The column currently highlighted as a cross-column drop target.
    #[must_use]
    pub fn highlighted_column(&self) -> Option<&ColumnId> {
        match &self.state {
            SessionState::Dragging { highlighted, .. } => highlighted.as_ref(),
            _ => None,
        }
    }

    /// Whether a drag is in progress (past activation).
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    /// Whether a press is being tracked (armed or dragging).
    #[inline]
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Arm the session: the pointer went down on `card`, whose region
    /// rectangle is `grabbed`, at `origin`.
    pub fn press(&mut self, card: CardId, grabbed: Rect, origin: Point) {
        trace!(card = %card, "drag armed");
        self.state = SessionState::Armed {
            card,
            origin,
            grabbed,
        };
    }

    /// Process a pointer move.
    ///
    /// Below the activation distance this is a no-op. The frame that
    /// crosses it emits [`BoardEvent::DragStarted`] and is then processed
    /// as a regular over-frame.
    pub fn motion(
        &mut self,
        cards: &[Card],
        columns: &ColumnMap,
        regions: &[DropRegion],
        pointer: Point,
        now: DateTime<Utc>,
    ) -> Vec<BoardEvent> {
        match &self.state {
            SessionState::Idle => Vec::new(),
            SessionState::Armed {
                card,
                origin,
                grabbed,
            } => {
                if origin.distance(pointer) < self.config.activation_distance {
                    return Vec::new();
                }
                let (card, origin, grabbed) = (card.clone(), *origin, *grabbed);
                debug!(card = %card, "drag started");
                self.state = SessionState::Dragging {
                    card: card.clone(),
                    origin,
                    grabbed,
                    last_target: None,
                    highlighted: None,
                };
                let mut out = vec![BoardEvent::DragStarted(card)];
                out.extend(self.over(cards, columns, regions, pointer, now));
                out
            }
            SessionState::Dragging { .. } => self.over(cards, columns, regions, pointer, now),
        }
    }

    /// Process a pointer release.
    ///
    /// While dragging, runs one terminal resolver pass (dedup disabled,
    /// same-column-style reorder only — the final frame may not have gone
    /// through [`motion`](Self::motion)), then emits
    /// [`BoardEvent::DragEnded`]. Session state clears unconditionally.
    pub fn release(
        &mut self,
        cards: &[Card],
        regions: &[DropRegion],
        pointer: Point,
    ) -> Vec<BoardEvent> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Idle => Vec::new(),
            SessionState::Armed { card, .. } => {
                trace!(card = %card, "press released below activation: click");
                Vec::new()
            }
            SessionState::Dragging {
                card,
                origin,
                grabbed,
                ..
            } => {
                let mut out = Vec::new();
                let (dx, dy) = pointer.delta(origin);
                let dragged = grabbed.translated(dx, dy);
                let candidates = collision::resolve(pointer, dragged, regions);
                if let Some(best) = candidates.first()
                    && let DropTarget::Card(target_id) = &best.target
                    && target_id != &card
                    && let Some(active_idx) = index_of(cards, &card)
                    && let Some(target_idx) = index_of(cards, target_id)
                    && target_idx != active_idx
                {
                    trace!(card = %card, to = target_idx, "terminal reorder");
                    out.push(BoardEvent::Reorder(move_card(cards, active_idx, target_idx)));
                }
                debug!(card = %card, "drag ended");
                out.push(BoardEvent::DragEnded);
                out
            }
        }
    }

    /// Cancel the session (external interruption).
    ///
    /// Clears state without touching the card list; reorders already
    /// emitted are not rolled back.
    pub fn cancel(&mut self) -> Vec<BoardEvent> {
        let was_dragging = self.is_dragging();
        self.state = SessionState::Idle;
        if was_dragging {
            debug!("drag cancelled");
            vec![BoardEvent::DragCancelled]
        } else {
            Vec::new()
        }
    }

    /// One over-frame: resolve, dedup, highlight, and emit a reorder or
    /// status move when warranted.
    fn over(
        &mut self,
        cards: &[Card],
        columns: &ColumnMap,
        regions: &[DropRegion],
        pointer: Point,
        now: DateTime<Utc>,
    ) -> Vec<BoardEvent> {
        let SessionState::Dragging {
            card,
            origin,
            grabbed,
            last_target,
            highlighted,
        } = &mut self.state
        else {
            return Vec::new();
        };

        let (dx, dy) = pointer.delta(*origin);
        let dragged = grabbed.translated(dx, dy);
        let candidates = collision::resolve(pointer, dragged, regions);
        let Some(best) = candidates.first() else {
            // No valid drop target this frame; keep the last target so a
            // re-entry to the same region stays a no-op.
            return Vec::new();
        };

        if last_target.as_ref() == Some(&best.target) {
            return Vec::new();
        }
        *last_target = Some(best.target.clone());

        let Some(active_idx) = index_of(cards, card) else {
            return Vec::new();
        };
        let active = &cards[active_idx];
        let active_column = columns.column_of(&active.status).clone();

        let target_column = match &best.target {
            DropTarget::Card(id) => match cards.iter().find(|c| &c.id == id) {
                Some(target_card) => columns.column_of(&target_card.status).clone(),
                None => return Vec::new(),
            },
            DropTarget::Column(id) => id.clone(),
        };

        *highlighted = (target_column != active_column).then(|| target_column.clone());

        if target_column == active_column {
            // Same column: index move only, no status mutation.
            if let DropTarget::Card(target_id) = &best.target
                && target_id != card
                && let Some(target_idx) = index_of(cards, target_id)
                && target_idx != active_idx
            {
                trace!(card = %card, from = active_idx, to = target_idx, "reorder");
                return vec![BoardEvent::Reorder(move_card(cards, active_idx, target_idx))];
            }
            Vec::new()
        } else {
            let Some(new_status) = columns.default_status_for(&target_column) else {
                return Vec::new();
            };
            let updated = active.with_status(new_status.clone(), now);
            debug!(
                card = %card,
                from = %active_column,
                to = %target_column,
                status = %updated.status,
                "status move"
            );
            let next = match &best.target {
                DropTarget::Card(target_id) => {
                    let Some(target_idx) = index_of(cards, target_id) else {
                        return Vec::new();
                    };
                    let mut next = cards.to_vec();
                    next[active_idx] = updated;
                    move_card(&next, active_idx, target_idx)
                }
                DropTarget::Column(_) => {
                    // Column background: status changes in place, no index
                    // promise.
                    let mut next = cards.to_vec();
                    next[active_idx] = updated;
                    next
                }
            };
            vec![BoardEvent::Reorder(next)]
        }
    }
}

/// Index of a card id in the list.
fn index_of(cards: &[Card], id: &CardId) -> Option<usize> {
    cards.iter().position(|c| &c.id == id)
}

/// Stable move: the card at `from` ends up at index `to` of the returned
/// list; every other card keeps its relative order.
fn move_card(cards: &[Card], from: usize, to: usize) -> Vec<Card> {
    let mut next = cards.to_vec();
    let card = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, card);
    next
}
