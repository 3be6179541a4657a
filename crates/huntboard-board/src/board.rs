#![forbid(unsafe_code)]

//! Board controller: routes the pointer stream and snapshots the view.
//!
//! The controller composes the drag session and the momentum scroller and
//! enforces their mutual exclusion: a press that lands on a card arms a
//! drag and never pans; any other press pans. A press of either kind stops
//! an in-flight glide first.
//!
//! The host drives it with three calls: [`handle_pointer`] for each
//! pointer event, [`on_frame`] once per animation frame while it returns
//! `true`, and [`snapshot`] whenever it renders.
//!
//! [`handle_pointer`]: BoardController::handle_pointer
//! [`on_frame`]: BoardController::on_frame
//! [`snapshot`]: BoardController::snapshot

use chrono::{DateTime, Utc};

use huntboard_core::{
    Card, CardId, ColumnId, ColumnMap, PointerButton, PointerEvent, PointerEventKind, Rect,
};

use crate::drag::{BoardEvent, DragConfig, DragSession};
use crate::region::{DropRegion, DropTarget, RegionRegistry};
use crate::scroll::{GrabScroll, GrabScrollConfig};

/// One column as the renderer should draw it this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    /// Cards in list order, filtered to this column.
    pub cards: Vec<CardId>,
    /// Whether this column is the highlighted cross-column drop target.
    pub highlighted: bool,
}

/// Immutable view of the board for one frame: pure function of the card
/// list and the live session state.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// Columns in declaration order.
    pub columns: Vec<ColumnView>,
    /// The card currently being dragged, if any.
    pub active_card: Option<CardId>,
    /// Horizontal scroll offset of the board container.
    pub scroll_left: f32,
}

/// The board interaction controller.
pub struct BoardController {
    columns: ColumnMap,
    regions: RegionRegistry,
    drag: DragSession,
    scroll: GrabScroll,
    max_scroll: f32,
}

impl BoardController {
    /// Create a controller with default drag/scroll tuning.
    #[must_use]
    pub fn new(columns: ColumnMap) -> Self {
        Self::with_config(columns, DragConfig::default(), GrabScrollConfig::default())
    }

    /// Create a controller with explicit tuning.
    #[must_use]
    pub fn with_config(columns: ColumnMap, drag: DragConfig, scroll: GrabScrollConfig) -> Self {
        Self {
            columns,
            regions: RegionRegistry::new(),
            drag: DragSession::new(drag),
            scroll: GrabScroll::new(scroll),
            max_scroll: 0.0,
        }
    }

    /// The static column table.
    #[must_use]
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Register or refresh a droppable region. Call after layout changes.
    pub fn update_region(&mut self, target: DropTarget, rect: Rect) {
        self.regions.upsert(target, rect);
    }

    /// Remove a droppable region (e.g. a card left the board).
    pub fn remove_region(&mut self, target: &DropTarget) {
        self.regions.remove(target);
    }

    /// Drop all registered regions.
    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    /// Registered regions in registration order.
    #[must_use]
    pub fn regions(&self) -> &[DropRegion] {
        self.regions.as_slice()
    }

    /// Set the maximum horizontal scroll offset (content width minus
    /// viewport width). Pan and glide clamp against it.
    pub fn set_scroll_bounds(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
    }

    /// Current horizontal scroll offset.
    #[must_use]
    pub fn scroll_left(&self) -> f32 {
        self.scroll.scroll_left()
    }

    /// Whether a drag is in progress (past activation).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Process one pointer event against the current card list.
    ///
    /// `now` stamps cards whose status changes this frame. Returned events
    /// are in emission order; `Reorder` payloads are freshly built lists —
    /// `cards` is never mutated.
    pub fn handle_pointer(
        &mut self,
        cards: &[Card],
        event: &PointerEvent,
        now: DateTime<Utc>,
    ) -> Vec<BoardEvent> {
        match event.kind {
            PointerEventKind::Down => {
                // Any press kills an in-flight glide before routing.
                self.scroll.interrupt();
                if event.button != PointerButton::Primary {
                    return Vec::new();
                }
                if let Some((card, rect)) = self.regions.card_at(event.pos) {
                    self.drag.press(card.clone(), rect, event.pos);
                } else {
                    self.scroll.press(event.pos.x, event.at);
                }
                Vec::new()
            }
            PointerEventKind::Move => {
                if self.drag.is_engaged() {
                    self.drag.motion(
                        cards,
                        &self.columns,
                        self.regions.as_slice(),
                        event.pos,
                        now,
                    )
                } else {
                    self.scroll.motion(event.pos.x, event.at, self.max_scroll);
                    Vec::new()
                }
            }
            PointerEventKind::Up => {
                if self.drag.is_engaged() {
                    self.drag
                        .release(cards, self.regions.as_slice(), event.pos)
                } else {
                    self.scroll.release();
                    Vec::new()
                }
            }
            PointerEventKind::Cancel => {
                self.scroll.interrupt();
                self.drag.cancel()
            }
        }
    }

    /// Advance one animation frame. Returns `true` while a glide is
    /// running and the host should request another frame.
    pub fn on_frame(&mut self) -> bool {
        self.scroll.tick(self.max_scroll)
    }

    /// Build the view snapshot for the current frame.
    #[must_use]
    pub fn snapshot(&self, cards: &[Card]) -> BoardSnapshot {
        let highlighted = self.drag.highlighted_column();
        let columns = self
            .columns
            .columns()
            .map(|column| ColumnView {
                id: column.id.clone(),
                title: column.title.clone(),
                cards: cards
                    .iter()
                    .filter(|c| self.columns.column_of(&c.status) == &column.id)
                    .map(|c| c.id.clone())
                    .collect(),
                highlighted: highlighted == Some(&column.id),
            })
            .collect();

        BoardSnapshot {
            columns,
            active_card: self.drag.active_card().cloned(),
            scroll_left: self.scroll.scroll_left(),
        }
    }
}
