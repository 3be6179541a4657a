#![forbid(unsafe_code)]

//! Drag-and-drop interaction engine for the Huntboard kanban board.
//!
//! # Role in Huntboard
//! `huntboard-board` turns a pointer stream plus the host's card list into
//! optimistic board mutations: status moves between columns, stable
//! same-column reorders, and momentum panning of the board container.
//! Persistence, rendering, and everything else about an application record
//! belong to the host.
//!
//! # Primary responsibilities
//! - **RegionRegistry**: insertion-ordered droppable geometry.
//! - **Collision resolution**: card-over-column precedence with a
//!   containment → intersection fallback and deterministic tie-breaks.
//! - **DragSession**: the drag gesture state machine.
//! - **GrabScroll**: press/pan/release momentum scrolling.
//! - **BoardController**: routing, mutual exclusion, and view snapshots.
//!
//! # How it fits in the system
//! The host feeds [`PointerEvent`](huntboard_core::PointerEvent)s to
//! [`BoardController::handle_pointer`] and applies each returned
//! [`BoardEvent`] — a `Reorder` replaces the host's card list wholesale
//! (optimistic, idempotent), the lifecycle events drive highlighting. All
//! emitted lists are fresh allocations; the engine never mutates host
//! state and never reads a clock.

pub mod board;
pub mod collision;
pub mod drag;
pub mod region;
pub mod scroll;

pub use board::{BoardController, BoardSnapshot, ColumnView};
pub use collision::{Collision, resolve};
pub use drag::{BoardEvent, DragConfig, DragSession};
pub use region::{DropRegion, DropTarget, RegionRegistry};
pub use scroll::{GrabScroll, GrabScrollConfig};
