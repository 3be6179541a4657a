#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and the card/column model.
//!
//! # Role in Huntboard
//! `huntboard-core` is the data layer of the kanban engine. It owns the
//! value types the interaction crate (`huntboard-board`) operates on and
//! has no interaction state of its own.
//!
//! # Primary responsibilities
//! - **Geometry**: pixel-space points and rectangles for hit testing.
//! - **PointerEvent**: the normalized pointer stream (down/move/up/cancel).
//! - **Card/Status**: the draggable records and their stage values.
//! - **ColumnMap**: the validated static column table with status → column
//!   reverse lookup and per-column default statuses.
//!
//! # How it fits in the system
//! The host application feeds `PointerEvent`s and its card list to
//! `huntboard-board`, which resolves drops and emits new card lists. This
//! crate is the shared vocabulary between the two; it never mutates host
//! state and never reads a clock.

pub mod card;
pub mod column;
pub mod event;
pub mod geometry;

pub use card::{Card, CardId, Status};
pub use column::{Column, ColumnId, ColumnMap, ColumnMapError};
pub use event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect};
