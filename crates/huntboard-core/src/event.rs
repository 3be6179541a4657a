#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The board consumes a single normalized pointer stream: down, move, up,
//! cancel. Events carry the timestamp the host observed them at
//! ([`PointerEvent::at`]) so the interaction machines never read a clock
//! themselves — identical input sequences replay identically.

use std::time::Instant;

use bitflags::bitflags;

use crate::geometry::Point;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button pressed.
    Down,
    /// Pointer moved (with or without a button held).
    Move,
    /// Button released.
    Up,
    /// The gesture was interrupted by the host environment (window blur,
    /// pointer capture loss, Escape). Never followed by `Up` for the same
    /// gesture.
    Cancel,
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary (usually left) button. The only button the board acts on.
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    ///
    /// The board ignores these today; they ride along because real pointer
    /// streams carry them and hosts may want them in their own handlers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Pointer position in board coordinates.
    pub pos: Point,
    /// Which button (for `Down`/`Up`; `Move` reports the held button).
    pub button: PointerButton,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// When the host observed the event.
    pub at: Instant,
}

impl PointerEvent {
    /// Create an event with the primary button and no modifiers.
    #[must_use]
    pub const fn new(kind: PointerEventKind, pos: Point, at: Instant) -> Self {
        Self {
            kind,
            pos,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            at,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this event begins a gesture.
    #[inline]
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.kind == PointerEventKind::Down
    }

    /// Whether this event terminates a gesture (`Up` or `Cancel`).
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}
