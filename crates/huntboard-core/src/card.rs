#![forbid(unsafe_code)]

//! Card records: the draggable items on the board.
//!
//! A [`Card`] is the projection of a host application record that the board
//! engine reads and writes: its identity, its stage [`Status`], and the
//! timestamp of the last status change. Everything else about an
//! application (company name, notes, entry-sheet content, …) stays
//! host-side, keyed by [`CardId`] — reorder notifications carry full `Card`
//! lists that the host re-joins by id.

use chrono::{DateTime, Utc};

/// Opaque card identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(String);

impl CardId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application stage value (e.g. `"applied"`, `"first-interview"`).
///
/// Statuses are domain values owned by the host; the board only maps them
/// to columns and rewrites them on cross-column drops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(String);

impl Status {
    /// Create a status from any string-like value.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// The status as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Status {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A draggable card on the board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Identity, stable for the card's lifetime.
    pub id: CardId,
    /// Current application stage.
    pub status: Status,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: impl Into<CardId>, status: impl Into<Status>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            updated_at,
        }
    }

    /// Copy of this card with a new status and a fresh update stamp.
    #[must_use]
    pub fn with_status(&self, status: Status, now: DateTime<Utc>) -> Card {
        Card {
            id: self.id.clone(),
            status,
            updated_at: now,
        }
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<String> for Status {
    fn from(status: String) -> Self {
        Self(status)
    }
}
