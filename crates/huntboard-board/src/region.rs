#![forbid(unsafe_code)]

//! Droppable regions: the geometry the collision resolver tests against.
//!
//! The host registers one region per column and one per visible card,
//! refreshing rectangles whenever layout changes. Regions live in an
//! insertion-ordered `Vec`, never an unordered map: the resolver's
//! equal-distance tie-break is "first encountered wins", so iteration
//! order is part of the contract.

use huntboard_core::{CardId, ColumnId, Rect};

/// What a droppable region stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A card; dropping here inserts at the card's index.
    Card(CardId),
    /// A column background; dropping here changes status in place.
    Column(ColumnId),
}

impl DropTarget {
    /// The card id, if this targets a card.
    #[must_use]
    pub fn as_card(&self) -> Option<&CardId> {
        match self {
            Self::Card(id) => Some(id),
            Self::Column(_) => None,
        }
    }

    /// The column id, if this targets a column background.
    #[must_use]
    pub fn as_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Card(_) => None,
            Self::Column(id) => Some(id),
        }
    }

    /// Whether this targets a card.
    #[inline]
    #[must_use]
    pub fn is_card(&self) -> bool {
        matches!(self, Self::Card(_))
    }
}

/// A droppable region: a target plus its current rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DropRegion {
    pub target: DropTarget,
    pub rect: Rect,
}

impl DropRegion {
    /// Create a region.
    #[must_use]
    pub fn new(target: DropTarget, rect: Rect) -> Self {
        Self { target, rect }
    }

    /// Convenience constructor for a card region.
    #[must_use]
    pub fn card(id: impl Into<CardId>, rect: Rect) -> Self {
        Self::new(DropTarget::Card(id.into()), rect)
    }

    /// Convenience constructor for a column region.
    #[must_use]
    pub fn column(id: impl Into<ColumnId>, rect: Rect) -> Self {
        Self::new(DropTarget::Column(id.into()), rect)
    }
}

/// Insertion-ordered region store.
///
/// Updating an existing target's rectangle keeps its position in the
/// iteration order; only genuinely new targets append.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: Vec<DropRegion>,
}

impl RegionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a region or refresh an existing target's rectangle in place.
    pub fn upsert(&mut self, target: DropTarget, rect: Rect) {
        if let Some(existing) = self.regions.iter_mut().find(|r| r.target == target) {
            existing.rect = rect;
        } else {
            self.regions.push(DropRegion::new(target, rect));
        }
    }

    /// Remove a target's region. No-op if absent.
    pub fn remove(&mut self, target: &DropTarget) {
        self.regions.retain(|r| &r.target != target);
    }

    /// Drop all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Regions in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[DropRegion] {
        &self.regions
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The first card region containing `p`, in insertion order.
    #[must_use]
    pub fn card_at(&self, p: huntboard_core::Point) -> Option<(&CardId, Rect)> {
        self.regions.iter().find_map(|r| match &r.target {
            DropTarget::Card(id) if r.rect.contains(p) => Some((id, r.rect)),
            _ => None,
        })
    }
}
