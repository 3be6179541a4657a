#![forbid(unsafe_code)]

//! Hit-test collision resolution for the dragged card.
//!
//! A pure, two-phase resolver. Phase one finds regions containing the
//! pointer; when fast pointer motion skips past every region, phase two
//! falls back to rectangle intersection against the dragged card's
//! translated bounds. The produced hit set is then partitioned: card hits
//! take precedence over column hits and are re-ranked by closest-center
//! distance, so a drop snaps to the nearest neighboring card rather than
//! the column background behind it.
//!
//! # Invariants
//!
//! 1. Resolution is a pure function of `(pointer, dragged rect, regions)`.
//! 2. Candidates are ranked best-first; equal distances keep region
//!    iteration order (stable sort) — "first encountered wins" is the
//!    documented tie-break, which is why regions arrive as an ordered
//!    slice and never as a map.
//! 3. No hits is an empty vector, not an error.

use huntboard_core::{Point, Rect};

use crate::region::{DropRegion, DropTarget};

/// One ranked collision candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    /// The region's target.
    pub target: DropTarget,
    /// Center distance used for ranking. `None` for column-background hits,
    /// which are not distance-ranked.
    pub distance: Option<f32>,
}

/// Strategy 1: regions whose rectangle contains the pointer.
///
/// `None` when nothing contains the pointer, handing over to the next
/// strategy.
fn pointer_containment<'r>(pointer: Point, regions: &'r [DropRegion]) -> Option<Vec<&'r DropRegion>> {
    let hits: Vec<&DropRegion> = regions.iter().filter(|r| r.rect.contains(pointer)).collect();
    if hits.is_empty() { None } else { Some(hits) }
}

/// Strategy 2: regions overlapping the dragged card's translated bounds.
fn rect_intersection<'r>(dragged: Rect, regions: &'r [DropRegion]) -> Option<Vec<&'r DropRegion>> {
    let hits: Vec<&DropRegion> = regions
        .iter()
        .filter(|r| r.rect.intersects(&dragged))
        .collect();
    if hits.is_empty() { None } else { Some(hits) }
}

/// Resolve the best drop candidates for the current pointer frame.
///
/// `pointer` is the pointer position, `dragged` the active card's rectangle
/// translated to its current grab position, and `regions` every droppable
/// region in registration order. Returns candidates ranked best-first;
/// empty when nothing is hit.
#[must_use]
pub fn resolve(pointer: Point, dragged: Rect, regions: &[DropRegion]) -> Vec<Collision> {
    let hits = pointer_containment(pointer, regions)
        .or_else(|| rect_intersection(dragged, regions))
        .unwrap_or_default();

    let (cards, columns): (Vec<&DropRegion>, Vec<&DropRegion>) =
        hits.into_iter().partition(|r| r.target.is_card());

    if !cards.is_empty() {
        // Snap to the nearest neighboring card. Stable sort keeps region
        // order for equal distances.
        let mut ranked: Vec<Collision> = cards
            .into_iter()
            .map(|r| Collision {
                target: r.target.clone(),
                distance: Some(dragged.center_distance(&r.rect)),
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
        return ranked;
    }

    columns
        .into_iter()
        .map(|r| Collision {
            target: r.target.clone(),
            distance: None,
        })
        .collect()
}
