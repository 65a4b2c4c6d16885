//! The layout pipeline: validate, cluster, pack, expand, emit.
//!
//! # Design Principle
//!
//! Input events are never mutated. Derived data (cluster, column, span)
//! lives in vectors index-aligned with the input slice, and every call
//! builds them from scratch. The same input always yields the same output,
//! whatever order the events arrive in.
//!
//! # Functions
//!
//! - [`layout`] — Lay out one day of events for a surface `total_width` pixels wide
//! - [`layout_with_details`] — Same, plus the column placement behind each box

use std::collections::HashSet;

use serde::Serialize;

use crate::cluster;
use crate::column;
use crate::emit::{emit, OutputEvent};
use crate::error::{LayoutError, Result};
use crate::event::{sweep_order, Event};
use crate::expand;

/// Column placement of one event within its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Id of the collision cluster the event belongs to.
    pub cluster: usize,
    /// Column the event was packed into.
    pub column: usize,
    /// Number of contiguous columns the event occupies, starting at `column`.
    pub column_span: usize,
    /// Peak column count of the event's cluster.
    pub cluster_width: usize,
}

/// Output records together with the placements that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDetails {
    /// One record per input event, in input order.
    pub events: Vec<OutputEvent>,
    /// Placement of each event, index-aligned with `events`.
    pub placements: Vec<Placement>,
    /// Number of collision clusters found.
    pub cluster_count: usize,
}

/// Lay out one day of events side by side.
///
/// Events that overlap in time are given disjoint horizontal ranges; an
/// event with no overlapping neighbour spans the full `total_width`.
/// Output records are returned in input order.
///
/// # Errors
///
/// - [`LayoutError::InvalidWidth`] if `total_width` is not a positive finite number
/// - [`LayoutError::InvalidInterval`] if an event has `start >= end`
/// - [`LayoutError::DuplicateId`] if two events share an id
///
/// # Examples
///
/// ```
/// use day_layout::{layout, Event};
///
/// let events = vec![Event::new("a", 0, 100), Event::new("b", 50, 150)];
/// let out = layout(&events, 600.0).unwrap();
/// assert_eq!(out[0].left, 0.0);
/// assert_eq!(out[1].left, 300.0);
/// assert!(out.iter().all(|e| e.width == 300.0));
/// ```
pub fn layout(events: &[Event], total_width: f64) -> Result<Vec<OutputEvent>> {
    layout_with_details(events, total_width).map(|details| details.events)
}

/// Like [`layout`], but also returns each event's [`Placement`].
pub fn layout_with_details(events: &[Event], total_width: f64) -> Result<LayoutDetails> {
    validate(events, total_width)?;

    let order = sweep_order(events);
    let clusters = cluster::group(events, &order);
    let columns = column::assign(events, &clusters);
    let spans = expand::column_spans(events, &clusters, &columns);

    let placements: Vec<Placement> = (0..events.len())
        .map(|i| Placement {
            cluster: clusters.of[i],
            column: columns.column[i],
            column_span: spans[i],
            cluster_width: columns.width_of(&clusters, i),
        })
        .collect();

    let output = events
        .iter()
        .zip(&placements)
        .map(|(event, placement)| emit(event, placement, total_width))
        .collect();

    tracing::debug!(
        events = events.len(),
        clusters = clusters.len(),
        total_width,
        "laid out day"
    );

    Ok(LayoutDetails {
        events: output,
        placements,
        cluster_count: clusters.len(),
    })
}

/// Reject widths and events that cannot be laid out.
fn validate(events: &[Event], total_width: f64) -> Result<()> {
    if !total_width.is_finite() || total_width <= 0.0 {
        return Err(LayoutError::InvalidWidth(total_width));
    }

    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        if event.start >= event.end {
            return Err(LayoutError::InvalidInterval {
                id: event.id.clone(),
                start: event.start,
                end: event.end,
            });
        }
        if !seen.insert(&event.id) {
            return Err(LayoutError::DuplicateId(event.id.clone()));
        }
    }
    Ok(())
}
