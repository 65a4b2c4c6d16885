//! Convert column placements into pixel geometry.

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};
use crate::layout::Placement;

/// A laid-out event, ready for a renderer.
///
/// `top` is in minutes from the start of the day (one pixel per minute);
/// `left` and `width` are in pixels of the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEvent {
    pub id: EventId,
    pub start: u32,
    pub end: u32,
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl OutputEvent {
    /// Vertical extent of the event box: `end - start`.
    pub fn height(&self) -> f64 {
        f64::from(self.end) - f64::from(self.start)
    }

    /// Right edge of the event box: `left + width`.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Horizontal geometry `(left, width)` of a box that starts at `column` and
/// covers `span` columns of a cluster `cluster_width` columns wide.
pub fn geometry(column: usize, span: usize, cluster_width: usize, total_width: f64) -> (f64, f64) {
    let col_width = total_width / cluster_width as f64;
    (column as f64 * col_width, span as f64 * col_width)
}

/// Build the output record for one event.
pub fn emit(event: &Event, placement: &Placement, total_width: f64) -> OutputEvent {
    let (left, width) = geometry(
        placement.column,
        placement.column_span,
        placement.cluster_width,
        total_width,
    );
    OutputEvent {
        id: event.id.clone(),
        start: event.start,
        end: event.end,
        top: f64::from(event.start),
        left,
        width,
    }
}
