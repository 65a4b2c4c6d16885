//! Rightward width expansion.
//!
//! After packing, an event only owns its own column. It may also claim each
//! column to its right, one at a time, until it reaches a column held by an
//! event it actually overlaps or runs out of cluster columns. Events with no
//! concurrent neighbour to their right therefore fill the remaining width.
//!
//! Only base columns are consulted, never other events' expanded spans. For
//! two overlapping events the one further left stops before the other's base
//! column, so their spans stay disjoint.

use crate::cluster::Clusters;
use crate::column::Columns;
use crate::event::Event;

/// Number of contiguous columns each event occupies, index-aligned with
/// `events`. Always at least 1.
pub fn column_spans(events: &[Event], clusters: &Clusters, columns: &Columns) -> Vec<usize> {
    let mut spans = vec![1; events.len()];

    for (cluster, members) in clusters.members.iter().enumerate() {
        let width = columns.cluster_width[cluster];

        for &i in members {
            let base = columns.column[i];
            let mut span = 1;

            while base + span < width {
                let next = base + span;
                let blocked = members
                    .iter()
                    .any(|&j| columns.column[j] == next && events[i].overlaps(&events[j]));
                if blocked {
                    break;
                }
                span += 1;
            }

            if span > 1 {
                tracing::trace!(id = %events[i].id, column = base, span, "expanded event");
            }
            spans[i] = span;
        }
    }

    spans
}
