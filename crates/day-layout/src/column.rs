//! Greedy column packing within each collision cluster.
//!
//! Members of a cluster are swept in start order. Before placing an event,
//! every active event that has already ended by the new event's start is
//! retired; the new event then takes the lowest column no active event holds.
//! The cluster's width is one more than the highest column ever handed out.

use crate::cluster::Clusters;
use crate::event::Event;

/// Column assignment for a list of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// Column of each event, index-aligned with the input slice.
    pub column: Vec<usize>,
    /// Peak column count of each cluster, indexed by cluster id.
    pub cluster_width: Vec<usize>,
}

impl Columns {
    /// Peak column count of the cluster `event` belongs to.
    pub fn width_of(&self, clusters: &Clusters, event: usize) -> usize {
        self.cluster_width[clusters.of[event]]
    }
}

/// Assign every event the lowest free column within its cluster.
pub fn assign(events: &[Event], clusters: &Clusters) -> Columns {
    let mut column = vec![0; events.len()];
    let mut cluster_width = Vec::with_capacity(clusters.len());

    for (cluster, members) in clusters.members.iter().enumerate() {
        let mut active: Vec<usize> = Vec::new();
        let mut width = 0;

        for &i in members {
            let start = events[i].start;
            active.retain(|&a| events[a].end > start);

            let mut taken = vec![false; active.len() + 1];
            for &a in &active {
                if column[a] < taken.len() {
                    taken[column[a]] = true;
                }
            }
            let free = taken.iter().position(|&t| !t).unwrap_or(active.len());

            tracing::trace!(id = %events[i].id, cluster, column = free, "placed event");

            column[i] = free;
            width = width.max(free + 1);
            active.push(i);
        }

        cluster_width.push(width);
    }

    tracing::debug!(
        clusters = cluster_width.len(),
        peak_columns = cluster_width.iter().copied().max().unwrap_or(0),
        "assigned columns"
    );

    Columns {
        column,
        cluster_width,
    }
}
